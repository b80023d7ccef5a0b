//! Stock-category subscription state.
//!
//! Mirrors the client-side category list: an ordered set of category
//! records, each carrying a subscription flag, mutated only through the
//! toggle operation. Every toggle invokes the configured subscription hook
//! with the matching subscribe/unsubscribe operation.

use std::sync::Arc;

/// One stock-news category bound to a push topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockCategory {
    pub category_name: String,
    pub topic_name: String,
    pub subscribed: bool,
}

impl StockCategory {
    pub fn new(category_name: impl Into<String>, topic_name: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            topic_name: topic_name.into(),
            subscribed: false,
        }
    }
}

/// Default category set presented by the client
pub fn default_categories() -> Vec<StockCategory> {
    vec![
        StockCategory::new("Technology", "Technology"),
        StockCategory::new("Automotive", "Automotive"),
        StockCategory::new("Energy", "Energy"),
        StockCategory::new("Finance", "Finance"),
        StockCategory::new("Healthcare", "Healthcare"),
    ]
}

/// Provider-side topic-subscription operations.
///
/// Open interface: the backing calls (provider topic-management API or a
/// dedicated backend endpoint) are not yet specified, so no implementation
/// ships with this crate.
pub trait SubscriptionHook: Send + Sync {
    fn subscribe(&self, topic_name: &str);
    fn unsubscribe(&self, topic_name: &str);
}

/// Owns the ordered category list; `toggle` is the only mutator.
pub struct SubscriptionState {
    categories: Vec<StockCategory>,
    hook: Option<Arc<dyn SubscriptionHook>>,
}

impl SubscriptionState {
    pub fn new(categories: Vec<StockCategory>) -> Self {
        Self {
            categories,
            hook: None,
        }
    }

    pub fn with_hook(categories: Vec<StockCategory>, hook: Arc<dyn SubscriptionHook>) -> Self {
        Self {
            categories,
            hook: Some(hook),
        }
    }

    pub fn categories(&self) -> &[StockCategory] {
        &self.categories
    }

    /// Flip the subscription flag of the category bound to `topic_name` and
    /// fire the hook. Returns false when no category matches.
    pub fn toggle(&mut self, topic_name: &str, subscribed: bool) -> bool {
        let Some(category) = self
            .categories
            .iter_mut()
            .find(|c| c.topic_name == topic_name)
        else {
            return false;
        };
        category.subscribed = subscribed;

        if let Some(hook) = &self.hook {
            if subscribed {
                hook.subscribe(topic_name);
            } else {
                hook.unsubscribe(topic_name);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct RecordingHook {
        operations: Mutex<Vec<(String, bool)>>,
    }

    impl RecordingHook {
        fn new() -> Self {
            Self {
                operations: Mutex::new(Vec::new()),
            }
        }
    }

    impl SubscriptionHook for RecordingHook {
        fn subscribe(&self, topic_name: &str) {
            self.operations
                .lock()
                .unwrap()
                .push((topic_name.to_string(), true));
        }

        fn unsubscribe(&self, topic_name: &str) {
            self.operations
                .lock()
                .unwrap()
                .push((topic_name.to_string(), false));
        }
    }

    #[test]
    fn test_toggle_flips_only_matching_category() {
        let mut state = SubscriptionState::new(default_categories());

        assert!(state.toggle("Technology", true));

        let categories = state.categories();
        assert!(categories[0].subscribed);
        assert!(categories[1..].iter().all(|c| !c.subscribed));
    }

    #[test]
    fn test_toggle_preserves_order() {
        let mut state = SubscriptionState::new(default_categories());
        let names_before: Vec<_> = state
            .categories()
            .iter()
            .map(|c| c.category_name.clone())
            .collect();

        state.toggle("Energy", true);
        state.toggle("Energy", false);

        let names_after: Vec<_> = state
            .categories()
            .iter()
            .map(|c| c.category_name.clone())
            .collect();
        assert_eq!(names_before, names_after);
    }

    #[test]
    fn test_toggle_unknown_topic_is_a_noop() {
        let mut state = SubscriptionState::new(default_categories());
        assert!(!state.toggle("Cryptocurrency", true));
        assert!(state.categories().iter().all(|c| !c.subscribed));
    }

    #[test]
    fn test_toggle_fires_hook_with_matching_operation() {
        let hook = Arc::new(RecordingHook::new());
        let mut state = SubscriptionState::with_hook(default_categories(), hook.clone());

        state.toggle("Finance", true);
        state.toggle("Finance", false);

        let operations = hook.operations.lock().unwrap();
        assert_eq!(
            *operations,
            vec![
                ("Finance".to_string(), true),
                ("Finance".to_string(), false)
            ]
        );
    }
}
