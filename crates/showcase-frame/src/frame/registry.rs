use std::sync::Arc;

use serde_json::Value;

use crate::events::ShowcaseEvent;

/// Callback invoked with the payload of a matching inbound message.
pub type EventCallback = Arc<dyn Fn(&Value) + Send + Sync>;

/// Per-event-kind callback buckets, indexed by the kind's ordinal.
///
/// Registration appends to exactly one bucket; dispatch snapshots exactly
/// one bucket and never mutates it. The registry is created empty when the
/// frame is constructed and is never cleared.
#[derive(Default)]
pub struct CallbackRegistry {
    buckets: [Vec<EventCallback>; ShowcaseEvent::COUNT],
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `callback` to the bucket for `kind`. No deduplication: the
    /// same callback registered twice runs twice per matching message.
    pub fn register(&mut self, kind: ShowcaseEvent, callback: EventCallback) {
        self.buckets[kind.index()].push(callback);
    }

    /// Clone the bucket for `kind`, preserving insertion order.
    pub fn snapshot(&self, kind: ShowcaseEvent) -> Vec<EventCallback> {
        self.buckets[kind.index()].clone()
    }

    /// Number of callbacks registered for `kind`.
    pub fn registered(&self, kind: ShowcaseEvent) -> usize {
        self.buckets[kind.index()].len()
    }

    /// Total registrations across all kinds.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    #[test]
    fn registration_lands_in_exactly_one_bucket() {
        let mut registry = CallbackRegistry::new();
        registry.register(ShowcaseEvent::UpdateRequirement, Arc::new(|_| {}));

        assert_eq!(registry.registered(ShowcaseEvent::UpdateRequirement), 1);
        assert_eq!(registry.total(), 1);
        for kind in ShowcaseEvent::ALL {
            if kind != ShowcaseEvent::UpdateRequirement {
                assert_eq!(registry.registered(kind), 0);
            }
        }
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let mut registry = CallbackRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in 0..3 {
            let sink = Arc::clone(&order);
            registry.register(
                ShowcaseEvent::DragStarted,
                Arc::new(move |_| sink.lock().unwrap().push(tag)),
            );
        }

        for callback in registry.snapshot(ShowcaseEvent::DragStarted) {
            callback(&json!(null));
        }

        assert_eq!(order.lock().unwrap().as_slice(), [0, 1, 2]);
    }

    #[test]
    fn snapshot_does_not_drain_the_bucket() {
        let mut registry = CallbackRegistry::new();
        registry.register(ShowcaseEvent::UpdateTextValue, Arc::new(|_| {}));

        let _ = registry.snapshot(ShowcaseEvent::UpdateTextValue);
        let _ = registry.snapshot(ShowcaseEvent::UpdateTextValue);

        assert_eq!(registry.registered(ShowcaseEvent::UpdateTextValue), 1);
    }

    #[test]
    fn same_callback_may_be_registered_repeatedly() {
        let mut registry = CallbackRegistry::new();
        let callback: EventCallback = Arc::new(|_| {});
        registry.register(ShowcaseEvent::UpdateImageValue, Arc::clone(&callback));
        registry.register(ShowcaseEvent::UpdateImageValue, callback);

        assert_eq!(registry.registered(ShowcaseEvent::UpdateImageValue), 2);
    }
}
