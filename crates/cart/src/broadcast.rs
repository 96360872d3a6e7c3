//! Change notification bus.
//!
//! Rendering surfaces (cart page, navigation badge, product pages) subscribe
//! to a topic and re-read cart state when it fires. Notifications carry no
//! payload.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

/// Topic published after every persisted cart mutation.
pub const CART_CHANGE_TOPIC: &str = "cartChange";

/// A notification callback.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`Broadcaster::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Publish/subscribe over named topics.
pub trait Broadcaster: Send + Sync {
    /// Invoke every handler currently subscribed to `topic`.
    fn publish(&self, topic: &str);

    /// Register `handler` for `topic`.
    fn subscribe(&self, topic: &str, handler: Handler) -> SubscriptionId;

    /// Remove a subscription. Returns `false` if it was already gone.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// Synchronous in-process broadcaster.
///
/// `publish` runs every handler on the caller's stack, in subscription
/// order, and returns only after the last one has finished. The handler list
/// is snapshotted before dispatch and no lock is held while handlers run, so
/// a handler may read the cart, mutate it, or (un)subscribe.
#[derive(Default)]
pub struct EventBus {
    topics: RwLock<HashMap<String, Vec<(SubscriptionId, Handler)>>>,
    next_id: AtomicU64,
}

impl EventBus {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers subscribed to `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(topic)
            .map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let topics = self.topics.read().unwrap_or_else(PoisonError::into_inner);
        let mut map = f.debug_map();
        for (topic, handlers) in topics.iter() {
            map.entry(topic, &handlers.len());
        }
        map.finish()
    }
}

impl Broadcaster for EventBus {
    fn publish(&self, topic: &str) {
        let handlers: Vec<Handler> = self
            .topics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(topic)
            .map(|subs| subs.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default();

        trace!(topic, subscribers = handlers.len(), "Publishing");
        for handler in handlers {
            handler();
        }
    }

    fn subscribe(&self, topic: &str, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.topics
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(topic.to_owned())
            .or_default()
            .push((id, handler));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut topics = self.topics.write().unwrap_or_else(PoisonError::into_inner);
        for handlers in topics.values_mut() {
            if let Some(pos) = handlers.iter().position(|(sub, _)| *sub == id) {
                handlers.remove(pos);
                return true;
            }
        }
        false
    }
}
