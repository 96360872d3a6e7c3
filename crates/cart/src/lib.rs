//! Honey Cart - client-side shopping cart.
//!
//! Owns cart state for a single client: which products are in the cart and
//! in what quantities. State lives in a [`KeyValueStore`] under one key, and
//! every change is announced on a [`Broadcaster`] so each rendering surface
//! (navigation badge, cart page, product pages) can re-read it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use honey_cart::{CartStore, EventBus, MemoryStore};
//!
//! let store = CartStore::new(Arc::new(MemoryStore::new()), Arc::new(EventBus::new()));
//! store.subscribe(|| { /* re-render */ });
//!
//! assert!(store.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`store`] - [`CartStore`] and its read/mutate operations
//! - [`storage`] - Durable key/value backends
//! - [`broadcast`] - Change notification bus
//! - [`view`] - Render-ready cart snapshot

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod broadcast;
pub mod line;
pub mod storage;
pub mod store;
pub mod view;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod fixtures;

pub use broadcast::{Broadcaster, CART_CHANGE_TOPIC, EventBus, Handler, SubscriptionId};
pub use line::CartLine;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{CART_STORAGE_KEY, CartStore};
pub use view::{CartItemView, CartView};
