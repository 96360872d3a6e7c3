//! Core types for the Honey storefront.
//!
//! This module provides type-safe wrappers for the catalog's domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod timestamp;
pub mod user;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::format_price;
pub use product::Product;
pub use user::User;
