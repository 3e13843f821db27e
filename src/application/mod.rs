//! Application layer tying the cart store, the catalog and the derivations together.
//!
//! This module defines the `ShoppingSession` which is the entry point used by
//! outer surfaces. It owns one cart store and re-derives the order summary and
//! recommendations from it on demand.

pub mod session;
