//! Domain layer: catalog records, the cart and the pure derivations over it.

pub mod cart;
pub mod catalog;
pub mod command;
pub mod event;
pub mod money;
pub mod ports;
pub mod pricing;
pub mod product;
pub mod recommendation;
