//! JSON snapshots of cart contents.
//!
//! A snapshot is the plain list of cart items. Restoring one goes through
//! `Cart::from_items`, so a hand-edited snapshot with repeated ids still yields
//! a valid cart.

use crate::application::session::CartView;
use crate::domain::cart::CartItem;
use crate::error::Result;
use std::io::{Read, Write};

pub fn read_snapshot<R: Read>(source: R) -> Result<Vec<CartItem>> {
    Ok(serde_json::from_reader(source)?)
}

pub fn write_snapshot<W: Write>(mut out: W, items: &[CartItem]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, items)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_view<W: Write>(mut out: W, view: &CartView) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, view)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use crate::domain::product::{Product, ProductId};
    use rust_decimal_macros::dec;

    #[test]
    fn test_snapshot_round_trip() {
        let lamp = Product::new(ProductId(3), "Desk Lamp", dec!(24.50), "home")
            .unwrap()
            .with_image("/img/lamp.jpg");
        let mut cart = Cart::new();
        cart.add_item(&lamp);
        cart.add_item(&lamp);

        let mut buffer = Vec::new();
        write_snapshot(&mut buffer, cart.items()).unwrap();
        let restored = read_snapshot(buffer.as_slice()).unwrap();

        assert_eq!(restored, cart.items());
    }

    #[test]
    fn test_snapshot_with_invalid_product_is_rejected() {
        let json = r#"[{"product":{"id":1,"name":"Lamp","price":"-2","category":"home"},"quantity":1}]"#;
        assert!(read_snapshot(json.as_bytes()).is_err());
    }
}
