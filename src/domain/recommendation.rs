use super::cart::CartItem;
use super::catalog::Catalog;
use super::product::{Product, ProductId};
use std::collections::HashSet;

/// How many suggestions the storefront shows at once.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 4;

/// Suggests catalog products that share a category with something in the cart.
///
/// Products already in the cart are never suggested. Results follow catalog
/// order and are capped at `limit`, so identical inputs always give identical
/// output. An empty cart yields no suggestions.
pub fn recommend(items: &[CartItem], catalog: &Catalog, limit: usize) -> Vec<Product> {
    if items.is_empty() || limit == 0 {
        return Vec::new();
    }

    let categories: HashSet<&str> = items.iter().map(|item| item.product.category()).collect();
    let in_cart: HashSet<ProductId> = items.iter().map(CartItem::id).collect();

    catalog
        .iter()
        .filter(|product| categories.contains(product.category()))
        .filter(|product| !in_cart.contains(&product.id()))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use rust_decimal_macros::dec;

    fn catalog() -> Catalog {
        let rows = [
            (1, "Wireless Headphones", "audio"),
            (2, "Desk Lamp", "home"),
            (3, "Bluetooth Speaker", "audio"),
            (4, "Throw Pillow", "home"),
            (5, "Audio Cable", "audio"),
            (6, "Running Shoes", "sports"),
            (7, "Earbuds", "audio"),
            (8, "Turntable", "audio"),
            (9, "Soundbar", "audio"),
        ];
        Catalog::new(
            rows.iter()
                .map(|(id, name, category)| {
                    Product::new(ProductId(*id), *name, dec!(25), *category).unwrap()
                })
                .collect(),
        )
        .unwrap()
    }

    fn cart_with(catalog: &Catalog, ids: &[u32]) -> Cart {
        let mut cart = Cart::new();
        for id in ids {
            cart.add_item(catalog.get(ProductId(*id)).unwrap());
        }
        cart
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id().0).collect()
    }

    #[test]
    fn test_same_category_in_catalog_order() {
        let catalog = catalog();
        let cart = cart_with(&catalog, &[1]);

        let suggestions = recommend(cart.items(), &catalog, 10);
        assert_eq!(ids(&suggestions), vec![3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_excludes_items_in_cart() {
        let catalog = catalog();
        let cart = cart_with(&catalog, &[3, 2]);

        let suggestions = recommend(cart.items(), &catalog, 10);
        assert_eq!(ids(&suggestions), vec![1, 4, 5, 7, 8, 9]);
        for item in cart.items() {
            assert!(!suggestions.iter().any(|p| p.id() == item.id()));
        }
    }

    #[test]
    fn test_limit_caps_results() {
        let catalog = catalog();
        let cart = cart_with(&catalog, &[1]);

        let suggestions = recommend(cart.items(), &catalog, DEFAULT_RECOMMENDATION_LIMIT);
        assert_eq!(ids(&suggestions), vec![3, 5, 7, 8]);
        assert!(recommend(cart.items(), &catalog, 0).is_empty());
    }

    #[test]
    fn test_empty_cart_has_no_suggestions() {
        assert!(recommend(&[], &catalog(), DEFAULT_RECOMMENDATION_LIMIT).is_empty());
    }

    #[test]
    fn test_no_other_products_in_category() {
        let catalog = catalog();
        let cart = cart_with(&catalog, &[6]);
        assert!(recommend(cart.items(), &catalog, 4).is_empty());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let catalog = catalog();
        let cart = cart_with(&catalog, &[2, 5]);

        let first = recommend(cart.items(), &catalog, 4);
        let second = recommend(cart.items(), &catalog, 4);
        assert_eq!(first, second);
    }
}
