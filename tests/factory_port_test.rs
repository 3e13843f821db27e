use rust_decimal_macros::dec;
use smartcart::domain::ports::{CartStoreBox, CartStoreFactory};
use smartcart::domain::product::{Product, ProductId};
use smartcart::infrastructure::in_memory::InMemoryCartStore;

#[tokio::test]
async fn test_factory_instantiation() {
    let factory: CartStoreFactory = Box::new(|| Box::new(InMemoryCartStore::new()) as CartStoreBox);

    let first = factory();
    let second = factory();
    let cable = Product::new(ProductId(2), "Audio Cable", dec!(15), "audio").unwrap();

    // Each call yields an independent, empty cart
    first.add_item(&cable);
    assert_eq!(first.items().len(), 1);
    assert!(second.items().is_empty());
}

#[tokio::test]
async fn test_factory_in_task() {
    let factory: CartStoreFactory = Box::new(|| Box::new(InMemoryCartStore::new()) as CartStoreBox);

    let handle = tokio::spawn(async move {
        let store = factory();
        let cable = Product::new(ProductId(2), "Audio Cable", dec!(15), "audio").unwrap();
        store.add_item(&cable);
        store.add_item(&cable);
        store.items()
    });

    let items = handle.await.unwrap();
    assert_eq!(items[0].quantity(), 2);
}
