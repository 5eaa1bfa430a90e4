use shop_cart::config::Config;
use shop_cart::engine::{CartError, FLAT, PERCENTAGE};
use shop_cart::lifecycle::ShopSystem;
use shop_cart::model::{ProductCreate, ProductId};
use shop_cart::store::{CatalogStore, StoreError};

fn product(id: u32, price: f64, stock: u32) -> ProductCreate {
    ProductCreate {
        product_id: ProductId(id),
        product_name: format!("Product {id}"),
        price,
        stock,
    }
}

async fn system_with(products: &[ProductCreate]) -> ShopSystem {
    let system = ShopSystem::new(&Config::default());
    for p in products {
        system.cart.register_product(p.clone()).await.unwrap();
    }
    system
}

async fn stock_of(system: &ShopSystem, id: u32) -> u32 {
    system.products.fetch_product(ProductId(id)).await.unwrap().stock
}

#[tokio::test]
async fn test_checkout_scenario() {
    let system = system_with(&[product(1, 10.0, 5)]).await;

    // Add reserves stock immediately
    assert_eq!(system.cart.add_item(ProductId(1), 3).await, Ok(1));
    assert_eq!(stock_of(&system, 1).await, 2);

    let view = system.cart.view_cart().await.unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].quantity, 3);
    assert_eq!(view.total_price, 30.0);

    // Checkout returns the cart as it was, then empties it
    let receipt = system.cart.checkout().await.unwrap();
    assert_eq!(receipt.total_price, 30.0);
    assert_eq!(receipt.items.len(), 1);
    assert!(system.cart.view_cart().await.unwrap().is_empty());

    assert_eq!(system.cart.checkout().await, Err(CartError::EmptyCart));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_register_product() {
    let system = system_with(&[]).await;

    system.cart.register_product(product(7, 3.25, 40)).await.unwrap();
    let stored = system.products.fetch_product(ProductId(7)).await.unwrap();
    assert_eq!(stored.name, "Product 7");
    assert_eq!(stored.price, 3.25);
    assert_eq!(stored.stock, 40);

    assert_eq!(
        system.cart.register_product(product(7, 1.0, 1)).await,
        Err(CartError::DuplicateProduct(ProductId(7)))
    );
    for bad in [product(8, 0.0, 1), product(8, -1.0, 1), product(8, 1.0, 0)] {
        assert!(matches!(
            system.cart.register_product(bad).await,
            Err(CartError::InvalidInput(_))
        ));
    }
    let mut unnamed = product(8, 1.0, 1);
    unnamed.product_name.clear();
    assert!(matches!(
        system.cart.register_product(unnamed).await,
        Err(CartError::InvalidInput(_))
    ));
    assert_eq!(
        system.products.fetch_product(ProductId(8)).await,
        Err(StoreError::NotFound("product_8".into()))
    );
}

#[tokio::test]
async fn test_add_item_checks_in_order() {
    let system = system_with(&[product(1, 10.0, 5)]).await;

    assert!(matches!(
        system.cart.add_item(ProductId(1), 0).await,
        Err(CartError::InvalidInput(_))
    ));
    assert_eq!(
        system.cart.add_item(ProductId(99), 1).await,
        Err(CartError::ProductNotFound(ProductId(99)))
    );
    assert_eq!(
        system.cart.add_item(ProductId(1), 6).await,
        Err(CartError::InsufficientStock {
            product: ProductId(1),
            requested: 6,
            available: 5,
        })
    );
    assert_eq!(stock_of(&system, 1).await, 5);
    assert!(system.cart.view_cart().await.unwrap().is_empty());

    // Whole stock can be taken
    assert_eq!(system.cart.add_item(ProductId(1), 5).await, Ok(1));
    assert_eq!(stock_of(&system, 1).await, 0);
}

#[tokio::test]
async fn test_same_product_twice_is_rejected_without_side_effects() {
    let system = system_with(&[product(1, 10.0, 5)]).await;
    system.cart.add_item(ProductId(1), 2).await.unwrap();

    let err = system.cart.add_item(ProductId(1), 1).await.unwrap_err();
    assert!(matches!(
        err,
        CartError::StoreUnavailable {
            source: StoreError::Duplicate(_),
            ..
        }
    ));
    assert_eq!(stock_of(&system, 1).await, 3);
    let view = system.cart.view_cart().await.unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].quantity, 2);
}

#[tokio::test]
async fn test_distinct_item_cap() {
    let catalog: Vec<ProductCreate> = (1..=11).map(|id| product(id, 1.0, 10)).collect();
    let system = system_with(&catalog).await;

    for id in 1..=10 {
        assert_eq!(system.cart.add_item(ProductId(id), 1).await, Ok(id as usize));
    }
    assert_eq!(
        system.cart.add_item(ProductId(11), 1).await,
        Err(CartError::TooManyUniqueItems { max: 10 })
    );
    // The cap is checked before stock and before the duplicate insert
    assert_eq!(
        system.cart.add_item(ProductId(1), 100).await,
        Err(CartError::TooManyUniqueItems { max: 10 })
    );

    let view = system.cart.view_cart().await.unwrap();
    let ids: Vec<u32> = view.items.iter().map(|l| l.item_id.0).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    assert_eq!(stock_of(&system, 11).await, 10);
}

#[tokio::test]
async fn test_configured_cap() {
    let config = Config {
        max_unique_items: 2,
        ..Config::default()
    };
    let system = ShopSystem::new(&config);
    for id in 1..=3 {
        system.cart.register_product(product(id, 1.0, 1)).await.unwrap();
    }
    system.cart.add_item(ProductId(1), 1).await.unwrap();
    system.cart.add_item(ProductId(2), 1).await.unwrap();
    assert_eq!(
        system.cart.add_item(ProductId(3), 1).await,
        Err(CartError::TooManyUniqueItems { max: 2 })
    );

    // Removing a line frees a slot
    system.cart.remove_item(ProductId(1)).await.unwrap();
    assert_eq!(system.cart.add_item(ProductId(3), 1).await, Ok(2));
}

#[tokio::test]
async fn test_remove_does_not_restore_stock() {
    let system = system_with(&[product(1, 4.0, 5), product(2, 1.0, 5)]).await;
    system.cart.add_item(ProductId(1), 3).await.unwrap();
    system.cart.add_item(ProductId(2), 1).await.unwrap();

    assert_eq!(
        system.cart.remove_item(ProductId(3)).await,
        Err(CartError::ItemNotFound(ProductId(3)))
    );
    assert_eq!(system.cart.view_cart().await.unwrap().items.len(), 2);

    system.cart.remove_item(ProductId(1)).await.unwrap();
    assert_eq!(stock_of(&system, 1).await, 2);
    assert_eq!(system.cart.view_cart().await.unwrap().total_price, 1.0);

    system.cart.remove_all_items().await.unwrap();
    assert!(system.cart.view_cart().await.unwrap().is_empty());
    assert_eq!(stock_of(&system, 2).await, 4);

    // Clearing an empty cart is fine
    system.cart.remove_all_items().await.unwrap();
}

#[tokio::test]
async fn test_update_quantity() {
    let system = system_with(&[product(1, 2.5, 3)]).await;
    system.cart.add_item(ProductId(1), 1).await.unwrap();

    assert!(matches!(
        system.cart.update_quantity(ProductId(1), 0).await,
        Err(CartError::InvalidInput(_))
    ));
    assert_eq!(
        system.cart.update_quantity(ProductId(2), 1).await,
        Err(CartError::NothingToUpdate(ProductId(2)))
    );

    // Stock is not consulted, so the quantity may exceed what was reserved
    system.cart.update_quantity(ProductId(1), 8).await.unwrap();
    let view = system.cart.view_cart().await.unwrap();
    assert_eq!(view.items[0].quantity, 8);
    assert_eq!(view.items[0].unit_price, 2.5);
    assert_eq!(view.total_price, 20.0);
    assert_eq!(stock_of(&system, 1).await, 2);
}

#[tokio::test]
async fn test_discounts() {
    let system = system_with(&[product(1, 100.0, 5), product(2, 50.0, 5)]).await;
    system.cart.add_item(ProductId(1), 1).await.unwrap();
    system.cart.add_item(ProductId(2), 2).await.unwrap();

    assert_eq!(
        system.cart.apply_discount(PERCENTAGE, 20.0, ProductId(1)).await,
        Ok(80.0)
    );
    assert!(matches!(
        system.cart.apply_discount(PERCENTAGE, 101.0, ProductId(1)).await,
        Err(CartError::InvalidInput(_))
    ));
    assert_eq!(
        system.cart.apply_discount(FLAT, 10.0, ProductId(2)).await,
        Ok(40.0)
    );
    assert_eq!(
        system.cart.apply_discount("coupon", 10.0, ProductId(2)).await,
        Err(CartError::InvalidDiscountType("coupon".into()))
    );
    assert_eq!(
        system.cart.apply_discount(FLAT, 1.0, ProductId(3)).await,
        Err(CartError::ItemNotFound(ProductId(3)))
    );

    // Flat discounts have no floor
    assert_eq!(
        system.cart.apply_discount(FLAT, 90.0, ProductId(1)).await,
        Ok(-10.0)
    );

    let view = system.cart.view_cart().await.unwrap();
    let expected: f64 = view.items.iter().map(|l| f64::from(l.quantity) * l.unit_price).sum();
    assert_eq!(view.total_price, expected);
    assert_eq!(view.total_price, 70.0);
}

#[tokio::test]
async fn test_line_price_is_a_snapshot() {
    let system = system_with(&[product(1, 10.0, 5)]).await;
    system.cart.add_item(ProductId(1), 1).await.unwrap();

    // Discounts change the line only
    assert_eq!(
        system.cart.apply_discount(FLAT, 4.0, ProductId(1)).await,
        Ok(6.0)
    );
    let stored = system.products.fetch_product(ProductId(1)).await.unwrap();
    assert_eq!(stored.price, 10.0);

    // A fresh line copies the catalog price again
    system.cart.remove_item(ProductId(1)).await.unwrap();
    system.cart.add_item(ProductId(1), 1).await.unwrap();
    let view = system.cart.view_cart().await.unwrap();
    assert_eq!(view.items[0].unit_price, 10.0);
}

#[tokio::test]
async fn test_totals_stay_representable() {
    let huge = f64::MAX / 2.0;
    let system =
        system_with(&[product(1, huge, 5), product(2, huge, 5), product(3, 10.0, 5)]).await;

    assert_eq!(
        system.cart.add_item(ProductId(1), 3).await,
        Err(CartError::TotalOutOfRange)
    );
    assert_eq!(stock_of(&system, 1).await, 5);

    system.cart.add_item(ProductId(3), 2).await.unwrap();
    assert_eq!(
        system.cart.apply_discount(FLAT, f64::MAX, ProductId(3)).await,
        Err(CartError::TotalOutOfRange)
    );
    assert_eq!(
        system.cart.view_cart().await.unwrap().items[0].unit_price,
        10.0
    );

    // Each line fits on its own, the sum does not
    system.cart.add_item(ProductId(1), 1).await.unwrap();
    system.cart.add_item(ProductId(2), 1).await.unwrap();
    assert!(system.cart.view_cart().await.is_ok());
    assert_eq!(
        system.cart.update_quantity(ProductId(1), 3).await,
        Err(CartError::TotalOutOfRange)
    );
    system.cart.update_quantity(ProductId(1), 2).await.unwrap();
    assert_eq!(system.cart.view_cart().await, Err(CartError::TotalOutOfRange));
    assert_eq!(system.cart.checkout().await, Err(CartError::TotalOutOfRange));
}

#[tokio::test]
async fn test_checkout_rechecks_catalog() {
    let system = system_with(&[product(1, 10.0, 5), product(2, 1.0, 5)]).await;
    system.cart.add_item(ProductId(1), 2).await.unwrap();
    system.cart.add_item(ProductId(2), 2).await.unwrap();

    // Stock drained outside the cart
    system.products.set_stock(ProductId(2), 1).await.unwrap();
    assert_eq!(
        system.cart.checkout().await,
        Err(CartError::InsufficientStock {
            product: ProductId(2),
            requested: 2,
            available: 1,
        })
    );
    assert_eq!(system.cart.view_cart().await.unwrap().items.len(), 2);

    system.cart.update_quantity(ProductId(2), 1).await.unwrap();
    let receipt = system.cart.checkout().await.unwrap();
    assert_eq!(receipt.total_price, 21.0);
}

#[tokio::test]
async fn test_concurrent_adds_never_oversell() {
    let system = system_with(&[product(1, 1.0, 5)]).await;

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let cart = system.cart.clone();
        tasks.push(tokio::spawn(async move { cart.add_item(ProductId(1), 3).await }));
    }
    let mut successes = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(stock_of(&system, 1).await, 2);
}

#[tokio::test]
async fn test_concurrent_adds_respect_cap() {
    let catalog: Vec<ProductCreate> = (1..=15).map(|id| product(id, 1.0, 1)).collect();
    let system = system_with(&catalog).await;

    let mut tasks = Vec::new();
    for id in 1..=15 {
        let cart = system.cart.clone();
        tasks.push(tokio::spawn(async move { cart.add_item(ProductId(id), 1).await }));
    }
    let mut rejected = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => {}
            Err(CartError::TooManyUniqueItems { .. }) => rejected += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(rejected, 5);
    assert_eq!(system.cart.view_cart().await.unwrap().items.len(), 10);
}
