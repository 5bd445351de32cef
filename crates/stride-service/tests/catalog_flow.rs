//! Catalog, order, coupon, and settings behavior over the in-memory
//! adapter.

use chrono::{Duration, Utc};
use uuid::Uuid;

use stride_core::error::ErrorKind;
use stride_database::DataStores;
use stride_database::store::SecurityLogStore;
use stride_entity::coupon::{CouponKind, NewCoupon};
use stride_entity::order::{NewOrder, OrderItem};
use stride_entity::product::{NewProduct, NewReview, ProductImages};
use stride_entity::security::event;
use stride_entity::settings::SettingsUpdate;
use stride_service::{CatalogService, CouponService, OrderService, SettingsService};

fn new_product(name: &str, stock: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        brand: Some("Stride".to_string()),
        price: 120.0,
        category: "Running".to_string(),
        gender: None,
        images: ProductImages::default(),
        description: None,
        stock: Some(stock),
        in_stock: Some(true),
    }
}

fn review(author: &str, rating: i32) -> NewReview {
    NewReview {
        author: author.to_string(),
        rating,
        comment: "solid".to_string(),
    }
}

fn catalog(stores: &DataStores) -> CatalogService {
    CatalogService::new(stores.products.clone(), stores.security_log.clone())
}

#[tokio::test]
async fn review_aggregate_tracks_count_and_mean() {
    let stores = DataStores::in_memory();
    let catalog = catalog(&stores);
    let product = catalog
        .create("admin@x.com", &new_product("Apex", 10))
        .await
        .unwrap();

    let first = catalog.add_review(product.id, &review("u1", 5)).await.unwrap();
    let after_first = catalog.get(product.id).await.unwrap();
    assert_eq!(after_first.num_reviews, 1);
    assert_eq!(after_first.rating, 5.0);

    catalog.add_review(product.id, &review("u2", 3)).await.unwrap();
    let after_second = catalog.get(product.id).await.unwrap();
    assert_eq!(after_second.num_reviews, 2);
    assert_eq!(after_second.rating, 4.0);

    catalog.remove_review(product.id, first.id).await.unwrap();
    let after_removal = catalog.get(product.id).await.unwrap();
    assert_eq!(after_removal.num_reviews, 1);
    assert_eq!(after_removal.rating, 3.0);
}

#[tokio::test]
async fn removing_the_last_review_zeroes_the_rating() {
    let stores = DataStores::in_memory();
    let catalog = catalog(&stores);
    let product = catalog
        .create("admin@x.com", &new_product("Apex", 10))
        .await
        .unwrap();

    let only = catalog.add_review(product.id, &review("u1", 4)).await.unwrap();
    catalog.remove_review(product.id, only.id).await.unwrap();

    let after = catalog.get(product.id).await.unwrap();
    assert_eq!(after.num_reviews, 0);
    assert_eq!(after.rating, 0.0);
}

#[tokio::test]
async fn duplicate_author_is_rejected_without_state_change() {
    let stores = DataStores::in_memory();
    let catalog = catalog(&stores);
    let product = catalog
        .create("admin@x.com", &new_product("Apex", 10))
        .await
        .unwrap();

    catalog.add_review(product.id, &review("u1", 5)).await.unwrap();
    let err = catalog
        .add_review(product.id, &review("u1", 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Policy);
    assert_eq!(err.message, "Product already reviewed");

    let after = catalog.get(product.id).await.unwrap();
    assert_eq!(after.num_reviews, 1);
    assert_eq!(after.rating, 5.0);
}

#[tokio::test]
async fn review_errors_are_specific() {
    let stores = DataStores::in_memory();
    let catalog = catalog(&stores);
    let product = catalog
        .create("admin@x.com", &new_product("Apex", 10))
        .await
        .unwrap();

    let err = catalog
        .add_review(Uuid::new_v4(), &review("u1", 5))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = catalog
        .add_review(product.id, &review("u1", 6))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = catalog
        .remove_review(product.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Review not found");
}

#[tokio::test]
async fn product_mutations_are_logged() {
    let stores = DataStores::in_memory();
    let catalog = catalog(&stores);
    let product = catalog
        .create("admin@x.com", &new_product("Apex", 10))
        .await
        .unwrap();
    catalog.delete("admin@x.com", product.id).await.unwrap();

    let events = stores.security_log.recent(10).await.unwrap();
    assert!(events.iter().any(|e| e.event == event::PRODUCT_CREATE));
    assert!(events.iter().any(|e| e.event == event::PRODUCT_DELETE));
    assert!(events.iter().all(|e| e.user_email == "admin@x.com"));
}

#[tokio::test]
async fn order_placement_decrements_stock() {
    let stores = DataStores::in_memory();
    let catalog = catalog(&stores);
    let orders = OrderService::new(stores.orders.clone(), stores.products.clone());

    let product = catalog
        .create("admin@x.com", &new_product("Apex", 10))
        .await
        .unwrap();

    let order = orders
        .create(&NewOrder {
            customer: "Dana".to_string(),
            date: None,
            amount: 360.0,
            status: None,
            items: vec![OrderItem {
                id: Some(product.id),
                name: Some("Apex".to_string()),
                price: Some(120.0),
                quantity: Some(3),
                size: Some("42".to_string()),
            }],
        })
        .await
        .unwrap();

    assert_eq!(order.status, "Processing");
    assert_eq!(order.date, Utc::now().date_naive());

    let after = catalog.get(product.id).await.unwrap();
    assert_eq!(after.stock, 7);
    assert!(after.in_stock);

    orders
        .create(&NewOrder {
            customer: "Dana".to_string(),
            date: None,
            amount: 840.0,
            status: None,
            items: vec![OrderItem {
                id: Some(product.id),
                name: None,
                price: None,
                quantity: Some(7),
                size: None,
            }],
        })
        .await
        .unwrap();

    let emptied = catalog.get(product.id).await.unwrap();
    assert_eq!(emptied.stock, 0);
    assert!(!emptied.in_stock);
}

#[tokio::test]
async fn coupon_validation_applies_all_policies() {
    let stores = DataStores::in_memory();
    let coupons = CouponService::new(stores.coupons.clone(), stores.security_log.clone());

    coupons
        .create(
            "admin@x.com",
            &NewCoupon {
                code: "SAVE10".to_string(),
                kind: CouponKind::Percentage,
                value: 10.0,
                min_purchase: Some(100.0),
                expiry_date: None,
                is_active: Some(true),
            },
        )
        .await
        .unwrap();

    let quote = coupons.validate("SAVE10", 200.0).await.unwrap();
    assert_eq!(quote.discount, 20.0);

    let err = coupons.validate("SAVE10", 50.0).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Policy);
    assert!(err.message.contains("Minimum purchase"));

    let err = coupons.validate("NOPE", 200.0).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    coupons
        .create(
            "admin@x.com",
            &NewCoupon {
                code: "OLD".to_string(),
                kind: CouponKind::Fixed,
                value: 5.0,
                min_purchase: None,
                expiry_date: Some(Utc::now() - Duration::days(1)),
                is_active: Some(true),
            },
        )
        .await
        .unwrap();

    let err = coupons.validate("OLD", 200.0).await.unwrap_err();
    assert_eq!(err.message, "Coupon has expired");
}

#[tokio::test]
async fn settings_singleton_is_idempotent() {
    let stores = DataStores::in_memory();
    let settings = SettingsService::new(stores.settings.clone(), stores.security_log.clone());

    let first = settings.get().await.unwrap();
    let second = settings.get().await.unwrap();
    assert_eq!(first.id, second.id);

    let updated = settings
        .update(
            "admin@x.com",
            &SettingsUpdate {
                store_name: Some("Stride Outlet".to_string()),
                ..SettingsUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.store_name, "Stride Outlet");
    // Untouched fields keep their defaults.
    assert_eq!(updated.session_timeout_minutes, 15);

    let events = stores.security_log.recent(10).await.unwrap();
    assert!(events.iter().any(|e| e.event == event::SETTINGS_UPDATE));
}
