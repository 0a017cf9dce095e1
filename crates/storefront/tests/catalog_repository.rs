//! Integration tests for the catalog repository.
//!
//! Requires a running `PostgreSQL` database with migrations applied; see
//! `cart_repository.rs` for setup.

use std::time::{SystemTime, UNIX_EPOCH};

use secrecy::SecretString;
use sqlx::PgPool;

use lumenparts_storefront::db::{self, CatalogRepository};
use lumenparts_storefront::models::{NewProduct, ProductFilter, ProductPatch};

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .expect("DATABASE_URL must be set for integration tests");
    db::create_pool(&url).await.expect("connect to database")
}

/// Unique marker so concurrent test runs don't see each other's rows.
fn marker() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    format!("cat-{nanos}")
}

fn product(name: &str, vehicles: &[&str], featured: bool) -> NewProduct {
    NewProduct {
        name: name.to_owned(),
        description: "catalog test product".to_owned(),
        price: "99.99".parse().expect("decimal"),
        brand: "DEPO".to_owned(),
        image_url: "https://example.com/p.jpg".to_owned(),
        category: "Headlights".to_owned(),
        compatible_vehicles: vehicles.iter().map(|v| (*v).to_owned()).collect(),
        featured,
        stock_quantity: 5,
        tags: vec![],
    }
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn vehicle_filter_is_a_substring_match() {
    let pool = test_pool().await;
    let catalog = CatalogRepository::new(&pool);
    let tag = marker();

    let corolla = catalog
        .create_product(&product(
            &format!("{tag} Corolla Headlight"),
            &[&format!("{tag} Corolla 2018-2022")],
            false,
        ))
        .await
        .expect("create");
    let civic = catalog
        .create_product(&product(
            &format!("{tag} Civic Headlight"),
            &[&format!("{tag}x Civic 2016-2021")],
            false,
        ))
        .await
        .expect("create");

    // make alone
    let filter = ProductFilter {
        make: Some(tag.clone()),
        ..ProductFilter::default()
    };
    let hits = catalog.list_products(&filter).await.expect("list");
    // substring: "{tag}" also matches "{tag}x ..."
    assert!(hits.iter().any(|p| p.id == corolla.id));
    assert!(hits.iter().any(|p| p.id == civic.id));

    // make + model must hit the same compatibility string
    let filter = ProductFilter {
        make: Some(tag.clone()),
        model: Some("Corolla".to_owned()),
        ..ProductFilter::default()
    };
    let hits = catalog.list_products(&filter).await.expect("list");
    assert!(hits.iter().any(|p| p.id == corolla.id));
    assert!(!hits.iter().any(|p| p.id == civic.id));

    let _ = catalog.delete_product(corolla.id).await;
    let _ = catalog.delete_product(civic.id).await;
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn featured_and_category_filters_combine() {
    let pool = test_pool().await;
    let catalog = CatalogRepository::new(&pool);
    let tag = marker();

    let featured = catalog
        .create_product(&product(&format!("{tag} Featured"), &[&tag], true))
        .await
        .expect("create");
    let plain = catalog
        .create_product(&product(&format!("{tag} Plain"), &[&tag], false))
        .await
        .expect("create");

    let filter = ProductFilter {
        featured: Some(true),
        category: Some("Headlights".to_owned()),
        make: Some(tag.clone()),
        ..ProductFilter::default()
    };
    let hits = catalog.list_products(&filter).await.expect("list");
    assert!(hits.iter().any(|p| p.id == featured.id));
    assert!(!hits.iter().any(|p| p.id == plain.id));

    let _ = catalog.delete_product(featured.id).await;
    let _ = catalog.delete_product(plain.id).await;
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn partial_update_leaves_absent_fields_alone() {
    let pool = test_pool().await;
    let catalog = CatalogRepository::new(&pool);
    let tag = marker();

    let created = catalog
        .create_product(&product(&format!("{tag} Patchable"), &[&tag], false))
        .await
        .expect("create");

    let patched = catalog
        .update_product(
            created.id,
            &ProductPatch {
                price: Some("42.00".parse().expect("decimal")),
                ..ProductPatch::default()
            },
        )
        .await
        .expect("update")
        .expect("exists");

    assert_eq!(patched.price, "42.00".parse().expect("decimal"));
    assert_eq!(patched.name, created.name);
    assert_eq!(patched.brand, created.brand);
    assert_eq!(patched.compatible_vehicles, created.compatible_vehicles);

    let _ = catalog.delete_product(created.id).await;
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn category_counts_are_derived_from_products() {
    let pool = test_pool().await;
    let catalog = CatalogRepository::new(&pool);
    let tag = marker();

    let before = catalog.list_categories().await.expect("categories");
    let headlights_before = before
        .iter()
        .find(|c| c.name == "Headlights")
        .map_or(0, |c| c.product_count);

    let created = catalog
        .create_product(&product(&format!("{tag} Counted"), &[&tag], false))
        .await
        .expect("create");

    let after = catalog.list_categories().await.expect("categories");
    if let Some(headlights) = after.iter().find(|c| c.name == "Headlights") {
        assert_eq!(headlights.product_count, headlights_before + 1);
    }

    let _ = catalog.delete_product(created.id).await;
}
