//! Seed the database with reference data and the sample catalog.
//!
//! Categories, vehicle makes, and vehicle models are the static reference
//! data the storefront filters against; the products are the initial
//! automotive lighting catalog.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{info, warn};

use super::CommandError;

struct SeedCategory {
    name: &'static str,
    description: &'static str,
    image_url: &'static str,
}

struct SeedModel {
    make: &'static str,
    name: &'static str,
    year_start: i32,
    year_end: i32,
}

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: &'static str,
    brand: &'static str,
    image_url: &'static str,
    category: &'static str,
    compatible_vehicles: &'static [&'static str],
    featured: bool,
    stock_quantity: i32,
    tags: &'static [&'static str],
}

const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Headlights",
        description: "LED and HID headlight assemblies",
        image_url: "https://images.unsplash.com/photo-1558562720-1297f0183887?auto=format&fit=crop&q=80",
    },
    SeedCategory {
        name: "Tail Lights",
        description: "LED and standard tail light assemblies",
        image_url: "https://images.unsplash.com/photo-1489824904134-891ab64532f1?auto=format&fit=crop&q=80",
    },
    SeedCategory {
        name: "Signal Lights",
        description: "Turn signal light assemblies",
        image_url: "https://images.unsplash.com/photo-1501061987532-3a20cdbd5ebd?auto=format&fit=crop&q=80",
    },
    SeedCategory {
        name: "Fog Lights",
        description: "Fog and driving light kits",
        image_url: "https://images.unsplash.com/photo-1516298773066-c48f8e9bd92b?auto=format&fit=crop&q=80",
    },
];

const MAKES: &[&str] = &["Toyota", "Honda", "Mazda", "Subaru", "Nissan", "Mitsubishi"];

const MODELS: &[SeedModel] = &[
    SeedModel { make: "Toyota", name: "Corolla", year_start: 2018, year_end: 2022 },
    SeedModel { make: "Toyota", name: "Camry", year_start: 2018, year_end: 2023 },
    SeedModel { make: "Toyota", name: "RAV4", year_start: 2019, year_end: 2023 },
    SeedModel { make: "Honda", name: "Civic", year_start: 2016, year_end: 2021 },
    SeedModel { make: "Honda", name: "Accord", year_start: 2018, year_end: 2023 },
    SeedModel { make: "Honda", name: "CR-V", year_start: 2017, year_end: 2022 },
    SeedModel { make: "Mazda", name: "Mazda 3", year_start: 2019, year_end: 2023 },
    SeedModel { make: "Mazda", name: "CX-5", year_start: 2017, year_end: 2023 },
    SeedModel { make: "Subaru", name: "Forester", year_start: 2017, year_end: 2020 },
    SeedModel { make: "Subaru", name: "Impreza", year_start: 2017, year_end: 2021 },
];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "LED Headlight Assembly",
        description: "High-performance LED headlight assembly for Toyota Corolla. Provides better visibility and a modern look.",
        price: "299.99",
        brand: "DEPO",
        image_url: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?auto=format&fit=crop&q=80",
        category: "Headlights",
        compatible_vehicles: &["Toyota Corolla 2018-2022"],
        featured: true,
        stock_quantity: 15,
        tags: &["LED", "Toyota", "Headlights", "New Arrival"],
    },
    SeedProduct {
        name: "Premium Tail Light Set",
        description: "Complete tail light set for Honda Civic. LED elements for enhanced visibility and modern styling.",
        price: "249.99",
        brand: "TYC",
        image_url: "https://images.unsplash.com/photo-1560294559-1774a164fb0a?auto=format&fit=crop&q=80",
        category: "Tail Lights",
        compatible_vehicles: &["Honda Civic 2016-2021"],
        featured: true,
        stock_quantity: 8,
        tags: &["LED", "Honda", "Tail Lights", "Best Seller"],
    },
    SeedProduct {
        name: "LED Fog Light Kit",
        description: "Complete fog light kit for Mazda 3. LED bulbs for maximum visibility in adverse weather conditions.",
        price: "199.99",
        brand: "LUCID",
        image_url: "https://images.unsplash.com/photo-1489824904134-891ab64532f1?auto=format&fit=crop&q=80",
        category: "Fog Lights",
        compatible_vehicles: &["Mazda 3 2019-2023"],
        featured: true,
        stock_quantity: 3,
        tags: &["LED", "Mazda", "Fog Lights", "Limited Stock"],
    },
    SeedProduct {
        name: "Signal Light Assembly",
        description: "Front signal light assembly for Subaru Forester. OEM quality replacement.",
        price: "129.99",
        brand: "DEPO",
        image_url: "https://images.unsplash.com/photo-1500463959177-e0869687df26?auto=format&fit=crop&q=80",
        category: "Signal Lights",
        compatible_vehicles: &["Subaru Forester 2017-2020"],
        featured: true,
        stock_quantity: 12,
        tags: &["LED", "Subaru", "Signal Lights", "Sale"],
    },
    SeedProduct {
        name: "LED DRL Kit",
        description: "Daytime running light kit with automatic on/off function. Easy installation.",
        price: "149.99",
        brand: "LUCID",
        image_url: "https://images.unsplash.com/photo-1542683205-2da0c3bf235e?auto=format&fit=crop&q=80",
        category: "Headlights",
        compatible_vehicles: &["Toyota Camry 2018-2023", "Honda Accord 2018-2023"],
        featured: false,
        stock_quantity: 7,
        tags: &["LED", "DRL", "Universal"],
    },
    SeedProduct {
        name: "HID Conversion Kit",
        description: "HID conversion kit with all necessary components for installation. 6000K white light.",
        price: "189.99",
        brand: "TYC",
        image_url: "https://images.unsplash.com/photo-1527247162509-cf96942232c1?auto=format&fit=crop&q=80",
        category: "Headlights",
        compatible_vehicles: &["Multiple vehicles"],
        featured: false,
        stock_quantity: 9,
        tags: &["HID", "Conversion", "Universal"],
    },
];

/// Seed the database.
///
/// A non-empty products table is treated as already seeded unless `force`
/// is set.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is missing or any insert fails.
pub async fn run(force: bool) -> Result<(), CommandError> {
    let pool = super::connect().await?;

    let product_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await?;
    if product_count > 0 && !force {
        warn!(product_count, "Catalog already seeded; use --force to seed anyway");
        return Ok(());
    }

    seed_categories(&pool).await?;
    let make_ids = seed_makes(&pool).await?;
    seed_models(&pool, &make_ids).await?;
    seed_products(&pool).await?;

    info!("Seeding complete");
    Ok(())
}

async fn seed_categories(pool: &PgPool) -> Result<(), CommandError> {
    for category in CATEGORIES {
        sqlx::query("INSERT INTO categories (name, description, image_url) VALUES ($1, $2, $3)")
            .bind(category.name)
            .bind(category.description)
            .bind(category.image_url)
            .execute(pool)
            .await?;
    }
    info!(count = CATEGORIES.len(), "Seeded categories");
    Ok(())
}

async fn seed_makes(pool: &PgPool) -> Result<HashMap<&'static str, i32>, CommandError> {
    let mut ids = HashMap::new();
    for make in MAKES {
        let id: i32 = sqlx::query_scalar("INSERT INTO vehicle_makes (name) VALUES ($1) RETURNING id")
            .bind(make)
            .fetch_one(pool)
            .await?;
        ids.insert(*make, id);
    }
    info!(count = MAKES.len(), "Seeded vehicle makes");
    Ok(ids)
}

async fn seed_models(
    pool: &PgPool,
    make_ids: &HashMap<&'static str, i32>,
) -> Result<(), CommandError> {
    for model in MODELS {
        let Some(make_id) = make_ids.get(model.make) else {
            warn!(make = model.make, model = model.name, "Skipping model with unknown make");
            continue;
        };
        sqlx::query(
            "INSERT INTO vehicle_models (make_id, name, year_start, year_end) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(make_id)
        .bind(model.name)
        .bind(model.year_start)
        .bind(model.year_end)
        .execute(pool)
        .await?;
    }
    info!(count = MODELS.len(), "Seeded vehicle models");
    Ok(())
}

async fn seed_products(pool: &PgPool) -> Result<(), CommandError> {
    for product in PRODUCTS {
        let price: Decimal = product.price.parse().expect("seed prices are valid decimals");
        let vehicles: Vec<String> = product
            .compatible_vehicles
            .iter()
            .map(|v| (*v).to_owned())
            .collect();
        let tags: Vec<String> = product.tags.iter().map(|t| (*t).to_owned()).collect();

        sqlx::query(
            "INSERT INTO products \
                 (name, description, price, brand, image_url, category, \
                  compatible_vehicles, featured, stock_quantity, tags) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(product.name)
        .bind(product.description)
        .bind(price)
        .bind(product.brand)
        .bind(product.image_url)
        .bind(product.category)
        .bind(&vehicles)
        .bind(product.featured)
        .bind(product.stock_quantity)
        .bind(&tags)
        .execute(pool)
        .await?;
    }
    info!(count = PRODUCTS.len(), "Seeded products");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_model_references_a_seeded_make() {
        for model in MODELS {
            assert!(
                MAKES.contains(&model.make),
                "model {} references unknown make {}",
                model.name,
                model.make
            );
        }
    }

    #[test]
    fn every_product_references_a_seeded_category() {
        let names: Vec<&str> = CATEGORIES.iter().map(|c| c.name).collect();
        for product in PRODUCTS {
            assert!(
                names.contains(&product.category),
                "product {} references unknown category {}",
                product.name,
                product.category
            );
        }
    }

    #[test]
    fn seed_prices_parse_as_decimals() {
        for product in PRODUCTS {
            let price: Decimal = product.price.parse().expect("valid price");
            assert!(price > Decimal::ZERO);
        }
    }
}
