//! Catalog repository: products, categories, and vehicle reference data.

use sqlx::{PgPool, QueryBuilder};

use lumenparts_core::{ProductId, VehicleMakeId};

use super::RepositoryError;
use crate::models::{Category, NewProduct, Product, ProductFilter, ProductPatch, VehicleMake, VehicleModel};

const PRODUCT_COLUMNS: &str = "id, name, description, price, brand, image_url, category, \
     compatible_vehicles, featured, stock_quantity, tags, created_at";

/// Escape `LIKE` metacharacters so filter input matches literally.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Repository for catalog reads and admin product CRUD.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products matching the given filters, ANDed together.
    ///
    /// Make and model filter by substring against the product's
    /// compatible-vehicle strings; when both are given, a single string must
    /// contain both.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE TRUE"
        ));

        if let Some(featured) = filter.featured {
            query.push(" AND featured = ");
            query.push_bind(featured);
        }

        if let Some(category) = &filter.category {
            query.push(" AND category = ");
            query.push_bind(category);
        }

        if filter.make.is_some() || filter.model.is_some() {
            query.push(
                " AND EXISTS (SELECT 1 FROM unnest(compatible_vehicles) AS vehicle WHERE TRUE",
            );
            if let Some(make) = &filter.make {
                query.push(" AND vehicle LIKE '%' || ");
                query.push_bind(escape_like(make));
                query.push(" || '%'");
            }
            if let Some(model) = &filter.model {
                query.push(" AND vehicle LIKE '%' || ");
                query.push_bind(escape_like(model));
                query.push(" || '%'");
            }
            query.push(")");
        }

        query.push(" ORDER BY id");

        let products = query
            .build_query_as::<Product>()
            .fetch_all(self.pool)
            .await?;
        Ok(products)
    }

    /// Get a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(product)
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create_product(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products \
                 (name, description, price, brand, image_url, category, \
                  compatible_vehicles, featured, stock_quantity, tags) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.brand)
        .bind(&new.image_url)
        .bind(&new.category)
        .bind(&new.compatible_vehicles)
        .bind(new.featured)
        .bind(new.stock_quantity)
        .bind(&new.tags)
        .fetch_one(self.pool)
        .await?;
        Ok(product)
    }

    /// Apply a partial update to a product; absent fields keep their value.
    ///
    /// Returns `None` if the product does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 price = COALESCE($4, price), \
                 brand = COALESCE($5, brand), \
                 image_url = COALESCE($6, image_url), \
                 category = COALESCE($7, category), \
                 compatible_vehicles = COALESCE($8, compatible_vehicles), \
                 featured = COALESCE($9, featured), \
                 stock_quantity = COALESCE($10, stock_quantity), \
                 tags = COALESCE($11, tags) \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(patch.price)
        .bind(&patch.brand)
        .bind(&patch.image_url)
        .bind(&patch.category)
        .bind(&patch.compatible_vehicles)
        .bind(patch.featured)
        .bind(patch.stock_quantity)
        .bind(&patch.tags)
        .fetch_optional(self.pool)
        .await?;
        Ok(product)
    }

    /// Delete a product unconditionally.
    ///
    /// Cart rows referencing it are left behind as orphans; cart reads omit
    /// them via the product join.
    ///
    /// Returns `true` if a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_product(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all categories with their product counts derived on read.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT c.id, c.name, c.description, c.image_url, \
                    (SELECT COUNT(*) FROM products p WHERE p.category = c.name) AS product_count \
             FROM categories c \
             ORDER BY c.id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(categories)
    }

    /// List all vehicle makes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_vehicle_makes(&self) -> Result<Vec<VehicleMake>, RepositoryError> {
        let makes =
            sqlx::query_as::<_, VehicleMake>("SELECT id, name FROM vehicle_makes ORDER BY id")
                .fetch_all(self.pool)
                .await?;
        Ok(makes)
    }

    /// List vehicle models, optionally restricted to one make.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_vehicle_models(
        &self,
        make_id: Option<VehicleMakeId>,
    ) -> Result<Vec<VehicleModel>, RepositoryError> {
        let models = match make_id {
            Some(make_id) => {
                sqlx::query_as::<_, VehicleModel>(
                    "SELECT id, make_id, name, year_start, year_end \
                     FROM vehicle_models WHERE make_id = $1 ORDER BY id",
                )
                .bind(make_id)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, VehicleModel>(
                    "SELECT id, make_id, name, year_start, year_end \
                     FROM vehicle_models ORDER BY id",
                )
                .fetch_all(self.pool)
                .await?
            }
        };
        Ok(models)
    }
}
