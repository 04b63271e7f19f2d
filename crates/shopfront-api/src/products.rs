//! # Products Resource
//!
//! CRUD against `/products` on the mock backend.
//!
//! ## Catalog Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Fetch Flow                                   │
//! │                                                                         │
//! │  Shell: browse page 2                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /products?page=2&limit=10                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [ { "id": "11", "name": "...", "price": "3900000", ... }, ... ]        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductDto (wire, price as string)                                     │
//! │       │                                                                 │
//! │       ▼  try_into()                                                     │
//! │  shopfront_core::Product (domain, price as Money)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The backend stores prices as decimal strings. Parsing happens exactly
//! once, at the DTO → domain boundary, and a malformed price is a typed
//! error rather than a silent zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use shopfront_core::{Money, Product};

use crate::client::Client;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// Wire Types
// =============================================================================

/// A product as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    /// Decimal string of whole minor units, e.g. `"3900000"`.
    pub price: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Category label used by the category screen filter.
    #[serde(default, rename = "categoryName")]
    pub category_name: Option<String>,
}

impl TryFrom<ProductDto> for Product {
    type Error = ApiError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        let price = Money::parse_minor(&dto.price).map_err(|e| ApiError::InvalidPayload {
            id: dto.id.clone(),
            field: "price",
            reason: e.to_string(),
        })?;
        if price.is_negative() {
            return Err(ApiError::InvalidPayload {
                id: dto.id,
                field: "price",
                reason: "price is negative".to_string(),
            });
        }

        Ok(Product {
            id: dto.id,
            name: dto.name,
            price,
            image_url: dto.image_url,
            description: dto.description,
            category: dto.category_name,
        })
    }
}

/// Partial update body for PUT `/products/{id}`.
///
/// Only the populated fields are sent; the backend merges them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "categoryName", skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

// =============================================================================
// Resource API
// =============================================================================

/// Operations on the `/products` resource.
#[derive(Debug)]
pub struct ProductsApi<'a> {
    client: &'a Client,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        ProductsApi { client }
    }

    /// Fetches one page of the catalog.
    ///
    /// `page` is 1-based; `page`/`limit` query parameters are the only
    /// pagination contract the backend offers. A page past the end comes
    /// back empty.
    pub async fn fetch_page(&self, page: u32, limit: u32) -> ApiResult<Vec<ProductDto>> {
        debug!(page, limit, "fetch products page");

        let response = self
            .client
            .http()
            .get(self.client.url("/products"))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let response = Client::check(response, "Fetching products failed").await?;
        response.json().await.map_err(ApiError::from_reqwest)
    }

    /// Fetches the entire catalog (used by the category filter).
    pub async fn fetch_all(&self) -> ApiResult<Vec<ProductDto>> {
        debug!("fetch all products");

        let response = self
            .client
            .http()
            .get(self.client.url("/products"))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let response = Client::check(response, "Fetching products failed").await?;
        response.json().await.map_err(ApiError::from_reqwest)
    }

    /// Adds a new product to the catalog.
    pub async fn create(&self, product: &ProductDto) -> ApiResult<ProductDto> {
        debug!(name = %product.name, "create product");

        let response = self
            .client
            .http()
            .post(self.client.url("/products"))
            .json(product)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let response = Client::check(response, "Adding product failed").await?;
        response.json().await.map_err(ApiError::from_reqwest)
    }

    /// Updates an existing product with a partial body.
    pub async fn update(&self, id: &str, patch: &ProductPatch) -> ApiResult<ProductDto> {
        debug!(id, "update product");

        let response = self
            .client
            .http()
            .put(self.client.url(&format!("/products/{}", id)))
            .json(patch)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let response = Client::check(response, "Updating product failed").await?;
        response.json().await.map_err(ApiError::from_reqwest)
    }

    /// Deletes a product; the backend echoes the deleted record.
    pub async fn delete(&self, id: &str) -> ApiResult<ProductDto> {
        debug!(id, "delete product");

        let response = self
            .client
            .http()
            .delete(self.client.url(&format!("/products/{}", id)))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let response = Client::check(response, "Deleting product failed").await?;
        response.json().await.map_err(ApiError::from_reqwest)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_deserialization() {
        let json = r#"{
            "id": "1",
            "name": "Nike Jordan Panda Low",
            "price": "3900000",
            "image_url": "https://cdn.test/panda.jpg",
            "description": "Low-top sneaker",
            "categoryName": "Fashion"
        }"#;

        let dto: ProductDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, "1");
        assert_eq!(dto.price, "3900000");
        assert_eq!(dto.category_name.as_deref(), Some("Fashion"));
    }

    #[test]
    fn test_dto_tolerates_missing_optional_fields() {
        let json = r#"{"id": "2", "name": "Bare", "price": "100"}"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        assert!(dto.image_url.is_none());
        assert!(dto.description.is_none());
        assert!(dto.category_name.is_none());
    }

    #[test]
    fn test_dto_to_domain() {
        let dto = ProductDto {
            id: "1".to_string(),
            name: "Nike Air Max".to_string(),
            price: "4500000".to_string(),
            image_url: None,
            description: None,
            category_name: Some("Fashion".to_string()),
        };

        let product: Product = dto.try_into().unwrap();
        assert_eq!(product.price.minor(), 4_500_000);
        assert_eq!(product.category.as_deref(), Some("Fashion"));
    }

    #[test]
    fn test_malformed_price_is_typed_error() {
        let dto = ProductDto {
            id: "7".to_string(),
            name: "Broken".to_string(),
            price: "12.5x".to_string(),
            image_url: None,
            description: None,
            category_name: None,
        };

        let err = Product::try_from(dto).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPayload { field: "price", .. }));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let dto = ProductDto {
            id: "8".to_string(),
            name: "Refund glitch".to_string(),
            price: "-100".to_string(),
            image_url: None,
            description: None,
            category_name: None,
        };

        assert!(Product::try_from(dto).is_err());
    }

    #[test]
    fn test_patch_serializes_only_populated_fields() {
        let patch = ProductPatch {
            price: Some("999000".to_string()),
            ..ProductPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "price": "999000" }));
    }
}
