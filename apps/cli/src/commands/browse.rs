//! # Browse Commands
//!
//! Home listing, "load more", search, category filter, product detail.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Browse Flow                                         │
//! │                                                                         │
//! │  browse [page] ──► GET /products?page=&limit= ──► replace catalog      │
//! │                                                                         │
//! │  more ──────────► GET next page ───────────────► append to catalog     │
//! │                                                                         │
//! │  search <text> ─► client-side name filter over the fetched catalog     │
//! │                                                                         │
//! │  category <c> ──► GET /products (all) ─────────► filter by category    │
//! │                                                                         │
//! │  show <id> ─────► detail + up to 9 related products                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use anyhow::Result;
use tracing::{debug, warn};

use shopfront_api::{Client, ProductDto};
use shopfront_core::Product;

use crate::config::StoreConfig;
use crate::state::Catalog;

/// How many related products the detail view shows.
const RELATED_LIMIT: usize = 9;

/// Fetches one catalog page and replaces the listing.
pub async fn browse(
    config: &StoreConfig,
    client: &Client,
    catalog: &mut Catalog,
    page: Option<u32>,
) -> Result<String> {
    let page = page.unwrap_or(1).max(1);
    debug!(page, "browse command");

    let dtos = client.products().fetch_page(page, config.page_size).await?;
    let products = into_products(dtos);

    if products.is_empty() {
        catalog.replace(products, page);
        return Ok(format!("Page {} is empty.", page));
    }

    catalog.replace(products, page);
    Ok(render_listing(
        config,
        &format!("Products - page {}", page),
        catalog.products().iter(),
    ))
}

/// Fetches the next page and appends it ("load more").
pub async fn more(config: &StoreConfig, client: &Client, catalog: &mut Catalog) -> Result<String> {
    let next = catalog.page() + 1;
    debug!(page = next, "more command");

    let dtos = client.products().fetch_page(next, config.page_size).await?;
    let products = into_products(dtos);

    if products.is_empty() {
        return Ok("No more products.".to_string());
    }

    catalog.extend(products, next);
    Ok(render_listing(
        config,
        &format!("Products - through page {}", next),
        catalog.products().iter(),
    ))
}

/// Filters the fetched listing by name, client-side.
pub fn search(config: &StoreConfig, catalog: &Catalog, query: &str) -> String {
    debug!(%query, "search command");

    if catalog.is_empty() {
        return "Nothing fetched yet - run `browse` first.".to_string();
    }

    let matches = catalog.search(query);
    if matches.is_empty() {
        return format!("No products matching \"{}\".", query.trim());
    }

    render_listing(
        config,
        &format!("Search: \"{}\"", query.trim()),
        matches.into_iter(),
    )
}

/// Fetches the whole catalog and filters it by category.
pub async fn category(
    config: &StoreConfig,
    client: &Client,
    catalog: &mut Catalog,
    name: &str,
) -> Result<String> {
    debug!(category = %name, "category command");

    let dtos = client.products().fetch_all().await?;
    catalog.replace(into_products(dtos), 1);

    let matches = catalog.in_category(name);
    if matches.is_empty() {
        return Ok(format!("No products in category \"{}\".", name));
    }

    Ok(render_listing(
        config,
        &format!("Category: {}", name),
        matches.into_iter(),
    ))
}

/// Shows one product plus related products.
pub async fn show(
    config: &StoreConfig,
    client: &Client,
    catalog: &mut Catalog,
    id: &str,
) -> Result<String> {
    debug!(id, "show command");

    // The detail view works from the full catalog so "related" has
    // something to draw on even when the listing page was small.
    let dtos = client.products().fetch_all().await?;
    catalog.replace(into_products(dtos), 1);

    let Some(product) = catalog.find(id) else {
        return Ok(format!("No product with id {}.", id));
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", product.name);
    let _ = writeln!(out, "  id:       {}", product.id);
    let _ = writeln!(out, "  price:    {}", config.format_money(product.price));
    if let Some(category) = &product.category {
        let _ = writeln!(out, "  category: {}", category);
    }
    if let Some(image_url) = &product.image_url {
        let _ = writeln!(out, "  image:    {}", image_url);
    }
    if let Some(description) = &product.description {
        let _ = writeln!(out, "\n  {}", description);
    }

    let related = catalog.related(id, RELATED_LIMIT);
    if !related.is_empty() {
        let _ = write!(
            out,
            "\n{}",
            render_listing(config, "Related products", related.into_iter())
        );
    }

    Ok(out)
}

// =============================================================================
// Helpers
// =============================================================================

/// Converts wire DTOs into domain products.
///
/// The mock backend is shared and writable by anyone; a malformed record
/// is skipped with a warning rather than taking the whole listing down.
pub(crate) fn into_products(dtos: Vec<ProductDto>) -> Vec<Product> {
    let mut products = Vec::with_capacity(dtos.len());
    for dto in dtos {
        match Product::try_from(dto) {
            Ok(product) => products.push(product),
            Err(e) => warn!(error = %e, "skipping malformed catalog entry"),
        }
    }
    products
}

/// Renders a product listing, one line per product.
pub(crate) fn render_listing<'a>(
    config: &StoreConfig,
    title: &str,
    products: impl Iterator<Item = &'a Product>,
) -> String {
    let mut out = format!("{}\n", title);
    let mut count = 0usize;
    for product in products {
        let _ = writeln!(
            out,
            "  [{}] {} - {}",
            product.id,
            product.name,
            config.format_money(product.price)
        );
        count += 1;
    }
    let _ = write!(out, "  ({} items)", count);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Money;

    fn config() -> StoreConfig {
        StoreConfig::new("https://example.test", 10)
    }

    fn dto(id: &str, name: &str, price: &str) -> ProductDto {
        ProductDto {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            image_url: None,
            description: None,
            category_name: None,
        }
    }

    #[test]
    fn test_into_products_skips_malformed_entries() {
        let products = into_products(vec![
            dto("1", "Good", "1000"),
            dto("2", "Bad price", "oops"),
            dto("3", "Also good", "2500"),
        ]);

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[1].id, "3");
    }

    #[test]
    fn test_render_listing() {
        let products = vec![Product {
            id: "1".to_string(),
            name: "Nike Air Max".to_string(),
            price: Money::from_minor(4_500_000),
            image_url: None,
            description: None,
            category: None,
        }];

        let out = render_listing(&config(), "Products", products.iter());
        assert!(out.contains("Products"));
        assert!(out.contains("[1] Nike Air Max - ₫4,500,000"));
        assert!(out.contains("(1 items)"));
    }

    #[test]
    fn test_search_on_empty_catalog_hints_browse() {
        let catalog = Catalog::new();
        let out = search(&config(), &catalog, "nike");
        assert!(out.contains("browse"));
    }
}
