//! # Catalog State
//!
//! The products the shell has fetched so far, plus the current page
//! number. This is the home screen's state: a listing that grows with
//! "load more" and is re-filtered client-side by search and category.
//!
//! Last response wins: every fetch replaces or extends this state with
//! whatever the backend returned. There are no concurrent writers, so no
//! coordination is needed.

use shopfront_core::Product;

/// Fetched catalog state.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    page: u32,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Replaces the listing with one freshly fetched page.
    pub fn replace(&mut self, products: Vec<Product>, page: u32) {
        self.products = products;
        self.page = page;
    }

    /// Appends the next page ("load more" semantics).
    pub fn extend(&mut self, products: Vec<Product>, page: u32) {
        self.products.extend(products);
        self.page = page;
    }

    /// The page number of the most recent fetch (0 before any fetch).
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Finds a fetched product by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose name contains the query (case-insensitive).
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches_query(query))
            .collect()
    }

    /// Products in the given category (case-insensitive).
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.in_category(category))
            .collect()
    }

    /// Up to `max` products related to `id`: everything else, in listing
    /// order. The storefront's notion of "related" is this simple.
    pub fn related(&self, id: &str, max: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != id)
            .take(max)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
