//! 商品查询

use storefront_errors::{AppError, AppResult};
use tracing::debug;

use super::ProductEnricher;
use crate::domain::{EnrichedProduct, ProductCatalog};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Clone)]
pub struct ProductHandler {
    catalog: ProductCatalog,
    enricher: ProductEnricher,
}

impl ProductHandler {
    pub fn new(catalog: ProductCatalog, enricher: ProductEnricher) -> Self {
        Self { catalog, enricher }
    }

    pub async fn list_products(&self) -> Vec<EnrichedProduct> {
        self.enricher.enrich_all(self.catalog.all().to_vec()).await
    }

    pub async fn search_products(&self, query: &str) -> Vec<EnrichedProduct> {
        let matches = self.catalog.search(query);
        debug!(query, matches = matches.len(), "Product search");
        self.enricher.enrich_all(matches).await
    }

    pub async fn get_product(&self, id: i64) -> AppResult<EnrichedProduct> {
        let product = self
            .catalog
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;
        Ok(self.enricher.enrich(product).await)
    }
}
