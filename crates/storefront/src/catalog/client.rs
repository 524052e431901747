//! HTTP client for the remote catalog API.
//!
//! The catalog exposes a single endpoint with query-string dispatch:
//! `?type=list&batchNumber=<n>` returns one page of the product list,
//! `?productId=<id>` returns the detail document for one product.
//! Responses are read as text first, then JSON-decoded, so malformed
//! bodies produce a parse error with the offending payload logged.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::header::USER_AGENT;
use tracing::{debug, instrument};
use url::Url;

use mystore_core::{CatalogPage, ProductDetail, ProductId};

use super::{CatalogError, PageFetcher};
use crate::config::StorefrontConfig;

/// Detail responses change rarely; cache them briefly.
const DETAIL_CACHE_TTL: Duration = Duration::from_secs(300);
const DETAIL_CACHE_CAPACITY: u64 = 1000;

/// Client for the remote catalog API.
///
/// Cheaply cloneable; list pages are never cached (the loader owns
/// accumulation), product details are cached for 5 minutes.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    http: reqwest::Client,
    base_url: Url,
    user_agent: String,
    detail_cache: Cache<String, ProductDetail>,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let detail_cache = Cache::builder()
            .max_capacity(DETAIL_CACHE_CAPACITY)
            .time_to_live(DETAIL_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                http: reqwest::Client::new(),
                base_url: config.catalog_url.clone(),
                user_agent: config.user_agent.clone(),
                detail_cache,
            }),
        }
    }

    /// GET a catalog URL and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, CatalogError> {
        let response = self
            .inner
            .http
            .get(url)
            .header(USER_AGENT, &self.inner.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        // Read as text first for better diagnostics on malformed bodies
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    /// Fetch one page of the product list.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or
    /// a response body that is not a valid catalog page.
    #[instrument(skip(self))]
    pub async fn fetch_page(&self, batch: u32) -> Result<CatalogPage, CatalogError> {
        let mut url = self.inner.base_url.clone();
        url.query_pairs_mut()
            .append_pair("type", "list")
            .append_pair("batchNumber", &batch.to_string());

        self.get_json(url).await
    }

    /// Fetch the detail document for one product, cached for 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or
    /// a malformed detail document.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product_detail(
        &self,
        product_id: &ProductId,
    ) -> Result<ProductDetail, CatalogError> {
        let cache_key = product_id.as_str().to_owned();

        if let Some(detail) = self.inner.detail_cache.get(&cache_key).await {
            debug!("Cache hit for product detail");
            return Ok(detail);
        }

        let mut url = self.inner.base_url.clone();
        url.query_pairs_mut()
            .append_pair("productId", product_id.as_str());

        let detail: ProductDetail = self.get_json(url).await?;

        self.inner
            .detail_cache
            .insert(cache_key, detail.clone())
            .await;

        Ok(detail)
    }
}

impl PageFetcher for CatalogClient {
    async fn fetch_page(&self, batch: u32) -> Result<CatalogPage, CatalogError> {
        Self::fetch_page(self, batch).await
    }
}
