//! Menu sources — where available dates and daily menus come from.

use async_trait::async_trait;

use crate::fetch::{default_client, get_bytes};
use crate::listing::parse_listing;
use crate::types::{DateCatalog, MenuDate, MenuDocument, MenuResult, ParseError};

/// Default origin of the published menu files.
pub const DEFAULT_ORIGIN: &str = "https://mensa.akk.org/json";

/// Anything that can list menu dates and fetch the menu for one of them.
///
/// Implementations hold no per-request state and may be shared across
/// concurrent requests.
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Discover every date with a published menu, in listing order.
    async fn available_dates(&self) -> MenuResult<DateCatalog>;

    /// Fetch the menu document for `date`.
    async fn menu_for_date(&self, date: MenuDate) -> MenuResult<MenuDocument>;
}

/// Menu source backed by the origin's HTTP directory listing.
#[derive(Debug, Clone)]
pub struct HttpMenuSource {
    origin: String,
    client: reqwest::Client,
}

impl HttpMenuSource {
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_client(origin, default_client())
    }

    pub fn with_client(origin: impl Into<String>, client: reqwest::Client) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { origin, client }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn listing_url(&self) -> String {
        format!("{}/", self.origin)
    }

    fn menu_url(&self, date: MenuDate) -> String {
        format!("{}/{date}.json", self.origin)
    }
}

impl Default for HttpMenuSource {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    async fn available_dates(&self) -> MenuResult<DateCatalog> {
        let url = self.listing_url();
        let body = get_bytes(&self.client, &url).await?;
        // Listings may be served in a legacy charset such as ISO-8859-1.
        let html = String::from_utf8_lossy(&body);
        tracing::debug!("Parsing listing from {url} ({} bytes)", body.len());
        Ok(parse_listing(&html)?)
    }

    async fn menu_for_date(&self, date: MenuDate) -> MenuResult<MenuDocument> {
        let url = self.menu_url(date);
        let body = get_bytes(&self.client, &url).await?;
        let menu: MenuDocument =
            serde_json::from_slice(&body).map_err(|source| ParseError::Json { url, source })?;
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let source = HttpMenuSource::new("https://mensa.example/json/");
        assert_eq!(source.origin(), "https://mensa.example/json");
        assert_eq!(source.listing_url(), "https://mensa.example/json/");
        let date = MenuDate::parse("2020-07-10").unwrap();
        assert_eq!(
            source.menu_url(date),
            "https://mensa.example/json/2020-07-10.json"
        );
    }

    #[test]
    fn test_default_origin() {
        assert_eq!(HttpMenuSource::default().origin(), DEFAULT_ORIGIN);
    }
}
