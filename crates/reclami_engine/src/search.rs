use reclami_core::ComplaintRecord;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reclami_logging::{reclami_debug, reclami_warn};
use reqwest::Url;

use crate::{decode_records, FailureKind, SearchError};

pub const DEFAULT_BASE_URL: &str = "https://percipio.onrender.com";
pub const SEARCH_PATH: &str = "/api/reclami/search";

/// Characters left as-is in a query component: alphanumerics and `-_.!~*'()`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub base_url: String,
    pub search_path: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_path: SEARCH_PATH.to_string(),
        }
    }
}

impl SearchSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// `{base_url}{search_path}?q=<query>`, with the query percent-encoded as given.
    ///
    /// Spaces become `%20`. URL parsing then escapes `'` as `%27`, as it does
    /// for any `http`/`https` query.
    pub fn search_url(&self, query: &str) -> Result<Url, SearchError> {
        let raw = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.search_path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw)
            .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let encoded = utf8_percent_encode(query, QUERY_COMPONENT).to_string();
        url.set_query(Some(&format!("q={encoded}")));
        Ok(url)
    }
}

#[async_trait::async_trait]
pub trait Searcher: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<ComplaintRecord>, SearchError>;
}

/// One plain GET per search: no custom headers, no timeout, no retry.
#[derive(Debug, Clone)]
pub struct ReqwestSearcher {
    settings: SearchSettings,
}

impl ReqwestSearcher {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, SearchError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Searcher for ReqwestSearcher {
    async fn search(&self, query: &str) -> Result<Vec<ComplaintRecord>, SearchError> {
        let url = self.settings.search_url(query)?;
        let client = self.build_client()?;
        reclami_debug!("GET {}", url);

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            reclami_warn!("Search endpoint answered {}", status);
            return Err(SearchError::request_failed(status.as_u16()));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        decode_records(&body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_decode() {
        return SearchError::new(FailureKind::ParseFailed, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
