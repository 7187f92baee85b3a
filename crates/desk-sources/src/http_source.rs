//! Hotel backend over HTTP.

use std::future::Future;
use std::time::Duration;

use desk_config::{ApiConfig, DeskConfig, EndpointsConfig};
use desk_core::entities::RawRecord;
use desk_core::enums::Collection;
use desk_core::session::SessionContext;
use serde_json::Value;

use crate::RecordSource;
use crate::error::SourceError;
use crate::http::{check_response, records_from_payload};

/// Fetches each collection with a `GET {base_url}{endpoint}` request.
///
/// The selected hotel travels as a `hotel_id` query parameter and the token
/// as a bearer header, both taken from the [`SessionContext`] of the call.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
    endpoints: EndpointsConfig,
}

impl HttpSource {
    /// Build a source from the API connection and endpoint paths.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] when no base URL is set, or
    /// [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(api: &ApiConfig, endpoints: EndpointsConfig) -> Result<Self, SourceError> {
        if !api.is_configured() {
            return Err(SourceError::NotConfigured("api.base_url"));
        }
        let http = reqwest::Client::builder()
            .user_agent(api.user_agent.clone())
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: api.base_url_trimmed().to_string(),
            endpoints,
        })
    }

    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_config(config: &DeskConfig) -> Result<Self, SourceError> {
        Self::new(&config.api, config.endpoints.clone())
    }

    /// Full request URL for `collection`, scoped to the session's hotel.
    #[must_use]
    pub fn url_for(&self, collection: Collection, ctx: &SessionContext) -> String {
        let path = self.endpoints.path_for(collection);
        let mut url = format!("{}{path}", self.base_url);
        if let Some(hotel) = &ctx.hotel_id {
            let separator = if url.contains('?') { '&' } else { '?' };
            url.push(separator);
            url.push_str("hotel_id=");
            url.push_str(&urlencoding::encode(hotel));
        }
        url
    }
}

impl RecordSource for HttpSource {
    fn fetch(
        &self,
        collection: Collection,
        ctx: &SessionContext,
    ) -> impl Future<Output = Result<Vec<RawRecord>, SourceError>> + Send {
        let url = self.url_for(collection, ctx);
        tracing::debug!(%collection, %url, "fetching collection");

        let mut request = self.http.get(url);
        if let Some(token) = &ctx.token {
            request = request.bearer_auth(token);
        }

        async move {
            let resp = check_response(request.send().await?).await?;
            let payload: Value = resp.json().await?;
            records_from_payload(payload)
        }
    }
}
