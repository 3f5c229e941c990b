//! HTTP plumbing shared by all endpoint methods

use pv_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::models::STATUS_SUCCESS;

/// Backend client. One `reqwest::Client` for the whole app; cheap to clone.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
}

impl Client {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    ///
    /// Segment-wise building matters for the `{name}` endpoints: file names
    /// can contain spaces and accents.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // base URLs are validated at construction, so they can be a base.
        url.path_segments_mut()
            .expect("base URL cannot be a base")
            .pop_if_empty()
            .extend(segments);
        url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let path = url.path().to_string();
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Self::decode(response, path).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T> {
        let path = url.path().to_string();
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Self::decode(response, path).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, path: String) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                endpoint: path,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| Error::Payload(e.to_string()))
    }
}

/// Unwrap a `{status, message, <payload>}` envelope.
///
/// `status != "success"` and a success envelope with a missing payload are
/// both soft failures; the caller logs and shows a placeholder.
pub(crate) fn accept<T>(
    status: &str,
    message: Option<String>,
    payload: Option<T>,
    what: &str,
) -> Result<T> {
    if status != STATUS_SUCCESS {
        let msg = message.unwrap_or_else(|| format!("{what} request failed"));
        tracing::warn!(status, what, %msg, "backend reported failure");
        return Err(Error::Backend(msg));
    }
    payload.ok_or_else(|| Error::Payload(format!("{what}: success envelope without payload")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(Url::parse("http://127.0.0.1:5000").unwrap())
    }

    #[test]
    fn endpoint_joins_segments() {
        let url = client().endpoint(&["api", "csv", "stats"]);
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/csv/stats");
    }

    #[test]
    fn endpoint_percent_encodes_names() {
        let url = client().endpoint(&["api", "text", "analyze", "match report.txt"]);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/api/text/analyze/match%20report.txt"
        );
    }

    #[test]
    fn accept_extracts_success_payload() {
        let value = accept("success", None, Some(41), "test").unwrap();
        assert_eq!(value, 41);
    }

    #[test]
    fn accept_turns_error_status_into_backend_error() {
        let err = accept::<i32>("error", Some("boom".into()), None, "test").unwrap_err();
        assert!(matches!(err, Error::Backend(msg) if msg == "boom"));
    }

    #[test]
    fn accept_rejects_success_without_payload() {
        let err = accept::<i32>("success", None, None, "test").unwrap_err();
        assert!(matches!(err, Error::Payload(_)));
    }
}
