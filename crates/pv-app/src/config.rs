//! Environment-driven configuration

use anyhow::{bail, Context, Result};
use url::Url;

use pv_views::FetchLimits;

const DEFAULT_BACKEND: &str = "http://127.0.0.1:5000";
const DEFAULT_LOG: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Url,
    pub log_filter: String,
    pub limits: FetchLimits,
}

impl Config {
    /// Read configuration from `PITCHVIEW_*` environment variables,
    /// falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var("PITCHVIEW_API_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND.to_string());
        let backend_url = parse_backend(&raw)?;
        let log_filter =
            std::env::var("PITCHVIEW_LOG").unwrap_or_else(|_| DEFAULT_LOG.to_string());
        Ok(Self {
            backend_url,
            log_filter,
            limits: FetchLimits::default(),
        })
    }
}

fn parse_backend(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("invalid backend URL `{raw}`"))?;
    if url.cannot_be_a_base() {
        bail!("backend URL `{raw}` cannot carry endpoint paths");
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_parses() {
        let url = parse_backend(DEFAULT_BACKEND).unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.port(), Some(5000));
    }

    #[test]
    fn garbage_backend_is_rejected() {
        assert!(parse_backend("not a url").is_err());
        assert!(parse_backend("mailto:coach@club.example").is_err());
    }
}
