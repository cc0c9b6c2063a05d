use serde::{Deserialize, Serialize};

/// Connection settings for the REST layer.
///
/// Owned by the caller and passed by reference into the services that use
/// it; nothing in this crate mutates it after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestConfig {
    /// Full endpoint URL (scheme, host, port and path).
    url: String,
    /// Accept self-signed or otherwise invalid TLS certificates.
    #[serde(default)]
    trust_all_certs: bool,
    /// Optional HTTP proxy URL to route requests through.
    #[serde(default)]
    proxy: Option<String>,
}

impl RestConfig {
    /// Create a configuration pointing at the given endpoint URL.
    ///
    /// Certificate validation is on and no proxy is used by default.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            trust_all_certs: false,
            proxy: None,
        }
    }

    /// Accept self-signed or expired server certificates.
    pub fn with_trust_all_certs(mut self, trust: bool) -> Self {
        self.trust_all_certs = trust;
        self
    }

    /// Route requests through the given HTTP proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// The endpoint URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether invalid TLS certificates are accepted.
    pub fn trust_all_certs(&self) -> bool {
        self.trust_all_certs
    }

    /// The proxy URL, if one is configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RestConfig::new("https://api.example.com/speech/v3/speechToText");

        assert_eq!(cfg.url(), "https://api.example.com/speech/v3/speechToText");
        assert!(!cfg.trust_all_certs());
        assert!(cfg.proxy().is_none());
    }

    #[test]
    fn test_builder_settings() {
        let cfg = RestConfig::new("https://localhost:8443/speech")
            .with_trust_all_certs(true)
            .with_proxy("http://proxy.internal:3128");

        assert!(cfg.trust_all_certs());
        assert_eq!(cfg.proxy(), Some("http://proxy.internal:3128"));
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let cfg: RestConfig =
            serde_json::from_str(r#"{"url":"https://api.example.com/speech"}"#).unwrap();

        assert_eq!(cfg.url(), "https://api.example.com/speech");
        assert!(!cfg.trust_all_certs());
        assert!(cfg.proxy().is_none());
    }
}
