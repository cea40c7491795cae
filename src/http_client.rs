//! HTTP client construction
//!
//! One place to build the reqwest client shared by every admin API call:
//! request timeout from configuration, rustls, optional proxy.

use reqwest::{Client, Proxy};
use std::time::Duration;

/// Proxy configuration
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// Proxy URL, supports http/https/socks5
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Set proxy authentication credentials
    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// Build the HTTP client
///
/// The timeout bounds each whole request; no other deadline exists in the
/// client.
pub fn build_client(proxy: Option<&ProxyConfig>, timeout_secs: u64) -> anyhow::Result<Client> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .use_rustls_tls();

    if let Some(proxy_config) = proxy {
        let mut proxy = Proxy::all(&proxy_config.url)?;
        if let (Some(username), Some(password)) = (&proxy_config.username, &proxy_config.password)
        {
            proxy = proxy.basic_auth(username, password);
        }
        builder = builder.proxy(proxy);
        tracing::debug!("HTTP client using proxy: {}", proxy_config.url);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_config_builder() {
        let plain = ProxyConfig::new("http://127.0.0.1:7890");
        assert_eq!(plain.url, "http://127.0.0.1:7890");
        assert!(plain.username.is_none());

        let authed = ProxyConfig::new("socks5://127.0.0.1:1080").with_auth("user", "pass");
        assert_eq!(authed.username, Some("user".to_string()));
        assert_eq!(authed.password, Some("pass".to_string()));
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(None, 30).is_ok());

        let proxy = ProxyConfig::new("http://127.0.0.1:7890");
        assert!(build_client(Some(&proxy), 5).is_ok());
    }

    #[test]
    fn test_build_client_rejects_bad_proxy_url() {
        let proxy = ProxyConfig::new("not a url");
        assert!(build_client(Some(&proxy), 30).is_err());
    }
}
