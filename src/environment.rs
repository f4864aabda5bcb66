//! The serving environment the document falls back to for `host`, `basePath` and `schemes`.
//!
//! Instead of reading a process-wide root URL, callers build a [`ServerEnvironment`] once and
//! pass it to the assembler, which keeps assembly a pure function of its inputs.

use crate::error::Result;
use serde_json::{json, Map, Value};
use url::Url;

/// Externally visible root URL of the service plus the API path prefix routes live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEnvironment {
    root_url: Url,
    api_path: String,
}

impl ServerEnvironment {
    /// Create an environment from a root URL such as `https://example.com/` and an API path
    /// prefix such as `api/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`](crate::error::Error::InvalidBaseUrl) if `root_url`
    /// is not an absolute URL.
    pub fn new(root_url: &str, api_path: &str) -> Result<Self> {
        let root_url = Url::parse(root_url)?;
        Ok(Self {
            root_url,
            api_path: api_path.to_string(),
        })
    }

    /// Host name, with `:port` when the URL names a non-default port
    pub fn host(&self) -> String {
        let host = self.root_url.host_str().unwrap_or_default();
        match self.root_url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }

    /// `/` followed by the API path, minus its trailing slash
    pub fn base_path(&self) -> String {
        let path = format!("/{}", self.api_path);
        match path.strip_suffix('/') {
            Some(stripped) => stripped.to_string(),
            None => path,
        }
    }

    /// URL scheme without its `:` separator
    pub fn scheme(&self) -> &str {
        self.root_url.scheme()
    }

    /// The `host`/`basePath`/`schemes` block merged into documents whose meta has none of them
    pub fn auto_detected(&self) -> Map<String, Value> {
        let mut detected = Map::new();
        detected.insert("host".to_string(), json!(self.host()));
        detected.insert("basePath".to_string(), json!(self.base_path()));
        detected.insert("schemes".to_string(), json!([self.scheme()]));
        detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_host_without_port() {
        let env = ServerEnvironment::new("https://example.com/", "api/").unwrap();
        assert_eq!(env.host(), "example.com");
    }

    #[test]
    fn test_host_with_port() {
        let env = ServerEnvironment::new("http://localhost:3000/", "api/").unwrap();
        assert_eq!(env.host(), "localhost:3000");
    }

    #[test]
    fn test_default_port_is_omitted() {
        let env = ServerEnvironment::new("https://example.com:443/", "api/").unwrap();
        assert_eq!(env.host(), "example.com");
    }

    #[test]
    fn test_base_path() {
        let env = ServerEnvironment::new("http://localhost/", "api/").unwrap();
        assert_eq!(env.base_path(), "/api");

        let env = ServerEnvironment::new("http://localhost/", "api/v1/").unwrap();
        assert_eq!(env.base_path(), "/api/v1");

        let env = ServerEnvironment::new("http://localhost/", "v1").unwrap();
        assert_eq!(env.base_path(), "/v1");

        let env = ServerEnvironment::new("http://localhost/", "").unwrap();
        assert_eq!(env.base_path(), "");
    }

    #[test]
    fn test_scheme() {
        let env = ServerEnvironment::new("https://example.com/", "api/").unwrap();
        assert_eq!(env.scheme(), "https");
    }

    #[test]
    fn test_auto_detected_block() {
        let env = ServerEnvironment::new("http://localhost:3000/", "api/").unwrap();
        let detected = env.auto_detected();

        assert_eq!(detected.len(), 3);
        assert_eq!(detected["host"], json!("localhost:3000"));
        assert_eq!(detected["basePath"], json!("/api"));
        assert_eq!(detected["schemes"], json!(["http"]));
    }

    #[test]
    fn test_invalid_url() {
        let err = ServerEnvironment::new("/relative/path", "api/").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }
}
