//! Client configuration

/// Client configuration for connecting to the backend API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// JWT token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Read configuration from `OPAL_API_URL` / `OPAL_API_TOKEN`
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("OPAL_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var("OPAL_API_TOKEN") {
            if !token.is_empty() {
                config.token = Some(token);
            }
        }
        config
    }

    /// Set the JWT token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}
