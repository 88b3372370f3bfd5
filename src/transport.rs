use reqwest::blocking::Client;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::time::Duration;

use super::Result;

/// Posts a JSON document and hands back the response body.
pub trait Transport {
    fn post_json(&self, url: &str, body: String) -> Result<String>;
}

/// Blocking HTTPS transport. No timeout unless one is configured.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> HttpTransport {
        HttpTransport {
            client: Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<HttpTransport> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: String) -> Result<String> {
        let length = body.len();
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, length)
            .body(body)
            .send()?;
        Ok(response.text()?)
    }
}
