//! Thin GET client over reqwest that hands back owned, `Send` data.
//!
//! The loader task runs inside `tokio::spawn`, so nothing here may hold a
//! borrowed body or a non-`Send` handle across an await.

use crate::error::LoadError;

/// Owned snapshot of an HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
}

impl RequestBuilder {
    /// Transport failures become [`LoadError::Request`]. Non-2xx statuses are
    /// returned as a normal [`Response`]; the caller decides what they mean.
    pub async fn send(self) -> Result<Response, LoadError> {
        let response = reqwest::Client::new()
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Request(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}

pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder { url: url.into() }
    }
}
