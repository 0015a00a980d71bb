use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use crate::config;

/// Named collections on the backend. Each form flow writes into exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Inquiries,
    Contacts,
    Consultations,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Inquiries => "inquiries",
            Collection::Contacts => "contacts",
            Collection::Consultations => "consultations",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsertError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// One-shot record insert. At most once: implementations never retry.
pub trait InsertClient {
    fn insert<'a>(
        &'a self,
        collection: Collection,
        record: &'a Value,
    ) -> LocalBoxFuture<'a, Result<(), InsertError>>;
}

/// Insert client talking to the backend's collections API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpInsertClient {
    base_url: String,
}

impl HttpInsertClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// `None` when no backend URL is configured.
    pub fn from_config() -> Option<Self> {
        config::get_backend_url().map(Self::new)
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/api/collections/{}", self.base_url, collection.as_str())
    }
}

impl InsertClient for HttpInsertClient {
    fn insert<'a>(
        &'a self,
        collection: Collection,
        record: &'a Value,
    ) -> LocalBoxFuture<'a, Result<(), InsertError>> {
        async move {
            let url = self.collection_url(collection);
            let response = Request::post(&url)
                .json(record)
                .map_err(|e| InsertError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| InsertError::Network(e.to_string()))?;

            if response.ok() {
                return Ok(());
            }
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => response.status_text(),
            };
            Err(InsertError::Status { status, message })
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_uses_collection_name() {
        let client = HttpInsertClient::new("https://tbr.example");
        assert_eq!(
            client.collection_url(Collection::Consultations),
            "https://tbr.example/api/collections/consultations"
        );
        assert_eq!(
            client.collection_url(Collection::Inquiries),
            "https://tbr.example/api/collections/inquiries"
        );
    }
}
