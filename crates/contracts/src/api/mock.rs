//! Recording transport for tests

use super::error::ApiError;
use super::transport::{CatalogTransport, TransportResponse};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<Vec<(String, Result<TransportResponse, ApiError>)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose URL starts with `prefix`; later routes win
    pub fn respond(&self, prefix: &str, status: u16, body: &str) -> &Self {
        self.routes.lock().unwrap().push((
            prefix.to_string(),
            Ok(TransportResponse {
                status,
                body: body.to_string(),
            }),
        ));
        self
    }

    pub fn fail(&self, prefix: &str, message: &str) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .push((prefix.to_string(), Err(ApiError::Transport(message.to_string()))));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl CatalogTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, ApiError> {
        self.requests.lock().unwrap().push(url.to_string());
        let routes = self.routes.lock().unwrap();
        routes
            .iter()
            .rev()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, answer)| answer.clone())
            .unwrap_or(Ok(TransportResponse {
                status: 404,
                body: r#"{"detail": "Not found."}"#.to_string(),
            }))
    }
}
