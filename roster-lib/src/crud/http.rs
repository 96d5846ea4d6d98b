//! HTTP implementation of [`CrudBackend`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use url::Url;

use super::{CrudBackend, HttpMethod, RouteTable};
use crate::error::CrudError;
use crate::model::RecordId;

/// Sends delete requests with `reqwest` and records navigations.
///
/// A terminal client cannot open pages, so [`navigate`](CrudBackend::navigate)
/// resolves the URL, logs it and keeps it for [`last_navigation`](Self::last_navigation).
///
/// With method spoofing enabled (the default), `PUT`/`DELETE` routes are sent
/// as `POST` with a `_method` form field, which is what Laravel form routes
/// expect.
///
/// # Example
///
/// ```ignore
/// let routes = RouteTable::new("https://roster.example")?.resource("citizens");
/// let backend = HttpBackend::new(routes).bearer_token(token);
/// backend.delete("citizens.destroy", &RecordId::Int(5)).await?;
/// ```
#[derive(Clone)]
pub struct HttpBackend {
    routes: RouteTable,
    http_client: Client,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
    method_spoofing: bool,
    last_navigation: Arc<Mutex<Option<Url>>>,
}

impl HttpBackend {
    pub fn new(routes: RouteTable) -> Self {
        Self::with_client(routes, Client::new())
    }

    pub fn with_client(routes: RouteTable, http_client: Client) -> Self {
        Self {
            routes,
            http_client,
            bearer_token: None,
            timeout: None,
            method_spoofing: true,
            last_navigation: Arc::new(Mutex::new(None)),
        }
    }

    /// Authenticate requests with a bearer token.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send `PUT`/`DELETE` as real HTTP methods instead of spoofed `POST`s.
    pub fn native_methods(mut self) -> Self {
        self.method_spoofing = false;
        self
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// URL of the most recent navigation.
    pub fn last_navigation(&self) -> Option<Url> {
        self.last_navigation.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl CrudBackend for HttpBackend {
    fn navigate(&self, route: &str, id: &RecordId) -> Result<(), CrudError> {
        let resolved = self.routes.resolve(route, id)?;
        log::info!("Navigate {} {}", resolved.method.as_str(), resolved.url);
        if let Ok(mut guard) = self.last_navigation.lock() {
            *guard = Some(resolved.url);
        }
        Ok(())
    }

    async fn delete(&self, route: &str, id: &RecordId) -> Result<(), CrudError> {
        let resolved = self.routes.resolve(route, id)?;
        let spoof = self.method_spoofing && matches!(resolved.method, HttpMethod::Put | HttpMethod::Delete);

        log::debug!("{} {} (spoofed: {})", resolved.method.as_str(), resolved.url, spoof);

        let mut request = if spoof {
            self.http_client
                .post(resolved.url.clone())
                .form(&[("_method", resolved.method.as_str())])
        } else {
            self.http_client
                .request(resolved.method.into(), resolved.url.clone())
        };
        request = request.header(ACCEPT, "application/json");

        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            log::warn!("{} answered {}", resolved.url, status);
            Err(CrudError::Status {
                route: route.to_string(),
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_records_url() {
        let routes = RouteTable::new("https://roster.example").unwrap().resource("citizens");
        let backend = HttpBackend::new(routes);
        assert!(backend.last_navigation().is_none());

        backend.navigate("citizens.edit", &RecordId::Int(3)).unwrap();
        assert_eq!(
            backend.last_navigation().unwrap().as_str(),
            "https://roster.example/citizens/3/edit"
        );
    }

    #[test]
    fn test_navigate_unknown_route() {
        let backend = HttpBackend::new(RouteTable::new("https://roster.example").unwrap());
        assert!(matches!(
            backend.navigate("citizens.show", &RecordId::Int(3)),
            Err(CrudError::UnknownRoute(_))
        ));
    }

    #[test]
    fn test_builders_keep_routes() {
        let routes = RouteTable::new("https://roster.example").unwrap().resource("payments");
        let backend = HttpBackend::new(routes)
            .bearer_token("secret")
            .timeout(Duration::from_secs(5))
            .native_methods();
        assert!(backend.routes().get("payments.destroy").is_some());
        assert!(!backend.method_spoofing);
        assert_eq!(backend.bearer_token.as_deref(), Some("secret"));
    }
}
