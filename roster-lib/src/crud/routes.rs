//! Named resource routes (`citizens.show` → `GET /citizens/{id}`).

use std::collections::BTreeMap;

use url::Url;

use crate::error::CrudError;
use crate::model::RecordId;

/// HTTP method of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A route pattern. `{id}` is replaced by the entity id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
}

/// A route resolved against the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub method: HttpMethod,
    pub url: Url,
}

/// Route names mapped to method and path.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base: Url,
    routes: BTreeMap<String, Route>,
}

impl RouteTable {
    /// Empty table resolving against `base` (`https://roster.example/`).
    pub fn new(base: &str) -> Result<Self, CrudError> {
        let mut base = Url::parse(base).map_err(|source| CrudError::Url {
            route: "<base>".to_string(),
            source,
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            routes: BTreeMap::new(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Register a single route.
    pub fn route(mut self, name: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        self.routes.insert(
            name.into(),
            Route {
                method,
                path: path.into(),
            },
        );
        self
    }

    /// Register the seven resource routes for `name`.
    ///
    /// Dots in the name become path segments, so `admin.users` maps to
    /// `/admin/users`.
    pub fn resource(self, name: &str) -> Self {
        let path = name.replace('.', "/");
        self.route(format!("{}.index", name), HttpMethod::Get, path.clone())
            .route(format!("{}.create", name), HttpMethod::Get, format!("{}/create", path))
            .route(format!("{}.store", name), HttpMethod::Post, path.clone())
            .route(format!("{}.show", name), HttpMethod::Get, format!("{}/{{id}}", path))
            .route(format!("{}.edit", name), HttpMethod::Get, format!("{}/{{id}}/edit", path))
            .route(format!("{}.update", name), HttpMethod::Put, format!("{}/{{id}}", path))
            .route(format!("{}.destroy", name), HttpMethod::Delete, format!("{}/{{id}}", path))
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Resolve a route name for an entity id.
    pub fn resolve(&self, name: &str, id: &RecordId) -> Result<ResolvedRoute, CrudError> {
        let route = self
            .routes
            .get(name)
            .ok_or_else(|| CrudError::UnknownRoute(name.to_string()))?;

        let id = id.to_string();
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| CrudError::Url {
                route: name.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?;
            segments.pop_if_empty();
            // Path-segment encoding: a space becomes %20, a slash %2F
            for segment in route.path.split('/').filter(|s| !s.is_empty()) {
                segments.push(if segment == "{id}" { id.as_str() } else { segment });
            }
        }

        Ok(ResolvedRoute {
            method: route.method,
            url,
        })
    }
}
