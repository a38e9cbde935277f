//! Absolute link generation for named routes

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::HOST, request::Parts},
};
use uuid::Uuid;

use crate::{constants::API_PREFIX, models::PageRequest, state::AppState};

/// Named routes that responses link to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /users/{id}`
    GetUser(Uuid),
    /// `PUT /users/{id}`
    UpdateUser(Uuid),
    /// `GET /users?pageNumber=&pageSize=`
    ListUsers(PageRequest),
}

/// Builds absolute URIs against the authority the request was addressed to
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new(scheme: &str, host: &str) -> Self {
        Self {
            base: format!("{}://{}{}", scheme, host.trim_end_matches('/'), API_PREFIX),
        }
    }

    pub fn uri_for(&self, route: Route) -> String {
        match route {
            Route::GetUser(id) | Route::UpdateUser(id) => format!("{}/users/{}", self.base, id),
            Route::ListUsers(page) => format!(
                "{}/users?pageNumber={}&pageSize={}",
                self.base, page.page_number, page.page_size
            ),
        }
    }
}

impl FromRequestParts<AppState> for LinkBuilder {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let links = &state.config().links;
        let host = parts
            .headers
            .get(HOST)
            .and_then(|h| h.to_str().ok())
            .filter(|h| !h.is_empty())
            .unwrap_or(links.fallback_host.as_str());

        Ok(LinkBuilder::new(&links.scheme, host))
    }
}
