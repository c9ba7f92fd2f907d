//! HTTP implementation of the reservation API contract.
//! JSON over HTTP with a bounded per-request timeout; no retries.

use super::{AuthPayload, ParkingApi};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::spot::{Spot, SpotId};
use crate::models::user::User;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

pub struct HttpApi {
    base_url: String,
    client: Client,
    /// Session headers issued by the auth endpoints, replayed on every
    /// request after login.
    auth_headers: HeaderMap,
}

impl HttpApi {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: cfg.api_url.trim_end_matches('/').to_string(),
            client,
            auth_headers: HeaderMap::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn merge_auth_headers(&mut self, headers: &HashMap<String, String>) -> AppResult<()> {
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| AppError::Auth(format!("invalid session header name '{key}'")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| AppError::Auth(format!("invalid session header value for '{key}'")))?;
            self.auth_headers.insert(name, value);
        }
        Ok(())
    }

    /// Deserialize a success body, or map the failure to an API error
    /// carrying the status and the server's `message` when it sent one.
    fn check<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json()?);
        }

        let message = response
            .json::<serde_json::Value>()
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl ParkingApi for HttpApi {
    fn login(&mut self, email: &str) -> AppResult<AuthPayload> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .headers(self.auth_headers.clone())
            .json(&json!({ "email": email }))
            .send()?;

        let payload: AuthPayload = Self::check(response)?;
        if let Some(headers) = &payload.headers_to_use {
            self.merge_auth_headers(headers)?;
        }
        Ok(payload)
    }

    fn register(&mut self, email: &str, nom: &str, prenom: &str) -> AppResult<AuthPayload> {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .headers(self.auth_headers.clone())
            .json(&json!({ "email": email, "nom": nom, "prenom": prenom }))
            .send()?;

        let payload: AuthPayload = Self::check(response)?;
        if let Some(headers) = &payload.headers_to_use {
            self.merge_auth_headers(headers)?;
        }
        Ok(payload)
    }

    fn available_spots(&self, electrical_required: bool) -> AppResult<Vec<Spot>> {
        let response = self
            .client
            .get(self.url("/spots/available"))
            .headers(self.auth_headers.clone())
            .query(&[("electrical_required", electrical_required)])
            .send()?;

        Self::check(response)
    }

    fn me(&self) -> AppResult<User> {
        let response = self
            .client
            .get(self.url("/users/me"))
            .headers(self.auth_headers.clone())
            .send()?;

        Self::check(response)
    }

    fn set_associated_spot(&self, spot: Option<&SpotId>) -> AppResult<User> {
        // None serializes to an explicit null, which is how the API
        // distinguishes "cancel" from "leave unchanged".
        let response = self
            .client
            .patch(self.url("/users/me"))
            .headers(self.auth_headers.clone())
            .json(&json!({ "spot_associe": spot.map(SpotId::as_str) }))
            .send()?;

        Self::check(response)
    }
}
