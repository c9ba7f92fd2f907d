//! Consumed surface of the remote reservation service.

pub mod http;

use crate::errors::AppResult;
use crate::models::spot::{Spot, SpotId};
use crate::models::user::User;
use serde::Deserialize;
use std::collections::HashMap;

/// Payload returned by `/auth/login` and `/auth/register`.
/// `headers_to_use`, when present, must be merged into the default
/// headers of every subsequent request (session carried via custom
/// headers, not cookies).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    #[serde(default)]
    pub headers_to_use: Option<HashMap<String, String>>,
}

/// Client-side view of the reservation API. The session controller is
/// generic over this trait so the workflow can be exercised against a
/// stub without a network.
pub trait ParkingApi {
    fn login(&mut self, email: &str) -> AppResult<AuthPayload>;

    fn register(&mut self, email: &str, nom: &str, prenom: &str) -> AppResult<AuthPayload>;

    fn available_spots(&self, electrical_required: bool) -> AppResult<Vec<Spot>>;

    fn me(&self) -> AppResult<User>;

    /// `Some(spot)` reserves it for the current user, `None` cancels the
    /// current reservation. The server holds at most one association per
    /// user, so both mutations go through the same profile field.
    fn set_associated_spot(&self, spot: Option<&SpotId>) -> AppResult<User>;
}
