//! Reservation session workflow.
//!
//! Owns the authenticated user and the reconciled reservation view, and
//! drives authenticate/load/reserve/cancel against the external API. No
//! optimistic local mutation: state changes apply only after the server
//! confirms, followed by a fresh load, so the local view never diverges
//! from the authoritative record.

use crate::api::ParkingApi;
use crate::core::availability::{self, SpotStatus};
use crate::errors::{AppError, AppResult};
use crate::models::reservation::{DateRange, Reservation};
use crate::models::spot::{Spot, SpotId};
use crate::models::user::User;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticating,
    Ready,
    Reserving,
    Cancelling,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Unauthenticated => "unauthenticated",
            SessionState::Authenticating => "authenticating",
            SessionState::Ready => "ready",
            SessionState::Reserving => "reserving",
            SessionState::Cancelling => "cancelling",
        }
    }
}

/// Reconciled view produced by `load_data`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedView {
    /// Raw spot records from the server.
    pub spots: Vec<Spot>,
    /// Known reservations: server windows plus the user's own entry.
    pub reservations: Vec<Reservation>,
    /// Per-spot resolution for the queried range.
    pub statuses: BTreeMap<SpotId, SpotStatus>,
    /// The user's single reservation, when one exists.
    pub my_reservation: Option<Reservation>,
}

pub struct Session<A: ParkingApi> {
    api: A,
    state: SessionState,
    user: Option<User>,
    view: ResolvedView,
}

impl<A: ParkingApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: SessionState::Unauthenticated,
            user: None,
            view: ResolvedView::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn view(&self) -> &ResolvedView {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Login with the given identity; a 401 falls back to a single
    /// registration attempt. Terminal failure leaves the session
    /// unauthenticated. One attempt per path, no retry loop.
    pub fn authenticate(&mut self, email: &str, nom: &str, prenom: &str) -> AppResult<()> {
        self.state = SessionState::Authenticating;

        let attempt = match self.api.login(email) {
            Err(AppError::Api { status: 401, .. }) => self.api.register(email, nom, prenom),
            other => other,
        };

        match attempt {
            Ok(payload) => {
                self.user = Some(payload.user);
                self.state = SessionState::Ready;
                Ok(())
            }
            Err(e) => {
                self.user = None;
                self.state = SessionState::Unauthenticated;
                Err(e)
            }
        }
    }

    /// Fetch available spots and the current profile, then reconcile the
    /// local view:
    /// - every non-free spot carrying a reservation window becomes a
    ///   reservation entry with an unknown owner;
    /// - a non-null `spot_associe` becomes the user's single synthetic
    ///   entry over the queried range (replacing any server window on the
    ///   same spot), flagged checked-in since the server keeps no
    ///   check-in state;
    /// - a null `spot_associe` clears the user's entry.
    ///
    /// Idempotent: reads and reconciles only, never mutates server state.
    pub fn load_data(&mut self, range: &DateRange, needs_electric: bool) -> AppResult<()> {
        if matches!(
            self.state,
            SessionState::Unauthenticated | SessionState::Authenticating
        ) {
            return Err(AppError::NotReady(self.state.as_str().to_string()));
        }

        let spots = self.api.available_spots(needs_electric)?;
        let me = self.api.me()?;

        let mut reservations: Vec<Reservation> = spots
            .iter()
            .filter(|s| !s.is_free)
            .filter_map(|s| {
                let (from, to) = s.window()?;
                Some(Reservation {
                    spot: s.id.clone(),
                    user_id: None,
                    range: DateRange::new(from, to),
                    checked_in: false,
                })
            })
            .collect();

        let mine = me.spot_associe.as_ref().map(|spot| Reservation {
            spot: spot.clone(),
            user_id: Some(me.id),
            range: *range,
            checked_in: true,
        });
        if let Some(own) = &mine {
            reservations.retain(|r| r.spot != own.spot);
            reservations.push(own.clone());
        }

        let statuses = availability::resolve(&reservations, range, needs_electric);

        self.user = Some(me);
        self.view = ResolvedView {
            spots,
            reservations,
            statuses,
            my_reservation: mine,
        };
        Ok(())
    }

    /// Reserve `spot` for `range`. Preconditions are checked locally
    /// before any request goes out: the user must have no associated spot
    /// and the resolver must mark the spot available for the range (the
    /// range itself was validated at the CLI boundary). The server
    /// enforces both again authoritatively.
    pub fn reserve(
        &mut self,
        spot: &SpotId,
        range: &DateRange,
        needs_electric: bool,
    ) -> AppResult<()> {
        self.ensure_ready()?;

        if let Some(user) = &self.user
            && let Some(existing) = &user.spot_associe
        {
            return Err(AppError::AlreadyReserved(existing.to_string()));
        }

        match self.view.statuses.get(spot) {
            Some(status) if status.available => {}
            _ => return Err(AppError::SpotUnavailable(spot.to_string())),
        }

        self.state = SessionState::Reserving;
        let outcome = self.api.set_associated_spot(Some(spot));
        self.finish_mutation(outcome, range, needs_electric)
    }

    /// Cancel the current reservation. The backend models at most one
    /// association per user, so there is no identifier to pass: the
    /// mutation clears `spot_associe`.
    pub fn cancel(&mut self, range: &DateRange, needs_electric: bool) -> AppResult<()> {
        self.ensure_ready()?;

        if self
            .user
            .as_ref()
            .and_then(|u| u.spot_associe.as_ref())
            .is_none()
        {
            return Err(AppError::NoReservation);
        }

        self.state = SessionState::Cancelling;
        let outcome = self.api.set_associated_spot(None);
        self.finish_mutation(outcome, range, needs_electric)
    }

    /// Shared tail of reserve/cancel: on success adopt the server's
    /// profile and re-load; on failure keep local state untouched so the
    /// user may retry. Either way the session returns to `Ready`.
    fn finish_mutation(
        &mut self,
        outcome: AppResult<User>,
        range: &DateRange,
        needs_electric: bool,
    ) -> AppResult<()> {
        let result = match outcome {
            Ok(user) => {
                self.user = Some(user);
                self.load_data(range, needs_electric)
            }
            Err(e) => Err(e),
        };
        self.state = SessionState::Ready;
        result
    }

    fn ensure_ready(&self) -> AppResult<()> {
        if self.state == SessionState::Ready {
            Ok(())
        } else {
            Err(AppError::NotReady(self.state.as_str().to_string()))
        }
    }
}
