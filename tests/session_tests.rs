use chrono::NaiveDate;
use parkspot::api::{AuthPayload, ParkingApi};
use parkspot::core::session::{Session, SessionState};
use parkspot::errors::{AppError, AppResult};
use parkspot::models::reservation::DateRange;
use parkspot::models::spot::{Spot, SpotId};
use parkspot::models::user::User;
use std::cell::{Cell, RefCell};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(day(start), day(end))
}

fn user(spot: Option<&str>) -> User {
    User {
        id: 7,
        email: "tester@example.com".to_string(),
        nom: "Tester".to_string(),
        prenom: "Tess".to_string(),
        roles: vec!["EMPLOYEE".to_string()],
        spot_associe: spot.map(|s| SpotId::parse(s).unwrap()),
    }
}

fn free_spot(id: &str) -> Spot {
    Spot {
        id: SpotId::parse(id).unwrap(),
        electrical: id.starts_with('A') || id.starts_with('F'),
        is_free: true,
        reserved_from: None,
        reserved_to: None,
    }
}

fn taken_spot(id: &str, from: &str, to: &str) -> Spot {
    Spot {
        id: SpotId::parse(id).unwrap(),
        electrical: id.starts_with('A') || id.starts_with('F'),
        is_free: false,
        reserved_from: Some(from.to_string()),
        reserved_to: Some(to.to_string()),
    }
}

/// In-memory API double: serves a fixed spot list and a mutable profile,
/// and counts mutation calls so tests can assert a request never left.
struct StubApi {
    user: RefCell<User>,
    spots: Vec<Spot>,
    login_status: Option<u16>,
    register_status: Option<u16>,
    mutation_status: Option<u16>,
    mutation_calls: Cell<usize>,
}

impl StubApi {
    fn new(user: User, spots: Vec<Spot>) -> Self {
        Self {
            user: RefCell::new(user),
            spots,
            login_status: None,
            register_status: None,
            mutation_status: None,
            mutation_calls: Cell::new(0),
        }
    }

    fn api_error(status: u16) -> AppError {
        AppError::Api {
            status,
            message: "stub".to_string(),
        }
    }
}

impl ParkingApi for StubApi {
    fn login(&mut self, _email: &str) -> AppResult<AuthPayload> {
        match self.login_status {
            Some(status) => Err(Self::api_error(status)),
            None => Ok(AuthPayload {
                user: self.user.borrow().clone(),
                headers_to_use: None,
            }),
        }
    }

    fn register(&mut self, _email: &str, _nom: &str, _prenom: &str) -> AppResult<AuthPayload> {
        match self.register_status {
            Some(status) => Err(Self::api_error(status)),
            None => Ok(AuthPayload {
                user: self.user.borrow().clone(),
                headers_to_use: None,
            }),
        }
    }

    fn available_spots(&self, _electrical_required: bool) -> AppResult<Vec<Spot>> {
        Ok(self.spots.clone())
    }

    fn me(&self) -> AppResult<User> {
        Ok(self.user.borrow().clone())
    }

    fn set_associated_spot(&self, spot: Option<&SpotId>) -> AppResult<User> {
        self.mutation_calls.set(self.mutation_calls.get() + 1);
        if let Some(status) = self.mutation_status {
            return Err(Self::api_error(status));
        }
        self.user.borrow_mut().spot_associe = spot.cloned();
        Ok(self.user.borrow().clone())
    }
}

fn ready_session(api: StubApi) -> Session<StubApi> {
    let mut session = Session::new(api);
    session
        .authenticate("tester@example.com", "Tester", "Tess")
        .unwrap();
    session
}

#[test]
fn authenticate_falls_back_to_register_on_401() {
    let mut api = StubApi::new(user(None), vec![]);
    api.login_status = Some(401);

    let mut session = Session::new(api);
    session
        .authenticate("tester@example.com", "Tester", "Tess")
        .unwrap();

    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.user().is_some());
}

#[test]
fn authenticate_non_401_failure_does_not_register() {
    let mut api = StubApi::new(user(None), vec![]);
    api.login_status = Some(500);
    // registration would succeed, but must not be attempted
    api.register_status = None;

    let mut session = Session::new(api);
    let err = session
        .authenticate("tester@example.com", "Tester", "Tess")
        .unwrap_err();

    assert!(matches!(err, AppError::Api { status: 500, .. }));
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert!(session.user().is_none());
}

#[test]
fn authenticate_terminal_failure_leaves_unauthenticated() {
    let mut api = StubApi::new(user(None), vec![]);
    api.login_status = Some(401);
    api.register_status = Some(409);

    let mut session = Session::new(api);
    assert!(
        session
            .authenticate("tester@example.com", "Tester", "Tess")
            .is_err()
    );
    assert_eq!(session.state(), SessionState::Unauthenticated);

    // mutations are rejected while unauthenticated
    let q = range("2024-06-01", "2024-06-01");
    let err = session.load_data(&q, false).unwrap_err();
    assert!(matches!(err, AppError::NotReady(_)));
}

#[test]
fn load_data_is_idempotent() {
    let api = StubApi::new(user(Some("B05")), vec![free_spot("A01"), free_spot("B01")]);
    let mut session = ready_session(api);
    let q = range("2024-06-01", "2024-06-03");

    session.load_data(&q, false).unwrap();
    let first = session.view().clone();

    session.load_data(&q, false).unwrap();
    let second = session.view().clone();

    assert_eq!(first, second);
}

#[test]
fn load_data_reconciles_associated_spot_into_single_entry() {
    let api = StubApi::new(user(Some("B05")), vec![free_spot("A01")]);
    let mut session = ready_session(api);
    let q = range("2024-06-01", "2024-06-03");

    session.load_data(&q, false).unwrap();

    let view = session.view();
    let mine = view.my_reservation.as_ref().expect("reservation expected");
    assert_eq!(mine.spot, SpotId::parse("B05").unwrap());
    assert_eq!(mine.range, q);
    assert!(mine.checked_in);
    assert_eq!(mine.user_id, Some(7));

    let b05 = &view.statuses[&SpotId::parse("B05").unwrap()];
    assert!(b05.reserved);
    assert!(!b05.available);
}

#[test]
fn load_data_clears_entry_when_no_associated_spot() {
    let api = StubApi::new(user(None), vec![free_spot("A01")]);
    let mut session = ready_session(api);
    let q = range("2024-06-01", "2024-06-03");

    session.load_data(&q, false).unwrap();

    assert!(session.view().my_reservation.is_none());
    assert!(session.view().statuses.values().all(|s| !s.reserved));
}

#[test]
fn load_data_turns_server_windows_into_reservations() {
    let api = StubApi::new(
        user(None),
        vec![taken_spot("C07", "2024-06-02", "2024-06-04"), free_spot("C08")],
    );
    let mut session = ready_session(api);

    session.load_data(&range("2024-06-01", "2024-06-03"), false).unwrap();
    let c07 = &session.view().statuses[&SpotId::parse("C07").unwrap()];
    assert!(c07.reserved);

    // window outside the queried range does not block
    session.load_data(&range("2024-06-10", "2024-06-12"), false).unwrap();
    let c07 = &session.view().statuses[&SpotId::parse("C07").unwrap()];
    assert!(!c07.reserved);
}

#[test]
fn reserve_is_blocked_locally_when_a_reservation_exists() {
    let api = StubApi::new(user(Some("B05")), vec![free_spot("A01")]);
    let mut session = ready_session(api);
    let q = range("2024-06-01", "2024-06-01");
    session.load_data(&q, false).unwrap();

    let err = session
        .reserve(&SpotId::parse("A01").unwrap(), &q, false)
        .unwrap_err();

    assert!(matches!(err, AppError::AlreadyReserved(_)));
    // the precondition fails locally: no request may have left
    assert_eq!(session.api().mutation_calls.get(), 0);
}

#[test]
fn reserve_rejects_unavailable_spot_without_calling_api() {
    let api = StubApi::new(
        user(None),
        vec![taken_spot("A01", "2024-06-01", "2024-06-05")],
    );
    let mut session = ready_session(api);
    let q = range("2024-06-02", "2024-06-03");
    session.load_data(&q, false).unwrap();

    let err = session
        .reserve(&SpotId::parse("A01").unwrap(), &q, false)
        .unwrap_err();

    assert!(matches!(err, AppError::SpotUnavailable(_)));
    assert_eq!(session.api().mutation_calls.get(), 0);
}

#[test]
fn reserve_success_reloads_and_marks_the_spot() {
    let api = StubApi::new(user(None), vec![free_spot("A01")]);
    let mut session = ready_session(api);
    let q = range("2024-06-01", "2024-06-02");
    session.load_data(&q, false).unwrap();

    session
        .reserve(&SpotId::parse("A01").unwrap(), &q, false)
        .unwrap();

    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.api().mutation_calls.get(), 1);

    let view = session.view();
    let mine = view.my_reservation.as_ref().expect("reservation expected");
    assert_eq!(mine.spot, SpotId::parse("A01").unwrap());
    assert!(!view.statuses[&SpotId::parse("A01").unwrap()].available);
}

#[test]
fn reserve_failure_leaves_local_state_unchanged() {
    let mut api = StubApi::new(user(None), vec![free_spot("A01")]);
    api.mutation_status = Some(500);

    let mut session = ready_session(api);
    let q = range("2024-06-01", "2024-06-02");
    session.load_data(&q, false).unwrap();
    let before = session.view().clone();

    let err = session
        .reserve(&SpotId::parse("A01").unwrap(), &q, false)
        .unwrap_err();

    assert!(matches!(err, AppError::Api { status: 500, .. }));
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.view(), &before);
    assert!(session.user().unwrap().spot_associe.is_none());
}

#[test]
fn cancel_without_reservation_is_rejected_locally() {
    let api = StubApi::new(user(None), vec![free_spot("A01")]);
    let mut session = ready_session(api);
    let q = range("2024-06-01", "2024-06-01");
    session.load_data(&q, false).unwrap();

    let err = session.cancel(&q, false).unwrap_err();

    assert!(matches!(err, AppError::NoReservation));
    assert_eq!(session.api().mutation_calls.get(), 0);
}

#[test]
fn cancel_success_clears_the_reservation() {
    let api = StubApi::new(user(Some("B05")), vec![free_spot("A01")]);
    let mut session = ready_session(api);
    let q = range("2024-06-01", "2024-06-01");
    session.load_data(&q, false).unwrap();

    session.cancel(&q, false).unwrap();

    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.view().my_reservation.is_none());
    assert!(session.user().unwrap().spot_associe.is_none());
}
