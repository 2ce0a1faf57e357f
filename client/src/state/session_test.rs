use super::*;

fn claims(sub: &str) -> UserClaims {
    UserClaims {
        sub: sub.to_owned(),
        ..UserClaims::default()
    }
}

// =============================================================
// Session defaults
// =============================================================

#[test]
fn session_default_is_logged_out() {
    let session = Session::default();
    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert!(!session.is_authenticated());
}

// =============================================================
// set_credentials / logout
// =============================================================

#[test]
fn set_credentials_populates_every_field() {
    let mut session = Session::default();
    session.set_credentials("tok".to_owned(), Some(claims("u1")));
    assert_eq!(session.token(), Some("tok"));
    assert_eq!(session.user().map(|u| u.sub.as_str()), Some("u1"));
    assert!(session.is_authenticated());
}

#[test]
fn set_credentials_replaces_previous_user() {
    let mut session = Session::default();
    session.set_credentials("a".to_owned(), Some(claims("u1")));
    session.set_credentials("b".to_owned(), None);
    assert_eq!(session.token(), Some("b"));
    assert!(session.user().is_none());
    assert!(session.is_authenticated());
}

#[test]
fn logout_always_yields_empty_session() {
    let mut fresh = Session::default();
    fresh.logout();
    assert_eq!(fresh, Session::default());

    let mut populated = Session::default();
    populated.set_credentials("tok".to_owned(), Some(claims("u1")));
    populated.logout();
    assert!(populated.token().is_none());
    assert!(populated.user().is_none());
    assert!(!populated.is_authenticated());
}

#[test]
fn user_id_reads_sub_claim() {
    let mut session = Session::default();
    assert_eq!(session.user_id(), None);
    session.set_credentials("tok".to_owned(), Some(claims("kc-1")));
    assert_eq!(session.user_id(), Some("kc-1"));
}

#[test]
fn user_id_ignores_empty_sub() {
    let mut session = Session::default();
    session.set_credentials("tok".to_owned(), Some(claims("")));
    assert_eq!(session.user_id(), None);
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn refcell_store_round_trips_through_trait() {
    let store = RefCell::new(Session::default());
    store.set_credentials("tok".to_owned(), None);
    assert!(store.snapshot().is_authenticated());
    store.logout();
    assert_eq!(store.snapshot(), Session::default());
}

#[test]
fn rc_store_shares_state() {
    let store = Rc::new(RefCell::new(Session::default()));
    let writer = Rc::clone(&store);
    writer.set_credentials("tok".to_owned(), None);
    assert_eq!(store.snapshot().token(), Some("tok"));
}

// =============================================================
// RwSignal store
// =============================================================

#[test]
fn signal_store_follows_bridge_deliveries() {
    let owner = Owner::new();
    owner.set();

    let store = RwSignal::new(Session::default());
    store.set_credentials("tok".to_owned(), Some(claims("u1")));
    assert_eq!(store.snapshot().user_id(), Some("u1"));
    store.logout();
    assert_eq!(store.snapshot(), Session::default());

    let bridge = crate::auth::bridge::AuthBridge::new(store);
    bridge.observe(&crate::auth::source::Credentials::new("jwt".to_owned(), Some(claims("u2"))));
    assert_eq!(store.snapshot().token(), Some("jwt"));
    assert!(store.snapshot().is_authenticated());

    bridge.observe(&crate::auth::source::Credentials::default());
    assert_eq!(store.snapshot(), Session::default());
}

#[test]
fn disposed_signal_store_ignores_writes() {
    let owner = Owner::new();
    owner.set();

    let store = RwSignal::new(Session::default());
    store.set_credentials("tok".to_owned(), None);
    store.dispose();

    store.set_credentials("late".to_owned(), Some(claims("u1")));
    store.logout();
    assert_eq!(store.snapshot(), Session::default());
}
