use super::*;
use crate::state::auth::{AuthAction, AuthUser};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::AtomicUsize;

fn recorder(store: &Store) -> (Arc<Mutex<Vec<bool>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = store.subscribe(move |state| lock(&sink).push(state.auth.loading));
    (seen, sub)
}

#[test]
fn store_starts_with_default_state() {
    let store = Store::default();
    assert!(store.state().auth.loading);
    assert!(store.state().focal.message.is_none());
}

#[test]
fn dispatch_folds_actions_in_order() {
    let store = Store::default();
    store.dispatch(AuthAction::authenticate_start());
    store.dispatch(AuthAction::unauthenticate_start());
    store.dispatch(AuthAction::authenticate_success(AuthUser::new("1")));

    let state = store.state();
    assert!(!state.auth.loading);
    assert_eq!(state.auth.user.as_deref(), Some(&AuthUser::new("1")));
}

#[test]
fn subscribers_only_see_changes() {
    let store = Store::default();
    let (seen, _sub) = recorder(&store);

    store.dispatch(AuthAction::listening());
    store.dispatch(AuthAction::unauthenticate_success());
    store.dispatch(AuthAction::listening());

    assert_eq!(*lock(&seen), vec![false]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let store = Store::default();
    let (seen, sub) = recorder(&store);
    store.dispatch(AuthAction::unauthenticate_success());
    sub.unsubscribe();
    store.dispatch(AuthAction::authenticate_start());

    assert_eq!(lock(&seen).len(), 1);
}

#[test]
fn forgotten_subscription_keeps_delivering() {
    let store = Store::default();
    let (seen, sub) = recorder(&store);
    sub.forget();
    store.dispatch(AuthAction::unauthenticate_success());
    store.dispatch(AuthAction::authenticate_start());

    assert_eq!(*lock(&seen), vec![false, true]);
}

#[test]
fn reentrant_dispatch_is_queued_after_current_action() {
    let store = Store::default();
    let dispatcher = store.dispatcher();
    let order = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&order);
    let fired = Arc::new(AtomicUsize::new(0));
    let once = Arc::clone(&fired);

    store
        .subscribe(move |state| {
            lock(&log).push(state.auth.loading);
            if once.fetch_add(1, Ordering::SeqCst) == 0 {
                dispatcher.dispatch(AuthAction::authenticate_start());
            }
        })
        .forget();

    store.dispatch(AuthAction::unauthenticate_success());

    assert_eq!(*lock(&order), vec![false, true]);
    assert!(store.state().auth.loading);
}

#[test]
fn dispatcher_reaches_the_store() {
    let store = Store::default();
    store.dispatcher().dispatch(AuthAction::unauthenticate_success());
    assert!(!store.state().auth.loading);
}

#[test]
fn dispatcher_outliving_store_is_harmless() {
    let dispatcher = Store::default().dispatcher();
    dispatcher.dispatch(AuthAction::authenticate_start());
}

#[test]
fn dispatcher_is_a_status_sink() {
    let store = Store::default();
    StatusSink::set(&store.dispatcher(), "Signing in...");
    assert_eq!(store.state().focal.message.as_deref(), Some("Signing in..."));

    StatusSink::clear(&store.dispatcher());
    assert!(store.state().focal.message.is_none());
}

#[test]
fn panicking_subscriber_does_not_stall_later_dispatches() {
    let store = Store::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    store
        .subscribe(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("subscriber failed");
            }
        })
        .forget();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        store.dispatch(AuthAction::unauthenticate_success());
    }));
    assert!(outcome.is_err());
    assert!(!store.state().auth.loading);

    store.dispatch(AuthAction::authenticate_start());
    assert!(store.state().auth.loading);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn actions_queued_before_a_panic_are_applied_by_the_next_dispatch() {
    let store = Store::default();
    let dispatcher = store.dispatcher();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    store
        .subscribe(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                dispatcher.dispatch(AuthAction::authenticate_success(AuthUser::new("u1")));
                panic!("subscriber failed");
            }
        })
        .forget();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        store.dispatch(AuthAction::authenticate_start());
    }));
    assert!(outcome.is_err());
    assert!(store.state().auth.user.is_none());

    store.dispatch(AuthAction::listening());
    assert_eq!(store.state().auth.user.as_deref(), Some(&AuthUser::new("u1")));
}
