use super::*;
use std::cell::Cell;
use std::rc::Rc;

fn counting() -> (Rc<Cell<u32>>, Subscription) {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let sub = Subscription::new(move || seen.set(seen.get() + 1));
    (calls, sub)
}

#[test]
fn unsubscribe_runs_teardown_once() {
    let (calls, sub) = counting();
    sub.unsubscribe();
    assert_eq!(calls.get(), 1);
}

#[test]
fn drop_runs_teardown() {
    let (calls, sub) = counting();
    drop(sub);
    assert_eq!(calls.get(), 1);
}

#[test]
fn forget_skips_teardown() {
    let (calls, sub) = counting();
    sub.forget();
    assert_eq!(calls.get(), 0);
}

#[test]
fn debug_reports_whether_teardown_is_pending() {
    let (_calls, sub) = counting();
    assert_eq!(format!("{sub:?}"), "Subscription { active: true }");
    sub.forget();
}
