use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Doc {
    body: Option<Arc<String>>,
    dirty: bool,
}

fn body(doc: &Doc) -> Option<Arc<String>> {
    doc.body.clone()
}

fn dirty(doc: &Doc) -> bool {
    doc.dirty
}

fn counted_len(calls: &Arc<AtomicUsize>) -> Selector<Doc, Option<Arc<String>>, usize> {
    let calls = Arc::clone(calls);
    Selector::new(body, move |body: &Option<Arc<String>>| {
        calls.fetch_add(1, Ordering::SeqCst);
        body.as_ref().map_or(0, |b| b.len())
    })
}

#[test]
fn same_arc_input_reuses_cached_output() {
    let calls = Arc::new(AtomicUsize::new(0));
    let selector = counted_len(&calls);
    let doc = Doc { body: Some(Arc::new("hello".to_owned())), dirty: false };

    assert_eq!(selector.select(&doc), 5);
    assert_eq!(selector.select(&doc), 5);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn equal_value_in_new_arc_recomputes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let selector = counted_len(&calls);
    let first = Doc { body: Some(Arc::new("abc".to_owned())), dirty: false };
    let second = Doc { body: Some(Arc::new("abc".to_owned())), dirty: false };

    selector.select(&first);
    selector.select(&second);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn none_to_none_is_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let selector = counted_len(&calls);
    let doc = Doc { body: None, dirty: false };

    assert_eq!(selector.select(&doc), 0);
    assert_eq!(selector.select(&Doc { body: None, dirty: true }), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn scalar_inputs_compare_by_value() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let selector = Selector::new(dirty, move |d: &bool| {
        seen.fetch_add(1, Ordering::SeqCst);
        if *d { "unsaved" } else { "saved" }
    });

    assert_eq!(selector.select(&Doc { body: None, dirty: true }), "unsaved");
    assert_eq!(selector.select(&Doc { body: None, dirty: true }), "unsaved");
    assert_eq!(selector.select(&Doc { body: None, dirty: false }), "saved");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
