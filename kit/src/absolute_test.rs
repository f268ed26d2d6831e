use super::*;

#[test]
fn fill_pins_every_edge() {
    assert_eq!(
        absolute_style(Offsets::fill(), None),
        "position: absolute; top: 0px; left: 0px; right: 0px; bottom: 0px"
    );
}

#[test]
fn unset_edges_are_omitted() {
    let offsets = Offsets { top: Some(12.5), ..Offsets::default() };
    assert_eq!(absolute_style(offsets, None), "position: absolute; top: 12.5px");
}

#[test]
fn extra_style_is_appended_without_trailing_semicolon() {
    let style = absolute_style(Offsets::fill(), Some(" background: white; "));
    assert!(style.ends_with("; background: white"));
}

#[test]
fn blank_extra_style_is_ignored() {
    assert_eq!(absolute_style(Offsets::default(), Some("  ")), "position: absolute");
}

#[test]
fn explicit_edges_override_the_base() {
    let offsets = Offsets { top: Some(40.0), ..Offsets::default() }.or(Offsets::fill());
    assert_eq!(offsets.top, Some(40.0));
    assert_eq!(offsets.bottom, Some(0.0));
    assert_eq!(Offsets::default().or(Offsets::default()), Offsets::default());
}
