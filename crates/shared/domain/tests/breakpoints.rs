use serde_json::json;
use vantage_domain::breakpoints::{Breakpoint, BreakpointState, Mutation};

#[test]
fn css_value_is_trimmed_and_unquoted() {
    assert_eq!(Breakpoint::from_css_value(Some("  \"small\" ")), "small");
    assert_eq!(Breakpoint::from_css_value(Some("large")), "large");
    assert_eq!(Breakpoint::from_css_value(Some("\"x-large\"\n")), "x-large");
}

#[test]
fn missing_or_empty_value_defaults_to_medium() {
    assert_eq!(Breakpoint::from_css_value(None), Breakpoint::DEFAULT);
    assert_eq!(Breakpoint::from_css_value(Some("")), "medium");
    assert_eq!(Breakpoint::from_css_value(Some("   ")), "medium");
    assert_eq!(Breakpoint::from_css_value(Some("\"\"")), "medium");
}

#[test]
fn mutations_serialize_as_keyed_actions() {
    let set = Mutation::SetBreakpoint(Breakpoint::new("small"));
    assert_eq!(set.key(), "breakpoints/SET_BREAKPOINT");
    assert_eq!(
        serde_json::to_value(&set).expect("serialize"),
        json!({ "type": "breakpoints/SET_BREAKPOINT", "payload": "small" })
    );

    let hover: Mutation =
        serde_json::from_value(json!({ "type": "breakpoints/SET_HAS_HOVER", "payload": true }))
            .expect("deserialize");
    assert_eq!(hover, Mutation::SetHasHover(true));
    assert_eq!(hover.key(), Mutation::SET_HAS_HOVER);
}

#[test]
fn state_reflects_latest_mutation_of_each_kind() {
    let mut state = BreakpointState::default();
    assert!(state.breakpoint.is_none());

    state.apply(&Mutation::SetBreakpoint(Breakpoint::new("small")));
    state.apply(&Mutation::SetHasHover(true));
    state.apply(&Mutation::SetBreakpoint(Breakpoint::new("large")));

    assert_eq!(state.breakpoint, Some(Breakpoint::new("large")));
    assert!(state.has_hover);
    assert_eq!(
        serde_json::to_value(&state).expect("serialize"),
        json!({ "breakpoint": "large", "hasHover": true })
    );
}
