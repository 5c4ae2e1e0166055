use super::*;

#[test]
fn finite_values_pass() {
    ensure_finite("x", 0.0).unwrap();
    ensure_finite("x", -12.5).unwrap();
}

#[test]
fn non_finite_values_are_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = ensure_finite("base_delay", v).unwrap_err();
        assert!(matches!(err, TriAnimError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("base_delay"));
    }
}

#[test]
fn identifiers_allow_word_chars_and_dashes() {
    ensure_ident("id", "tri_anim").unwrap();
    ensure_ident("id", "clock-2").unwrap();
}

#[test]
fn identifiers_reject_markup_breaking_input() {
    assert!(ensure_ident("id", "").is_err());
    assert!(ensure_ident("id", "a\"b").is_err());
    assert!(ensure_ident("id", "a b").is_err());
    assert!(ensure_ident("id", "}}").is_err());
}
