use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_accepts_wire_names() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_parse_is_case_sensitive() {
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("superuser"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_header_titles_match_dashboard_chrome() {
    assert_eq!(Role::Admin.header_title(), "Admin Management");
    assert_eq!(Role::Agent.header_title(), "Agent Management");
    assert_eq!(Role::User.header_title(), "User Management");
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), "\"agent\"");
}

// =============================================================
// SubjectId
// =============================================================

#[test]
fn subject_id_keeps_number_and_string_forms_apart() {
    let n: SubjectId = serde_json::from_str("7").unwrap();
    let s: SubjectId = serde_json::from_str("\"7\"").unwrap();
    assert_eq!(n, SubjectId::Number(7));
    assert_eq!(s, SubjectId::Text("7".to_owned()));
    assert_ne!(n, s);
    assert_eq!(n.to_string(), s.to_string());
}

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_has_any_role_checks_membership() {
    let identity = Identity {
        id: SubjectId::Number(1),
        role: Role::Agent,
        username: "alice".to_owned(),
    };
    assert!(identity.has_any_role(&[Role::Agent, Role::Admin]));
    assert!(!identity.has_any_role(&[Role::Admin]));
    assert!(!identity.has_any_role(&[]));
}
