use super::*;

fn form() -> RegisterForm {
    RegisterForm {
        username: " alice ".to_owned(),
        email: " alice@example.com ".to_owned(),
        password: "pw".to_owned(),
        confirm_password: "pw".to_owned(),
        role: "agent".to_owned(),
    }
}

#[test]
fn validate_register_form_trims_and_parses_role() {
    let req = validate_register_form(&form()).unwrap();
    assert_eq!(req.username, "alice");
    assert_eq!(req.email, "alice@example.com");
    assert_eq!(req.password, "pw");
    assert_eq!(req.role, Role::Agent);
}

#[test]
fn validate_register_form_defaults_role_to_user() {
    let req = validate_register_form(&RegisterForm {
        role: String::new(),
        ..form()
    })
    .unwrap();
    assert_eq!(req.role, Role::User);
}

#[test]
fn validate_register_form_rejects_password_mismatch() {
    let result = validate_register_form(&RegisterForm {
        confirm_password: "other".to_owned(),
        ..form()
    });
    assert_eq!(result, Err("Passwords do not match"));
}

#[test]
fn validate_register_form_requires_fields() {
    let result = validate_register_form(&RegisterForm {
        email: "  ".to_owned(),
        ..form()
    });
    assert_eq!(result, Err("Fill in username, email, and password."));
}

#[test]
fn validate_register_form_rejects_unknown_role() {
    let result = validate_register_form(&RegisterForm {
        role: "owner".to_owned(),
        ..form()
    });
    assert_eq!(result, Err("Choose a valid role."));
}

#[test]
fn role_labels_are_capitalized() {
    assert_eq!(role_label(Role::User), "User");
    assert_eq!(role_label(Role::Admin), "Admin");
}
