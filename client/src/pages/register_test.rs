use super::*;

#[test]
fn validate_register_input_trims_name_and_email() {
    let registration = validate_register_input(" Ada ", " ada@library.org ", "secret").unwrap();
    assert_eq!(registration.name, "Ada");
    assert_eq!(registration.email, "ada@library.org");
    assert_eq!(registration.password, "secret");
}

#[test]
fn validate_register_input_requires_every_field() {
    let err = Err("Fill in name, email and password.");
    assert_eq!(validate_register_input("", "a@b.com", "pw"), err);
    assert_eq!(validate_register_input("Ada", "  ", "pw"), err);
    assert_eq!(validate_register_input("Ada", "a@b.com", ""), err);
}
