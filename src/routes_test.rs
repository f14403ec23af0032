use super::*;

#[test]
fn root_and_trailing_slash_are_dashboard() {
    assert_eq!(Route::parse("/"), Some(Route::Dashboard));
    assert_eq!(Route::parse(""), Some(Route::Dashboard));
    assert_eq!(Route::parse("/students/"), Some(Route::Students));
}

#[test]
fn specific_student_routes_win_over_id() {
    assert_eq!(Route::parse("/students/add"), Some(Route::AddStudent));
    assert_eq!(Route::parse("/students/delete/42"), Some(Route::DeleteStudent("42".to_owned())));
    assert_eq!(Route::parse("/students/42"), Some(Route::EditStudent("42".to_owned())));
}

#[test]
fn query_string_is_ignored() {
    assert_eq!(Route::parse("/login?next=/students"), Some(Route::Login));
}

#[test]
fn unknown_paths_do_not_match() {
    assert_eq!(Route::parse("/books/7/loans"), None);
    assert_eq!(Route::parse("/students/delete"), Some(Route::EditStudent("delete".to_owned())));
}

#[test]
fn only_login_and_register_are_public() {
    assert!(!Route::Login.requires_auth());
    assert!(!Route::Register.requires_auth());
    assert!(Route::Dashboard.requires_auth());
    assert!(Route::AddBooks.requires_auth());
    assert!(Route::EditStudent("1".to_owned()).requires_auth());
}

#[test]
fn path_round_trips_through_parse() {
    for route in [Route::Students, Route::DeleteStudent("9".to_owned()), Route::AddBooks] {
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}
