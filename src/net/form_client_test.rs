use futures::executor::block_on;
use futures::future::{pending, ready};

use super::*;

#[test]
fn rejection_with_field_errors() {
    let err = classify_rejection(
        422,
        r#"{"errors":[{"message":"Invalid email"},{"message":"Required field"}]}"#,
    );
    assert_eq!(
        err,
        FormError::Rejected(vec!["Invalid email".to_owned(), "Required field".to_owned()])
    );
}

#[test]
fn rejection_without_error_list_is_empty_rejection() {
    assert_eq!(classify_rejection(500, "{}"), FormError::Rejected(Vec::new()));
}

#[test]
fn non_json_rejection_is_malformed() {
    let err = classify_rejection(502, "<html>Bad Gateway</html>");
    assert!(matches!(err, FormError::MalformedResponse(ref m) if m.starts_with("status 502")));
}

#[test]
fn work_wins_race_against_idle_deadline() {
    let result = block_on(race_deadline(ready(Ok(7)), pending::<()>()));
    assert_eq!(result, Ok(7));
}

#[test]
fn deadline_wins_race_against_hung_request() {
    let result: Result<(), FormError> = block_on(race_deadline(pending(), ready(())));
    assert_eq!(result, Err(FormError::Timeout));
}

#[test]
fn work_errors_pass_through_race() {
    let result: Result<(), FormError> =
        block_on(race_deadline(ready(Err(FormError::Network("offline".to_owned()))), pending::<()>()));
    assert_eq!(result, Err(FormError::Network("offline".to_owned())));
}

#[test]
fn rejected_display_joins_messages() {
    let err = FormError::Rejected(vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(err.to_string(), "submission rejected: a, b");
}
