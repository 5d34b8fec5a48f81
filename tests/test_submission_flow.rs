//! State-machine tests for repeated submissions and edits between them.

use contact_form::{ContactFields, DisplayState, Field, SubmitOutcome};

mod fixtures;
use fixtures::*;

#[test]
fn test_repeated_valid_submissions_are_idempotent() {
    let mut form = render_form();
    fill_valid_required(&mut form);

    let first = click_submit(&mut form);
    let first_view = form.view();
    let second = click_submit(&mut form);

    assert_eq!(first, second);
    assert_eq!(first_view, form.view());
    assert!(form.view().query_all_by_test_id("error").is_empty());
}

#[test]
fn test_repeated_invalid_submissions_do_not_duplicate_errors() {
    let mut form = render_form();

    click_submit(&mut form);
    click_submit(&mut form);
    click_submit(&mut form);

    assert_eq!(form.view().query_all_by_test_id("error").len(), 3);
}

#[test]
fn test_errors_do_not_go_stale_between_attempts() {
    let mut form = render_form_on_submit();
    click_submit(&mut form);
    assert_eq!(form.errors().len(), 3);

    type_into(&mut form, "first name", "firstname");
    // nothing changes until the next submit
    assert_eq!(form.errors().len(), 3);

    click_submit(&mut form);
    assert!(form.errors().get(Field::FirstName).is_none());
    assert_eq!(form.errors().len(), 2);
}

#[test]
fn test_edits_after_success_do_not_touch_summary() {
    let mut form = render_form();
    fill_valid_required(&mut form);
    click_submit(&mut form);

    type_into(&mut form, "first name", "-edited");
    assert_eq!(form.fields().first_name, "firstname-edited");

    let view = form.view();
    assert!(view.query_by_text("firstname").is_some());
    assert!(view.query_by_text("firstname-edited").is_none());
    assert_eq!(form.state(), DisplayState::Valid);
}

#[test]
fn test_failed_resubmit_keeps_previous_summary() {
    let mut form = render_form();
    fill_valid_required(&mut form);
    click_submit(&mut form);

    form.on_change(Field::Email, "");
    let outcome = click_submit(&mut form);

    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(form.state(), DisplayState::Invalid);

    let view = form.view();
    assert_eq!(view.error_messages(), vec!["email is a required field"]);
    assert_eq!(
        view.get_by_test_id("emailDisplay").unwrap().text(),
        "test@test.com"
    );
}

#[test]
fn test_new_success_replaces_snapshot() {
    let mut form = render_form();
    fill_valid_required(&mut form);
    click_submit(&mut form);

    form.on_change(Field::Message, "hello there");
    form.on_change(Field::Email, "other@example.org");
    click_submit(&mut form);

    let snapshot = form.snapshot().expect("snapshot after success");
    assert_eq!(snapshot.email(), "other@example.org");
    assert_eq!(snapshot.message(), Some("hello there"));
    assert_eq!(
        form.view().get_by_test_id("messageDisplay").unwrap().text(),
        "hello there"
    );
}

#[test]
fn test_submitted_values_match_fields_at_submit_time() {
    let mut form = render_form();
    fill_valid_required(&mut form);

    let outcome = click_submit(&mut form);
    form.on_change(Field::LastName, "changed-later");

    match outcome {
        SubmitOutcome::Valid(snapshot) => {
            let expected = ContactFields::new("firstname", "lastname", "test@test.com", "");
            for field in Field::ALL {
                assert_eq!(snapshot.get(field), expected.get(field));
            }
        }
        other => panic!("Expected Valid outcome, got: {:?}", other),
    }
}

#[test]
fn test_typing_tracks_each_field_independently() {
    let mut form = render_form();

    type_into(&mut form, "first name", "word");
    type_into(&mut form, "email", "test@test");
    assert_eq!(
        form.view().error_messages(),
        vec![
            "firstName must have at least 5 characters",
            "email must be a valid email address"
        ]
    );

    type_into(&mut form, "email", ".com");
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.state(), DisplayState::Idle);
}
