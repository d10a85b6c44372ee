use services::FormIntent;

use super::test_harness::{drive, new_session, setup_app_harness, setup_page_harness};

#[test]
fn app_smoke_renders_selector_without_form() {
    let mut harness = setup_app_harness(None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Dynamic Form"), "missing header in {html}");
    assert!(html.contains("Select Form Type:"), "missing selector in {html}");
    assert!(html.contains("--Select--"), "missing sentinel in {html}");
    for form_type in ["User Information", "Address Information", "Payment Information"] {
        assert!(html.contains(form_type), "missing {form_type} in {html}");
    }
    assert!(!html.contains("submit-btn"), "form should be hidden in {html}");
    assert!(!html.contains("Submitted Data"), "table should be hidden in {html}");
    assert!(html.contains("2024 Dynamic Form Inc."), "missing footer in {html}");
}

#[test]
fn app_smoke_preselects_configured_form() {
    let mut harness = setup_app_harness(Some("User Information"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("First Name:"), "missing field label in {html}");
    assert!(html.contains("Last Name:"), "missing field label in {html}");
    assert!(html.contains("number"), "missing number input in {html}");
    assert!(html.contains("submit-btn"), "missing submit button in {html}");
    assert!(html.contains("width: 0%"), "missing empty progress in {html}");
}

#[test]
fn app_smoke_surfaces_unknown_form_type() {
    let mut harness = setup_app_harness(Some("Shipping"));
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("unknown form type: Shipping"),
        "missing error notice in {html}"
    );
    assert!(!html.contains("submit-btn"), "form should be hidden in {html}");
}

#[test]
fn page_smoke_renders_inline_errors_and_progress() {
    let mut session = new_session();
    drive(
        &mut session,
        [
            FormIntent::select("User Information"),
            FormIntent::set_field("firstName", "Ada"),
            FormIntent::Submit,
        ],
    );

    let mut harness = setup_page_harness(session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Last Name is required."), "missing error in {html}");
    assert!(!html.contains("First Name is required."), "unexpected error in {html}");
    assert!(html.contains("Ada"), "missing entered value in {html}");
    assert!(html.contains("width: 50%"), "missing progress in {html}");
    assert!(html.contains("blue"), "missing incomplete color in {html}");
}

#[test]
fn page_smoke_renders_dropdown_options() {
    let mut session = new_session();
    drive(&mut session, [FormIntent::select("Address Information")]);

    let mut harness = setup_page_harness(session);
    harness.rebuild();
    let html = harness.render();

    for option in ["California", "Texas", "New York"] {
        assert!(html.contains(option), "missing {option} in {html}");
    }
    assert!(html.contains("Zip Code:"), "missing optional field in {html}");
}

#[test]
fn page_smoke_renders_grouped_submissions() {
    let mut session = new_session();
    drive(
        &mut session,
        [
            FormIntent::select("User Information"),
            FormIntent::set_field("firstName", "Ada"),
            FormIntent::set_field("lastName", "Lovelace"),
            FormIntent::Submit,
            FormIntent::select("Address Information"),
            FormIntent::set_field("street", "1 Main St"),
            FormIntent::set_field("city", "Austin"),
            FormIntent::set_field("state", "Texas"),
            FormIntent::Submit,
        ],
    );

    let mut harness = setup_page_harness(session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Submitted Data"), "missing table in {html}");
    assert!(
        html.contains("Form submitted successfully!"),
        "missing notice in {html}"
    );
    assert!(html.contains("firstName"), "missing user header in {html}");
    assert!(html.contains("street"), "missing address header in {html}");
    assert!(html.contains("Lovelace"), "missing user row in {html}");
    assert!(html.contains("Austin"), "missing address row in {html}");
    assert!(html.contains("Edit"), "missing edit action in {html}");
    assert!(html.contains("Delete"), "missing delete action in {html}");
    assert!(!html.contains("submit-btn"), "form should reset after submit in {html}");
}

#[test]
fn page_smoke_renders_delete_notice() {
    let mut session = new_session();
    drive(
        &mut session,
        [
            FormIntent::select("User Information"),
            FormIntent::set_field("firstName", "Ada"),
            FormIntent::set_field("lastName", "Lovelace"),
            FormIntent::Submit,
            FormIntent::Delete(0),
        ],
    );

    let mut harness = setup_page_harness(session);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Entry deleted successfully."),
        "missing delete notice in {html}"
    );
    assert!(!html.contains("Submitted Data"), "table should be gone in {html}");
}
