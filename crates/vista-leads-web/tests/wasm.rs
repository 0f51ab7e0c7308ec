#![cfg(target_arch = "wasm32")]

use vista_leads_web::{FormState, LeadForm, LeadFormError};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const API_BASE: &str = "https://centralvista.example";

fn form() -> LeadForm {
    LeadForm::new(Some(API_BASE.to_string())).unwrap()
}

#[wasm_bindgen_test]
fn lead_form_invalid_api_base() {
    assert!(matches!(
        LeadForm::new(Some("not a url".to_string())),
        Err(LeadFormError::InvalidApiBase)
    ));
    assert!(matches!(
        LeadForm::new(Some("ftp://centralvista.example".to_string())),
        Err(LeadFormError::InvalidApiBase)
    ));
}

#[wasm_bindgen_test]
fn lead_form_falls_back_to_page_origin() {
    assert!(LeadForm::new(None).is_ok());
}

#[wasm_bindgen_test]
fn lead_form_unknown_field() {
    let form = form();
    assert!(matches!(
        form.set_field("company", "Agrocorp"),
        Err(LeadFormError::UnknownField)
    ));
}

#[wasm_bindgen_test]
fn lead_form_message_is_the_note() {
    let form = form();
    assert!(matches!(form.set_field("message", "Site visit"), Ok(true)));
    assert_eq!(form.value("message").unwrap(), "Site visit");
}

#[wasm_bindgen_test]
fn lead_form_is_valid() {
    let form = form();
    assert!(!form.is_valid());

    form.set_field("name", "Jane Doe").unwrap();
    form.set_field("email", "jane@x.com").unwrap();
    form.set_field("phone", "9999999999").unwrap();

    assert!(form.is_valid());
    assert_eq!(form.state(), FormState::Idle);
    assert!(form.can_submit());
    assert_eq!(form.notification_ttl_ms(), 3_000);
}

#[wasm_bindgen_test]
async fn lead_form_rejects_without_sending() {
    let form = form();
    form.set_field("email", "bad").unwrap();

    let report = JsFuture::from(form.submit()).await;

    assert!(report.is_ok());
    assert_eq!(form.state(), FormState::Idle);
    assert!(form.can_submit());

    assert_eq!(form.error_kind("name").unwrap().as_deref(), Some("required"));
    assert_eq!(
        form.error_message("email").unwrap().as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        form.error_message("phone").unwrap().as_deref(),
        Some("Phone number is required")
    );
}

#[wasm_bindgen_test]
async fn lead_form_edit_clears_field_error() {
    let form = form();
    form.set_field("email", "bad").unwrap();
    JsFuture::from(form.submit()).await.unwrap();
    assert!(form.error_message("email").unwrap().is_some());

    form.set_field("email", "jane@").unwrap();

    assert_eq!(form.error_message("email").unwrap(), None);
    assert!(form.error_message("name").unwrap().is_some());
}

#[wasm_bindgen_test]
fn lead_form_take_notification_once() {
    let form = form();
    let _ = form.submit();

    let toast = form.take_notification().unwrap();
    assert_eq!(toast[0], "error");
    assert_eq!(toast[1], "Please fill in all required fields correctly");
    assert!(form.take_notification().is_none());
}
