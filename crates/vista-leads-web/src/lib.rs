mod utils;

use std::{cell::RefCell, rc::Rc};

use js_sys::Promise;
use vista_leads::{
    BeginSubmit, Field, HttpLeadSink, LeadFormConfig, LeadFormController, LeadSink,
    Notification, SubmissionState, SubmitOutcome,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
#[wasm_bindgen]
pub enum LeadFormError {
    /// The field name is not one of `name`, `email`, `phone`, `message`.
    UnknownField = 1,
    /// The API base is not an absolute `http`/`https` URL.
    InvalidApiBase = 2,
    /// No API base was given and the page has no `window.location`
    /// to fall back on.
    NoOrigin = 3,
}

/// Mirror of [`SubmissionState`] for the page script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
#[wasm_bindgen]
pub enum FormState {
    Idle = 0,
    Submitting = 1,
    Succeeded = 2,
    Failed = 3,
}

impl From<SubmissionState> for FormState {
    fn from(state: SubmissionState) -> Self {
        match state {
            SubmissionState::Idle => FormState::Idle,
            SubmissionState::Submitting => FormState::Submitting,
            SubmissionState::Succeeded => FormState::Succeeded,
            SubmissionState::Failed => FormState::Failed,
        }
    }
}

/// What the page should show once a submit attempt settles.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SubmitReport {
    success: bool,
    rejected: bool,
    message: Option<String>,
    level: Option<String>,
}

#[wasm_bindgen]
impl SubmitReport {
    /// The lead reached the backend.
    #[wasm_bindgen(getter)]
    pub fn success(&self) -> bool {
        self.success
    }

    /// Validation failed and nothing was sent. Read the field errors
    /// from [`LeadForm::error_message`].
    #[wasm_bindgen(getter)]
    pub fn rejected(&self) -> bool {
        self.rejected
    }

    /// Toast text, if a toast should be shown.
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.message.clone()
    }

    /// `"success"` or `"error"`, used as the toast class.
    #[wasm_bindgen(getter)]
    pub fn level(&self) -> Option<String> {
        self.level.clone()
    }
}

impl From<&SubmitOutcome> for SubmitReport {
    fn from(outcome: &SubmitOutcome) -> Self {
        let toast = outcome.notification();
        Self {
            success: outcome.is_success(),
            rejected: matches!(outcome, SubmitOutcome::Rejected(_)),
            message: toast.as_ref().map(|n| n.message().to_owned()),
            level: toast.as_ref().map(|n| n.level().as_class().to_owned()),
        }
    }
}

/// The lead form of the static page, backed by the same controller as
/// the Leptos page.
#[wasm_bindgen]
pub struct LeadForm {
    controller: Rc<RefCell<LeadFormController>>,
    sink: Rc<HttpLeadSink>,
}

#[wasm_bindgen]
impl LeadForm {
    /// Build a form posting to `{api_base}/api/leads`. Without an
    /// `api_base` the page origin is used.
    #[wasm_bindgen(constructor)]
    pub fn new(api_base: Option<String>) -> Result<LeadForm, LeadFormError> {
        utils::init();

        let mut config = LeadFormConfig::from_build_env();
        if let Some(base) = api_base {
            config.api_base = Some(base);
        }

        let base = match config.api_base.clone() {
            Some(base) => base,
            None => page_origin().ok_or(LeadFormError::NoOrigin)?,
        };
        let sink = HttpLeadSink::new(&base).map_err(|err| {
            log::error!("{err}");
            LeadFormError::InvalidApiBase
        })?;
        log::info!("lead form posting to {}", sink.endpoint());

        Ok(Self {
            controller: Rc::new(RefCell::new(LeadFormController::new(config))),
            sink: Rc::new(sink),
        })
    }

    /// Record an input event. Returns `false` while a lead is in flight.
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&self, name: &str, value: &str) -> Result<bool, LeadFormError> {
        let field = parse_field(name)?;
        Ok(self.controller.borrow_mut().edit(field, value))
    }

    #[wasm_bindgen]
    pub fn value(&self, name: &str) -> Result<String, LeadFormError> {
        let field = parse_field(name)?;
        Ok(self.controller.borrow().value(field).to_owned())
    }

    /// Whether the current input would pass validation. Does not change
    /// the displayed errors.
    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self) -> bool {
        self.controller.borrow().validate().is_valid()
    }

    /// Inline error for a field, after a rejected submit.
    #[wasm_bindgen(js_name = errorMessage)]
    pub fn error_message(&self, name: &str) -> Result<Option<String>, LeadFormError> {
        let field = parse_field(name)?;
        Ok(self
            .controller
            .borrow()
            .error_message(field)
            .map(str::to_owned))
    }

    /// `"required"` or `"invalid_format"` for a field in error.
    #[wasm_bindgen(js_name = errorKind)]
    pub fn error_kind(&self, name: &str) -> Result<Option<String>, LeadFormError> {
        let field = parse_field(name)?;
        Ok(self
            .controller
            .borrow()
            .errors()
            .get(field)
            .map(|kind| kind.as_str().to_owned()))
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> FormState {
        self.controller.borrow().state().into()
    }

    #[wasm_bindgen(getter, js_name = canSubmit)]
    pub fn can_submit(&self) -> bool {
        self.controller.borrow().can_submit()
    }

    /// How long a toast stays up, in milliseconds.
    #[wasm_bindgen(getter, js_name = notificationTtlMs)]
    pub fn notification_ttl_ms(&self) -> u32 {
        self.controller.borrow().config().notification_ttl_ms
    }

    /// Validate and send the lead. Resolves to a [`SubmitReport`]; never
    /// rejects.
    #[wasm_bindgen]
    pub fn submit(&self) -> Promise {
        let begin = self.controller.borrow_mut().begin_submit();

        let payload = match begin {
            BeginSubmit::Send(payload) => payload,
            BeginSubmit::Rejected(errors) => {
                return resolved(&SubmitOutcome::Rejected(errors));
            }
            BeginSubmit::Busy => return resolved(&SubmitOutcome::Busy),
        };

        let controller = Rc::clone(&self.controller);
        let sink = Rc::clone(&self.sink);
        future_to_promise(async move {
            let result = sink.submit_lead(&payload).await;
            let outcome = controller.borrow_mut().finish_submit(result);
            Ok(SubmitReport::from(&outcome).into())
        })
    }

    /// Take the pending toast, if any, as `[level, message]`.
    #[wasm_bindgen(js_name = takeNotification)]
    pub fn take_notification(&self) -> Option<Vec<String>> {
        self.controller
            .borrow_mut()
            .take_notification()
            .map(|n: Notification| vec![n.level().as_class().to_owned(), n.message().to_owned()])
    }
}

fn parse_field(name: &str) -> Result<Field, LeadFormError> {
    name.parse().map_err(|_| LeadFormError::UnknownField)
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn resolved(outcome: &SubmitOutcome) -> Promise {
    Promise::resolve(&JsValue::from(SubmitReport::from(outcome)))
}
