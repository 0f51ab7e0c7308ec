//! The lead form state machine.

use log::{debug, info, warn};

use crate::{
    config::LeadFormConfig,
    error::SubmitError,
    input::{Field, LeadInput, LeadPayload},
    notify::{self, Notification},
    sink::LeadSink,
    state::SubmissionState,
    validate::{ValidationResult, validate},
};

/// Result of the first submit phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginSubmit {
    /// Input is valid; send this payload, then call
    /// [`LeadFormController::finish_submit`].
    Send(LeadPayload),
    /// Validation failed. Nothing must be sent.
    Rejected(ValidationResult),
    /// A submission is already in flight.
    Busy,
}

/// How a submit attempt ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(SubmitError),
    Rejected(ValidationResult),
    Busy,
}

impl SubmitOutcome {
    /// The toast to show for this outcome. A busy form shows nothing.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SubmitOutcome::Succeeded => Some(Notification::success(notify::SUBMITTED)),
            SubmitOutcome::Failed(_) => Some(Notification::error(notify::SUBMIT_FAILED)),
            SubmitOutcome::Rejected(_) => Some(Notification::error(notify::INVALID_INPUT)),
            SubmitOutcome::Busy => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }
}

/// Owns the lead form: field values, inline errors, submission state and
/// the last notification.
#[derive(Debug, Clone, Default)]
pub struct LeadFormController {
    config: LeadFormConfig,
    input: LeadInput,
    errors: ValidationResult,
    state: SubmissionState,
    notification: Option<Notification>,
}

impl LeadFormController {
    pub fn new(config: LeadFormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LeadFormConfig {
        &self.config
    }

    pub fn input(&self) -> &LeadInput {
        &self.input
    }

    pub fn value(&self, field: Field) -> &str {
        self.input.get(field)
    }

    /// Errors from the last rejected submit attempt, minus the fields
    /// edited since.
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn error_message(&self, field: Field) -> Option<&'static str> {
        self.errors.message(field)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether the submit button should accept clicks.
    pub fn can_submit(&self) -> bool {
        !self.state.is_submitting()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Take the pending notification so it is shown once.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Validate the current input without touching any state.
    pub fn validate(&self) -> ValidationResult {
        validate(&self.input)
    }

    /// Record an edit. Clears the field's error and re-arms a finished
    /// submission. Returns `false`, leaving the form untouched, while a
    /// submission is in flight.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.state.is_submitting() {
            return false;
        }

        self.input.set(field, value);
        if let Some(kind) = self.errors.clear(field) {
            debug!("cleared `{kind}` error on {field}");
        }
        self.rearm();
        true
    }

    /// First submit phase: validate and move to `Submitting`.
    pub fn begin_submit(&mut self) -> BeginSubmit {
        if self.state.is_submitting() {
            debug!("submit ignored, a lead is already in flight");
            return BeginSubmit::Busy;
        }
        self.rearm();

        let errors = validate(&self.input);
        if !errors.is_valid() {
            debug!("lead rejected with {} field error(s)", errors.len());
            self.errors = errors.clone();
            self.notification = SubmitOutcome::Rejected(errors.clone()).notification();
            return BeginSubmit::Rejected(errors);
        }

        self.errors = ValidationResult::default();
        self.transition(SubmissionState::Submitting);
        BeginSubmit::Send(self.input.to_payload(&self.config.default_note))
    }

    /// Second submit phase: record what the sink reported.
    ///
    /// Calling this while not `Submitting` is a no-op returning `Busy`.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        if !self.state.is_submitting() {
            warn!("finish_submit called in state {}", self.state);
            return SubmitOutcome::Busy;
        }

        let outcome = match result {
            Ok(()) => {
                info!("lead submitted");
                self.input = LeadInput::default();
                self.errors = ValidationResult::default();
                self.transition(SubmissionState::Succeeded);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                warn!("lead submission failed: {err}");
                self.transition(SubmissionState::Failed);
                SubmitOutcome::Failed(err)
            }
        };

        self.notification = outcome.notification();
        outcome
    }

    /// Run both phases against `sink`, sending at most one request.
    pub async fn submit<S: LeadSink>(&mut self, sink: &S) -> SubmitOutcome {
        match self.begin_submit() {
            BeginSubmit::Send(payload) => {
                let result = sink.submit_lead(&payload).await;
                self.finish_submit(result)
            }
            BeginSubmit::Rejected(errors) => SubmitOutcome::Rejected(errors),
            BeginSubmit::Busy => SubmitOutcome::Busy,
        }
    }

    fn rearm(&mut self) {
        let next = self.state.rearmed();
        if next != self.state {
            self.transition(next);
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!("lead form {} -> {}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::{notify::NotificationLevel, validate::ValidationErrorKind};

    /// Records every payload and answers with a fixed HTTP status.
    struct RecordingSink {
        status: u16,
        sent: RefCell<Vec<LeadPayload>>,
    }

    impl RecordingSink {
        fn answering(status: u16) -> Self {
            Self {
                status,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<LeadPayload> {
            self.sent.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl LeadSink for RecordingSink {
        async fn submit_lead(&self, payload: &LeadPayload) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(payload.clone());
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(SubmitError::Status {
                    status: self.status,
                })
            }
        }
    }

    fn filled(name: &str, email: &str, phone: &str) -> LeadFormController {
        let mut form = LeadFormController::new(LeadFormConfig::default());
        form.edit(Field::Name, name);
        form.edit(Field::Email, email);
        form.edit(Field::Phone, phone);
        form
    }

    #[test]
    fn valid_lead_is_posted_with_default_note() {
        let sink = RecordingSink::answering(201);
        let mut form = filled("Jane Doe", "jane@x.com", "9999999999");

        let outcome = block_on(form.submit(&sink));

        assert!(outcome.is_success());
        assert_eq!(
            sink.sent(),
            vec![LeadPayload {
                name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                phone: "9999999999".into(),
                company: "Farmland Inquiry".into(),
            }]
        );
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert!(form.input().is_empty());

        let toast = form.take_notification().unwrap();
        assert_eq!(toast.level(), NotificationLevel::Success);
        assert_eq!(toast.message(), notify::SUBMITTED);
        assert!(form.take_notification().is_none());
    }

    #[test]
    fn invalid_lead_is_never_sent() {
        let sink = RecordingSink::answering(200);
        let mut form = filled("", "bad", "");

        let outcome = block_on(form.submit(&sink));

        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(errors.get(Field::Name), Some(ValidationErrorKind::Required));
        assert_eq!(
            errors.get(Field::Email),
            Some(ValidationErrorKind::InvalidFormat)
        );
        assert_eq!(errors.get(Field::Phone), Some(ValidationErrorKind::Required));
        assert!(sink.sent().is_empty());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.errors(), &errors);
        assert_eq!(
            form.notification().map(Notification::message),
            Some(notify::INVALID_INPUT)
        );
    }

    #[test]
    fn server_error_keeps_the_input() {
        let sink = RecordingSink::answering(500);
        let mut form = filled("Jane Doe", "jane@x.com", "9999999999");

        let outcome = block_on(form.submit(&sink));

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(SubmitError::Status { status: 500 })
        ));
        assert_eq!(form.state(), SubmissionState::Failed);
        assert_eq!(form.value(Field::Name), "Jane Doe");
        assert_eq!(form.value(Field::Email), "jane@x.com");
        assert_eq!(form.value(Field::Phone), "9999999999");

        let toast = form.notification().unwrap();
        assert!(toast.is_error());
        assert_eq!(toast.message(), notify::SUBMIT_FAILED);
    }

    #[test]
    fn retry_after_failure_sends_the_same_lead_again() {
        let failing = RecordingSink::answering(503);
        let working = RecordingSink::answering(200);
        let mut form = filled("Jane Doe", "jane@x.com", "9999999999");

        block_on(form.submit(&failing));
        assert_eq!(form.state(), SubmissionState::Failed);

        assert!(block_on(form.submit(&working)).is_success());
        assert_eq!(failing.sent(), working.sent());
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = filled("", "bad", "");
        assert!(matches!(form.begin_submit(), BeginSubmit::Rejected(_)));
        assert_eq!(form.errors().len(), 3);

        form.edit(Field::Email, "bad2");

        assert_eq!(form.errors().get(Field::Email), None);
        assert_eq!(form.error_message(Field::Name), Some("Name is required"));
        assert_eq!(
            form.error_message(Field::Phone),
            Some("Phone number is required")
        );
    }

    #[test]
    fn second_begin_while_in_flight_is_busy() {
        let mut form = filled("Jane Doe", "jane@x.com", "1");

        assert!(matches!(form.begin_submit(), BeginSubmit::Send(_)));
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), BeginSubmit::Busy);
        assert!(!form.edit(Field::Name, "Other"));
        assert_eq!(form.value(Field::Name), "Jane Doe");

        form.finish_submit(Ok(()));
        assert!(form.can_submit());
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut form = filled("Jane Doe", "jane@x.com", "1");
        assert!(matches!(form.finish_submit(Ok(())), SubmitOutcome::Busy));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.value(Field::Name), "Jane Doe");
    }

    #[test]
    fn terminal_state_rearms_on_edit() {
        let mut form = filled("Jane Doe", "jane@x.com", "1");
        form.begin_submit();
        form.finish_submit(Err(SubmitError::Status { status: 502 }));
        assert_eq!(form.state(), SubmissionState::Failed);

        form.edit(Field::Phone, "2");
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn terminal_state_rearms_on_next_submit() {
        let mut form = filled("Jane Doe", "jane@x.com", "1");
        form.begin_submit();
        form.finish_submit(Ok(()));
        assert_eq!(form.state(), SubmissionState::Succeeded);

        // The form was reset, so the next attempt is rejected from Idle.
        assert!(matches!(form.begin_submit(), BeginSubmit::Rejected(_)));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn successful_submit_clears_stale_errors() {
        let mut form = filled("", "jane@x.com", "1");
        form.begin_submit();
        assert_eq!(form.errors().len(), 1);

        form.edit(Field::Name, "Jane");
        let BeginSubmit::Send(_) = form.begin_submit() else {
            panic!("expected a payload");
        };
        assert!(form.errors().is_empty());
    }

    #[test]
    fn custom_default_note_is_used() {
        let config = LeadFormConfig {
            default_note: "Site visit".into(),
            ..LeadFormConfig::default()
        };
        let mut form = LeadFormController::new(config);
        form.edit(Field::Name, "Jane");
        form.edit(Field::Email, "jane@x.com");
        form.edit(Field::Phone, "1");

        let BeginSubmit::Send(payload) = form.begin_submit() else {
            panic!("expected a payload");
        };
        assert_eq!(payload.company, "Site visit");
    }

    #[test]
    fn visitor_note_is_sent_as_company() {
        let mut form = filled("Jane", "jane@x.com", "1");
        form.edit(Field::Note, "Interested in a 10000 sqft plot");

        let BeginSubmit::Send(payload) = form.begin_submit() else {
            panic!("expected a payload");
        };
        assert_eq!(payload.company, "Interested in a 10000 sqft plot");
    }
}
