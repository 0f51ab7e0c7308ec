//! Lead capture for the Central Vista Farms landing page.
//!
//! The [`LeadFormController`] owns the form state: it validates what the
//! visitor typed, hands a [`LeadPayload`] to a [`LeadSink`] and reports the
//! outcome as a [`Notification`]. The controller itself is synchronous and
//! target independent; the network call happens between
//! [`LeadFormController::begin_submit`] and
//! [`LeadFormController::finish_submit`] so a UI can drive it from its own
//! event loop, or use [`LeadFormController::submit`] to run both phases.
//!
//! ```no_run
//! use vista_leads::{Field, HttpLeadSink, LeadFormConfig, LeadFormController};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LeadFormConfig::default();
//! let sink = HttpLeadSink::new("https://centralvistafarms.example")?;
//! let mut form = LeadFormController::new(config);
//!
//! form.edit(Field::Name, "Jane Doe");
//! form.edit(Field::Email, "jane@x.com");
//! form.edit(Field::Phone, "9999999999");
//!
//! let outcome = form.submit(&sink).await;
//! println!("{}", outcome.notification().map(|n| n.message().to_owned()).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod notify;
pub mod sink;
pub mod state;
pub mod validate;

pub use config::LeadFormConfig;
pub use controller::{BeginSubmit, LeadFormController, SubmitOutcome};
pub use error::{ConfigError, SubmitError};
pub use input::{Field, LeadInput, LeadPayload};
pub use notify::{Notification, NotificationLevel};
pub use sink::{HttpLeadSink, LEADS_PATH, LeadSink};
pub use state::SubmissionState;
pub use validate::{ValidationErrorKind, ValidationResult, is_valid_email, validate};
