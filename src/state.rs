use std::fmt;

/// Where the form is in its submit cycle.
///
/// `Idle -> Submitting -> {Succeeded, Failed} -> Idle`. The terminal states
/// go back to `Idle` on the next edit or the next submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        self == SubmissionState::Submitting
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }

    /// Terminal states fall back to `Idle`; anything else is kept.
    pub fn rearmed(self) -> Self {
        if self.is_terminal() {
            SubmissionState::Idle
        } else {
            self
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        })
    }
}
