//! Contact form submission state.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> {Succeeded, Failed}`; a terminal state lasts until
//! its status message is dismissed or the next attempt starts. Each attempt
//! gets a generation number so a dismissal timer armed by an earlier success
//! cannot hide the status of a later attempt.
//!
//! While `Submitting`, `begin_submit` refuses to start another attempt; the
//! submit button is bound to `submit_enabled` so the browser never even
//! dispatches the second submit.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::consts::{STATUS_DISMISS_MS, STATUS_FADE_MS};
use crate::net::form_client::FormError;
use crate::net::types::ContactFields;

pub const SUCCESS_MESSAGE: &str = "✅ Message sent successfully! I'll get back to you soon.";
pub const FALLBACK_REJECTION: &str = "Something went wrong.";
pub const NETWORK_MESSAGE: &str = "❌ Network error. Please check your connection and try again.";
pub const TIMEOUT_MESSAGE: &str = "❌ The request timed out. Please try again.";
const ERROR_PREFIX: &str = "❌ ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Message shown in the form's status region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub text: String,
    /// Set while the success message fades out.
    pub fading: bool,
}

impl FormStatus {
    #[must_use]
    pub fn success() -> Self {
        Self { kind: StatusKind::Success, text: SUCCESS_MESSAGE.to_owned(), fading: false }
    }

    #[must_use]
    pub fn from_error(err: &FormError) -> Self {
        let text = match err {
            FormError::Rejected(messages) if messages.is_empty() => format!("{ERROR_PREFIX}{FALLBACK_REJECTION}"),
            FormError::Rejected(messages) => format!("{ERROR_PREFIX}{}", messages.join(", ")),
            FormError::Network(_) | FormError::MalformedResponse(_) => NETWORK_MESSAGE.to_owned(),
            FormError::Timeout => TIMEOUT_MESSAGE.to_owned(),
        };
        Self { kind: StatusKind::Error, text, fading: false }
    }

    /// CSS classes for the status region.
    #[must_use]
    pub fn class(&self) -> String {
        format!("form-status {}", self.kind.class())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

/// An accepted submit: what to send, and which attempt it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u64,
    pub payload: ContactFields,
}

/// Permission for a timer to fade out the success message of `attempt`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissTicket {
    pub attempt: u64,
    pub delay_ms: u32,
    pub fade_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub phase: FormPhase,
    pub status: Option<FormStatus>,
    attempt: u64,
    dismiss_ms: u32,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new(STATUS_DISMISS_MS)
    }
}

impl ContactFormState {
    #[must_use]
    pub fn new(dismiss_ms: u32) -> Self {
        Self { fields: ContactFields::default(), phase: FormPhase::Idle, status: None, attempt: 0, dismiss_ms }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    #[must_use]
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Start an attempt: snapshot the fields and clear any prior status.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::AlreadySubmitting`] while an attempt is in
    /// flight; state is left untouched.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        self.attempt += 1;
        self.phase = FormPhase::Submitting;
        self.status = None;
        Ok(Submission { attempt: self.attempt, payload: self.fields.clone() })
    }

    /// Record the outcome of `attempt`. This is the single exit path of an
    /// attempt: it always leaves `Submitting`, re-enabling the button.
    /// Returns a dismissal ticket after a success.
    pub fn finish(&mut self, attempt: u64, outcome: Result<(), FormError>) -> Option<DismissTicket> {
        if attempt != self.attempt || !self.is_submitting() {
            log::debug!("stale contact form outcome ignored: attempt={attempt}");
            return None;
        }
        match outcome {
            Ok(()) => {
                self.phase = FormPhase::Succeeded;
                self.fields.clear();
                self.status = Some(FormStatus::success());
                Some(DismissTicket { attempt, delay_ms: self.dismiss_ms, fade_ms: STATUS_FADE_MS })
            }
            Err(err) => {
                log::warn!("contact form submission failed: {err}");
                self.phase = FormPhase::Failed;
                self.status = Some(FormStatus::from_error(&err));
                None
            }
        }
    }

    fn ticket_is_current(&self, ticket: DismissTicket) -> bool {
        ticket.attempt == self.attempt && self.phase == FormPhase::Succeeded && self.status.is_some()
    }

    /// The dismissal delay has elapsed: start fading. Returns `false` when the
    /// ticket is stale.
    pub fn begin_fade(&mut self, ticket: DismissTicket) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        if let Some(status) = self.status.as_mut() {
            status.fading = true;
        }
        true
    }

    /// The fade finished: hide the message and re-arm for the next attempt.
    pub fn finish_fade(&mut self, ticket: DismissTicket) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        self.status = None;
        self.phase = FormPhase::Idle;
        true
    }
}
