//! Code entry form state machine
//!
//! [`VerificationForm`] owns the six slots, the focused position and the
//! verification status. Edits arrive as calls mirroring user input (typing,
//! backspace, arrows, paste); submission goes through a
//! [`VerificationGateway`] and the outcome is reported to a
//! [`VerificationListener`].

use std::time::Duration;

use ov_core::domain::value_objects::{FailureKind, VerificationResult};

use crate::code::Code;
use crate::config::ClientConfig;
use crate::gateway::VerificationGateway;
use crate::network::NetworkStatus;

/// Message shown when submitting with an empty slot
pub const INCOMPLETE_CODE_MESSAGE: &str = "Please fill in all digits.";

/// Status of the current verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    #[default]
    Idle,
    Verifying,
    Success,
    Error,
}

/// Navigation and editing keys handled by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    ArrowLeft,
    ArrowRight,
}

/// Result of asking to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// The assembled code should be sent; the form is now verifying
    Ready(String),
    /// A slot is empty; focus moved to it
    Incomplete { focus: usize },
    /// A request is already outstanding
    InFlight,
    /// The code was already verified; reset first
    AlreadyVerified,
}

/// What the form did with a gateway result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Navigate to the success view after `delay`
    NavigateAfter(Duration),
    /// Slots were cleared and `message` is displayed
    Failed { kind: FailureKind, message: String },
    /// No submission was outstanding; the result was dropped
    Stale,
}

/// Outcome of a full [`VerificationForm::submit`] round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Verified,
    Failed { kind: FailureKind, message: String },
    Incomplete,
    Ignored,
}

/// Receives status changes and the final navigation signal
pub trait VerificationListener {
    fn on_status_change(&mut self, _status: VerificationStatus) {}

    /// Called once the success transition delay has elapsed
    fn on_verified(&mut self);
}

#[derive(Debug, Clone)]
pub struct VerificationForm {
    code: Code,
    focus: usize,
    status: VerificationStatus,
    in_flight: bool,
    error_message: Option<String>,
    show_error: bool,
    network_status: NetworkStatus,
    transition_delay: Duration,
}

impl Default for VerificationForm {
    fn default() -> Self {
        Self::new(ClientConfig::default().transition_delay)
    }
}

impl VerificationForm {
    pub fn new(transition_delay: Duration) -> Self {
        Self {
            code: Code::new(),
            focus: 0,
            status: VerificationStatus::Idle,
            in_flight: false,
            error_message: None,
            show_error: false,
            network_status: NetworkStatus::Online,
            transition_delay,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.transition_delay)
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn network_status(&self) -> NetworkStatus {
        self.network_status
    }

    pub fn set_network_status(&mut self, status: NetworkStatus) {
        self.network_status = status;
    }

    pub fn network_banner(&self) -> Option<&'static str> {
        self.network_status.banner()
    }

    /// Message to display, while an error is showing
    pub fn error_message(&self) -> Option<&str> {
        if self.show_error || self.status == VerificationStatus::Error {
            self.error_message.as_deref()
        } else {
            None
        }
    }

    /// Whether slot `index` is drawn in the error style
    pub fn is_slot_highlighted(&self, index: usize) -> bool {
        self.show_error && index < self.code.len() && self.code.get(index).is_none()
    }

    /// Submit button state
    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.code.is_complete()
    }

    fn is_editable(&self) -> bool {
        !self.in_flight && self.status != VerificationStatus::Success
    }

    fn last_index(&self) -> usize {
        self.code.len() - 1
    }

    /// Move focus to a slot, as when the user clicks it
    pub fn set_focus(&mut self, index: usize) -> bool {
        if !self.is_editable() || index > self.last_index() {
            return false;
        }
        self.focus = index;
        true
    }

    /// Replace the content of slot `index` with `value`, which must be empty
    /// or a single ASCII digit. A digit advances focus.
    pub fn input(&mut self, index: usize, value: &str) -> bool {
        if !self.is_editable() || index > self.last_index() {
            return false;
        }

        let mut chars = value.chars();
        let digit = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_digit() => Some(c),
            _ => return false,
        };

        self.code.set(index, digit);
        self.show_error = false;
        self.focus = match digit {
            Some(_) if index < self.last_index() => index + 1,
            _ => index,
        };
        true
    }

    pub fn key(&mut self, key: Key) -> bool {
        match key {
            Key::Backspace => self.backspace(),
            Key::ArrowLeft => self.focus > 0 && self.set_focus(self.focus - 1),
            Key::ArrowRight => self.focus < self.last_index() && self.set_focus(self.focus + 1),
        }
    }

    /// Clear the focused slot, or step back and clear the previous one when
    /// the focused slot is already empty
    pub fn backspace(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }

        if self.code.get(self.focus).is_some() {
            self.code.set(self.focus, None);
            return true;
        }
        if self.focus == 0 {
            return false;
        }
        self.focus -= 1;
        self.code.set(self.focus, None);
        true
    }

    /// Paste text: non-digits are dropped and at most six digits kept.
    ///
    /// A full code replaces every slot. A partial one fills empty slots from
    /// the focused slot onward, then the empty slots before it; filled slots
    /// are never overwritten.
    pub fn paste(&mut self, text: &str) -> bool {
        if !self.is_editable() {
            return false;
        }

        let digits: Vec<char> = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.code.len())
            .collect();

        if digits.is_empty() {
            return false;
        }

        if digits.len() == self.code.len() {
            self.code.clear();
            self.code.fill_from(0, &digits);
            self.focus = self.last_index();
        } else {
            self.code.fill_empty_from(self.focus, &digits);
            self.focus = self.code.first_empty().unwrap_or(self.last_index());
        }
        self.show_error = false;
        true
    }

    /// Validate locally and, when the code is complete, enter the verifying
    /// state
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.in_flight {
            return SubmitAttempt::InFlight;
        }
        if self.status == VerificationStatus::Success {
            return SubmitAttempt::AlreadyVerified;
        }

        let code = match self.code.assemble() {
            Some(code) => code,
            None => {
                let focus = self.code.first_empty().unwrap_or(0);
                self.focus = focus;
                self.show_error = true;
                self.error_message = Some(INCOMPLETE_CODE_MESSAGE.to_string());
                return SubmitAttempt::Incomplete { focus };
            }
        };

        self.in_flight = true;
        self.show_error = false;
        self.status = VerificationStatus::Verifying;
        SubmitAttempt::Ready(code)
    }

    /// Apply a gateway result to an outstanding submission
    pub fn complete(&mut self, result: VerificationResult) -> Completion {
        if !self.in_flight {
            tracing::debug!("Verification result arrived with no submission outstanding");
            return Completion::Stale;
        }
        self.in_flight = false;

        match result {
            VerificationResult::Success { .. } => {
                self.status = VerificationStatus::Success;
                self.show_error = false;
                self.error_message = None;
                Completion::NavigateAfter(self.transition_delay)
            }
            failure @ VerificationResult::Failure { .. } => {
                let message = failure.display_message().to_string();
                let kind = failure.failure_kind().unwrap_or(FailureKind::Server);

                self.status = VerificationStatus::Error;
                self.show_error = true;
                self.code.clear();
                self.focus = 0;
                self.error_message = Some(message.clone());
                Completion::Failed { kind, message }
            }
        }
    }

    /// Run a full submission: local checks, the gateway call, the status
    /// transitions, and the delayed navigation signal on success
    pub async fn submit<G, L>(&mut self, gateway: &G, listener: &mut L) -> SubmitOutcome
    where
        G: VerificationGateway + ?Sized,
        L: VerificationListener + ?Sized,
    {
        let code = match self.begin_submit() {
            SubmitAttempt::Ready(code) => code,
            SubmitAttempt::Incomplete { .. } => return SubmitOutcome::Incomplete,
            SubmitAttempt::InFlight | SubmitAttempt::AlreadyVerified => {
                return SubmitOutcome::Ignored
            }
        };
        listener.on_status_change(self.status);

        let result = gateway.verify(&code).await;
        let completion = self.complete(result);
        listener.on_status_change(self.status);

        match completion {
            Completion::NavigateAfter(delay) => {
                tokio::time::sleep(delay).await;
                listener.on_verified();
                SubmitOutcome::Verified
            }
            Completion::Failed { kind, message } => {
                tracing::debug!(?kind, message = %message, "Verification failed");
                SubmitOutcome::Failed { kind, message }
            }
            Completion::Stale => SubmitOutcome::Ignored,
        }
    }

    /// Return to the pristine idle state
    pub fn reset(&mut self) {
        *self = Self {
            network_status: self.network_status,
            ..Self::new(self.transition_delay)
        };
    }
}
