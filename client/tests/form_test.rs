//! Behaviour tests for the code entry form

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use ov_client::{
    Completion, FailureKind, Key, NetworkStatus, SubmitAttempt, SubmitOutcome, VerificationForm,
    VerificationGateway, VerificationListener, VerificationResult, VerificationStatus,
    INCOMPLETE_CODE_MESSAGE,
};

/// Gateway returning a fixed result and recording submitted codes
struct MockGateway {
    result: VerificationResult,
    calls: Mutex<Vec<String>>,
}

impl MockGateway {
    fn new(result: VerificationResult) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerificationGateway for MockGateway {
    async fn verify(&self, code: &str) -> VerificationResult {
        self.calls.lock().unwrap().push(code.to_string());
        self.result.clone()
    }
}

#[derive(Default)]
struct RecordingListener {
    statuses: Vec<VerificationStatus>,
    verified: usize,
}

impl VerificationListener for RecordingListener {
    fn on_status_change(&mut self, status: VerificationStatus) {
        self.statuses.push(status);
    }

    fn on_verified(&mut self) {
        self.verified += 1;
    }
}

fn type_code(form: &mut VerificationForm, code: &str) {
    for (index, digit) in code.chars().enumerate() {
        assert!(form.input(index, &digit.to_string()));
    }
}

#[test]
fn test_typing_advances_focus() {
    let mut form = VerificationForm::default();

    assert!(form.input(0, "1"));
    assert_eq!(form.focus(), 1);
    assert!(form.input(1, "2"));
    assert_eq!(form.focus(), 2);

    type_code(&mut form, "123456");
    assert_eq!(form.focus(), 5);
    assert_eq!(form.code().to_string(), "123456");
    assert!(form.can_submit());
}

#[test]
fn test_invalid_input_is_rejected() {
    let mut form = VerificationForm::default();

    assert!(!form.input(0, "a"));
    assert!(!form.input(0, "12"));
    assert!(!form.input(6, "1"));
    assert!(form.code().is_empty());
    assert_eq!(form.focus(), 0);
}

#[test]
fn test_empty_input_clears_slot() {
    let mut form = VerificationForm::default();
    form.input(0, "7");
    assert!(form.input(0, ""));
    assert_eq!(form.code().get(0), None);
    assert_eq!(form.focus(), 0);
}

#[test]
fn test_backspace_clears_focused_digit() {
    let mut form = VerificationForm::default();
    type_code(&mut form, "123");
    form.set_focus(2);

    assert!(form.key(Key::Backspace));
    assert_eq!(form.code().to_string(), "12____");
    assert_eq!(form.focus(), 2);
}

#[test]
fn test_backspace_on_empty_slot_steps_back() {
    let mut form = VerificationForm::default();
    type_code(&mut form, "12");
    assert_eq!(form.focus(), 2);

    assert!(form.key(Key::Backspace));
    assert_eq!(form.code().to_string(), "1_____");
    assert_eq!(form.focus(), 1);
}

#[test]
fn test_backspace_on_empty_first_slot_is_noop() {
    let mut form = VerificationForm::default();
    assert!(!form.key(Key::Backspace));
    assert_eq!(form.focus(), 0);
}

#[test]
fn test_arrows_clamp_at_boundaries() {
    let mut form = VerificationForm::default();

    assert!(!form.key(Key::ArrowLeft));
    assert!(form.key(Key::ArrowRight));
    assert_eq!(form.focus(), 1);

    form.set_focus(5);
    assert!(!form.key(Key::ArrowRight));
    assert_eq!(form.focus(), 5);
    assert!(form.key(Key::ArrowLeft));
    assert_eq!(form.focus(), 4);
    assert!(form.code().is_empty());
}

#[test]
fn test_paste_full_code() {
    let mut form = VerificationForm::default();
    form.set_focus(3);

    assert!(form.paste("12-34 56"));
    assert_eq!(form.code().to_string(), "123456");
    assert_eq!(form.focus(), 5);
}

#[test]
fn test_paste_truncates_to_six_digits() {
    let mut form = VerificationForm::default();
    assert!(form.paste("98765432"));
    assert_eq!(form.code().to_string(), "987654");
}

#[test]
fn test_paste_partial_fills_from_focus() {
    let mut form = VerificationForm::default();
    form.input(0, "1");
    form.set_focus(1);

    // Six characters, only three digits
    assert!(form.paste("2a3b4c"));
    assert_eq!(form.code().to_string(), "1234__");
    assert_eq!(form.focus(), 4);
}

#[test]
fn test_paste_partial_drops_digits_without_empty_slots() {
    let mut form = VerificationForm::default();
    type_code(&mut form, "1234");
    form.set_focus(4);

    assert!(form.paste("567"));
    assert_eq!(form.code().to_string(), "123456");
    assert_eq!(form.focus(), 5);
}

#[test]
fn test_paste_partial_from_last_slot_wraps_to_empty_slots() {
    let mut form = VerificationForm::default();
    form.set_focus(5);

    assert!(form.paste("123"));
    assert_eq!(form.code().to_string(), "23___1");
    assert_eq!(form.focus(), 2);
}

#[test]
fn test_paste_partial_never_overwrites_filled_slots() {
    let mut form = VerificationForm::default();
    form.input(2, "9");
    form.set_focus(2);

    assert!(form.paste("1a2"));
    assert_eq!(form.code().to_string(), "__912_");
    assert_eq!(form.focus(), 0);
}

#[test]
fn test_paste_without_digits_is_noop() {
    let mut form = VerificationForm::default();
    assert!(!form.paste("abc"));
    assert!(form.code().is_empty());
}

#[test]
fn test_incomplete_submit_focuses_first_empty() {
    let mut form = VerificationForm::default();
    type_code(&mut form, "12");
    form.input(3, "4");

    assert_eq!(form.begin_submit(), SubmitAttempt::Incomplete { focus: 2 });
    assert_eq!(form.focus(), 2);
    assert_eq!(form.error_message(), Some(INCOMPLETE_CODE_MESSAGE));
    assert!(form.is_slot_highlighted(2));
    assert!(!form.is_slot_highlighted(0));
    assert_eq!(form.status(), VerificationStatus::Idle);
    assert!(!form.can_submit());

    // Typing clears the highlight
    form.input(2, "3");
    assert!(!form.is_slot_highlighted(4));
    assert_eq!(form.error_message(), None);
}

#[test]
fn test_edits_rejected_while_in_flight() {
    let mut form = VerificationForm::default();
    type_code(&mut form, "123456");

    assert_eq!(form.begin_submit(), SubmitAttempt::Ready("123456".to_string()));
    assert_eq!(form.status(), VerificationStatus::Verifying);
    assert!(form.is_in_flight());
    assert!(!form.can_submit());

    assert!(!form.input(0, "9"));
    assert!(!form.key(Key::Backspace));
    assert!(!form.paste("999999"));
    assert_eq!(form.begin_submit(), SubmitAttempt::InFlight);
    assert_eq!(form.code().to_string(), "123456");
}

#[test]
fn test_failure_clears_code_and_shows_message() {
    let mut form = VerificationForm::default();
    type_code(&mut form, "123457");
    form.begin_submit();

    let completion = form.complete(VerificationResult::failure(
        FailureKind::Domain,
        Some("Verification Error".to_string()),
    ));

    assert_eq!(
        completion,
        Completion::Failed {
            kind: FailureKind::Domain,
            message: "Verification Error".to_string()
        }
    );
    assert_eq!(form.status(), VerificationStatus::Error);
    assert!(form.code().is_empty());
    assert_eq!(form.focus(), 0);
    assert_eq!(form.error_message(), Some("Verification Error"));
    assert!(!form.is_in_flight());
}

#[test]
fn test_failure_without_message_uses_fallback() {
    let mut form = VerificationForm::default();
    type_code(&mut form, "123456");
    form.begin_submit();
    form.complete(VerificationResult::failure(FailureKind::Network, None));

    assert_eq!(
        form.error_message(),
        Some("Invalid verification code. Please try again.")
    );
}

#[test]
fn test_result_without_submission_is_dropped() {
    let mut form = VerificationForm::default();
    type_code(&mut form, "123456");

    let completion = form.complete(VerificationResult::failure(FailureKind::Domain, None));
    assert_eq!(completion, Completion::Stale);
    assert_eq!(form.status(), VerificationStatus::Idle);
    assert_eq!(form.code().to_string(), "123456");

    // A second result for the same submission is dropped too
    form.begin_submit();
    form.complete(VerificationResult::success("Verification Successful"));
    let completion = form.complete(VerificationResult::failure(FailureKind::Domain, None));
    assert_eq!(completion, Completion::Stale);
    assert_eq!(form.status(), VerificationStatus::Success);

    // Results arriving after a reset leave the pristine form alone
    form.reset();
    let completion = form.complete(VerificationResult::success("Verification Successful"));
    assert_eq!(completion, Completion::Stale);
    assert_eq!(form.status(), VerificationStatus::Idle);
}

#[test]
fn test_success_is_terminal_until_reset() {
    let mut form = VerificationForm::new(Duration::from_millis(250));
    type_code(&mut form, "123456");
    form.begin_submit();

    let completion = form.complete(VerificationResult::success("Verification Successful"));
    assert_eq!(completion, Completion::NavigateAfter(Duration::from_millis(250)));
    assert_eq!(form.status(), VerificationStatus::Success);

    assert_eq!(form.begin_submit(), SubmitAttempt::AlreadyVerified);
    assert!(!form.input(0, "1"));

    form.set_network_status(NetworkStatus::Offline);
    form.reset();
    assert_eq!(form.status(), VerificationStatus::Idle);
    assert!(form.code().is_empty());
    assert_eq!(form.error_message(), None);
    assert_eq!(form.network_status(), NetworkStatus::Offline);
}

#[test]
fn test_network_banners() {
    let mut form = VerificationForm::default();
    assert_eq!(form.network_banner(), None);

    form.set_network_status(NetworkStatus::from_online(false));
    assert_eq!(
        form.network_banner(),
        Some("You appear to be offline. Please check your connection.")
    );

    form.set_network_status(NetworkStatus::Slow);
    assert_eq!(
        form.network_banner(),
        Some("Your connection seems slow. Verification might take longer.")
    );
}

#[tokio::test(start_paused = true)]
async fn test_submit_success_navigates_after_delay() {
    let gateway = MockGateway::new(VerificationResult::success("Verification Successful"));
    let mut listener = RecordingListener::default();
    let mut form = VerificationForm::default();
    form.paste("123456");

    let started = tokio::time::Instant::now();
    let outcome = form.submit(&gateway, &mut listener).await;

    assert_eq!(outcome, SubmitOutcome::Verified);
    assert!(started.elapsed() >= Duration::from_millis(400));
    assert_eq!(gateway.calls(), vec!["123456".to_string()]);
    assert_eq!(
        listener.statuses,
        vec![VerificationStatus::Verifying, VerificationStatus::Success]
    );
    assert_eq!(listener.verified, 1);
}

#[tokio::test(start_paused = true)]
async fn test_submit_failure_reports_message() {
    let gateway = MockGateway::new(VerificationResult::failure(
        FailureKind::RateLimited,
        Some("Too many verification requests, please try again after 03:15 PM".to_string()),
    ));
    let mut listener = RecordingListener::default();
    let mut form = VerificationForm::default();
    form.paste("123456");

    let outcome = form.submit(&gateway, &mut listener).await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed { kind: FailureKind::RateLimited, .. }
    ));
    assert_eq!(
        listener.statuses,
        vec![VerificationStatus::Verifying, VerificationStatus::Error]
    );
    assert_eq!(listener.verified, 0);
    assert!(form.code().is_empty());

    // Resubmitting from the error state goes back through verifying
    form.paste("654321");
    form.submit(&gateway, &mut listener).await;
    assert_eq!(gateway.calls(), vec!["123456".to_string(), "654321".to_string()]);
}

#[tokio::test]
async fn test_incomplete_submit_never_calls_gateway() {
    let gateway = MockGateway::new(VerificationResult::success("Verification Successful"));
    let mut listener = RecordingListener::default();
    let mut form = VerificationForm::default();
    form.input(0, "1");

    let outcome = form.submit(&gateway, &mut listener).await;

    assert_eq!(outcome, SubmitOutcome::Incomplete);
    assert!(gateway.calls().is_empty());
    assert!(listener.statuses.is_empty());
    assert_eq!(form.focus(), 1);
}
