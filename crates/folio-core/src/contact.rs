//! Contact form feedback and simulated submission.
//!
//! ## Field feedback
//!
//! - blur: validate, then show or clear the inline error
//! - input: clear the error once the value becomes valid (never shows one)
//!
//! ## Submission
//!
//! ```text
//! submit ──► validate all ──✗──► show errors, stop
//!                 │
//!                 ✓
//!                 ▼
//!   button: disabled + pending label
//!                 │  submit_delay
//!                 ▼
//!   success shown, form reset, button restored
//!                 │  success_display
//!                 ▼
//!   success hidden
//! ```
//!
//! Each accepted submission carries a [`CancellationToken`]. Accepting a new
//! one cancels the previous token, so a superseded submission never reveals
//! the notice, resets the form or hides a newer notice.

use std::cell::RefCell;
use std::pin::pin;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, Either, LocalBoxFuture};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::PageConfig;
use crate::executor::Executor;
use crate::page::Page;
use crate::validation::{Validator, FIELDS};

/// Class hiding the success notice
pub const HIDDEN_CLASS: &str = "hidden";

/// Selector for the form's submit control
pub const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;

/// Error element id for a field (`email` -> `email-error`)
pub fn error_element_id(field: &str) -> String {
    format!("{field}-error")
}

/// Show an inline error next to a field.
///
/// Returns `false` when the input or its error element is missing.
pub fn show_field_error<P: Page>(page: &P, field: &str, message: &str) -> bool {
    let (Some(error), Some(input)) = (
        page.element_by_id(&error_element_id(field)),
        page.element_by_id(field),
    ) else {
        debug!(field, "No error element for field");
        return false;
    };
    page.set_text(&error, message);
    page.set_style(&error, "display", "block");
    page.set_style(&input, "border-color", "var(--color-error)");
    true
}

/// Hide a field's inline error and restore its border.
pub fn clear_field_error<P: Page>(page: &P, field: &str) -> bool {
    let (Some(error), Some(input)) = (
        page.element_by_id(&error_element_id(field)),
        page.element_by_id(field),
    ) else {
        return false;
    };
    page.set_style(&error, "display", "none");
    page.set_style(&input, "border-color", "var(--color-border)");
    true
}

/// Re-validate a field that lost focus.
pub fn on_field_blur<P: Page>(page: &P, validator: &Validator, field: &str, value: &str) -> bool {
    let result = validator.validate(field, value);
    match &result.message {
        Some(message) if !result.is_valid => {
            show_field_error(page, field, message);
        }
        _ => {
            clear_field_error(page, field);
        }
    }
    result.is_valid
}

/// Re-validate a field as the user types; only ever clears errors.
pub fn on_field_input<P: Page>(page: &P, validator: &Validator, field: &str, value: &str) -> bool {
    let result = validator.validate(field, value);
    if result.is_valid {
        clear_field_error(page, field);
    }
    result.is_valid
}

/// Result of a submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; nothing was sent
    Rejected { invalid: Vec<&'static str> },
    /// All fields passed and the simulated send is under way
    Accepted,
}

/// The contact form, its submit button and the success notice.
#[derive(Debug)]
pub struct ContactForm<N> {
    form: N,
    submit: Option<N>,
    success: Option<N>,
    idle_label: String,
    pending_label: String,
    submit_delay: Duration,
    success_display: Duration,
    pending: RefCell<Option<CancellationToken>>,
}

impl<N: Clone + PartialEq + std::fmt::Debug + 'static> ContactForm<N> {
    /// Wrap a form, capturing the submit button's idle label now.
    pub fn new<P: Page<Node = N>>(page: &P, form: N, success: Option<N>, config: &PageConfig) -> Self {
        let submit = page.query_in(&form, SUBMIT_SELECTOR);
        let idle_label = submit
            .as_ref()
            .map(|button| page.text(button))
            .unwrap_or_default();
        Self {
            form,
            submit,
            success,
            idle_label,
            pending_label: config.pending_label.clone(),
            submit_delay: config.submit_delay(),
            success_display: config.success_display(),
            pending: RefCell::new(None),
        }
    }

    pub fn form_node(&self) -> &N {
        &self.form
    }

    pub fn submit_node(&self) -> Option<&N> {
        self.submit.as_ref()
    }

    /// Whether an accepted submission has not yet been superseded
    pub fn has_pending(&self) -> bool {
        self.pending
            .borrow()
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Validate every field and start the simulated send if all pass.
    pub fn submit<P, X>(&self, page: &Rc<P>, executor: &Rc<X>, validator: &Validator) -> SubmitOutcome
    where
        P: Page<Node = N> + 'static,
        X: Executor + 'static,
    {
        let mut invalid = Vec::new();
        for field in FIELDS {
            let value = page.form_value(&self.form, field).unwrap_or_default();
            let result = validator.validate(field, &value);
            match result.message {
                Some(message) if !result.is_valid => {
                    show_field_error(page.as_ref(), field, &message);
                    invalid.push(field);
                }
                _ => {
                    clear_field_error(page.as_ref(), field);
                }
            }
        }
        if !invalid.is_empty() {
            debug!(?invalid, "Contact form rejected");
            return SubmitOutcome::Rejected { invalid };
        }

        let token = CancellationToken::new();
        if let Some(previous) = self.pending.replace(Some(token.clone())) {
            if !previous.is_cancelled() {
                debug!("Superseding pending submission");
            }
            previous.cancel();
        }

        if let Some(button) = &self.submit {
            page.set_text(button, &self.pending_label);
            page.set_disabled(button, true);
        }

        let completion = Completion {
            page: Rc::clone(page),
            executor: Rc::clone(executor),
            token,
            form: self.form.clone(),
            submit: self.submit.clone(),
            success: self.success.clone(),
            idle_label: self.idle_label.clone(),
            success_display: self.success_display,
        };
        let delay = executor.sleep(self.submit_delay);
        executor.spawn(Box::pin(completion.run(delay)));
        info!("Contact form accepted, sending");
        SubmitOutcome::Accepted
    }
}

/// Everything the deferred half of a submission touches.
struct Completion<P: Page, X> {
    page: Rc<P>,
    executor: Rc<X>,
    token: CancellationToken,
    form: P::Node,
    submit: Option<P::Node>,
    success: Option<P::Node>,
    idle_label: String,
    success_display: Duration,
}

impl<P: Page, X: Executor> Completion<P, X> {
    async fn run(self, delay: LocalBoxFuture<'static, ()>) {
        if !wait_unless_cancelled(delay, &self.token).await {
            debug!("Submission superseded before completion");
            return;
        }

        if let Some(success) = &self.success {
            self.page.remove_class(success, HIDDEN_CLASS);
        }
        self.page.reset_form(&self.form);
        if let Some(button) = &self.submit {
            self.page.set_text(button, &self.idle_label);
            self.page.set_disabled(button, false);
        }
        info!("Contact form sent");

        let hide = self.executor.sleep(self.success_display);
        if !wait_unless_cancelled(hide, &self.token).await {
            debug!("Success notice handed to newer submission");
            return;
        }
        if let Some(success) = &self.success {
            self.page.add_class(success, HIDDEN_CLASS);
        }
    }
}

/// Await `sleep`; `false` if the token was cancelled first.
async fn wait_unless_cancelled(sleep: LocalBoxFuture<'static, ()>, token: &CancellationToken) -> bool {
    let cancelled = pin!(token.cancelled());
    matches!(future::select(sleep, cancelled).await, Either::Left(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryPage, NodeId};
    use crate::test_support::{settle, TokioExecutor};
    use tokio::task::LocalSet;

    struct Fixture {
        page: Rc<MemoryPage>,
        form: ContactForm<NodeId>,
        button: NodeId,
        success: NodeId,
        inputs: Vec<NodeId>,
    }

    fn fixture() -> Fixture {
        let page = Rc::new(MemoryPage::new());
        let body = page.body_node();
        let form_node = page.append(body, "form");
        page.set_id(form_node, "contact-form");
        let mut inputs = Vec::new();
        for field in FIELDS {
            let input = page.append(form_node, "input");
            page.set_id(input, field);
            page.set_attribute(input, "name", field);
            let error = page.append(form_node, "div");
            page.set_id(error, &error_element_id(field));
            inputs.push(input);
        }
        let button = page.append(form_node, "button");
        page.set_attribute(button, "type", "submit");
        page.set_text(&button, "Send Message");
        let success = page.append(body, "div");
        page.set_id(success, "form-success");
        page.set_attribute(success, "class", "hidden");

        let form = ContactForm::new(page.as_ref(), form_node, Some(success), &PageConfig::default());
        Fixture {
            page,
            form,
            button,
            success,
            inputs,
        }
    }

    fn fill(fx: &Fixture, values: [&str; 3]) {
        for (input, value) in fx.inputs.iter().zip(values) {
            fx.page.set_value(*input, value);
        }
    }

    fn error_display(page: &MemoryPage, field: &str) -> Option<String> {
        let error = page.element_by_id(&error_element_id(field))?;
        page.style(error, "display")
    }

    #[test]
    fn blur_shows_and_clears() {
        let page = fixture().page;
        let validator = Validator::new().unwrap();

        assert!(!on_field_blur(page.as_ref(), &validator, "name", "A"));
        assert_eq!(error_display(&page, "name").as_deref(), Some("block"));
        let error = page.element_by_id("name-error").unwrap();
        assert_eq!(page.text(&error), "Name must be at least 2 characters long");
        let input = page.element_by_id("name").unwrap();
        assert_eq!(page.style(input, "border-color").as_deref(), Some("var(--color-error)"));

        assert!(on_field_blur(page.as_ref(), &validator, "name", "Ada"));
        assert_eq!(error_display(&page, "name").as_deref(), Some("none"));
        assert_eq!(page.style(input, "border-color").as_deref(), Some("var(--color-border)"));
    }

    #[test]
    fn input_never_shows_new_errors() {
        let page = fixture().page;
        let validator = Validator::new().unwrap();

        on_field_input(page.as_ref(), &validator, "email", "a");
        assert_eq!(error_display(&page, "email"), None);

        on_field_blur(page.as_ref(), &validator, "email", "a");
        on_field_input(page.as_ref(), &validator, "email", "a@b");
        assert_eq!(error_display(&page, "email").as_deref(), Some("block"));

        on_field_input(page.as_ref(), &validator, "email", "a@b.co");
        assert_eq!(error_display(&page, "email").as_deref(), Some("none"));
    }

    #[test]
    fn missing_error_element_is_soft() {
        let page = MemoryPage::new();
        assert!(!show_field_error(&page, "name", "Name is required"));
        assert!(!clear_field_error(&page, "name"));
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_submission_is_rejected() {
        LocalSet::new()
            .run_until(async {
                let fx = fixture();
                let executor = Rc::new(TokioExecutor);
                let validator = Validator::new().unwrap();
                fill(&fx, ["Ada", "not-an-email", "short"]);

                let outcome = fx.form.submit(&fx.page, &executor, &validator);
                assert_eq!(
                    outcome,
                    SubmitOutcome::Rejected {
                        invalid: vec!["email", "message"]
                    }
                );
                assert_eq!(error_display(&fx.page, "name").as_deref(), Some("none"));
                assert_eq!(error_display(&fx.page, "email").as_deref(), Some("block"));
                assert!(!fx.page.is_disabled(fx.button));
                assert!(!fx.form.has_pending());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_submission_lifecycle() {
        LocalSet::new()
            .run_until(async {
                let fx = fixture();
                let executor = Rc::new(TokioExecutor);
                let validator = Validator::new().unwrap();
                fill(&fx, ["Ada Lovelace", "ada@example.com", "Hello from the engine room"]);

                assert_eq!(fx.form.submit(&fx.page, &executor, &validator), SubmitOutcome::Accepted);
                assert!(fx.page.is_disabled(fx.button));
                assert_eq!(fx.page.text(&fx.button), "Sending...");

                tokio::time::sleep(Duration::from_millis(1499)).await;
                assert!(fx.page.has_class(&fx.success, HIDDEN_CLASS));

                tokio::time::sleep(Duration::from_millis(2)).await;
                settle().await;
                assert!(!fx.page.has_class(&fx.success, HIDDEN_CLASS));
                assert!(!fx.page.is_disabled(fx.button));
                assert_eq!(fx.page.text(&fx.button), "Send Message");
                assert!(fx.inputs.iter().all(|input| fx.page.value(*input).is_empty()));

                tokio::time::sleep(Duration::from_millis(4998)).await;
                assert!(!fx.page.has_class(&fx.success, HIDDEN_CLASS));

                tokio::time::sleep(Duration::from_millis(2)).await;
                settle().await;
                assert!(fx.page.has_class(&fx.success, HIDDEN_CLASS));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn resubmitting_cancels_pending_completion() {
        LocalSet::new()
            .run_until(async {
                let fx = fixture();
                let executor = Rc::new(TokioExecutor);
                let validator = Validator::new().unwrap();
                let values = ["Ada Lovelace", "ada@example.com", "Hello from the engine room"];

                fill(&fx, values);
                fx.form.submit(&fx.page, &executor, &validator);
                tokio::time::sleep(Duration::from_millis(1000)).await;

                fill(&fx, values);
                fx.form.submit(&fx.page, &executor, &validator);

                // The first completion would have fired at 1500
                tokio::time::sleep(Duration::from_millis(1000)).await;
                settle().await;
                assert!(fx.page.has_class(&fx.success, HIDDEN_CLASS));
                assert_eq!(fx.page.text(&fx.button), "Sending...");

                tokio::time::sleep(Duration::from_millis(600)).await;
                settle().await;
                assert!(!fx.page.has_class(&fx.success, HIDDEN_CLASS));
                assert_eq!(fx.page.text(&fx.button), "Send Message");
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn resubmitting_keeps_newer_notice_visible() {
        LocalSet::new()
            .run_until(async {
                let fx = fixture();
                let executor = Rc::new(TokioExecutor);
                let validator = Validator::new().unwrap();
                let values = ["Ada Lovelace", "ada@example.com", "Hello from the engine room"];

                fill(&fx, values);
                fx.form.submit(&fx.page, &executor, &validator);
                tokio::time::sleep(Duration::from_millis(1600)).await;
                settle().await;
                assert!(!fx.page.has_class(&fx.success, HIDDEN_CLASS));

                // Second send at 4600; first hide was due at 6500
                tokio::time::sleep(Duration::from_millis(3000)).await;
                fill(&fx, values);
                fx.form.submit(&fx.page, &executor, &validator);

                tokio::time::sleep(Duration::from_millis(2000)).await;
                settle().await;
                assert!(!fx.page.has_class(&fx.success, HIDDEN_CLASS));

                // Second hide is due at 4600 + 1500 + 5000
                tokio::time::sleep(Duration::from_millis(4600)).await;
                settle().await;
                assert!(fx.page.has_class(&fx.success, HIDDEN_CLASS));
            })
            .await;
    }
}
