//! Contact Controller
//!
//! Field-level validation on blur, error clearing on input, and the submit
//! cycle with its double-submission guard. Errors are stored as kinds and
//! localized when read, so a language switch re-renders them correctly.

use std::time::Duration;

use ahash::AHashMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::contact::{ContactField, ContactFormData, ValidationKind};
use crate::error::Result;
use crate::state::LanguageSelector;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight
    Busy,
    /// At least one field failed validation
    Invalid,
    /// Accepted for delivery
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Banner shown under the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitStatus {
    pub kind: StatusKind,
    pub message_key: &'static str,
}

const STATUS_SUCCESS_KEY: &str = "contact.status.success";
const STATUS_ERROR_KEY: &str = "contact.status.error";

/// Contact form controller
#[derive(Debug, Default)]
pub struct ContactController {
    data: ContactFormData,
    errors: AHashMap<ContactField, ValidationKind>,
    submitting: bool,
    status: Option<SubmitStatus>,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<SubmitStatus> {
        self.status
    }

    /// Status banner text in the active locale
    pub fn status_message<'a>(&self, language: &'a LanguageSelector) -> Option<&'a str> {
        self.status.map(|status| language.translate(status.message_key))
    }

    pub fn field_error_kind(&self, field: ContactField) -> Option<ValidationKind> {
        self.errors.get(&field).copied()
    }

    /// Error text for `field` in the active locale
    pub fn field_error<'a>(
        &self,
        field: ContactField,
        language: &'a LanguageSelector,
    ) -> Option<&'a str> {
        self.field_error_kind(field)
            .map(|kind| language.translate(kind.message_key()))
    }

    /// Required fields filled and no recorded errors
    pub fn is_form_valid(&self) -> bool {
        self.data.has_required_fields() && self.errors.is_empty()
    }

    // ==================== Input ====================

    /// Replace a field's value (typing). Clears that field's error.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.data.value_mut(field) = value.into();
        self.clear_field_error(field);
    }

    /// Check one field (blur)
    pub fn validate_field(&mut self, field: ContactField) -> Option<ValidationKind> {
        let result = self.data.validate(field);
        match result {
            Some(kind) => {
                self.errors.insert(field, kind);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        result
    }

    pub fn clear_field_error(&mut self, field: ContactField) {
        self.errors.remove(&field);
    }

    // ==================== Submission ====================

    /// Validate everything and, if valid, enter the submitting state
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            debug!("Contact form already submitting");
            return SubmitOutcome::Busy;
        }

        for field in ContactField::ALL {
            self.validate_field(field);
        }

        if !self.is_form_valid() {
            self.status = Some(SubmitStatus {
                kind: StatusKind::Error,
                message_key: ValidationKind::Required.message_key(),
            });
            debug!(errors = self.errors.len(), "Contact form rejected");
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;
        self.status = None;
        SubmitOutcome::Accepted
    }

    /// Leave the submitting state with the delivery result
    pub fn finish_submit(&mut self, delivery: Result<()>) {
        if !self.submitting {
            warn!("finish_submit without a submission in flight");
            return;
        }
        self.submitting = false;

        match delivery {
            Ok(()) => {
                info!(service = %self.data.service, "Contact message sent");
                self.data = ContactFormData::default();
                self.errors.clear();
                self.status = Some(SubmitStatus {
                    kind: StatusKind::Success,
                    message_key: STATUS_SUCCESS_KEY,
                });
            }
            Err(e) => {
                warn!(error = %e, "Contact message failed");
                self.status = Some(SubmitStatus {
                    kind: StatusKind::Error,
                    message_key: STATUS_ERROR_KEY,
                });
            }
        }
    }

    /// Full submit cycle. Delivery is simulated by waiting `latency`.
    pub async fn submit(&mut self, latency: Duration) -> SubmitOutcome {
        let outcome = self.begin_submit();
        if outcome == SubmitOutcome::Accepted {
            tokio::time::sleep(latency).await;
            self.finish_submit(Ok(()));
        }
        outcome
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Empty the form and forget all errors and status
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;
    use crate::i18n::{Locale, TranslationTable};

    fn language() -> LanguageSelector {
        let mut table = TranslationTable::new();
        table.insert(Locale::Ar, "contact.validation.required", "هذا الحقل مطلوب");
        table.insert(Locale::En, "contact.validation.required", "This field is required");
        table.insert(Locale::Ar, "contact.validation.email", "بريد غير صحيح");
        table.insert(Locale::En, "contact.validation.email", "Please enter a valid email address");
        LanguageSelector::new(Arc::new(table))
    }

    fn fill(controller: &mut ContactController) {
        controller.set_field(ContactField::FirstName, "Sara");
        controller.set_field(ContactField::LastName, "Diallo");
        controller.set_field(ContactField::Email, "sara@example.com");
        controller.set_field(ContactField::Message, "Please call me about a campaign.");
    }

    #[test]
    fn blur_records_error_and_input_clears_it() {
        let mut controller = ContactController::new();
        controller.set_field(ContactField::Email, "not-an-email");
        assert_eq!(controller.validate_field(ContactField::Email), Some(ValidationKind::Email));
        assert!(controller.field_error_kind(ContactField::Email).is_some());

        controller.set_field(ContactField::Email, "not-an-email@");
        assert_eq!(controller.field_error_kind(ContactField::Email), None);
    }

    #[test]
    fn errors_are_localized_on_read() {
        let mut language = language();
        let mut controller = ContactController::new();
        controller.set_field(ContactField::Email, "bad");
        controller.validate_field(ContactField::Email);

        assert_eq!(
            controller.field_error(ContactField::Email, &language),
            Some("بريد غير صحيح")
        );
        language.set_locale(Locale::En);
        assert_eq!(
            controller.field_error(ContactField::Email, &language),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn invalid_submit_shows_required_banner() {
        let language = language();
        let mut controller = ContactController::new();
        controller.set_field(ContactField::FirstName, "Sara");

        assert_eq!(controller.begin_submit(), SubmitOutcome::Invalid);
        assert!(!controller.is_submitting());
        assert_eq!(
            controller.field_error_kind(ContactField::LastName),
            Some(ValidationKind::Required)
        );
        assert_eq!(controller.status().map(|s| s.kind), Some(StatusKind::Error));
        assert_eq!(controller.status_message(&language), Some("هذا الحقل مطلوب"));
    }

    #[test]
    fn second_submit_while_in_flight_is_busy() {
        let mut controller = ContactController::new();
        fill(&mut controller);
        assert!(controller.is_form_valid());
        assert_eq!(controller.begin_submit(), SubmitOutcome::Accepted);
        assert_eq!(controller.begin_submit(), SubmitOutcome::Busy);
        assert!(controller.is_submitting());
    }

    #[test]
    fn successful_delivery_resets_form() {
        let mut controller = ContactController::new();
        fill(&mut controller);
        controller.begin_submit();
        controller.finish_submit(Ok(()));

        assert!(!controller.is_submitting());
        assert_eq!(controller.data(), &ContactFormData::default());
        assert_eq!(
            controller.status(),
            Some(SubmitStatus {
                kind: StatusKind::Success,
                message_key: "contact.status.success",
            })
        );

        controller.clear_status();
        assert_eq!(controller.status(), None);
    }

    #[test]
    fn failed_delivery_keeps_input() {
        let mut controller = ContactController::new();
        fill(&mut controller);
        controller.begin_submit();
        controller.finish_submit(Err(Error::Invalid {
            message: "offline".to_string(),
        }));

        assert_eq!(controller.data().first_name, "Sara");
        assert_eq!(controller.status().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn optional_phone_is_still_validated() {
        let mut controller = ContactController::new();
        fill(&mut controller);
        controller.set_field(ContactField::Phone, "000");
        assert_eq!(controller.begin_submit(), SubmitOutcome::Invalid);
        assert_eq!(
            controller.field_error_kind(ContactField::Phone),
            Some(ValidationKind::Phone)
        );
    }

    #[tokio::test]
    async fn async_submit_completes_cycle() {
        let mut controller = ContactController::new();
        fill(&mut controller);
        let outcome = controller.submit(Duration::from_millis(1)).await;
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(controller.status().map(|s| s.kind), Some(StatusKind::Success));

        controller.reset();
        assert!(controller.status().is_none());
    }
}
