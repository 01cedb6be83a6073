//! Form lifecycle state machine
//!
//! The controller is the single writer of form state. The rendering surface
//! reads it and sends intents back: field edits, submit, confirm, cancel and
//! clear. The network call itself happens outside; the controller hands out
//! a [`SubmissionTicket`] on confirm and is told the outcome through
//! [`SubmissionController::settle`].

use super::forms::{
    validate, validate_field, FieldErrors, FieldInput, FieldName, FieldSet, FormDraft,
    InputOutcome,
};
use super::submission::{ApplicationPayload, SubmissionResult};
use crate::api::SubmitError;
use uuid::Uuid;

/// Banner shown when a submit attempt fails validation
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors before submitting.";

/// How a finished submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Success,
    Failed,
}

/// Current stage of the submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    #[default]
    Editing,
    Confirming,
    Submitting,
    Settled(Settlement),
}

impl LifecyclePhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Confirming => "Confirming",
            Self::Submitting => "Submitting",
            Self::Settled(Settlement::Success) => "Submitted",
            Self::Settled(Settlement::Failed) => "Failed",
        }
    }
}

/// Behaviour knobs that differ between form deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionPolicy {
    /// Empty the draft once the service accepts it
    pub clear_draft_on_success: bool,
}

/// A confirmed submission waiting to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub attempt: Uuid,
    pub payload: ApplicationPayload,
}

/// Owned copy of everything the rendering surface displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub draft: FormDraft,
    pub field_errors: FieldErrors,
    pub phase: LifecyclePhase,
    pub error_message: Option<String>,
    pub result: Option<SubmissionResult>,
}

/// Owns the draft and drives it through the lifecycle
#[derive(Debug, Clone)]
pub struct SubmissionController {
    fields: FieldSet,
    policy: SubmissionPolicy,
    draft: FormDraft,
    field_errors: FieldErrors,
    phase: LifecyclePhase,
    error_message: Option<String>,
    result: Option<SubmissionResult>,
    in_flight: Option<Uuid>,
    /// The in-flight attempt was cleared; its outcome is dropped on arrival
    orphaned: bool,
}

impl SubmissionController {
    pub fn new(fields: FieldSet, policy: SubmissionPolicy) -> Self {
        Self {
            fields,
            policy,
            draft: FormDraft::default(),
            field_errors: FieldErrors::default(),
            phase: LifecyclePhase::Editing,
            error_message: None,
            result: None,
            in_flight: None,
            orphaned: false,
        }
    }

    pub fn fields(&self) -> FieldSet {
        self.fields
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// A submission is in flight; submit and confirm are disabled.
    ///
    /// Stays true after a clear until the outstanding attempt settles.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            draft: self.draft.clone(),
            field_errors: self.field_errors.clone(),
            phase: self.phase,
            error_message: self.error_message.clone(),
            result: self.result.clone(),
        }
    }

    /// Apply a field edit
    pub fn edit(&mut self, field: FieldName, input: FieldInput) -> InputOutcome {
        if !self.fields.includes(field) {
            return InputOutcome::default();
        }

        let outcome = self.draft.apply(field, input);
        if !outcome.changed {
            return outcome;
        }

        match self.phase {
            // The outstanding request already carries its own copy of the draft
            LifecyclePhase::Submitting => {}
            LifecyclePhase::Confirming | LifecyclePhase::Settled(_) => {
                tracing::debug!(
                    "Edit to {} returns form to editing from {:?}",
                    field.key(),
                    self.phase
                );
                self.phase = LifecyclePhase::Editing;
                self.invalidate_attempt_state();
            }
            LifecyclePhase::Editing => self.invalidate_attempt_state(),
        }

        self.revalidate(field);
        outcome
    }

    /// Request submission; validates and moves to confirmation on success.
    ///
    /// Returns true when the form is now waiting for confirmation.
    pub fn submit(&mut self) -> bool {
        if self.is_busy() {
            tracing::debug!("Submit ignored: a submission is already in flight");
            return false;
        }
        if self.phase == LifecyclePhase::Confirming {
            return true;
        }

        let errors = validate(&self.draft, self.fields);
        if errors.is_empty() {
            self.field_errors = errors;
            self.phase = LifecyclePhase::Confirming;
            tracing::info!("Form valid, awaiting confirmation");
            true
        } else {
            tracing::info!("Submit blocked by {} field error(s)", errors.len());
            for (field, message) in errors.iter() {
                tracing::debug!(field = field.key(), "{message}");
            }
            self.field_errors = errors;
            self.error_message = Some(FIX_ERRORS_MESSAGE.to_string());
            self.phase = LifecyclePhase::Editing;
            false
        }
    }

    /// Back out of the confirmation step
    pub fn cancel(&mut self) {
        if self.phase == LifecyclePhase::Confirming {
            self.phase = LifecyclePhase::Editing;
        }
    }

    /// Confirm the pending submission and hand out the request to send
    pub fn confirm(&mut self) -> Option<SubmissionTicket> {
        if self.is_busy() {
            tracing::debug!("Confirm ignored: a submission is already in flight");
            return None;
        }
        if self.phase != LifecyclePhase::Confirming {
            return None;
        }

        self.field_errors = FieldErrors::default();
        self.error_message = None;
        let attempt = Uuid::new_v4();
        self.in_flight = Some(attempt);
        self.phase = LifecyclePhase::Submitting;
        tracing::info!(%attempt, "Submitting application");

        Some(SubmissionTicket {
            attempt,
            payload: self.draft.payload(self.fields),
        })
    }

    /// Record the outcome of a submission.
    ///
    /// Outcomes for an attempt other than the one in flight, or for one the
    /// form was cleared under, are discarded and false is returned.
    pub fn settle(
        &mut self,
        attempt: Uuid,
        outcome: Result<SubmissionResult, SubmitError>,
    ) -> bool {
        if self.in_flight != Some(attempt) {
            tracing::warn!(%attempt, "Discarding outcome of an unknown submission");
            return false;
        }
        self.in_flight = None;
        if std::mem::take(&mut self.orphaned) {
            tracing::info!(%attempt, "Discarding outcome of a cleared submission");
            return false;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(%attempt, status = result.status_label(), "Application accepted");
                self.result = Some(result);
                self.error_message = None;
                self.phase = LifecyclePhase::Settled(Settlement::Success);
                if self.policy.clear_draft_on_success {
                    self.draft = FormDraft::default();
                }
            }
            Err(err) => {
                tracing::warn!(%attempt, "Application submission failed: {err}");
                self.error_message = Some(err.user_message());
                self.phase = LifecyclePhase::Settled(Settlement::Failed);
            }
        }
        true
    }

    /// Reset everything back to an empty form.
    ///
    /// An outstanding request is not cancelled: the form stays busy until it
    /// settles, and its outcome is then dropped.
    pub fn clear(&mut self) {
        if let Some(attempt) = self.in_flight {
            tracing::info!(%attempt, "Clearing form while a submission is in flight");
            self.orphaned = true;
        }
        self.draft = FormDraft::default();
        self.field_errors = FieldErrors::default();
        self.error_message = None;
        self.result = None;
        self.phase = LifecyclePhase::Editing;
    }

    fn invalidate_attempt_state(&mut self) {
        self.error_message = None;
        self.result = None;
    }

    /// Refresh error entries touched by an edit so they can clear early
    fn revalidate(&mut self, field: FieldName) {
        for target in std::iter::once(field).chain(field.dependents().iter().copied()) {
            if self.field_errors.contains(target) {
                let message = validate_field(&self.draft, self.fields, target);
                self.field_errors.set(target, message);
            }
        }
    }
}
