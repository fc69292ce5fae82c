//! Submission controller.
//!
//! Drives one registration form through `idle -> submitting -> success | error`,
//! with a single in-flight slot guarding against double submission.

mod client;

pub use client::*;

use crate::errors::{Rejected, SubmitError};
use crate::form::{
    missing_required, team_lead_locked, team_name_locked, validate, FormModel, FormOptions,
};
use crate::models::{Flag, FormSnapshot, RegistrationRecord, SubmissionStatus, TextField};

/// Ticket for the request currently in flight.
///
/// Only `begin_submit` creates one and `complete_submit` consumes it, so at most
/// one exists per form.
#[derive(Debug)]
pub struct PendingSubmission {
    record: RegistrationRecord,
}

impl PendingSubmission {
    /// Snapshot of the record taken when the submission started.
    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }
}

/// A registration form bound to a transport.
#[derive(Debug)]
pub struct RegistrationForm<C> {
    client: C,
    options: FormOptions,
    model: FormModel,
    consent: bool,
    status: SubmissionStatus,
    error_message: Option<String>,
    in_flight: bool,
}

impl<C> RegistrationForm<C> {
    pub fn new(client: C, options: FormOptions) -> Self {
        Self {
            client,
            options,
            model: FormModel::new(),
            consent: false,
            status: SubmissionStatus::Idle,
            error_message: None,
            in_flight: false,
        }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Everything the presenter needs for one render.
    pub fn snapshot(&self) -> FormSnapshot {
        let record = self.model.record();
        FormSnapshot {
            record: record.clone(),
            errors: self.model.errors().clone(),
            status: self.status,
            error_message: self.error_message.clone(),
            in_flight: self.in_flight,
            consent: self.consent,
            team_lead_locked: team_lead_locked(record),
            team_name_locked: team_name_locked(record),
            submit_enabled: self.submit_enabled(),
        }
    }

    fn submit_enabled(&self) -> bool {
        self.status == SubmissionStatus::Idle
            && !self.in_flight
            && (self.consent || !self.options.require_consent)
    }

    /// Inputs are only live while the form itself is shown and idle.
    fn ensure_editable(&self) -> Result<(), Rejected> {
        if self.in_flight {
            return Err(Rejected::InFlight);
        }
        if self.status != SubmissionStatus::Idle {
            return Err(Rejected::WrongStatus(self.status));
        }
        Ok(())
    }

    pub fn edit_field(&mut self, field: TextField, raw: &str) -> Result<(), Rejected> {
        self.ensure_editable()?;
        if !self.model.set_field(field, raw) {
            tracing::debug!("Rejected edit of locked field {}", field.as_str());
            return Err(Rejected::Locked(field.as_str()));
        }
        Ok(())
    }

    pub fn toggle_flag(&mut self, flag: Flag, value: bool) -> Result<(), Rejected> {
        self.ensure_editable()?;
        if !self.model.set_flag(flag, value) {
            tracing::debug!("Rejected toggle of locked flag {}", flag.as_str());
            return Err(Rejected::Locked(flag.as_str()));
        }
        Ok(())
    }

    pub fn set_consent(&mut self, agreed: bool) -> Result<(), Rejected> {
        self.ensure_editable()?;
        self.consent = agreed;
        Ok(())
    }

    /// Run the gates and occupy the in-flight slot.
    ///
    /// Nothing is sent and the status stays `idle` when a gate rejects.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, Rejected> {
        self.ensure_editable()?;

        if self.options.require_consent && !self.consent {
            tracing::debug!("Submission blocked: consent missing");
            return Err(Rejected::ConsentMissing);
        }

        let invalid = if self.options.inline_validation {
            let validation = validate(self.model.record());
            let invalid = if validation.is_valid {
                Vec::new()
            } else {
                validation.errors.fields()
            };
            self.model.set_errors(validation.errors);
            invalid
        } else {
            Vec::new()
        };
        let missing = missing_required(self.model.record());

        if !invalid.is_empty() || !missing.is_empty() {
            tracing::debug!(
                "Submission blocked: {} invalid, {} missing",
                invalid.len(),
                missing.len()
            );
            return Err(Rejected::Incomplete { invalid, missing });
        }

        self.in_flight = true;
        self.error_message = None;
        tracing::info!("Submitting registration");

        Ok(PendingSubmission {
            record: self.model.record().clone(),
        })
    }

    /// Apply the outcome of the request and release the in-flight slot.
    pub fn complete_submit(
        &mut self,
        _pending: PendingSubmission,
        result: Result<(), SubmitError>,
    ) {
        self.in_flight = false;

        match result {
            Ok(()) => {
                tracing::info!("Registration accepted");
                self.status = SubmissionStatus::Success;
            }
            Err(err) => {
                match &err {
                    SubmitError::Transport(_) => {
                        tracing::error!("Registration not sent: {}", err)
                    }
                    SubmitError::Server { .. } => {
                        tracing::warn!("Registration rejected: {}", err)
                    }
                }
                self.error_message = Some(err.message());
                self.status = SubmissionStatus::Error;
            }
        }
    }

    /// Leave the error screen and return to the form with everything kept.
    pub fn retry(&mut self) -> Result<(), Rejected> {
        if self.in_flight {
            return Err(Rejected::InFlight);
        }
        if self.status != SubmissionStatus::Error {
            return Err(Rejected::WrongStatus(self.status));
        }
        self.status = SubmissionStatus::Idle;
        self.error_message = None;
        Ok(())
    }

    /// Check that the form may be dismissed; the caller then drops it.
    pub fn close(&self) -> Result<(), Rejected> {
        if self.in_flight {
            return Err(Rejected::InFlight);
        }
        Ok(())
    }
}

impl<C: RegistrationClient> RegistrationForm<C> {
    /// Validate, send and record the outcome.
    pub async fn submit(&mut self) -> Result<SubmissionStatus, Rejected> {
        self.submit_with(|_| {}).await
    }

    /// Like `submit`, calling `on_sending` with the in-flight snapshot once
    /// every gate has passed and before the request goes out.
    pub async fn submit_with<F>(&mut self, on_sending: F) -> Result<SubmissionStatus, Rejected>
    where
        F: FnOnce(&FormSnapshot),
    {
        let pending = self.begin_submit()?;
        on_sending(&self.snapshot());
        let result = self.client.register(pending.record()).await;
        self.complete_submit(pending, result);
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::messages;
    use crate::models::ValidatedField;
    use std::cell::{Cell, RefCell};

    /// In-memory transport returning a canned outcome.
    struct FakeClient {
        outcome: Result<(), SubmitError>,
        calls: Cell<usize>,
        last: RefCell<Option<RegistrationRecord>>,
    }

    impl FakeClient {
        fn returning(outcome: Result<(), SubmitError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl RegistrationClient for FakeClient {
        async fn register(&self, record: &RegistrationRecord) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(record.clone());
            self.outcome.clone()
        }
    }

    fn filled_form(outcome: Result<(), SubmitError>) -> RegistrationForm<FakeClient> {
        let mut form =
            RegistrationForm::new(FakeClient::returning(outcome), FormOptions::default());
        form.edit_field(TextField::Surname, "Ivanov").unwrap();
        form.edit_field(TextField::Name, "Ivan").unwrap();
        form.edit_field(TextField::Organization, "KNITU-KAI").unwrap();
        form.edit_field(TextField::Email, "ivan@example.ru").unwrap();
        form.edit_field(TextField::PhoneNumber, "+7 (999) 123-45-67").unwrap();
        form.edit_field(TextField::TelegramName, "ivan").unwrap();
        form.edit_field(TextField::TeamName, "RocketTeam").unwrap();
        form
    }

    #[test]
    fn test_initial_snapshot() {
        let form = RegistrationForm::new(FakeClient::returning(Ok(())), FormOptions::default());
        let snapshot = form.snapshot();

        assert_eq!(snapshot.status, SubmissionStatus::Idle);
        assert_eq!(snapshot.record, RegistrationRecord::default());
        assert!(!snapshot.consent);
        assert!(!snapshot.in_flight);
        assert!(!snapshot.submit_enabled);
        assert!(!snapshot.team_lead_locked);
    }

    #[tokio::test]
    async fn test_consent_missing_blocks_submission() {
        let mut form = filled_form(Ok(()));

        assert_eq!(form.submit().await, Err(Rejected::ConsentMissing));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.client().calls.get(), 0);
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_submission() {
        let mut form = filled_form(Ok(()));
        form.set_consent(true).unwrap();
        form.edit_field(TextField::Email, "a@b").unwrap();

        let rejected = form.submit().await.unwrap_err();
        assert_eq!(
            rejected,
            Rejected::Incomplete {
                invalid: vec![ValidatedField::Email],
                missing: vec![],
            }
        );
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(
            form.snapshot().errors.email.as_deref(),
            Some(messages::INVALID_EMAIL)
        );
        assert_eq!(form.client().calls.get(), 0);
    }

    #[tokio::test]
    async fn test_missing_required_blocks_submission() {
        let mut form = filled_form(Ok(()));
        form.set_consent(true).unwrap();
        form.edit_field(TextField::Organization, "  ").unwrap();

        let rejected = form.submit().await.unwrap_err();
        assert_eq!(
            rejected,
            Rejected::Incomplete {
                invalid: vec![],
                missing: vec![TextField::Organization],
            }
        );
        assert_eq!(form.client().calls.get(), 0);
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let mut form = filled_form(Ok(()));
        form.set_consent(true).unwrap();

        assert_eq!(form.submit().await, Ok(SubmissionStatus::Success));
        assert!(!form.snapshot().in_flight);
        assert_eq!(form.client().calls.get(), 1);

        let sent = form.client().last.borrow().clone().unwrap();
        assert_eq!(sent.telegram_name, "@ivan");
        assert_eq!(sent.email, "ivan@example.ru");
    }

    #[tokio::test]
    async fn test_server_error_message_is_shown() {
        let mut form = filled_form(Err(SubmitError::from_response(
            400,
            r#"{"message":"duplicate email"}"#,
        )));
        form.set_consent(true).unwrap();

        assert_eq!(form.submit().await, Ok(SubmissionStatus::Error));
        let snapshot = form.snapshot();
        assert_eq!(snapshot.error_message.as_deref(), Some("duplicate email"));
        assert!(!snapshot.in_flight);
    }

    #[tokio::test]
    async fn test_transport_error_uses_fixed_message() {
        let mut form = filled_form(Err(SubmitError::Transport("refused".to_string())));
        form.set_consent(true).unwrap();

        assert_eq!(form.submit().await, Ok(SubmissionStatus::Error));
        assert_eq!(
            form.snapshot().error_message.as_deref(),
            Some(messages::NO_CONNECTION)
        );
    }

    #[tokio::test]
    async fn test_retry_preserves_record() {
        let mut form = filled_form(Err(SubmitError::Transport("refused".to_string())));
        form.toggle_flag(Flag::TeamLead, true).unwrap();
        form.set_consent(true).unwrap();
        let before = form.snapshot().record;

        form.submit().await.unwrap();
        assert_eq!(form.status(), SubmissionStatus::Error);

        form.retry().unwrap();
        let snapshot = form.snapshot();
        assert_eq!(snapshot.status, SubmissionStatus::Idle);
        assert_eq!(snapshot.error_message, None);
        assert_eq!(snapshot.record, before);
        assert!(snapshot.consent);
        assert!(snapshot.submit_enabled);
    }

    #[tokio::test]
    async fn test_events_rejected_on_outcome_screen() {
        let mut form = filled_form(Ok(()));
        form.set_consent(true).unwrap();
        form.submit().await.unwrap();

        assert_eq!(
            form.edit_field(TextField::Name, "Petr"),
            Err(Rejected::WrongStatus(SubmissionStatus::Success))
        );
        assert_eq!(
            form.retry(),
            Err(Rejected::WrongStatus(SubmissionStatus::Success))
        );
        assert_eq!(
            form.submit().await,
            Err(Rejected::WrongStatus(SubmissionStatus::Success))
        );
        assert_eq!(form.client().calls.get(), 1);
        assert!(form.close().is_ok());
    }

    #[tokio::test]
    async fn test_sending_hook_sees_in_flight_snapshot() {
        let mut form = filled_form(Ok(()));
        form.set_consent(true).unwrap();

        let mut seen = None;
        let status = form
            .submit_with(|snapshot| seen = Some(snapshot.clone()))
            .await
            .unwrap();

        assert_eq!(status, SubmissionStatus::Success);
        let seen = seen.unwrap();
        assert!(seen.in_flight);
        assert!(!seen.submit_enabled);
        assert_eq!(seen.status, SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_sending_hook_skipped_when_rejected() {
        let mut form = filled_form(Ok(()));

        let mut called = false;
        let rejected = form.submit_with(|_| called = true).await;

        assert_eq!(rejected, Err(Rejected::ConsentMissing));
        assert!(!called);
        assert_eq!(form.client().calls.get(), 0);
    }

    #[test]
    fn test_in_flight_gate() {
        let mut form = filled_form(Ok(()));
        form.set_consent(true).unwrap();

        let pending = form.begin_submit().unwrap();
        assert!(form.snapshot().in_flight);
        assert!(!form.snapshot().submit_enabled);
        assert_eq!(form.begin_submit().unwrap_err(), Rejected::InFlight);
        assert_eq!(
            form.edit_field(TextField::Name, "Petr"),
            Err(Rejected::InFlight)
        );
        assert_eq!(form.set_consent(false), Err(Rejected::InFlight));
        assert_eq!(form.close(), Err(Rejected::InFlight));

        form.complete_submit(pending, Ok(()));
        assert!(!form.snapshot().in_flight);
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.close().is_ok());
    }

    #[test]
    fn test_locked_team_lead_is_rejected() {
        let mut form = filled_form(Ok(()));
        form.toggle_flag(Flag::TeamLead, true).unwrap();
        form.toggle_flag(Flag::SearchingCommand, true).unwrap();

        let snapshot = form.snapshot();
        assert!(!snapshot.record.team_lead);
        assert!(snapshot.team_lead_locked);
        assert!(snapshot.team_name_locked);
        assert_eq!(
            form.toggle_flag(Flag::TeamLead, true),
            Err(Rejected::Locked("teamLead"))
        );
        assert_eq!(
            form.edit_field(TextField::TeamName, "x"),
            Err(Rejected::Locked("teamName"))
        );
    }

    #[tokio::test]
    async fn test_variant_without_validation_or_consent() {
        let options = FormOptions {
            inline_validation: false,
            require_consent: false,
        };
        let mut form = RegistrationForm::new(FakeClient::returning(Ok(())), options);
        for (field, value) in [
            (TextField::Surname, "Ivanov"),
            (TextField::Name, "Ivan"),
            (TextField::Organization, "KAI"),
            (TextField::Email, "not-an-email"),
            (TextField::PhoneNumber, "12345"),
            (TextField::TelegramName, "ivan"),
        ] {
            form.edit_field(field, value).unwrap();
        }
        form.toggle_flag(Flag::SearchingCommand, true).unwrap();

        assert!(form.snapshot().submit_enabled);
        assert_eq!(form.submit().await, Ok(SubmissionStatus::Success));
        assert!(form.snapshot().errors.is_empty());
    }
}
