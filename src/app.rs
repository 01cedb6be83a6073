//! Application state and core logic

use crate::api::{ApplicationClient, ApplicationClientTrait, SubmitError};
use crate::config::IntakeConfig;
use crate::platform::ACTION_MODIFIER;
use crate::state::{
    ApplicationRecord, ConfirmOption, FieldInput, FieldName, FocusTarget, FormButton, FormFocus,
    FormVariant, LifecyclePhase, SubmissionController, SubmissionPolicy, SubmissionResult,
    SubmissionTicket,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::Instrument;
use uuid::Uuid;

/// Results reported back by spawned network tasks
#[derive(Debug)]
pub enum ClientEvent {
    Settled {
        attempt: Uuid,
        outcome: Result<SubmissionResult, SubmitError>,
    },
    HistoryLoaded(Result<Vec<ApplicationRecord>, SubmitError>),
}

/// Main application struct
pub struct App {
    /// Form lifecycle state
    pub form: SubmissionController,
    /// Which form layout is shown
    pub variant: FormVariant,
    /// Keyboard focus within the form
    pub focus: FormFocus,
    /// Highlighted option in the confirmation dialog
    pub confirm_option: ConfirmOption,
    /// Previously submitted applications
    pub history: Vec<ApplicationRecord>,
    /// Why the history could not be loaded
    pub history_note: Option<String>,
    pub history_loading: bool,
    /// Service address shown in the status bar
    pub api_base_url: Option<String>,
    client: Arc<dyn ApplicationClientTrait>,
    events_tx: UnboundedSender<ClientEvent>,
    events_rx: UnboundedReceiver<ClientEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance talking to the configured service
    pub fn new(config: &IntakeConfig) -> Result<Self> {
        let base_url = config.api_base_url();
        let client = ApplicationClient::new(base_url.clone(), config.request_timeout())?;
        tracing::info!("Using applications service at {}", client.base_url());

        let mut app = Self::with_client(Arc::new(client), config.variant(), config.policy());
        app.api_base_url = Some(base_url);
        app.refresh_history();
        Ok(app)
    }

    /// Create an App around any client implementation
    pub fn with_client(
        client: Arc<dyn ApplicationClientTrait>,
        variant: FormVariant,
        policy: SubmissionPolicy,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            form: SubmissionController::new(variant.field_set(), policy),
            variant,
            focus: FormFocus::default(),
            confirm_option: ConfirmOption::default(),
            history: Vec::new(),
            history_note: None,
            history_loading: false,
            api_base_url: None,
            client,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn current_focus(&self) -> FocusTarget {
        self.focus.current(self.form.fields(), self.form.draft())
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let command = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(ACTION_MODIFIER);

        if command && key.code == KeyCode::Char('q') {
            self.quit = true;
            return;
        }

        if self.form.phase() == LifecyclePhase::Confirming {
            self.handle_confirm_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('s') if command => self.submit(),
            KeyCode::Char('l') if command => self.clear(),
            KeyCode::Char('r') if command => self.refresh_history(),
            KeyCode::Tab => self.next_field(),
            KeyCode::BackTab => self.prev_field(),
            _ => self.handle_form_key(key),
        }
    }

    /// Keys while the confirmation dialog is open
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::BackTab => self.confirm_option.toggle(),
            KeyCode::Enter => match self.confirm_option {
                ConfirmOption::Confirm => self.confirm_submission(),
                ConfirmOption::Cancel => self.cancel_confirmation(),
            },
            KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_submission(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.cancel_confirmation(),
            _ => {}
        }
    }

    /// Keys on the form itself
    fn handle_form_key(&mut self, key: KeyEvent) {
        match self.current_focus() {
            FocusTarget::Buttons => match key.code {
                KeyCode::Left | KeyCode::Right => self.focus.selected_button.toggle(),
                KeyCode::Up => self.prev_field(),
                KeyCode::Down => self.next_field(),
                KeyCode::Enter => self.activate_button(),
                _ => {}
            },
            FocusTarget::Field(field) => match key.code {
                KeyCode::Enter | KeyCode::Down => self.next_field(),
                KeyCode::Up => self.prev_field(),
                KeyCode::Backspace => self.edit_field(field, FieldInput::Backspace),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.edit_field(field, FieldInput::Char(c))
                }
                _ => {}
            },
        }
    }

    fn activate_button(&mut self) {
        match self.focus.selected_button {
            FormButton::Submit => self.submit(),
            FormButton::Clear => self.clear(),
        }
    }

    pub fn next_field(&mut self) {
        self.focus.next(self.form.fields(), self.form.draft());
    }

    pub fn prev_field(&mut self) {
        self.focus.prev(self.form.fields(), self.form.draft());
    }

    /// Edit a field and follow the input boundary's focus hint
    pub fn edit_field(&mut self, field: FieldName, input: FieldInput) {
        let outcome = self.form.edit(field, input);
        if outcome.advance_focus {
            self.next_field();
        }
    }

    /// Validate and open the confirmation dialog, or jump to the first error
    pub fn submit(&mut self) {
        if self.form.submit() {
            self.confirm_option = ConfirmOption::default();
            return;
        }
        if let Some(field) = self.form.field_errors().fields().next() {
            self.focus.focus(
                FocusTarget::Field(field),
                self.form.fields(),
                self.form.draft(),
            );
        }
    }

    pub fn cancel_confirmation(&mut self) {
        self.form.cancel();
    }

    /// Confirm and send the submission without blocking the event loop
    pub fn confirm_submission(&mut self) {
        let Some(SubmissionTicket { attempt, payload }) = self.form.confirm() else {
            return;
        };

        let client = Arc::clone(&self.client);
        let events = self.events_tx.clone();
        let span = tracing::info_span!("submission", %attempt);
        tokio::spawn(
            async move {
                let outcome = client.submit_application(&payload).await;
                if events.send(ClientEvent::Settled { attempt, outcome }).is_err() {
                    tracing::debug!("Event loop closed before the submission settled");
                }
            }
            .instrument(span),
        );
    }

    /// Reset the form to empty
    pub fn clear(&mut self) {
        self.form.clear();
        self.focus.reset();
    }

    /// Reload the list of submitted applications in the background
    pub fn refresh_history(&mut self) {
        if self.history_loading {
            return;
        }
        self.history_loading = true;

        let client = Arc::clone(&self.client);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = client.list_applications().await;
            if events.send(ClientEvent::HistoryLoaded(outcome)).is_err() {
                tracing::debug!("Event loop closed before the history loaded");
            }
        });
    }

    /// Apply every event that has arrived since the last tick
    pub fn drain_client_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_client_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next network event and apply it
    pub async fn next_client_event(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.apply_client_event(event);
        }
    }

    fn apply_client_event(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::Settled { attempt, outcome } => {
                let succeeded = outcome.is_ok();
                if self.form.settle(attempt, outcome) && succeeded {
                    if self.form.draft().is_empty() {
                        self.focus.reset();
                    }
                    self.refresh_history();
                }
            }
            ClientEvent::HistoryLoaded(Ok(records)) => {
                tracing::debug!("Loaded {} submitted application(s)", records.len());
                self.history_loading = false;
                self.history = records;
                self.history_note = None;
            }
            ClientEvent::HistoryLoaded(Err(err)) => {
                tracing::warn!("Failed to load submitted applications: {err}");
                self.history_loading = false;
                self.history_note = Some(format!("History unavailable: {}", err.user_message()));
            }
        }
    }
}
