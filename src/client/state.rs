use std::time::Duration;

use crate::models::{CreateSubmission, Submission};

/// How long a success notice stays visible before the host clears it.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

const FALLBACK_ERROR: &str = "Submission failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome of a submit attempt: either rejected locally or a request the
/// host should send to the API.
#[derive(Debug)]
pub enum SubmitAction {
    Rejected,
    Send(CreateSubmission),
}

/// Explicit UI state record. All changes go through the transition methods.
#[derive(Debug, Default)]
pub struct UiState {
    pub api_healthy: bool,
    pub loading: bool,
    pub notice: Option<Notice>,
    pub form: FormFields,
    pub submissions: Vec<Submission>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls are enabled only once the health probe has succeeded and no
    /// request is in flight.
    pub fn can_submit(&self) -> bool {
        self.api_healthy && !self.loading
    }

    pub fn health_checked(&mut self, ok: bool) {
        self.api_healthy = ok;
    }

    pub fn submissions_loaded(&mut self, items: Vec<Submission>) {
        self.submissions = items;
    }

    /// Attempt a submit. Blank name or email (after trimming) is rejected
    /// locally with an error notice; no request is made.
    pub fn submit(&mut self) -> SubmitAction {
        if self.form.name.trim().is_empty() || self.form.email.trim().is_empty() {
            self.notice = Some(Notice::Error("Name and email are required".to_string()));
            return SubmitAction::Rejected;
        }

        self.loading = true;
        self.notice = None;
        SubmitAction::Send(CreateSubmission {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            message: Some(self.form.message.clone()),
        })
    }

    /// The API accepted the submission: clear the form and show a success
    /// notice. The host reloads the list and clears the notice after
    /// [`NOTICE_TTL`].
    pub fn submit_succeeded(&mut self) {
        self.loading = false;
        self.form = FormFields::default();
        self.notice = Some(Notice::Success("Submission successful!".to_string()));
    }

    /// The request failed; surface the server's message when it sent one.
    pub fn submit_failed(&mut self, server_message: Option<&str>) {
        self.loading = false;
        let text = server_message
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_ERROR);
        self.notice = Some(Notice::Error(text.to_string()));
    }

    pub fn notice_expired(&mut self) {
        self.notice = None;
    }
}
