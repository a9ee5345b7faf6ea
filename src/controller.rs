//! Interaction controller for one analogy session.
//!
//! State machine: `Idle -> Submitting -> Idle`. The success or failure of a
//! submission is applied on the way back to `Idle`. Only one request can be
//! in flight; edits and submissions are refused while it is.

use anyhow::Result;
use chrono::Utc;
use std::collections::VecDeque;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::analogy::{AnalogyGenerator, GenerateRequest, GenerateResponse, GeneratedAnalogy};
use crate::platform::{Clipboard, Notifier, Severity};

pub const NOTICE_EMPTY_CONCEPT: &str = "Veuillez entrer un concept psychologique";
pub const NOTICE_GENERATED: &str = "Analogie générée avec succès!";
pub const NOTICE_GENERATION_FAILED: &str = "Erreur lors de la génération de l'analogie";
pub const NOTICE_COPIED: &str = "Analogie copiée!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("concept is empty")]
    EmptyConcept,
    #[error("a generation request is already in flight")]
    Busy,
    #[error("generation failed: {0}")]
    Remote(String),
}

/// Proof that the controller moved to `Submitting`. Hand it back to
/// [`Controller::finish_submit`] with the outcome of the call.
#[derive(Debug)]
#[must_use = "the controller stays in Submitting until the request is finished"]
pub struct PendingRequest {
    request: GenerateRequest,
}

impl PendingRequest {
    pub fn request(&self) -> &GenerateRequest {
        &self.request
    }
}

pub struct Controller {
    generator: Box<dyn AnalogyGenerator>,
    clipboard: Box<dyn Clipboard>,
    notifier: Box<dyn Notifier>,
    concept: String,
    context: String,
    analogies: VecDeque<GeneratedAnalogy>,
    state: SessionState,
    copy_on_success: bool,
}

impl Controller {
    pub fn new(
        generator: Box<dyn AnalogyGenerator>,
        clipboard: Box<dyn Clipboard>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            generator,
            clipboard,
            notifier,
            concept: String::new(),
            context: String::new(),
            analogies: VecDeque::new(),
            state: SessionState::Idle,
            copy_on_success: false,
        }
    }

    pub fn with_copy_on_success(mut self, enabled: bool) -> Self {
        self.copy_on_success = enabled;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SessionState::Submitting
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.concept.trim().is_empty()
    }

    pub fn concept(&self) -> &str {
        &self.concept
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Replace the concept field. Ignored while submitting.
    pub fn set_concept(&mut self, concept: impl Into<String>) -> bool {
        if self.is_submitting() {
            debug!("Concept edit ignored while submitting");
            return false;
        }
        self.concept = concept.into();
        true
    }

    /// Replace the context field. Ignored while submitting.
    pub fn set_context(&mut self, context: impl Into<String>) -> bool {
        if self.is_submitting() {
            debug!("Context edit ignored while submitting");
            return false;
        }
        self.context = context.into();
        true
    }

    /// Generated analogies, newest first.
    pub fn analogies(&self) -> &VecDeque<GeneratedAnalogy> {
        &self.analogies
    }

    /// `Idle -> Submitting`, guarded by a non-blank concept.
    pub fn begin_submit(&mut self) -> Result<PendingRequest, SubmitError> {
        if self.is_submitting() {
            debug!("Submit ignored: request already in flight");
            return Err(SubmitError::Busy);
        }
        if self.concept.trim().is_empty() {
            self.notifier.notify(Severity::Error, NOTICE_EMPTY_CONCEPT);
            return Err(SubmitError::EmptyConcept);
        }

        self.state = SessionState::Submitting;
        Ok(PendingRequest {
            request: GenerateRequest::new(self.concept.clone(), self.context.clone()),
        })
    }

    /// Apply the outcome of the call and return to `Idle`.
    ///
    /// On success the analogy is prepended and both inputs are cleared; on
    /// failure the inputs are kept so the same submission can be retried.
    pub fn finish_submit(
        &mut self,
        pending: PendingRequest,
        outcome: Result<GenerateResponse>,
    ) -> Result<&GeneratedAnalogy, SubmitError> {
        self.state = SessionState::Idle;

        let data = match outcome {
            Ok(response) => response.into_data(),
            Err(e) => Err(format!("{:#}", e)),
        };

        match data {
            Ok(data) => {
                info!(
                    "Analogy for \"{}\": {}",
                    pending.request.concept, data.tech_analogy
                );
                self.analogies
                    .push_front(GeneratedAnalogy::new(data, Utc::now()));
                self.concept.clear();
                self.context.clear();
                self.notifier.notify(Severity::Success, NOTICE_GENERATED);
                if self.copy_on_success {
                    self.copy(0);
                }
                Ok(&self.analogies[0])
            }
            Err(reason) => {
                warn!(
                    "Generation failed for \"{}\": {}",
                    pending.request.concept, reason
                );
                self.notifier
                    .notify(Severity::Error, NOTICE_GENERATION_FAILED);
                Err(SubmitError::Remote(reason))
            }
        }
    }

    /// Submit the current inputs and wait for the generator.
    pub async fn submit(&mut self) -> Result<&GeneratedAnalogy, SubmitError> {
        let pending = self.begin_submit()?;
        let outcome = self.generator.generate(pending.request()).await;
        self.finish_submit(pending, outcome)
    }

    /// Copy the analogy at `index` (0 = newest). Returns false if there is none.
    ///
    /// A failing clipboard write is only logged; the confirmation is shown
    /// either way.
    pub fn copy(&self, index: usize) -> bool {
        let Some(analogy) = self.analogies.get(index) else {
            return false;
        };
        if let Err(e) = self.clipboard.write_text(&analogy.clipboard_text()) {
            warn!("Clipboard write failed: {:#}", e);
        }
        self.notifier.notify(Severity::Success, NOTICE_COPIED);
        true
    }
}
