//! Confirm-and-generate submission lifecycle.
//!
//! Explicit tagged state for the confirmation page's submit flow, instead
//! of inferring the phase from which DOM nodes happen to be visible. The
//! no-duplicate-submission invariant falls out of the transition rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::video::GenerationResponse;

/// State of the confirm-and-generate submission.
///
/// `Succeeded` is terminal for the page instance; `Failed` allows a retry,
/// which behaves exactly like a fresh submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        video_url: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid submission transition: {event} while {from}")]
pub struct TransitionError {
    pub from: &'static str,
    pub event: &'static str,
}

impl SubmissionState {
    fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded { .. } => "succeeded",
            SubmissionState::Failed { .. } => "failed",
        }
    }

    /// Whether a form submit is accepted in this state.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed { .. })
    }

    /// `idle|failed -> submitting`. A retry from `failed` re-runs the same
    /// transition as a fresh submission.
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        if !self.can_submit() {
            return Err(TransitionError {
                from: self.name(),
                event: "submit",
            });
        }
        *self = SubmissionState::Submitting;
        Ok(())
    }

    /// `submitting -> succeeded | failed`, driven by the response body.
    ///
    /// A `success: true` body without a `video_url` is treated as a
    /// failure; the page has nothing to render in that case.
    pub fn resolve(&mut self, response: &GenerationResponse) -> Result<(), TransitionError> {
        if !matches!(self, SubmissionState::Submitting) {
            return Err(TransitionError {
                from: self.name(),
                event: "resolve",
            });
        }
        *self = match (&response.success, &response.video_url) {
            (true, Some(url)) => SubmissionState::Succeeded {
                video_url: url.clone(),
            },
            (true, None) => SubmissionState::Failed {
                error: "Generation succeeded but no video URL was returned".to_string(),
            },
            (false, _) => SubmissionState::Failed {
                error: response
                    .error
                    .clone()
                    .unwrap_or_else(|| "Video generation failed".to_string()),
            },
        };
        Ok(())
    }

    /// `submitting -> failed` for transport errors (network failure,
    /// non-2xx status, malformed body). The message embeds the underlying
    /// error description.
    pub fn fail_transport(&mut self, detail: impl std::fmt::Display) -> Result<(), TransitionError> {
        if !matches!(self, SubmissionState::Submitting) {
            return Err(TransitionError {
                from: self.name(),
                event: "fail",
            });
        }
        *self = SubmissionState::Failed {
            error: format!("An error occurred while generating the video: {detail}"),
        };
        Ok(())
    }

    /// Whether the loading indicator is shown.
    pub fn shows_spinner(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Whether the action buttons are visible. They stay hidden once the
    /// video has been produced.
    pub fn shows_actions(&self) -> bool {
        self.can_submit()
    }

    /// Whether this state is terminal for the page instance.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded { .. })
    }
}
