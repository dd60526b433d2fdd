//! Operation kinds and their inputs.

use atelier_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// The four request categories the gateway serves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum OperationKind {
    Chat,
    ImageSynthesis,
    DocumentSummary,
    SpeechSynthesis,
}

/// One request's worth of work, tagged by kind.
///
/// New kinds are added here together with their dispatcher arm; matches over
/// this type are exhaustive so nothing falls through silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Answer a prompt in markdown
    Chat {
        /// User prompt
        prompt: String,
    },
    /// Generate an image from a prompt
    ImageSynthesis {
        /// Image description
        prompt: String,
    },
    /// Summarise already-extracted document text
    DocumentSummary {
        /// Extracted, truncated text
        text: String,
    },
    /// Synthesise speech from text
    SpeechSynthesis {
        /// Text to speak
        text: String,
    },
}

impl Operation {
    /// The kind tag of this operation.
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Chat { .. } => OperationKind::Chat,
            Operation::ImageSynthesis { .. } => OperationKind::ImageSynthesis,
            Operation::DocumentSummary { .. } => OperationKind::DocumentSummary,
            Operation::SpeechSynthesis { .. } => OperationKind::SpeechSynthesis,
        }
    }

    /// The required input of this operation.
    pub fn input(&self) -> &str {
        match self {
            Operation::Chat { prompt } | Operation::ImageSynthesis { prompt } => prompt,
            Operation::DocumentSummary { text } | Operation::SpeechSynthesis { text } => text,
        }
    }

    /// Reject blank input before anything reaches the model runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_core::Operation;
    ///
    /// let op = Operation::SpeechSynthesis { text: "  \n".to_string() };
    /// assert_eq!(op.validate().unwrap_err().kind.to_string(), "Missing text");
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.input().trim().is_empty() {
            return Ok(());
        }
        let kind = match self {
            Operation::Chat { .. } | Operation::ImageSynthesis { .. } => {
                ValidationErrorKind::MissingPrompt
            }
            Operation::DocumentSummary { .. } => ValidationErrorKind::EmptyDocument,
            Operation::SpeechSynthesis { .. } => ValidationErrorKind::MissingText,
        };
        Err(ValidationError::new(kind))
    }
}
