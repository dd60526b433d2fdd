//! Gateway request and response bodies.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `/api/chat` and `/api/image`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptBody {
    /// Missing or null fields deserialize as empty and fail validation
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompt: String,
}

/// Body of `/api/audio`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Chat answer, markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub bot: String,
}

/// Relative URL of a persisted image or audio file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactReply {
    pub url: String,
}

/// Document summary, markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReply {
    pub summary: String,
}

/// Uniform failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}
