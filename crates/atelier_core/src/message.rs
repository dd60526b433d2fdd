//! Chat messages as the model runtime expects them.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single `{role, content}` chat message.
///
/// # Examples
///
/// ```
/// use atelier_core::{ChatMessage, Role};
///
/// let message = ChatMessage::user("Hello!");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Hello!");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct ChatMessage {
    /// The role of the message sender
    role: Role,
    /// Plain text content
    content: String,
}

impl ChatMessage {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
