//! Core data types for the Atelier inference gateway.
//!
//! Shared by the server, which dispatches operations to the model runtime, and
//! the client, which renders the replies.

mod document;
mod media;
mod message;
mod operation;
mod reply;
mod role;

pub use document::{DocumentFormat, extension_of};
pub use media::MediaKind;
pub use message::ChatMessage;
pub use operation::{Operation, OperationKind};
pub use reply::{ArtifactReply, ChatReply, ErrorReply, PromptBody, SummaryReply, TextBody};
pub use role::Role;

/// Maximum characters of extracted document text forwarded to the model.
pub const MAX_DOCUMENT_CHARS: usize = 16_000;
