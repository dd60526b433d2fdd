//! Tests for operation validation and shared type conventions.

use atelier_core::{
    ChatMessage, DocumentFormat, MediaKind, Operation, OperationKind, PromptBody, Role, TextBody,
    extension_of,
};
use atelier_error::ValidationErrorKind;
use strum::IntoEnumIterator;

fn blank_operation(kind: OperationKind, input: &str) -> Operation {
    let input = input.to_string();
    match kind {
        OperationKind::Chat => Operation::Chat { prompt: input },
        OperationKind::ImageSynthesis => Operation::ImageSynthesis { prompt: input },
        OperationKind::DocumentSummary => Operation::DocumentSummary { text: input },
        OperationKind::SpeechSynthesis => Operation::SpeechSynthesis { text: input },
    }
}

#[test]
fn test_blank_input_rejected_for_every_kind() {
    for kind in OperationKind::iter() {
        for blank in ["", "   ", "\n\t "] {
            let op = blank_operation(kind, blank);
            assert_eq!(op.kind(), kind);
            assert!(op.validate().is_err(), "{kind} accepted {blank:?}");
        }
    }
}

#[test]
fn test_non_blank_input_accepted() {
    for kind in OperationKind::iter() {
        assert!(blank_operation(kind, " hello ").validate().is_ok());
    }
}

#[test]
fn test_validation_kind_names_missing_input() {
    let missing = |kind| blank_operation(kind, "").validate().unwrap_err().kind;
    assert_eq!(missing(OperationKind::Chat), ValidationErrorKind::MissingPrompt);
    assert_eq!(
        missing(OperationKind::ImageSynthesis),
        ValidationErrorKind::MissingPrompt
    );
    assert_eq!(
        missing(OperationKind::SpeechSynthesis),
        ValidationErrorKind::MissingText
    );
    assert_eq!(
        missing(OperationKind::DocumentSummary),
        ValidationErrorKind::EmptyDocument
    );
}

#[test]
fn test_document_format_detection() {
    assert_eq!(DocumentFormat::from_file_name("a.pdf"), Some(DocumentFormat::Pdf));
    assert_eq!(
        DocumentFormat::from_file_name("Quarterly.Report.DOCX"),
        Some(DocumentFormat::Docx)
    );
    assert_eq!(DocumentFormat::from_file_name("notes.txt"), None);
    assert_eq!(DocumentFormat::from_file_name("no_extension"), None);
    assert_eq!(extension_of("archive.tar.GZ"), ".gz");
    assert_eq!(extension_of("README"), "");
}

#[test]
fn test_media_kind_naming() {
    assert_eq!(MediaKind::Image.prefix(), "img");
    assert_eq!(MediaKind::Image.extension(), "png");
    assert_eq!(MediaKind::Audio.prefix(), "audio");
    assert_eq!(MediaKind::Audio.format(), "wav");
}

#[test]
fn test_chat_message_serializes_lowercase_role() {
    let json = serde_json::to_value(ChatMessage::system("be brief")).unwrap();
    assert_eq!(json["role"], "system");
    assert_eq!(json["content"], "be brief");

    let answer: ChatMessage =
        serde_json::from_value(serde_json::json!({ "role": "assistant", "content": "ok" })).unwrap();
    assert_eq!(*answer.role(), Role::Assistant);
}

#[test]
fn test_null_or_missing_input_reads_as_blank() {
    let body: PromptBody = serde_json::from_str(r#"{"prompt":null}"#).unwrap();
    assert_eq!(body.prompt, "");
    let body: TextBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.text, "");

    assert!(serde_json::from_str::<PromptBody>(r#"{"prompt":5}"#).is_err());
}
