//! Shared helpers for gateway tests.

#![allow(dead_code)]

use async_trait::async_trait;
use atelier_error::{BackendError, BackendErrorKind};
use atelier_models::{ChatCompletion, Generation, GenerationPayload, ModelRuntime};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Scripted model runtime recording every request it receives.
#[derive(Debug, Clone, Default)]
pub struct MockRuntime {
    chat_reply: Option<String>,
    generate_reply: Option<Value>,
    failure: Option<(u16, String)>,
    pub chats: Arc<Mutex<Vec<ChatCompletion>>>,
    pub generations: Arc<Mutex<Vec<Generation>>>,
}

impl MockRuntime {
    pub fn answering(text: &str) -> Self {
        Self {
            chat_reply: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn generating(body: Value) -> Self {
        Self {
            generate_reply: Some(body),
            ..Self::default()
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.chats.lock().unwrap().len() + self.generations.lock().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), BackendError> {
        match &self.failure {
            Some((status, message)) => Err(BackendError::new(BackendErrorKind::Status {
                status: *status,
                message: message.clone(),
            })),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ModelRuntime for MockRuntime {
    async fn chat(&self, request: &ChatCompletion) -> Result<String, BackendError> {
        self.chats.lock().unwrap().push(request.clone());
        self.check_failure()?;
        Ok(self.chat_reply.clone().unwrap_or_default())
    }

    async fn generate(&self, request: &Generation) -> Result<GenerationPayload, BackendError> {
        self.generations.lock().unwrap().push(request.clone());
        self.check_failure()?;
        Ok(GenerationPayload(
            self.generate_reply.clone().unwrap_or(Value::Null),
        ))
    }
}

/// A minimal docx archive whose body holds `paragraphs`.
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}
