//! HTTP client for the gateway routes.

use crate::GatewayReply;
use atelier_core::{
    ArtifactReply, ChatReply, ErrorReply, OperationKind, PromptBody, SummaryReply, TextBody,
};
use atelier_error::{ClientError, ClientErrorKind};
use reqwest::multipart::{Form, Part};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Calls a running gateway and decodes its replies.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Creates a client for the gateway at `base_url`, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// The gateway base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a file the gateway serves statically.
    pub fn resolve(&self, relative: &str) -> String {
        format!("{}/{}", self.base_url, relative.trim_start_matches('/'))
    }

    /// `POST /api/chat`.
    #[instrument(skip(self, prompt))]
    pub async fn chat(&self, prompt: &str) -> Result<GatewayReply, ClientError> {
        let body = PromptBody {
            prompt: prompt.to_string(),
        };
        let reply: ChatReply = self.post_json(OperationKind::Chat, &body).await?;
        Ok(GatewayReply::Markdown(reply.bot))
    }

    /// `POST /api/image`.
    #[instrument(skip(self, prompt))]
    pub async fn image(&self, prompt: &str) -> Result<GatewayReply, ClientError> {
        let body = PromptBody {
            prompt: prompt.to_string(),
        };
        let reply: ArtifactReply = self.post_json(OperationKind::ImageSynthesis, &body).await?;
        Ok(GatewayReply::Image {
            url: self.resolve(&reply.url),
        })
    }

    /// `POST /api/audio`.
    #[instrument(skip(self, text))]
    pub async fn speech(&self, text: &str) -> Result<GatewayReply, ClientError> {
        let body = TextBody {
            text: text.to_string(),
        };
        let reply: ArtifactReply = self.post_json(OperationKind::SpeechSynthesis, &body).await?;
        Ok(GatewayReply::Audio {
            url: self.resolve(&reply.url),
        })
    }

    /// `POST /api/summarise`, uploading `path` as the `doc` field.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn summarise(&self, path: &Path) -> Result<GatewayReply, ClientError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ClientError::new(ClientErrorKind::Io(format!("{}: {}", path.display(), e)))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(file_name = %file_name, bytes = bytes.len(), "Uploading document");

        let form = Form::new().part("doc", Part::bytes(bytes).file_name(file_name));
        let response = self
            .http
            .post(self.route(OperationKind::DocumentSummary))
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        let reply: SummaryReply = decode(response).await?;
        Ok(GatewayReply::Markdown(reply.summary))
    }

    fn route(&self, kind: OperationKind) -> String {
        let path = match kind {
            OperationKind::Chat => "api/chat",
            OperationKind::ImageSynthesis => "api/image",
            OperationKind::DocumentSummary => "api/summarise",
            OperationKind::SpeechSynthesis => "api/audio",
        };
        self.resolve(path)
    }

    async fn post_json<B, T>(&self, kind: OperationKind, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.route(kind);
        debug!(url = %url, "Posting to gateway");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

#[track_caller]
fn transport_error(e: reqwest::Error) -> ClientError {
    ClientError::new(ClientErrorKind::Transport(format!(
        "Gateway unreachable: {}",
        e
    )))
}

/// Turn a gateway response into its success body or a client error.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        let message = match serde_json::from_str::<ErrorReply>(&text) {
            Ok(envelope) => envelope.error,
            Err(_) => status.to_string(),
        };
        warn!(status = status.as_u16(), message = %message, "Gateway returned an error");
        return Err(ClientError::new(ClientErrorKind::Gateway {
            status: status.as_u16(),
            message,
        }));
    }

    serde_json::from_str(&text)
        .map_err(|e| ClientError::new(ClientErrorKind::InvalidReply(e.to_string())))
}
