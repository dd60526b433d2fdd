//! Decoded gateway replies and their markup.

use crate::render::markdown_to_html;

/// A successful gateway reply, by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayReply {
    /// Chat answer or summary
    Markdown(String),
    /// Generated image
    Image {
        /// Where the image is served
        url: String,
    },
    /// Synthesised speech
    Audio {
        /// Where the audio is served
        url: String,
    },
}

impl GatewayReply {
    /// Markup handed to the progressive reveal.
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_client::GatewayReply;
    ///
    /// let reply = GatewayReply::Image { url: "img_1.png".to_string() };
    /// assert_eq!(reply.to_markup(), r#"<img src="img_1.png" class="preview" />"#);
    /// ```
    pub fn to_markup(&self) -> String {
        match self {
            GatewayReply::Markdown(markdown) => markdown_to_html(markdown),
            GatewayReply::Image { url } => {
                format!(r#"<img src="{}" class="preview" />"#, escape_attribute(url))
            }
            GatewayReply::Audio { url } => {
                format!(r#"<audio controls src="{}"></audio>"#, escape_attribute(url))
            }
        }
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
