//! Binary media produced by the model runtime.

use serde::{Deserialize, Serialize};

/// The kinds of artifact the gateway persists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    /// File name prefix, e.g. `img` in `img_1720356000000.png`.
    pub fn prefix(self) -> &'static str {
        match self {
            MediaKind::Image => "img",
            MediaKind::Audio => "audio",
        }
    }

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Image => "png",
            MediaKind::Audio => "wav",
        }
    }

    /// Value of the `format` field sent to the generate endpoint.
    pub fn format(self) -> &'static str {
        self.extension()
    }

    /// How the payload is named in user-facing errors.
    pub fn noun(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio data",
        }
    }
}
