//! Ordered field probes for base64 media in generate responses.

use atelier_core::MediaKind;
use serde_json::Value;

/// Where a base64 payload may live in a generate response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldProbe {
    /// A top-level string field
    Field(&'static str),
    /// The first element of a top-level array field
    FirstElement(&'static str),
}

impl FieldProbe {
    /// Read the probed location as a string, if present.
    pub fn read<'a>(&self, body: &'a Value) -> Option<&'a str> {
        match self {
            FieldProbe::Field(name) => body.get(name)?.as_str(),
            FieldProbe::FirstElement(name) => body.get(name)?.get(0)?.as_str(),
        }
    }
}

impl std::fmt::Display for FieldProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldProbe::Field(name) => write!(f, "{}", name),
            FieldProbe::FirstElement(name) => write!(f, "{}[0]", name),
        }
    }
}

/// Image payload aliases, highest priority first.
pub const IMAGE_PROBES: &[FieldProbe] = &[
    FieldProbe::Field("response"),
    FieldProbe::Field("image"),
    FieldProbe::FirstElement("images"),
];

/// Audio payload aliases, highest priority first.
pub const AUDIO_PROBES: &[FieldProbe] = &[
    FieldProbe::Field("response"),
    FieldProbe::Field("audio"),
    FieldProbe::Field("wav"),
];

/// The probe list for a media kind.
pub fn probes_for(kind: MediaKind) -> &'static [FieldProbe] {
    match kind {
        MediaKind::Image => IMAGE_PROBES,
        MediaKind::Audio => AUDIO_PROBES,
    }
}
