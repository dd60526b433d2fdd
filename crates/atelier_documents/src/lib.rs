//! Document extraction adapter for Atelier.
//!
//! Uploads land in an [`UploadArea`]; [`extract_text`] turns one into plain
//! text for the model and always deletes it afterwards.

pub mod docx;
mod extract;
pub mod pdf;
mod upload;

pub use extract::{extract_text, truncate_chars};
pub use upload::{UploadArea, UploadedDocument};
