//! CLI structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Atelier - chat, images, summaries and speech from a local model runtime
#[derive(Debug, Parser)]
#[command(name = "atelier", version, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Gateway URL for client commands
    #[arg(
        long,
        global = true,
        env = "ATELIER_GATEWAY",
        default_value = "http://127.0.0.1:5000"
    )]
    pub gateway: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the gateway
    ///
    /// Settings come from the environment (and `.env`): PORT, MONGODB_URI,
    /// OLLAMA_HOST, TEXT_MODEL, IMAGE_MODEL, AUDIO_MODEL, STATIC_DIR, UPLOAD_DIR.
    Serve {
        /// Port to listen on, overriding PORT
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask a question and render the markdown answer
    Chat {
        /// Prompt text
        prompt: String,
    },

    /// Generate an image
    Image {
        /// Image description
        prompt: String,
    },

    /// Summarise a PDF or DOCX document
    #[command(alias = "summarize")]
    Summarise {
        /// Document to upload
        path: PathBuf,
    },

    /// Synthesise speech
    Speak {
        /// Text to speak
        text: String,
    },
}
