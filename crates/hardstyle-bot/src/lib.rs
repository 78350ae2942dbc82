//! Hardstyle Bot: automated music-blog generation and publishing.
//!
//! Generates a French Hardstyle article with the Mistral chat API, assembles
//! it into a publishable document (title extraction, signature cleanup,
//! Spotify embeds), and publishes it to a Hashnode publication. Two binaries
//! share the pipeline: `hardstyle-daily` writes a topic article and
//! `hardstyle-weekly` writes an artist ranking.

pub mod assembler;
pub mod config;
pub mod error;
pub mod hashnode;
pub mod mistral;
pub mod pipeline;
pub mod profile;
pub mod prompts;

pub use assembler::{
    AssembleOptions, CleanupRules, ContentAssembler, Document, ARTIST_EMBED, FEATURED_ARTIST,
    PLAYLIST_EMBED,
};
pub use config::BotConfig;
pub use error::{BotError, BotResult};
pub use hashnode::{HashnodeClient, PublishRequest, Tag};
pub use mistral::MistralClient;
pub use profile::{RunKind, RunProfile};
