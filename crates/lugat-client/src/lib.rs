mod client;
mod error;

pub use client::{DictionaryClient, parse_lookup_body};
pub use error::LookupError;

use lugat_types::LookupOutcome;

/// Source of dictionary entries
#[async_trait::async_trait]
pub trait DictionaryService: Send + Sync {
    /// Look up a term exactly as committed by the user
    async fn lookup(&self, term: &str) -> Result<LookupOutcome, LookupError>;
}
