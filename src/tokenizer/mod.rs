//! The boundary to the morphological tokenizer.

mod mecab;
pub use self::mecab::{Mecab, MecabBuilder};

use std::future::Future;

use crate::error::Error;
use crate::token::Token;

/// A constructed tokenizer.
pub trait Tokenizer: Send + Sync {
    /// Split the text into tokens.
    ///
    /// This is expected to be deterministic for identical input.
    fn tokenize(&self, text: &str) -> impl Future<Output = Result<Vec<Token>, Error>> + Send;
}

/// Constructs a tokenizer.
///
/// Construction is only ever performed once per analyzer, regardless of how
/// many messages are waiting for it.
pub trait Builder: Send + Sync {
    /// The tokenizer being built.
    type Tokenizer: Tokenizer;

    /// Build the tokenizer.
    fn build(&self) -> impl Future<Output = Result<Self::Tokenizer, Error>> + Send;
}
