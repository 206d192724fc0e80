//! Replies to Japanese desire expressions with a suggestion to just go ahead
//! and do it.
//!
//! ```text
//! 行きたい       -> じゃあ行けばええやん
//! 食べたくない   -> じゃあ食べなかったらええんちゃう
//! 勉強したい     -> じゃあ勉強すればええやん
//! ```

mod analyzer;
pub use self::analyzer::{analyze_tokens, Analysis, Analyzer, NounPhrase};

pub mod compose;

pub mod config;
pub use self::config::Config;

pub mod desire;
pub use self::desire::{DesireSignal, ExtractedVerb};

mod dirs;
pub use self::dirs::Dirs;

mod error;
pub use self::error::Error;

pub mod inflection;
pub use self::inflection::{ConjugationClass, Polarity};

pub mod kana;

pub mod token;
pub use self::token::{PartOfSpeech, Token};

pub mod tokenizer;
