//! The pipeline turning a raw message into a reply.

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::compose::{self, Phrase};
use crate::desire::{self, DesireSignal, ExtractedVerb};
use crate::error::Error;
use crate::inflection::{self, ConjugationClass};
use crate::token::Token;
use crate::tokenizer::{Builder, Tokenizer};

/// Where the noun phrase of a noun + する desire is taken from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NounPhrase {
    /// Match the raw message text against a pattern.
    #[default]
    RawText,
    /// Collect the nouns immediately preceding the する token.
    Tokens,
}

/// The outcome of analyzing a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Tokens of the message.
    pub tokens: Vec<Token>,
    /// The detected desire.
    pub signal: DesireSignal,
    /// The verb the desire attaches to.
    pub extracted: Option<ExtractedVerb>,
    /// The class the extracted verb was inflected as.
    pub class: Option<ConjugationClass>,
    /// The reply to send, if any.
    pub reply: Option<String>,
}

/// Analyze an already tokenized message.
pub fn analyze_tokens(text: &str, tokens: Vec<Token>, noun_phrase: NounPhrase) -> Analysis {
    let mut analysis = Analysis {
        tokens,
        signal: DesireSignal::default(),
        extracted: None,
        class: None,
        reply: None,
    };

    let Some(marker) = desire::find_marker(&analysis.tokens) else {
        return analysis;
    };

    analysis.signal = DesireSignal {
        present: true,
        negated: marker.negated,
    };

    analysis.extracted = desire::extract_at(&analysis.tokens, marker);

    let negated = marker.negated;

    analysis.reply = match &analysis.extracted {
        Some(ExtractedVerb::Verb(verb)) => {
            let conjugation = inflection::conjugate(verb, negated);
            analysis.class = Some(conjugation.class);
            Some(compose::compose(Phrase::Verb(&conjugation.text), negated))
        }
        Some(ExtractedVerb::Suru) => {
            analysis.class = Some(ConjugationClass::SuruLightVerb);

            let noun = match noun_phrase {
                NounPhrase::RawText => compose::noun_phrase(text, negated).map(str::to_owned),
                NounPhrase::Tokens => desire::noun_phrase(&analysis.tokens, marker),
            };

            noun.map(|noun| compose::compose(Phrase::Noun(&noun), negated))
        }
        None => None,
    };

    tracing::debug!(
        signal = ?analysis.signal,
        extracted = ?analysis.extracted,
        class = ?analysis.class,
        reply = ?analysis.reply
    );

    analysis
}

/// Replies to messages expressing a desire.
///
/// The tokenizer is built lazily by whichever message arrives first, and
/// every message arriving while it is being built waits for the same
/// construction.
pub struct Analyzer<B>
where
    B: Builder,
{
    builder: B,
    tokenizer: OnceCell<Result<B::Tokenizer, Error>>,
    noun_phrase: NounPhrase,
}

impl<B> Analyzer<B>
where
    B: Builder,
{
    /// Construct a new analyzer. This does not build the tokenizer.
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            tokenizer: OnceCell::new(),
            noun_phrase: NounPhrase::default(),
        }
    }

    /// Configure where noun phrases are taken from.
    pub fn with_noun_phrase(self, noun_phrase: NounPhrase) -> Self {
        Self {
            noun_phrase,
            ..self
        }
    }

    /// Get the tokenizer, building it if necessary.
    ///
    /// A failure is only reported once, after which it is returned as-is to
    /// every caller.
    pub async fn initialize(&self) -> Result<&B::Tokenizer, &Error> {
        let result = self
            .tokenizer
            .get_or_init(|| async {
                tracing::debug!("Building tokenizer");

                let result = self.builder.build().await;

                if let Err(error) = &result {
                    tracing::error!("Failed to build tokenizer: {error}");
                }

                result
            })
            .await;

        result.as_ref()
    }

    /// Analyze a single message.
    ///
    /// Returns `None` if the tokenizer is unavailable or fails on the message.
    pub async fn analyze(&self, text: &str) -> Option<Analysis> {
        let tokenizer = self.initialize().await.ok()?;

        let tokens = match tokenizer.tokenize(text).await {
            Ok(tokens) => tokens,
            Err(error) => {
                tracing::warn!("Failed to tokenize message: {error}");
                return None;
            }
        };

        Some(analyze_tokens(text, tokens, self.noun_phrase))
    }

    /// Produce the reply to a message, or `None` if no reply should be sent.
    pub async fn respond(&self, text: &str) -> Option<String> {
        self.analyze(text).await?.reply
    }
}
