//! Tokens as produced by a morphological tokenizer.


use crate::error::{Error, ErrorKind};

/// Marker emitted by MeCab at the end of a sentence.
const EOS: &str = "EOS";

/// Placeholder used by IPADIC for columns which have no value.
const EMPTY: &str = "*";

macro_rules! part_of_speech {
    (
        $(#[$($meta:meta)*])*
        $vis:vis enum $name:ident {
            $other:ident $other_doc:literal;
            $(<$variant:ident $keyword:literal $doc:literal>)*
        }
    ) => {
        $(#[$($meta)*])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                #[doc = $doc]
                $variant,
            )*
            #[doc = $other_doc]
            $other,
        }

        impl $name {
            $vis const VALUES: &'static [$name] = &[
                $($name::$variant,)*
                $name::$other,
            ];

            /// The name of the variant.
            $vis fn variant(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)*
                    $name::$other => stringify!($other),
                }
            }

            /// Parse the major part of speech column of an IPADIC feature.
            /// Anything unrecognized is classified as other.
            $vis fn parse_keyword(string: &str) -> $name {
                match string {
                    $($keyword => $name::$variant,)*
                    _ => $name::$other,
                }
            }
        }
    }
}

part_of_speech! {
    /// The coarse part of speech of a token.
    pub enum PartOfSpeech {
        Other "any other part of speech";
        <Verb "動詞" "verb">
        <Adjective "形容詞" "adjective">
        <AuxiliaryVerb "助動詞" "auxiliary verb">
        <Noun "名詞" "noun">
    }
}

impl PartOfSpeech {
    /// Test if the part of speech is a verb or an adjective.
    pub fn is_verb_or_adjective(&self) -> bool {
        matches!(self, PartOfSpeech::Verb | PartOfSpeech::Adjective)
    }
}

/// A single token of an input sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The surface form as it appears in the input.
    pub surface: String,
    /// The dictionary (basic) form.
    pub basic_form: String,
    /// Major part of speech.
    pub part_of_speech: PartOfSpeech,
    /// First part of speech sub-classification, `*` if absent.
    pub detail: String,
    /// The inflection type (活用型), `*` if absent.
    pub inflection_type: String,
}

impl Token {
    /// Construct a token with no detail or inflection type.
    pub fn new(surface: &str, basic_form: &str, part_of_speech: PartOfSpeech) -> Self {
        Self {
            surface: surface.to_owned(),
            basic_form: basic_form.to_owned(),
            part_of_speech,
            detail: EMPTY.to_owned(),
            inflection_type: EMPTY.to_owned(),
        }
    }

    /// Parse a single line of IPADIC formatted output.
    ///
    /// Returns `None` for the end of sentence marker and empty lines.
    ///
    /// ```text
    /// 行き	動詞,自立,*,*,五段・カ行促音便,連用形,行く,イキ,イキ
    /// ```
    pub fn parse_ipadic(line: &str) -> Result<Option<Self>, Error> {
        let line = line.trim_end_matches(['\r', '\n']);

        if line.is_empty() || line == EOS {
            return Ok(None);
        }

        let Some((surface, features)) = line.split_once('\t') else {
            return Err(Error::new(ErrorKind::MalformedLine(line.into())));
        };

        let mut it = features.split(',');

        let (Some(pos), Some(detail)) = (it.next(), it.next()) else {
            return Err(Error::new(ErrorKind::MalformedLine(line.into())));
        };

        // Skip the remaining sub-classifications.
        let inflection_type = it.nth(2).unwrap_or(EMPTY);
        // Skip the inflected form.
        let basic_form = match it.nth(1) {
            Some(EMPTY) | Some("") | None => surface,
            Some(basic_form) => basic_form,
        };

        Ok(Some(Self {
            surface: surface.to_owned(),
            basic_form: basic_form.to_owned(),
            part_of_speech: PartOfSpeech::parse_keyword(pos),
            detail: detail.to_owned(),
            inflection_type: inflection_type.to_owned(),
        }))
    }

    /// Test if the token is of the given part of speech.
    #[inline]
    pub fn is(&self, part_of_speech: PartOfSpeech) -> bool {
        self.part_of_speech == part_of_speech
    }
}

/// Parse the full output of an IPADIC tokenizer run, which consists of one
/// token per line terminated by `EOS`.
pub fn parse_ipadic_output(output: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();

    for line in output.lines() {
        if let Some(token) = Token::parse_ipadic(line)? {
            tokens.push(token);
        }
    }

    Ok(tokens)
}
