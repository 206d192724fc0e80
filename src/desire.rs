//! Detection of desire expressions (～たい) and extraction of the verb they
//! attach to.

#[cfg(test)]
mod tests;

use crate::inflection::SURU;
use crate::token::{PartOfSpeech, Token};

/// The desire marker.
pub const TAI: &str = "たい";
/// The continuative stem of the desire marker, as seen in たくない.
const TAKU: &str = "たく";
/// The negation lemma.
const NAI: &str = "ない";
/// Inflection type of the negative auxiliary.
const NAI_INFLECTION: &str = "特殊・ナイ";
/// Detail tag carried by negating tokens.
const NEGATIVE_DETAIL: &str = "否定";

/// Whether a sentence expresses a desire, and if that desire is negated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DesireSignal {
    pub present: bool,
    /// Only meaningful when `present` is set.
    pub negated: bool,
}

/// The verb a desire attaches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedVerb {
    /// The dictionary form of a verb.
    Verb(String),
    /// The light verb する, meaning the desire is over a noun + する phrase.
    Suru,
}

impl ExtractedVerb {
    fn from_basic_form(basic_form: &str) -> Self {
        if basic_form == SURU {
            ExtractedVerb::Suru
        } else {
            ExtractedVerb::Verb(basic_form.to_owned())
        }
    }
}

/// How the desire marker was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// An auxiliary verb which is exactly たい.
    Auxiliary,
    /// A verb or adjective whose surface ends in たい.
    Suffixed,
    /// The たく stem followed by a negator.
    Stem,
}

/// The first desire marker in a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Index of the marker token.
    pub index: usize,
    /// How the marker was found.
    pub kind: MarkerKind,
    /// If the token following the marker negates it.
    pub negated: bool,
}

/// Test if the token negates whatever precedes it.
fn is_negator(token: &Token) -> bool {
    let lemma = matches!(
        token.part_of_speech,
        PartOfSpeech::AuxiliaryVerb | PartOfSpeech::Adjective
    ) && token.basic_form == NAI;

    lemma || token.inflection_type == NAI_INFLECTION || token.detail.contains(NEGATIVE_DETAIL)
}

/// Find the first desire marker in the given tokens.
///
/// Only the first marker is considered, any later desire expressions in the
/// same sentence are ignored.
pub fn find_marker(tokens: &[Token]) -> Option<Marker> {
    for (index, token) in tokens.iter().enumerate() {
        let next = tokens.get(index + 1);
        let negated = next.is_some_and(is_negator);

        let kind = if token.is(PartOfSpeech::AuxiliaryVerb) && token.surface == TAI {
            MarkerKind::Auxiliary
        } else if token.part_of_speech.is_verb_or_adjective() && token.surface.ends_with(TAI) {
            MarkerKind::Suffixed
        } else if token.surface == TAKU && negated {
            MarkerKind::Stem
        } else {
            continue;
        };

        tracing::trace!(index, ?kind, negated, surface = %token.surface, "Found desire marker");

        return Some(Marker {
            index,
            kind,
            negated,
        });
    }

    None
}

/// Detect whether the tokens express a desire.
pub fn detect(tokens: &[Token]) -> DesireSignal {
    match find_marker(tokens) {
        Some(marker) => DesireSignal {
            present: true,
            negated: marker.negated,
        },
        None => DesireSignal::default(),
    }
}

/// Extract the verb that the first desire marker attaches to.
pub fn extract(tokens: &[Token]) -> Option<ExtractedVerb> {
    let marker = find_marker(tokens)?;
    extract_at(tokens, marker)
}

/// Extract the verb attached to an already located marker.
pub fn extract_at(tokens: &[Token], marker: Marker) -> Option<ExtractedVerb> {
    let previous = marker
        .index
        .checked_sub(1)
        .and_then(|index| tokens.get(index))
        .filter(|token| token.is(PartOfSpeech::Verb));

    if let Some(previous) = previous {
        return Some(ExtractedVerb::from_basic_form(&previous.basic_form));
    }

    let token = tokens.get(marker.index)?;

    if !token.part_of_speech.is_verb_or_adjective() || !token.surface.ends_with(TAI) {
        return None;
    }

    let stem = token
        .basic_form
        .strip_suffix(TAI)
        .unwrap_or(&token.basic_form);

    if stem.is_empty() {
        return None;
    }

    Some(ExtractedVerb::from_basic_form(stem))
}

/// Find the tokens making up the noun phrase directly in front of the desire
/// marker's する, by collecting the run of nouns preceding it.
pub fn noun_phrase(tokens: &[Token], marker: Marker) -> Option<String> {
    let suru = marker.index.checked_sub(1)?;

    if tokens.get(suru)?.basic_form != SURU {
        return None;
    }

    let start = tokens[..suru]
        .iter()
        .rposition(|token| !token.is(PartOfSpeech::Noun))
        .map_or(0, |n| n + 1);

    let phrase = tokens[start..suru]
        .iter()
        .map(|token| token.surface.as_str())
        .collect::<String>();

    (!phrase.is_empty()).then_some(phrase)
}
