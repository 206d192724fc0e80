//! Composing the reply from an inflected verb or a noun phrase.


use std::sync::LazyLock;

use regex::Regex;

/// Captures the phrase preceding an affirmative する desire.
static RE_SURU: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*?)(したい|してみたい|したいな|してみたいな)(\s|$|[、。!?！？])").unwrap()
});

/// Captures the phrase preceding a negated する desire.
static RE_SURU_NEGATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*?)(したくない|してみたくない|したくないな|してみたくないな)(\s|$|[、。!?！？])")
        .unwrap()
});

/// The phrase a reply is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase<'a> {
    /// A verb already inflected into the hypothetical or negative conditional.
    Verb(&'a str),
    /// A noun phrase which is to be combined with する.
    Noun(&'a str),
}

/// Compose the reply.
pub fn compose(phrase: Phrase<'_>, negated: bool) -> String {
    match (phrase, negated) {
        (Phrase::Verb(form), false) => format!("じゃあ{form}ええやん"),
        (Phrase::Verb(form), true) => format!("じゃあ{form}ええんちゃう"),
        (Phrase::Noun(noun), false) => format!("じゃあ{noun}すればええやん"),
        (Phrase::Noun(noun), true) => format!("じゃあ{noun}しなかったらええやん"),
    }
}

/// Extract the noun phrase in front of したい (or したくない if `negated`)
/// from the raw text of a message.
///
/// The phrase is everything from the start of the text up to the first
/// desire which is followed by whitespace, punctuation or the end of the
/// text.
pub fn noun_phrase(text: &str, negated: bool) -> Option<&str> {
    let re = if negated { &*RE_SURU_NEGATED } else { &*RE_SURU };
    let phrase = re.captures(text)?.get(1)?.as_str();
    (!phrase.is_empty()).then_some(phrase)
}
