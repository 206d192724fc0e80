//! Module which classifies a verb by its dictionary form and inflects it into
//! the hypothetical (～ば) or negative conditional (～なかったら) forms.

mod godan;

#[cfg(test)]
mod tests;

use core::fmt;

use fixed_map::{Key, Map};

use crate::kana;

use self::godan::Godan;

/// Suffix of the light verb.
pub const SURU: &str = "する";

/// Kana spellings of godan verbs which look like ichidan verbs.
const GODAN_RU_EXCEPTIONS: &[&str] = &[
    "はいる",
    "かえる",
    "しる",
    "はしる",
    "まいる",
    "へる",
    "しゃべる",
    "すべる",
    "ける",
    "いじる",
    "にぎる",
    "あせる",
    "ちる",
];

/// Ichidan verbs whose stem ends in a kanji, and as such can't be told apart
/// from godan verbs by their kana.
const KANJI_ICHIDAN: &[&str] = &[
    "見る", "着る", "寝る", "出る", "似る", "煮る", "居る", "得る", "経る", "干る", "射る",
    "出来る",
];

/// The godan rows and the class they belong to.
fn godan_rows() -> [(ConjugationClass, &'static Godan); 9] {
    [
        (ConjugationClass::GodanU, godan::U),
        (ConjugationClass::GodanTsu, godan::TSU),
        (ConjugationClass::GodanRu, godan::RU),
        (ConjugationClass::GodanKu, godan::KU),
        (ConjugationClass::GodanGu, godan::GU),
        (ConjugationClass::GodanSu, godan::SU),
        (ConjugationClass::GodanMu, godan::MU),
        (ConjugationClass::GodanBu, godan::BU),
        (ConjugationClass::GodanNu, godan::NU),
    ]
}

/// The class a verb inflects as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Key)]
pub enum ConjugationClass {
    /// Vowel stem verb, like 食べる.
    Ichidan,
    /// Consonant stem verb ending in う.
    GodanU,
    /// Consonant stem verb ending in つ.
    GodanTsu,
    /// Consonant stem verb ending in る.
    GodanRu,
    /// Consonant stem verb ending in く.
    GodanKu,
    /// Consonant stem verb ending in ぐ.
    GodanGu,
    /// Consonant stem verb ending in す.
    GodanSu,
    /// Consonant stem verb ending in む.
    GodanMu,
    /// Consonant stem verb ending in ぶ.
    GodanBu,
    /// Consonant stem verb ending in ぬ.
    GodanNu,
    /// The light verb する, or a noun compounded with it.
    SuruLightVerb,
    /// The irregular 来る.
    Kuru,
    /// Anything else.
    Unknown,
}

impl ConjugationClass {
    pub const ALL: [ConjugationClass; 13] = [
        ConjugationClass::Ichidan,
        ConjugationClass::GodanU,
        ConjugationClass::GodanTsu,
        ConjugationClass::GodanRu,
        ConjugationClass::GodanKu,
        ConjugationClass::GodanGu,
        ConjugationClass::GodanSu,
        ConjugationClass::GodanMu,
        ConjugationClass::GodanBu,
        ConjugationClass::GodanNu,
        ConjugationClass::SuruLightVerb,
        ConjugationClass::Kuru,
        ConjugationClass::Unknown,
    ];

    /// Describe the class.
    pub fn describe(&self) -> &'static str {
        match self {
            ConjugationClass::Ichidan => "一段 (ichidan)",
            ConjugationClass::GodanU => "五段 う (godan u)",
            ConjugationClass::GodanTsu => "五段 つ (godan tsu)",
            ConjugationClass::GodanRu => "五段 る (godan ru)",
            ConjugationClass::GodanKu => "五段 く (godan ku)",
            ConjugationClass::GodanGu => "五段 ぐ (godan gu)",
            ConjugationClass::GodanSu => "五段 す (godan su)",
            ConjugationClass::GodanMu => "五段 む (godan mu)",
            ConjugationClass::GodanBu => "五段 ぶ (godan bu)",
            ConjugationClass::GodanNu => "五段 ぬ (godan nu)",
            ConjugationClass::SuruLightVerb => "サ変 (suru)",
            ConjugationClass::Kuru => "カ変 (kuru)",
            ConjugationClass::Unknown => "unknown",
        }
    }

    fn godan(&self) -> Option<&'static Godan> {
        godan_rows()
            .into_iter()
            .find(|(class, _)| class == self)
            .map(|(_, godan)| godan)
    }
}

impl fmt::Display for ConjugationClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe().fmt(f)
    }
}

/// Whether the desire being answered was negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Key)]
pub enum Polarity {
    /// The hypothetical, "if you do ~".
    Affirmative,
    /// The negative conditional, "if you don't do ~".
    Negated,
}

impl Polarity {
    /// Construct a polarity from a negation flag.
    #[inline]
    pub fn from_negated(negated: bool) -> Self {
        if negated {
            Polarity::Negated
        } else {
            Polarity::Affirmative
        }
    }
}

/// How to rewrite the dictionary form of a verb.
#[derive(Debug, Clone, Copy)]
struct Suffix {
    /// Number of trailing characters to drop.
    drop: usize,
    /// Fragments to append.
    append: [&'static str; 2],
}

impl Suffix {
    const fn new(drop: usize, a: &'static str, b: &'static str) -> Self {
        Self {
            drop,
            append: [a, b],
        }
    }

    fn apply(&self, verb: &str) -> String {
        let mut cut = verb.len();

        for (n, _) in verb.char_indices().rev().take(self.drop) {
            cut = n;
        }

        let mut out = String::from(&verb[..cut]);

        for s in self.append {
            out.push_str(s);
        }

        out
    }
}

/// Look up the suffix to use for a class.
fn suffix(class: ConjugationClass, polarity: Polarity) -> Suffix {
    if let Some(g) = class.godan() {
        return match polarity {
            Polarity::Affirmative => Suffix::new(1, g.e, "ば"),
            Polarity::Negated => Suffix::new(1, g.a, "なかったら"),
        };
    }

    match (class, polarity) {
        (ConjugationClass::Ichidan | ConjugationClass::Kuru, Polarity::Affirmative) => {
            Suffix::new(1, "れ", "ば")
        }
        (ConjugationClass::Ichidan | ConjugationClass::Kuru, Polarity::Negated) => {
            Suffix::new(1, "", "なかったら")
        }
        (ConjugationClass::SuruLightVerb, Polarity::Affirmative) => Suffix::new(2, "すれ", "ば"),
        (ConjugationClass::SuruLightVerb, Polarity::Negated) => {
            Suffix::new(2, "し", "なかったら")
        }
        (_, Polarity::Affirmative) => Suffix::new(0, "", "なら"),
        (_, Polarity::Negated) => Suffix::new(0, "じゃ", "なかったら"),
    }
}

/// Classify the dictionary form of a verb.
///
/// This is total, anything which can't be recognized is classified as
/// [`ConjugationClass::Unknown`].
pub fn classify(verb: &str) -> ConjugationClass {
    if is_suru(verb) {
        return ConjugationClass::SuruLightVerb;
    }

    if verb == "来る"
        || verb == "くる"
        || ["て来る", "で来る", "てくる", "でくる"]
            .iter()
            .any(|s| verb.ends_with(s))
    {
        return ConjugationClass::Kuru;
    }

    if KANJI_ICHIDAN.iter().any(|v| verb.ends_with(v)) {
        return ConjugationClass::Ichidan;
    }

    let mut chars = verb.chars();

    let Some(last) = chars.next_back() else {
        return ConjugationClass::Unknown;
    };

    if last == 'る'
        && chars.next_back().is_some_and(kana::is_ichidan_stem)
        && !GODAN_RU_EXCEPTIONS.contains(&verb)
    {
        return ConjugationClass::Ichidan;
    }

    for (class, g) in godan_rows() {
        if g.u == last {
            return class;
        }
    }

    ConjugationClass::Unknown
}

/// Test if the verb is する on its own, or compounded with a noun.
///
/// A kana verb which happens to end in する, like こする, is not.
fn is_suru(verb: &str) -> bool {
    let Some(prefix) = verb.strip_suffix(SURU) else {
        return false;
    };

    match prefix.chars().next_back() {
        Some(c) => !kana::is_hiragana(c),
        None => true,
    }
}

/// A verb inflected into a single form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    /// The class the verb was inflected as.
    pub class: ConjugationClass,
    /// The inflected text.
    pub text: String,
}

impl fmt::Display for Conjugation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text.fmt(f)
    }
}

/// Inflect a verb into its hypothetical form, or its negative conditional
/// form if `negated` is set.
pub fn conjugate(verb: &str, negated: bool) -> Conjugation {
    let class = classify(verb);
    let polarity = Polarity::from_negated(negated);

    let text = match (class, polarity, verb.strip_suffix("くる")) {
        // The kana spelling changes vowel in the negative.
        (ConjugationClass::Kuru, Polarity::Negated, Some(prefix)) => {
            format!("{prefix}こなかったら")
        }
        _ => suffix(class, polarity).apply(verb),
    };

    tracing::trace!(verb, ?class, ?polarity, text = %text);
    Conjugation { class, text }
}

/// Every form a verb can be inflected into.
pub struct Inflections {
    /// The class of the verb.
    pub class: ConjugationClass,
    forms: Map<Polarity, String>,
}

impl Inflections {
    /// Get the form for the given polarity.
    pub fn get(&self, polarity: Polarity) -> Option<&str> {
        self.forms.get(polarity).map(String::as_str)
    }

    /// Iterate over all inflected forms.
    pub fn iter(&self) -> impl Iterator<Item = (Polarity, &str)> + '_ {
        self.forms.iter().map(|(k, v)| (k, v.as_str()))
    }
}

/// Inflect a verb into every supported form.
pub fn inflections(verb: &str) -> Inflections {
    let mut forms = Map::new();
    let mut class = ConjugationClass::Unknown;

    for polarity in [Polarity::Affirmative, Polarity::Negated] {
        let c = conjugate(verb, polarity == Polarity::Negated);
        class = c.class;
        forms.insert(polarity, c.text);
    }

    Inflections { class, forms }
}
