use super::{classify, conjugate, inflections, ConjugationClass, Polarity};

use ConjugationClass::*;

macro_rules! test_case {
    ($verb:expr, $class:expr, $affirmative:expr, $negated:expr) => {
        assert_eq!(classify($verb), $class, "classifying `{}`", $verb);
        assert_eq!(conjugate($verb, false).text, $affirmative, "affirmative `{}`", $verb);
        assert_eq!(conjugate($verb, true).text, $negated, "negated `{}`", $verb);
    };
}

#[test]
fn godan() {
    test_case!("買う", GodanU, "買えば", "買わなかったら");
    test_case!("待つ", GodanTsu, "待てば", "待たなかったら");
    test_case!("帰る", GodanRu, "帰れば", "帰らなかったら");
    test_case!("書く", GodanKu, "書けば", "書かなかったら");
    test_case!("行く", GodanKu, "行けば", "行かなかったら");
    test_case!("泳ぐ", GodanGu, "泳げば", "泳がなかったら");
    test_case!("話す", GodanSu, "話せば", "話さなかったら");
    test_case!("読む", GodanMu, "読めば", "読まなかったら");
    test_case!("遊ぶ", GodanBu, "遊べば", "遊ばなかったら");
    test_case!("死ぬ", GodanNu, "死ねば", "死ななかったら");
}

#[test]
fn ichidan() {
    test_case!("食べる", Ichidan, "食べれば", "食べなかったら");
    test_case!("起きる", Ichidan, "起きれば", "起きなかったら");
    test_case!("たべる", Ichidan, "たべれば", "たべなかったら");
    test_case!("見る", Ichidan, "見れば", "見なかったら");
    test_case!("寝る", Ichidan, "寝れば", "寝なかったら");
    test_case!("夢見る", Ichidan, "夢見れば", "夢見なかったら");
}

#[test]
fn ru_without_ichidan_stem() {
    // A final る which isn't preceded by an い or え row kana is godan.
    test_case!("作る", GodanRu, "作れば", "作らなかったら");
    test_case!("とる", GodanRu, "とれば", "とらなかったら");
    test_case!("わかる", GodanRu, "わかれば", "わからなかったら");
}

#[test]
fn godan_exceptions() {
    test_case!("はいる", GodanRu, "はいれば", "はいらなかったら");
    test_case!("かえる", GodanRu, "かえれば", "かえらなかったら");
    test_case!("しゃべる", GodanRu, "しゃべれば", "しゃべらなかったら");
}

#[test]
fn kana_verbs_ending_in_suru() {
    test_case!("こする", GodanRu, "こすれば", "こすらなかったら");
    test_case!("さする", GodanRu, "さすれば", "さすらなかったら");
    test_case!("かする", GodanRu, "かすれば", "かすらなかったら");
}

#[test]
fn suru() {
    test_case!("する", SuruLightVerb, "すれば", "しなかったら");
    test_case!("勉強する", SuruLightVerb, "勉強すれば", "勉強しなかったら");
    test_case!("ドライブする", SuruLightVerb, "ドライブすれば", "ドライブしなかったら");
}

#[test]
fn kuru() {
    test_case!("来る", Kuru, "来れば", "来なかったら");
    test_case!("くる", Kuru, "くれば", "こなかったら");
    test_case!("持ってくる", Kuru, "持ってくれば", "持ってこなかったら");
    test_case!("持って来る", Kuru, "持って来れば", "持って来なかったら");
}

#[test]
fn dekiru_is_ichidan() {
    test_case!("出来る", Ichidan, "出来れば", "出来なかったら");
    test_case!("できる", Ichidan, "できれば", "できなかったら");
}

#[test]
fn unknown() {
    test_case!("ほげ", Unknown, "ほげなら", "ほげじゃなかったら");
    test_case!("テスト", Unknown, "テストなら", "テストじゃなかったら");
    test_case!("", Unknown, "なら", "じゃなかったら");
}

#[test]
fn deterministic() {
    for verb in ["買う", "食べる", "勉強する", "来る", "ほげ"] {
        for negated in [false, true] {
            assert_eq!(conjugate(verb, negated), conjugate(verb, negated));
        }
    }
}

#[test]
fn ku_suffixes_differ() {
    let affirmative = conjugate("書く", false);
    let negated = conjugate("書く", true);

    assert_eq!(affirmative.class, negated.class);
    assert_ne!(affirmative.text, negated.text);
    assert!(affirmative.text.ends_with("けば"));
    assert!(negated.text.ends_with("かなかったら"));
}

#[test]
fn every_class_is_reachable() {
    let verbs = [
        "食べる", "買う", "待つ", "帰る", "書く", "泳ぐ", "話す", "読む", "遊ぶ", "死ぬ", "する",
        "来る", "ほげ",
    ];

    let classes = verbs.iter().map(|v| classify(v)).collect::<Vec<_>>();
    assert_eq!(classes, ConjugationClass::ALL);
}

#[test]
fn all_inflections() {
    let inflections = inflections("読む");

    assert_eq!(inflections.class, GodanMu);
    assert_eq!(inflections.get(Polarity::Affirmative), Some("読めば"));
    assert_eq!(inflections.get(Polarity::Negated), Some("読まなかったら"));

    let forms = inflections.iter().collect::<Vec<_>>();
    assert_eq!(
        forms,
        [
            (Polarity::Affirmative, "読めば"),
            (Polarity::Negated, "読まなかったら")
        ]
    );
}
