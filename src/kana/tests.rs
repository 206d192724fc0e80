use super::{is_hiragana, is_ichidan_stem, row, Row};

#[test]
fn rows() {
    assert_eq!(row('か'), Some(Row::A));
    assert_eq!(row('み'), Some(Row::I));
    assert_eq!(row('る'), Some(Row::U));
    assert_eq!(row('べ'), Some(Row::E));
    assert_eq!(row('ぼ'), Some(Row::O));
    assert_eq!(row('ん'), Some(Row::N));
    assert_eq!(row('っ'), Some(Row::L));
    assert_eq!(row('カ'), None);
    assert_eq!(row('食'), None);
    assert_eq!(row('a'), None);
}

#[test]
fn ichidan_stems() {
    for c in "いきぎしじちぢにひびぴみりえけげせぜてでねへべぺめれ".chars() {
        assert!(is_ichidan_stem(c), "expected `{c}` to be an ichidan stem");
    }

    for c in "あかさたなまやらわうくすつぬむゆるおこそとのもよろんっ見食".chars() {
        assert!(!is_ichidan_stem(c), "expected `{c}` to not be an ichidan stem");
    }
}

#[test]
fn hiragana() {
    assert!(is_hiragana('あ'));
    assert!(is_hiragana('ゃ'));
    assert!(!is_hiragana('ア'));
    assert!(!is_hiragana('゛'));
    assert!(!is_hiragana('漢'));
}
