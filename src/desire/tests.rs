use super::{detect, extract, find_marker, noun_phrase, DesireSignal, ExtractedVerb, MarkerKind};
use crate::token::{parse_ipadic_output, PartOfSpeech, Token};

fn parse(output: &str) -> Vec<Token> {
    parse_ipadic_output(output).unwrap()
}

const IKITAI: &str = "\
行き\t動詞,自立,*,*,五段・カ行促音便,連用形,行く,イキ,イキ
たい\t助動詞,*,*,*,特殊・タイ,基本形,たい,タイ,タイ
EOS
";

const TABETAKUNAI: &str = "\
食べ\t動詞,自立,*,*,一段,連用形,食べる,タベ,タベ
たく\t助動詞,*,*,*,特殊・タイ,連用テ接続,たい,タク,タク
ない\t助動詞,*,*,*,特殊・ナイ,基本形,ない,ナイ,ナイ
EOS
";

const BENKYOU_SHITAI: &str = "\
今日\t名詞,副詞可能,*,*,*,*,今日,キョウ,キョー
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
数学\t名詞,一般,*,*,*,*,数学,スウガク,スーガク
の\t助詞,連体化,*,*,*,*,の,ノ,ノ
宿題\t名詞,サ変接続,*,*,*,*,宿題,シュクダイ,シュクダイ
勉強\t名詞,サ変接続,*,*,*,*,勉強,ベンキョウ,ベンキョー
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
たい\t助動詞,*,*,*,特殊・タイ,基本形,たい,タイ,タイ
EOS
";

const NO_DESIRE: &str = "\
今日\t名詞,副詞可能,*,*,*,*,今日,キョウ,キョー
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
晴れ\t名詞,一般,*,*,*,*,晴れ,ハレ,ハレ
です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
EOS
";

#[test]
fn affirmative_auxiliary() {
    let tokens = parse(IKITAI);

    assert_eq!(
        detect(&tokens),
        DesireSignal {
            present: true,
            negated: false
        }
    );

    assert_eq!(
        extract(&tokens),
        Some(ExtractedVerb::Verb("行く".to_owned()))
    );
}

#[test]
fn negated_stem() {
    let tokens = parse(TABETAKUNAI);

    let marker = find_marker(&tokens).unwrap();
    assert_eq!(marker.index, 1);
    assert_eq!(marker.kind, MarkerKind::Stem);

    assert_eq!(
        detect(&tokens),
        DesireSignal {
            present: true,
            negated: true
        }
    );

    assert_eq!(
        extract(&tokens),
        Some(ExtractedVerb::Verb("食べる".to_owned()))
    );
}

#[test]
fn taku_without_negator_is_not_a_marker() {
    let tokens = parse(
        "\
食べ\t動詞,自立,*,*,一段,連用形,食べる,タベ,タベ
たく\t助動詞,*,*,*,特殊・タイ,連用テ接続,たい,タク,タク
て\t助詞,接続助詞,*,*,*,*,て,テ,テ
EOS
",
    );

    assert_eq!(detect(&tokens), DesireSignal::default());
    assert_eq!(extract(&tokens), None);
}

#[test]
fn suru_sentinel() {
    let tokens = parse(BENKYOU_SHITAI);
    assert!(detect(&tokens).present);
    assert_eq!(extract(&tokens), Some(ExtractedVerb::Suru));
}

#[test]
fn noun_phrase_from_tokens() {
    let tokens = parse(BENKYOU_SHITAI);
    let marker = find_marker(&tokens).unwrap();
    assert_eq!(noun_phrase(&tokens, marker).as_deref(), Some("宿題勉強"));

    let tokens = parse(IKITAI);
    let marker = find_marker(&tokens).unwrap();
    assert_eq!(noun_phrase(&tokens, marker), None);
}

#[test]
fn no_marker() {
    let tokens = parse(NO_DESIRE);
    assert_eq!(find_marker(&tokens), None);
    assert_eq!(detect(&tokens), DesireSignal::default());
    assert_eq!(extract(&tokens), None);
}

#[test]
fn empty() {
    assert_eq!(detect(&[]), DesireSignal::default());
    assert_eq!(extract(&[]), None);
}

#[test]
fn suffixed_marker_strips_desire() {
    let tokens = [Token::new("行きたい", "行きたい", PartOfSpeech::Adjective)];

    let marker = find_marker(&tokens).unwrap();
    assert_eq!(marker.kind, MarkerKind::Suffixed);
    assert_eq!(
        extract(&tokens),
        Some(ExtractedVerb::Verb("行き".to_owned()))
    );
}

#[test]
fn marker_without_verb() {
    let tokens = [
        Token::new("ケーキ", "ケーキ", PartOfSpeech::Noun),
        Token::new("たい", "たい", PartOfSpeech::AuxiliaryVerb),
    ];

    assert!(detect(&tokens).present);
    assert_eq!(extract(&tokens), None);
}

#[test]
fn only_first_marker() {
    let tokens = parse(
        "\
行き\t動詞,自立,*,*,五段・カ行促音便,連用形,行く,イキ,イキ
たい\t助動詞,*,*,*,特殊・タイ,基本形,たい,タイ,タイ
し\t助詞,接続助詞,*,*,*,*,し,シ,シ
食べ\t動詞,自立,*,*,一段,連用形,食べる,タベ,タベ
たく\t助動詞,*,*,*,特殊・タイ,連用テ接続,たい,タク,タク
ない\t助動詞,*,*,*,特殊・ナイ,基本形,ない,ナイ,ナイ
EOS
",
    );

    assert_eq!(
        detect(&tokens),
        DesireSignal {
            present: true,
            negated: false
        }
    );

    assert_eq!(
        extract(&tokens),
        Some(ExtractedVerb::Verb("行く".to_owned()))
    );
}

#[test]
fn negator_by_detail() {
    let mut negator = Token::new("ん", "ん", PartOfSpeech::AuxiliaryVerb);
    negator.detail = "否定".to_owned();

    let tokens = [
        Token::new("行き", "行く", PartOfSpeech::Verb),
        Token::new("たく", "たい", PartOfSpeech::AuxiliaryVerb),
        negator,
    ];

    assert_eq!(
        detect(&tokens),
        DesireSignal {
            present: true,
            negated: true
        }
    );
}
