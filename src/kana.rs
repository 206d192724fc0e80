//! Classification of hiragana by the vowel row they belong to.

#[cfg(test)]
mod tests;

/// The vowel row of a kana.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Row {
    /// あ段.
    A,
    /// い段.
    I,
    /// う段.
    U,
    /// え段.
    E,
    /// お段.
    O,
    /// The moraic nasal ん.
    N,
    // Lower hiragana used for composite kana and the sokuon.
    L,
    // Not hiragana.
    X,
}

/// Test if a character is hiragana.
pub fn is_hiragana(c: char) -> bool {
    !matches!(get_hiragana(c), None | Some(Row::X))
}

/// Get the vowel row of the given hiragana, if it is one.
pub fn row(c: char) -> Option<Row> {
    get_hiragana(c).filter(|row| *row != Row::X)
}

/// Test if the character is a kana which marks an ichidan stem when it
/// precedes a final `る`, which is any hiragana in the い or え rows.
pub fn is_ichidan_stem(c: char) -> bool {
    matches!(row(c), Some(Row::I | Row::E))
}

fn get_hiragana(c: char) -> Option<Row> {
    let c = usize::try_from(c as u32).ok()?;
    let c = c.checked_sub(tables::HIRA_B)?;
    Some(*tables::HIRA_T.get(c)?)
}

mod tables {
    use super::Row::*;

    pub(super) static HIRA_B: usize = 0x3040;

    #[rustfmt::skip]
    pub(super) static HIRA_T: [super::Row; 0x60] = [
        /*U+304x*/
        /*　*/ X, /*ぁ*/ L, /*あ*/ A, /*ぃ*/ L, /*い*/ I, /*ぅ*/ L, /*う*/ U, /*ぇ*/ L,
        /*え*/ E, /*ぉ*/ L, /*お*/ O, /*か*/ A, /*が*/ A, /*き*/ I, /*ぎ*/ I, /*く*/ U,
        /*U+305x*/
        /*ぐ*/ U, /*け*/ E, /*げ*/ E, /*こ*/ O, /*ご*/ O, /*さ*/ A, /*ざ*/ A, /*し*/ I,
        /*じ*/ I, /*す*/ U, /*ず*/ U, /*せ*/ E, /*ぜ*/ E, /*そ*/ O, /*ぞ*/ O, /*た*/ A,
        /*U+306x*/
        /*だ*/ A, /*ち*/ I, /*ぢ*/ I, /*っ*/ L, /*つ*/ U, /*づ*/ U, /*て*/ E, /*で*/ E,
        /*と*/ O, /*ど*/ O, /*な*/ A, /*に*/ I, /*ぬ*/ U, /*ね*/ E, /*の*/ O, /*は*/ A,
        /*U+307x*/
        /*ば*/ A, /*ぱ*/ A, /*ひ*/ I, /*び*/ I, /*ぴ*/ I, /*ふ*/ U, /*ぶ*/ U, /*ぷ*/ U,
        /*へ*/ E, /*べ*/ E, /*ぺ*/ E, /*ほ*/ O, /*ぼ*/ O, /*ぽ*/ O, /*ま*/ A, /*み*/ I,
        /*U+308x*/
        /*む*/ U, /*め*/ E, /*も*/ O, /*ゃ*/ L, /*や*/ A, /*ゅ*/ L, /*ゆ*/ U, /*ょ*/ L,
        /*よ*/ O, /*ら*/ A, /*り*/ I, /*る*/ U, /*れ*/ E, /*ろ*/ O, /*ゎ*/ L, /*わ*/ A,
        /*U+309x*/
        /*ゐ*/ I, /*ゑ*/ E, /*を*/ O, /*ん*/ N, /*ゔ*/ U, /*ゕ*/ L, /*ゖ*/ L, /*　*/ X,
        /*　*/ X, /*　*/ X, /*　*/ X, /*　*/ X, /*　*/ X, /*ゝ*/ X, /*ゞ*/ X, /*ゟ*/ X,
    ];
}
