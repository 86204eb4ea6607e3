use std::{
    cmp::Reverse,
    sync::LazyLock,
};

/// Curated romaji table.
///
/// Whole-word entries for commonly searched names come first, followed by single syllables.
pub const ROMAJI_TABLE: &[(&str, &str)] = &[
    ("pikachu", "ぴかちゅう"),
    ("fushigidane", "ふしぎだね"),
    ("hitokage", "ひとかげ"),
    ("zenigame", "ぜにがめ"),
    ("taiatari", "たいあたり"),
    ("hakaichuu", "はかいちゅう"),
    ("kaminari", "かみなり"),
    ("naminori", "なみのり"),
    ("hanabira", "はなびら"),
    ("a", "あ"),
    ("i", "い"),
    ("u", "う"),
    ("e", "え"),
    ("o", "お"),
    ("ka", "か"),
    ("ki", "き"),
    ("ku", "く"),
    ("ke", "け"),
    ("ko", "こ"),
    ("ga", "が"),
    ("gi", "ぎ"),
    ("gu", "ぐ"),
    ("ge", "げ"),
    ("go", "ご"),
    ("sa", "さ"),
    ("shi", "し"),
    ("su", "す"),
    ("se", "せ"),
    ("so", "そ"),
    ("za", "ざ"),
    ("ji", "じ"),
    ("zu", "ず"),
    ("ze", "ぜ"),
    ("zo", "ぞ"),
    ("ta", "た"),
    ("chi", "ち"),
    ("tsu", "つ"),
    ("te", "て"),
    ("to", "と"),
    ("da", "だ"),
    ("di", "ぢ"),
    ("du", "づ"),
    ("de", "で"),
    ("do", "ど"),
    ("na", "な"),
    ("ni", "に"),
    ("nu", "ぬ"),
    ("ne", "ね"),
    ("no", "の"),
    ("ha", "は"),
    ("hi", "ひ"),
    ("hu", "ふ"),
    ("fu", "ふ"),
    ("he", "へ"),
    ("ho", "ほ"),
    ("ba", "ば"),
    ("bi", "び"),
    ("bu", "ぶ"),
    ("be", "べ"),
    ("bo", "ぼ"),
    ("pa", "ぱ"),
    ("pi", "ぴ"),
    ("pu", "ぷ"),
    ("pe", "ぺ"),
    ("po", "ぽ"),
    ("ma", "ま"),
    ("mi", "み"),
    ("mu", "む"),
    ("me", "め"),
    ("mo", "も"),
    ("ya", "や"),
    ("yu", "ゆ"),
    ("yo", "よ"),
    ("ra", "ら"),
    ("ri", "り"),
    ("ru", "る"),
    ("re", "れ"),
    ("ro", "ろ"),
    ("wa", "わ"),
    ("wo", "を"),
    ("n", "ん"),
];

/// Table entries ordered longest key first, ties kept in table order.
static LONGEST_FIRST: LazyLock<Vec<(&str, &str)>> = LazyLock::new(|| {
    let mut entries = ROMAJI_TABLE.to_vec();
    entries.sort_by_key(|(romaji, _)| Reverse(romaji.len()));
    entries
});

/// Looks up an exact entry in the romaji table.
pub(crate) fn romaji_entry(romaji: &str) -> Option<&'static str> {
    ROMAJI_TABLE
        .iter()
        .find(|(key, _)| *key == romaji)
        .map(|(_, hiragana)| *hiragana)
}

/// Transliterates romanized input to hiragana on a best-effort basis.
///
/// An exact table entry wins. Otherwise, every table entry is replaced throughout the input in
/// order of decreasing length. Unknown letter sequences are left in place.
pub fn romaji_to_hiragana(input: &str) -> String {
    let input = input.to_lowercase();
    if let Some(hiragana) = romaji_entry(&input) {
        return hiragana.to_owned();
    }
    LONGEST_FIRST
        .iter()
        .fold(input, |result, (romaji, hiragana)| {
            result.replace(romaji, hiragana)
        })
}
