use std::sync::LazyLock;

use ahash::HashMap;

/// Pairs of hiragana and katakana characters that take part in script conversion.
///
/// Small vowels and the prolonged sound mark are intentionally absent; they pass through
/// unchanged.
#[rustfmt::skip]
const KANA_PAIRS: &[(char, char)] = &[
    ('あ', 'ア'), ('い', 'イ'), ('う', 'ウ'), ('え', 'エ'), ('お', 'オ'),
    ('か', 'カ'), ('き', 'キ'), ('く', 'ク'), ('け', 'ケ'), ('こ', 'コ'),
    ('が', 'ガ'), ('ぎ', 'ギ'), ('ぐ', 'グ'), ('げ', 'ゲ'), ('ご', 'ゴ'),
    ('さ', 'サ'), ('し', 'シ'), ('す', 'ス'), ('せ', 'セ'), ('そ', 'ソ'),
    ('ざ', 'ザ'), ('じ', 'ジ'), ('ず', 'ズ'), ('ぜ', 'ゼ'), ('ぞ', 'ゾ'),
    ('た', 'タ'), ('ち', 'チ'), ('つ', 'ツ'), ('て', 'テ'), ('と', 'ト'),
    ('だ', 'ダ'), ('ぢ', 'ヂ'), ('づ', 'ヅ'), ('で', 'デ'), ('ど', 'ド'),
    ('な', 'ナ'), ('に', 'ニ'), ('ぬ', 'ヌ'), ('ね', 'ネ'), ('の', 'ノ'),
    ('は', 'ハ'), ('ひ', 'ヒ'), ('ふ', 'フ'), ('へ', 'ヘ'), ('ほ', 'ホ'),
    ('ば', 'バ'), ('び', 'ビ'), ('ぶ', 'ブ'), ('べ', 'ベ'), ('ぼ', 'ボ'),
    ('ぱ', 'パ'), ('ぴ', 'ピ'), ('ぷ', 'プ'), ('ぺ', 'ペ'), ('ぽ', 'ポ'),
    ('ま', 'マ'), ('み', 'ミ'), ('む', 'ム'), ('め', 'メ'), ('も', 'モ'),
    ('や', 'ヤ'), ('ゆ', 'ユ'), ('よ', 'ヨ'),
    ('ら', 'ラ'), ('り', 'リ'), ('る', 'ル'), ('れ', 'レ'), ('ろ', 'ロ'),
    ('わ', 'ワ'), ('ゐ', 'ヰ'), ('ゑ', 'ヱ'), ('を', 'ヲ'), ('ん', 'ン'),
    ('ゃ', 'ャ'), ('ゅ', 'ュ'), ('ょ', 'ョ'), ('っ', 'ッ'),
];

static HIRAGANA_TO_KATAKANA: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| KANA_PAIRS.iter().copied().collect());

static KATAKANA_TO_HIRAGANA: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    KANA_PAIRS
        .iter()
        .map(|(hiragana, katakana)| (*katakana, *hiragana))
        .collect()
});

fn convert(input: &str, table: &HashMap<char, char>) -> String {
    input
        .chars()
        .map(|c| table.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Converts every known hiragana character in the input to katakana.
pub fn hiragana_to_katakana(input: &str) -> String {
    convert(input, &HIRAGANA_TO_KATAKANA)
}

/// Converts every known katakana character in the input to hiragana.
pub fn katakana_to_hiragana(input: &str) -> String {
    convert(input, &KATAKANA_TO_HIRAGANA)
}
