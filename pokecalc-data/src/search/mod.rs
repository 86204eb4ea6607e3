mod kana;
mod listing;
mod matcher;
mod romaji;

pub use kana::{
    hiragana_to_katakana,
    katakana_to_hiragana,
};
pub use listing::{
    SpeciesListing,
    learnable_moves,
    species_listing,
};
pub use matcher::{
    matches_search,
    matches_search_with_secondary_name,
};
pub use romaji::{
    ROMAJI_TABLE,
    romaji_to_hiragana,
};
