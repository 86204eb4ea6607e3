use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use unicase::UniCase;

use crate::{
    DataStoreByName,
    SpeciesData,
};

/// Forme names, as `(secondary name suffix, Japanese label)`.
///
/// The suffix is the part of a species' secondary name after the first `-`.
pub const FORME_NAMES: &[(&str, &str)] = &[
    ("incarnate", "けしん"),
    ("therian", "れいじゅう"),
    ("altered", "アナザー"),
    ("origin", "オリジン"),
    ("heat", "ヒート"),
    ("wash", "ウォッシュ"),
    ("frost", "フロスト"),
    ("fan", "スピン"),
    ("mow", "カット"),
    ("red-striped", "あかすじ"),
    ("blue-striped", "あおすじ"),
    ("sunshine", "ポジ"),
    ("east", "ひがし"),
    ("west", "にし"),
    ("autumn", "あき"),
    ("winter", "ふゆ"),
    ("spring", "はる"),
    ("summer", "なつ"),
    ("midday", "まひる"),
    ("midnight", "まよなか"),
    ("dusk", "たそがれ"),
    ("normal", "ノーマル"),
];

/// Looks up the Japanese label of a forme by its secondary name suffix.
pub fn forme_label(forme_en: &str) -> Option<&'static str> {
    FORME_NAMES
        .iter()
        .find(|(key, _)| *key == forme_en)
        .map(|(_, label)| *label)
}

/// Looks up the secondary name suffix of a forme by its Japanese label.
pub fn forme_key(label: &str) -> Option<&'static str> {
    FORME_NAMES
        .iter()
        .find(|(_, value)| *value == label)
        .map(|(key, _)| *key)
}

/// Error for a species display name that could not be resolved.
#[derive(Debug, Error)]
pub enum ResolveSpeciesError {
    #[error("species {0} not found")]
    SpeciesNotFound(String),
    #[error("unknown forme {forme} for species {species}")]
    UnknownForm { species: String, forme: String },
    #[error("species {0} has no such forme")]
    FormNotFound(String),
    #[error(transparent)]
    DataStore(#[from] anyhow::Error),
}

static FORME_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^（(]+)[（(](.+)[）)]$").unwrap());

/// Resolves a species by its display name.
///
/// The name may be a primary name, a secondary name, or a primary name qualified with a forme
/// label, like `ランドロス（れいじゅう）`. Exact matches always win over forme resolution.
pub fn resolve_species<D>(data: &D, display_name: &str) -> Result<SpeciesData, ResolveSpeciesError>
where
    D: DataStoreByName + ?Sized,
{
    if let Some(species) = data.get_species_by_name(display_name)? {
        return Ok(species);
    }

    let Some(captures) = FORME_QUALIFIER.captures(display_name) else {
        return Err(ResolveSpeciesError::SpeciesNotFound(
            display_name.to_owned(),
        ));
    };
    let base = captures.get(1).map_or("", |m| m.as_str());
    let label = captures.get(2).map_or("", |m| m.as_str());

    let base_species = data
        .find_species(&|species| species.name == base)?
        .ok_or_else(|| ResolveSpeciesError::SpeciesNotFound(base.to_owned()))?;
    let forme = forme_key(label).ok_or_else(|| ResolveSpeciesError::UnknownForm {
        species: base.to_owned(),
        forme: label.to_owned(),
    })?;

    let target = format!("{}-{forme}", base_species.base_name_en());
    let target = UniCase::new(target.as_str());
    data.find_species(&|species| UniCase::new(species.name_en.as_str()) == target)?
        .ok_or_else(|| ResolveSpeciesError::FormNotFound(display_name.to_owned()))
}
