use anyhow::{
    Error,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    StatTable,
    Type,
};

/// Data about a particular species.
///
/// Species data is common to all Mons of a given species. Data about a specific Mon (such as its
/// effort values or boosts) does not belong here.
///
/// Every species carries two names: the primary name is the Japanese display name, and the
/// secondary name is the lowercase English name. Alternate formes share the primary name of their
/// base species, so only the secondary name (for example, `rotom-heat`) is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The primary (Japanese) name.
    pub name: String,
    /// The secondary (English) name, which is unique across all species and formes.
    pub name_en: String,
    /// Base stats.
    pub base_stats: StatTable,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    pub secondary_type: Option<Type>,
    /// Learnable moves by primary name.
    pub moves: Vec<String>,
    /// Learnable moves by secondary name.
    ///
    /// Index-aligned with [`SpeciesData::moves`].
    pub moves_en: Vec<String>,
    /// Abilities by primary name.
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Abilities by secondary name.
    #[serde(default)]
    pub abilities_en: Vec<String>,
}

impl SpeciesData {
    /// Utility method for returning the species' two types.
    pub fn types(&self) -> (Type, Option<Type>) {
        (self.primary_type, self.secondary_type)
    }

    /// The species' types as a list of one or two types.
    pub fn type_list(&self) -> Vec<Type> {
        match self.secondary_type {
            Some(secondary) if secondary != self.primary_type => {
                Vec::from_iter([self.primary_type, secondary])
            }
            _ => Vec::from_iter([self.primary_type]),
        }
    }

    /// Does the species have the given type naturally?
    pub fn has_type(&self, typ: Type) -> bool {
        self.primary_type == typ || self.secondary_type == Some(typ)
    }

    /// The base species part of the secondary name.
    ///
    /// `rotom-heat` becomes `rotom`.
    pub fn base_name_en(&self) -> &str {
        self.name_en
            .split_once('-')
            .map(|(base, _)| base)
            .unwrap_or(&self.name_en)
    }

    /// The forme part of the secondary name, if any.
    ///
    /// `landorus-therian` becomes `therian`.
    pub fn forme_en(&self) -> Option<&str> {
        self.name_en.split_once('-').map(|(_, forme)| forme)
    }

    /// The default ability, which is the first listed ability.
    pub fn default_ability(&self) -> Option<&str> {
        self.abilities.first().map(|ability| ability.as_str())
    }

    /// The base stat total (BST) of the species.
    pub fn bst(&self) -> u32 {
        self.base_stats.sum()
    }

    /// Checks the invariants of the record.
    ///
    /// A species must have at least one learnable move, and both move lists must be the same
    /// length.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.name_en.is_empty() {
            return Err(Error::msg("species has an empty name"));
        }
        if self.moves.is_empty() {
            return Err(Error::msg(format!(
                "species {} has no learnable moves",
                self.name_en
            )));
        }
        if self.moves.len() != self.moves_en.len() {
            return Err(Error::msg(format!(
                "species {} has {} moves but {} secondary move names",
                self.name_en,
                self.moves.len(),
                self.moves_en.len(),
            )));
        }
        Ok(())
    }
}
