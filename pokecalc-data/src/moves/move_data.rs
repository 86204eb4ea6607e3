use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    MoveCategory,
    Type,
};

/// Data about a particular move.
///
/// Only the parts of a move that take part in damage calculation are modeled. Like species, a
/// move carries a primary (Japanese) name and a secondary (English) name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    /// Primary (Japanese) name of the move.
    pub name: String,
    /// Secondary (English) name of the move.
    pub name_en: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    ///
    /// Required: a move record without a type is a broken table.
    #[serde(rename = "type")]
    pub primary_type: Type,
    /// Base power, which is absent for status moves and moves with fixed damage.
    #[serde(default)]
    pub base_power: Option<u32>,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

impl MoveData {
    /// The base power used for damage calculation.
    ///
    /// Status moves never deal damage, regardless of what the table says.
    pub fn damaging_power(&self) -> Option<u32> {
        if self.category == MoveCategory::Status {
            return None;
        }
        self.base_power.filter(|power| *power > 0)
    }
}
