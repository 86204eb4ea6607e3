use num::rational::Ratio;
use pokecalc_data::{
    BoostTable,
    NatureModifiers,
    SpeciesListing,
    StatTable,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use uuid::Uuid;

/// Placeholder for an empty free-text slot, like a held item or ability.
pub const NOTHING: &str = "なし";

/// The default nature label of a new Mon.
pub const DEFAULT_NATURE: &str = "がんばりや";

/// The default level of a new Mon.
pub const DEFAULT_LEVEL: u64 = 50;

/// The number of move slots a Mon has.
pub const MOVE_SLOTS: usize = 4;

/// Weather on the field.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Weather {
    #[string = "none"]
    #[alias = "なし"]
    #[default]
    None,
    #[string = "sun"]
    #[alias = "はれ"]
    Sun,
    #[string = "rain"]
    #[alias = "あめ"]
    Rain,
}

impl Weather {
    /// The damage modifier for a move of the given type.
    pub fn modifier(&self, move_type: Type) -> Ratio<u64> {
        match (self, move_type) {
            (Self::Sun, Type::Fire) | (Self::Rain, Type::Water) => Ratio::new(3, 2),
            (Self::Sun, Type::Water) | (Self::Rain, Type::Fire) => Ratio::new(1, 2),
            _ => Ratio::from_integer(1),
        }
    }
}

/// Terrain on the field.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Terrain {
    #[string = "none"]
    #[alias = "なし"]
    #[default]
    None,
    #[string = "electric"]
    #[alias = "エレキ"]
    Electric,
    #[string = "grassy"]
    #[alias = "グラス"]
    Grassy,
}

impl Terrain {
    /// Does the terrain boost the base power of a move of the given type?
    pub fn boosts(&self, move_type: Type) -> bool {
        matches!(
            (self, move_type),
            (Self::Electric, Type::Electric) | (Self::Grassy, Type::Grass)
        )
    }
}

/// Field state for a single calculation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub weather: Weather,
    pub terrain: Terrain,
    pub critical_hit: bool,
    /// Whether terastallization applies.
    ///
    /// Affects both the attacker's same-type bonus and the defender's types.
    pub terastallized: bool,
}

/// A single combatant, as edited by the user.
///
/// Item, ability, and nature are informational only. Stats are affected by
/// [`Mon::nature_modifiers`], not the nature label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mon {
    pub id: Uuid,
    /// Species display name.
    ///
    /// May be qualified with a forme label, like `ランドロス（れいじゅう）`.
    pub name: String,
    pub level: u64,
    pub item: String,
    pub ability: String,
    /// Tera type, where [`Type::None`] means the Mon has not picked one.
    pub tera_type: Type,
    pub nature: String,
    pub ivs: StatTable,
    pub evs: StatTable,
    pub moves: Vec<String>,
    pub boosts: BoostTable,
    pub nature_modifiers: NatureModifiers,
    pub shiny: bool,
}

impl Default for Mon {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            level: DEFAULT_LEVEL,
            item: NOTHING.to_owned(),
            ability: NOTHING.to_owned(),
            tera_type: Type::None,
            nature: DEFAULT_NATURE.to_owned(),
            ivs: StatTable::filled(31),
            evs: StatTable::default(),
            moves: Vec::new(),
            boosts: BoostTable::default(),
            nature_modifiers: NatureModifiers::default(),
            shiny: false,
        }
    }
}

impl Mon {
    /// Creates a new Mon of the given species with default settings.
    ///
    /// The first four learnable moves fill the move slots.
    pub fn for_species(listing: &SpeciesListing) -> Self {
        Self {
            name: listing.display_name.clone(),
            ability: listing
                .data
                .default_ability()
                .unwrap_or(NOTHING)
                .to_owned(),
            moves: listing
                .data
                .moves
                .iter()
                .take(MOVE_SLOTS)
                .cloned()
                .collect(),
            ..Default::default()
        }
    }

    /// The total number of effort values spent.
    pub fn ev_total(&self) -> u32 {
        self.evs.sum()
    }
}
