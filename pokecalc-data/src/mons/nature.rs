use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// A named nature, which boosts one stat and drops another.
///
/// Natures whose boosted and dropped stats are equal are neutral.
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
pub enum Nature {
    #[string = "がんばりや"]
    #[alias = "Hardy"]
    #[default]
    Hardy,
    #[string = "さみしがり"]
    #[alias = "Lonely"]
    Lonely,
    #[string = "ゆうかん"]
    #[alias = "Brave"]
    Brave,
    #[string = "いじっぱり"]
    #[alias = "Adamant"]
    Adamant,
    #[string = "やんちゃ"]
    #[alias = "Naughty"]
    Naughty,
    #[string = "ずぶとい"]
    #[alias = "Bold"]
    Bold,
    #[string = "すなお"]
    #[alias = "Docile"]
    Docile,
    #[string = "のんき"]
    #[alias = "Relaxed"]
    Relaxed,
    #[string = "わんぱく"]
    #[alias = "Impish"]
    Impish,
    #[string = "のうてんき"]
    #[alias = "Lax"]
    Lax,
    #[string = "おくびょう"]
    #[alias = "Timid"]
    Timid,
    #[string = "せっかち"]
    #[alias = "Hasty"]
    Hasty,
    #[string = "まじめ"]
    #[alias = "Serious"]
    Serious,
    #[string = "ようき"]
    #[alias = "Jolly"]
    Jolly,
    #[string = "むじゃき"]
    #[alias = "Naive"]
    Naive,
    #[string = "ひかえめ"]
    #[alias = "Modest"]
    Modest,
    #[string = "おっとり"]
    #[alias = "Mild"]
    Mild,
    #[string = "れいせい"]
    #[alias = "Quiet"]
    Quiet,
    #[string = "てれや"]
    #[alias = "Bashful"]
    Bashful,
    #[string = "うっかりや"]
    #[alias = "Rash"]
    Rash,
    #[string = "おだやか"]
    #[alias = "Calm"]
    Calm,
    #[string = "おとなしい"]
    #[alias = "Gentle"]
    Gentle,
    #[string = "なまいき"]
    #[alias = "Sassy"]
    Sassy,
    #[string = "しんちょう"]
    #[alias = "Careful"]
    Careful,
    #[string = "きまぐれ"]
    #[alias = "Quirky"]
    Quirky,
}

impl Nature {
    /// The stat boosted by this nature.
    pub fn boosts(&self) -> Stat {
        match self {
            Self::Hardy | Self::Lonely | Self::Brave | Self::Adamant | Self::Naughty => Stat::Atk,
            Self::Bold | Self::Docile | Self::Relaxed | Self::Impish | Self::Lax => Stat::Def,
            Self::Timid | Self::Hasty | Self::Serious | Self::Jolly | Self::Naive => Stat::Spe,
            Self::Modest | Self::Mild | Self::Quiet | Self::Bashful | Self::Rash => Stat::SpAtk,
            Self::Calm | Self::Gentle | Self::Sassy | Self::Careful | Self::Quirky => Stat::SpDef,
        }
    }

    /// The stat dropped by this nature.
    pub fn drops(&self) -> Stat {
        match self {
            Self::Hardy | Self::Bold | Self::Timid | Self::Modest | Self::Calm => Stat::Atk,
            Self::Lonely | Self::Docile | Self::Hasty | Self::Mild | Self::Gentle => Stat::Def,
            Self::Brave | Self::Relaxed | Self::Serious | Self::Quiet | Self::Sassy => Stat::Spe,
            Self::Adamant | Self::Impish | Self::Jolly | Self::Bashful | Self::Careful => {
                Stat::SpAtk
            }
            Self::Naughty | Self::Lax | Self::Naive | Self::Rash | Self::Quirky => Stat::SpDef,
        }
    }

    /// Is the nature neutral?
    pub fn neutral(&self) -> bool {
        self.boosts() == self.drops()
    }
}

fn default_modifier() -> f64 {
    1.0
}

/// Per-stat nature modifiers, which are usually 0.9, 1.0, or 1.1.
///
/// Modifiers are set independently of any named [`Nature`], so a table may describe a combination
/// no real nature has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NatureModifiers {
    #[serde(default = "default_modifier")]
    pub atk: f64,
    #[serde(default = "default_modifier")]
    pub def: f64,
    #[serde(default = "default_modifier")]
    pub spa: f64,
    #[serde(default = "default_modifier")]
    pub spd: f64,
    #[serde(default = "default_modifier")]
    pub spe: f64,
}

impl NatureModifiers {
    /// The modifier for the given stat.
    ///
    /// HP is never modified by nature.
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::HP => 1.0,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the modifier for the given stat.
    pub fn set(&mut self, stat: Stat, value: f64) {
        let modifier = match stat {
            Stat::HP => return,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *modifier = value;
    }
}

impl Default for NatureModifiers {
    fn default() -> Self {
        Self {
            atk: 1.0,
            def: 1.0,
            spa: 1.0,
            spd: 1.0,
            spe: 1.0,
        }
    }
}

impl From<Nature> for NatureModifiers {
    fn from(nature: Nature) -> Self {
        let mut modifiers = Self::default();
        if !nature.neutral() {
            modifiers.set(nature.boosts(), 1.1);
            modifiers.set(nature.drops(), 0.9);
        }
        modifiers
    }
}
