use serde::{
    Deserialize,
    Serialize,
};

use crate::Stat;

/// In-battle stage boosts for every stat except HP.
///
/// Stages are conventionally between -6 and 6, but the table does not enforce it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
}

impl BoostTable {
    /// Returns the boost for the given stat.
    ///
    /// HP cannot be boosted, so it is always 0.
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::HP => 0,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the boost for the given stat.
    ///
    /// Setting HP does nothing.
    pub fn set(&mut self, stat: Stat, value: i8) {
        let boost = match stat {
            Stat::HP => return,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *boost = value;
    }
}
