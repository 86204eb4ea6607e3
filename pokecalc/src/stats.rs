use anyhow::{
    Context,
    Result,
};
use pokecalc_data::{
    DataStoreByName,
    Stat,
    StatTable,
    resolve_species,
};

use crate::state::Mon;

/// A value for each stat.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats<T> {
    pub hp: T,
    pub atk: T,
    pub def: T,
    pub spa: T,
    pub spd: T,
    pub spe: T,
}

impl<T> Stats<T>
where
    T: Copy,
{
    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> T {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given stat value.
    pub fn set(&mut self, stat: Stat, value: T) {
        let stat = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *stat = value;
    }
}

/// The formula used to turn a base stat into a usable stat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatFormula {
    /// The formula used by the damage calculator.
    ///
    /// Level is not used. At level 50, it agrees with [`StatFormula::LevelScaled`] for every
    /// species except those with a base HP of 1.
    #[default]
    Simplified,
    /// The traditional level-scaled formula.
    LevelScaled,
}

impl StatFormula {
    /// Computes a single stat.
    pub fn compute(
        &self,
        base: u64,
        iv: u64,
        ev: u64,
        level: u64,
        is_hp: bool,
        nature_modifier: f64,
    ) -> u64 {
        match self {
            Self::Simplified => {
                // floor(base + iv/2 + ev/8)
                let value = (8 * base + 4 * iv + ev) / 8;
                if is_hp {
                    value + 60
                } else {
                    apply_nature(value + 5, nature_modifier)
                }
            }
            Self::LevelScaled => {
                if is_hp && base == 1 {
                    return 1;
                }
                let value = (2 * base + iv + ev / 4) * level / 100;
                if is_hp {
                    value + level + 10
                } else {
                    apply_nature(value + 5, nature_modifier)
                }
            }
        }
    }
}

fn apply_nature(value: u64, nature_modifier: f64) -> u64 {
    (value as f64 * nature_modifier).floor() as u64
}

/// Computes a single stat with the formula used by the damage calculator.
///
/// HP ignores both level and nature.
pub fn compute_stat(
    base: u64,
    iv: u64,
    ev: u64,
    level: u64,
    is_hp: bool,
    nature_modifier: f64,
) -> u64 {
    StatFormula::Simplified.compute(base, iv, ev, level, is_hp, nature_modifier)
}

/// Computes a single stat of a Mon whose species is already resolved.
pub(crate) fn compute_mon_stat(
    formula: StatFormula,
    base_stats: &StatTable,
    mon: &Mon,
    stat: Stat,
) -> u64 {
    formula.compute(
        base_stats.get(stat) as u64,
        mon.ivs.get(stat) as u64,
        mon.evs.get(stat) as u64,
        mon.level,
        stat == Stat::HP,
        mon.nature_modifiers.get(stat),
    )
}

/// Calculates all stats of a Mon, for live stat display.
pub fn calculate_stats(data: &dyn DataStoreByName, mon: &Mon) -> Result<Stats<u64>> {
    calculate_stats_with_formula(data, mon, StatFormula::default())
}

/// Calculates all stats of a Mon using the given formula.
pub fn calculate_stats_with_formula(
    data: &dyn DataStoreByName,
    mon: &Mon,
    formula: StatFormula,
) -> Result<Stats<u64>> {
    let species = resolve_species(data, &mon.name)
        .context(format!("failed to resolve species of {}", mon.name))?;
    let mut stats = Stats::default();
    for stat in Stat::ALL {
        stats.set(
            stat,
            compute_mon_stat(formula, &species.base_stats, mon, stat),
        );
    }
    Ok(stats)
}
