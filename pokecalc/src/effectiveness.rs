use std::fmt::{
    self,
    Display,
};

use num::rational::Ratio;
use pokecalc_data::{
    SpeciesData,
    Type,
    TypeChart,
};

use crate::state::{
    Field,
    Mon,
};

/// An exact type effectiveness multiplier.
pub type Multiplier = Ratio<u64>;

/// Calculates the effectiveness of a move type against a defender with the given types.
///
/// The multiplier is the product of the effectiveness against each type, where a missing chart
/// entry is neutral.
pub fn effectiveness(chart: &TypeChart, move_type: Type, defending_types: &[Type]) -> Multiplier {
    defending_types
        .iter()
        .map(|defense| {
            let (numer, denom) = chart.effectiveness(move_type, *defense).fraction();
            Ratio::new(numer, denom)
        })
        .product()
}

/// The types a Mon defends with.
///
/// A terastallized Mon with a tera type defends with only its tera type.
pub fn defending_types(species: &SpeciesData, mon: &Mon, field: &Field) -> Vec<Type> {
    if field.terastallized && mon.tera_type != Type::None {
        Vec::from_iter([mon.tera_type])
    } else {
        species.type_list()
    }
}

/// The message shown for a type effectiveness multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectivenessMessage {
    SuperEffective,
    NotVeryEffective,
    NoEffect,
    Normal,
}

impl From<Multiplier> for EffectivenessMessage {
    fn from(value: Multiplier) -> Self {
        let one = Ratio::from_integer(1);
        if value > one {
            Self::SuperEffective
        } else if value == Ratio::from_integer(0) {
            Self::NoEffect
        } else if value < one {
            Self::NotVeryEffective
        } else {
            Self::Normal
        }
    }
}

impl Display for EffectivenessMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuperEffective => write!(f, "効果はばつぐんだ！"),
            Self::NotVeryEffective => write!(f, "効果はいまひとつだ..."),
            Self::NoEffect => write!(f, "効果がないようだ..."),
            Self::Normal => write!(f, "効果は普通だ..."),
        }
    }
}
