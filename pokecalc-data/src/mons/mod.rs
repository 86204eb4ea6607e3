mod boost;
mod nature;
mod species_data;
mod stat;
mod r#type;

pub use boost::BoostTable;
pub use nature::{
    Nature,
    NatureModifiers,
};
pub use species_data::SpeciesData;
pub use stat::{
    Stat,
    StatTable,
    StatTableEntries,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
