mod data_store;
mod local;
mod resolve;

pub use data_store::{
    DataStore,
    DataStoreByName,
};
pub use local::LocalDataStore;
pub use resolve::{
    FORME_NAMES,
    ResolveSpeciesError,
    forme_key,
    forme_label,
    resolve_species,
};
