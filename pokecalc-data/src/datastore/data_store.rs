use anyhow::Result;
use unicase::UniCase;

use crate::{
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all resource data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
/// Tables are read-only once loaded.
///
/// This collection is used for "raw lookup" of resources by their secondary (English) name.
/// [`DataStoreByName`] layers lookup by display name on top.
pub trait DataStore: Send + Sync {
    /// Gets all species, in table order.
    fn all_species(&self) -> Result<Vec<SpeciesData>>;
    /// Finds the first species, in table order, matching the given filter.
    fn find_species(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Option<SpeciesData>>;
    /// Finds a move matching the given filter.
    fn find_move(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Option<MoveData>>;

    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;

    /// Gets a species by secondary name.
    fn get_species(&self, name_en: &str) -> Result<Option<SpeciesData>>;
    /// Gets a move by secondary name.
    fn get_move(&self, name_en: &str) -> Result<Option<MoveData>>;
}

/// An extension of [`DataStore`] for looking up resources by name in either script.
///
/// The primary (Japanese) name is matched exactly and takes priority. The secondary (English) name
/// is matched case-insensitively.
pub trait DataStoreByName: DataStore {
    /// Gets a species by name.
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>>;
    /// Gets a move by name.
    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>>;
}

impl<T> DataStoreByName for T
where
    T: DataStore,
{
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>> {
        if let Some(species) = self.find_species(&|species| species.name == name)? {
            return Ok(Some(species));
        }
        let name = UniCase::new(name);
        self.find_species(&|species| UniCase::new(species.name_en.as_str()) == name)
    }

    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>> {
        if let Some(move_data) = self.find_move(&|move_data| move_data.name == name)? {
            return Ok(Some(move_data));
        }
        let name = UniCase::new(name);
        self.find_move(&|move_data| UniCase::new(move_data.name_en.as_str()) == name)
    }
}
