use anyhow::Result;
use indexmap::IndexMap;
use pokecalc_data::{
    DataStore,
    LocalDataStore,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// The bundled data directory at the root of the workspace.
pub fn test_data_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../data")
}

/// Wrapper around a [`LocalDataStore`] for testing.
///
/// Allows fake species and moves to be inserted exclusively for the test. Fake values shadow real
/// values with the same secondary name, and fake species are listed after all real species.
pub struct TestDataStore {
    local: LocalDataStore,
    fake_species: Vec<SpeciesData>,
    fake_moves: IndexMap<String, MoveData>,
}

impl TestDataStore {
    /// Creates a new store over the bundled data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::wrap(LocalDataStore::new(test_data_dir())?))
    }

    fn wrap(local: LocalDataStore) -> Self {
        Self {
            local,
            fake_species: Vec::new(),
            fake_moves: IndexMap::new(),
        }
    }

    pub fn add_fake_species(&mut self, species: SpeciesData) {
        self.fake_species
            .retain(|fake| !fake.name_en.eq_ignore_ascii_case(&species.name_en));
        self.fake_species.push(species);
    }

    pub fn add_fake_move(&mut self, move_data: MoveData) {
        self.fake_moves
            .insert(move_data.name_en.to_lowercase(), move_data);
    }

    fn is_shadowed(&self, species: &SpeciesData) -> bool {
        self.fake_species
            .iter()
            .any(|fake| fake.name_en.eq_ignore_ascii_case(&species.name_en))
    }
}

impl DataStore for TestDataStore {
    fn all_species(&self) -> Result<Vec<SpeciesData>> {
        let mut species = self
            .local
            .all_species()?
            .into_iter()
            .filter(|species| !self.is_shadowed(species))
            .collect::<Vec<_>>();
        species.extend(self.fake_species.iter().cloned());
        Ok(species)
    }

    fn find_species(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Option<SpeciesData>> {
        Ok(self.all_species()?.into_iter().find(|species| filter(species)))
    }

    fn find_move(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Option<MoveData>> {
        if let Some(move_data) = self.fake_moves.values().find(|move_data| filter(move_data)) {
            return Ok(Some(move_data.clone()));
        }
        self.local.find_move(&|move_data| {
            !self.fake_moves.contains_key(&move_data.name_en.to_lowercase()) && filter(move_data)
        })
    }

    fn get_type_chart(&self) -> Result<TypeChart> {
        self.local.get_type_chart()
    }

    fn get_species(&self, name_en: &str) -> Result<Option<SpeciesData>> {
        match self
            .fake_species
            .iter()
            .find(|fake| fake.name_en.eq_ignore_ascii_case(name_en))
        {
            Some(species) => Ok(Some(species.clone())),
            None => self.local.get_species(name_en),
        }
    }

    fn get_move(&self, name_en: &str) -> Result<Option<MoveData>> {
        match self.fake_moves.get(&name_en.to_lowercase()) {
            Some(move_data) => Ok(Some(move_data.clone())),
            None => self.local.get_move(name_en),
        }
    }
}
