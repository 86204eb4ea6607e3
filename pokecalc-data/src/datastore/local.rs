use std::{
    env,
    fs::File,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::{
    HashMap,
    HashSet,
};
use anyhow::{
    Context,
    Error,
    Result,
};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::{
    DataStore,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// Species are kept in table order, since lookup by primary name returns the first match (the
/// base forme of a species is listed before its alternate formes). Moves are keyed by lowercase
/// secondary name and also kept in table order, so a primary name shared by more than one move
/// always resolves to the first.
#[derive(Debug, Clone)]
pub struct LocalDataStore {
    root: PathBuf,
    pub type_chart: TypeChart,
    pub species: Vec<SpeciesData>,
    pub moves: IndexMap<String, MoveData>,
    species_index: HashMap<String, usize>,
}

impl LocalDataStore {
    /// Type chart file name.
    pub const TYPE_CHART_FILE: &str = "type-chart.json";
    /// Species file name.
    pub const SPECIES_FILE: &str = "species.json";
    /// Moves file name.
    pub const MOVES_FILE: &str = "moves.json";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or any table is
    /// structurally invalid.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display(),
            )));
        }

        let type_chart = read_table::<TypeChart>(&root, Self::TYPE_CHART_FILE)
            .context("failed to read type chart")?;
        let species = read_table::<Vec<SpeciesData>>(&root, Self::SPECIES_FILE)
            .context("failed to read species")?;
        let moves = read_table::<IndexMap<String, MoveData>>(&root, Self::MOVES_FILE)
            .context("failed to read moves")?;

        let store = Self::from_tables(type_chart, species, moves)?.with_root(root);
        log::debug!(
            "Loaded {} species and {} moves from {}",
            store.species.len(),
            store.moves.len(),
            store.root.display(),
        );
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Creates a new instance of [`LocalDataStore`] from tables that are already in memory.
    ///
    /// Tables are validated the same way as when they are read from disk.
    pub fn from_tables(
        type_chart: TypeChart,
        species: Vec<SpeciesData>,
        moves: IndexMap<String, MoveData>,
    ) -> Result<Self> {
        let mut species_index = HashMap::default();
        for (i, species) in species.iter().enumerate() {
            species
                .validate()
                .context(format!("invalid species record at index {i}"))?;
            if species_index
                .insert(species.name_en.to_lowercase(), i)
                .is_some()
            {
                return Err(Error::msg(format!(
                    "duplicate species record for {}",
                    species.name_en
                )));
            }
        }

        let mut seen = HashSet::default();
        let moves = moves
            .into_iter()
            .map(|(key, move_data)| {
                let key = key.to_lowercase();
                if key != move_data.name_en.to_lowercase() {
                    return Err(Error::msg(format!(
                        "move record {key} has mismatched secondary name {}",
                        move_data.name_en
                    )));
                }
                if !seen.insert(move_data.name.clone()) {
                    log::warn!("Primary move name {} is used more than once", move_data.name);
                }
                Ok((key, move_data))
            })
            .collect::<Result<IndexMap<_, _>>>()?;

        Ok(Self {
            root: PathBuf::new(),
            type_chart,
            species,
            moves,
            species_index,
        })
    }

    fn with_root(mut self, root: PathBuf) -> Self {
        self.root = root;
        self
    }

    /// The directory the tables were read from, which is empty for in-memory tables.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn read_table<T: DeserializeOwned>(root: &Path, file: &str) -> Result<T> {
    let path = root.join(file);
    let path_name = path.to_string_lossy().to_string();
    serde_json::from_reader(File::open(&path).context(format!("{path_name} could not be opened"))?)
        .context(format!("failed to parse {path_name}"))
}

impl DataStore for LocalDataStore {
    fn all_species(&self) -> Result<Vec<SpeciesData>> {
        Ok(self.species.clone())
    }

    fn find_species(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Option<SpeciesData>> {
        Ok(self.species.iter().find(|species| filter(species)).cloned())
    }

    fn find_move(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Option<MoveData>> {
        Ok(self.moves.values().find(|move_data| filter(move_data)).cloned())
    }

    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn get_species(&self, name_en: &str) -> Result<Option<SpeciesData>> {
        Ok(self
            .species_index
            .get(&name_en.to_lowercase())
            .and_then(|i| self.species.get(*i))
            .cloned())
    }

    fn get_move(&self, name_en: &str) -> Result<Option<MoveData>> {
        Ok(self.moves.get(&name_en.to_lowercase()).cloned())
    }
}
