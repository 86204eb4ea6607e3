use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    DataStore,
    SpeciesData,
    forme_label,
};

/// An entry in the species selection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesListing {
    /// The name shown to the user, which is qualified with the forme label for species with more
    /// than one forme.
    pub display_name: String,
    /// Unique identifier of the entry, which is the species' secondary name.
    pub unique_id: String,
    pub data: SpeciesData,
}

fn display_name(species: &SpeciesData) -> String {
    let Some(label) = species.forme_en().and_then(forme_label) else {
        return species.name.clone();
    };
    if species.name.contains('（') {
        return species.name.clone();
    }
    format!("{}（{label}）", species.name)
}

/// Lists all species for selection.
///
/// Species are grouped by the base part of their secondary name. Species sharing a group with
/// other formes get a display name qualified with their forme label, which
/// [`resolve_species`][`crate::resolve_species`] accepts back. The list is sorted by display
/// name.
pub fn species_listing<D>(data: &D) -> Result<Vec<SpeciesListing>>
where
    D: DataStore + ?Sized,
{
    let mut groups: Vec<(String, Vec<SpeciesData>)> = Vec::new();
    for species in data.all_species()? {
        let base = species.base_name_en().to_owned();
        match groups.iter_mut().find(|(key, _)| *key == base) {
            Some((_, formes)) => formes.push(species),
            None => groups.push((base, Vec::from_iter([species]))),
        }
    }

    let mut listing = groups
        .into_iter()
        .flat_map(|(_, formes)| {
            let qualify = formes.len() > 1;
            formes.into_iter().map(move |species| SpeciesListing {
                display_name: if qualify {
                    display_name(&species)
                } else {
                    species.name.clone()
                },
                unique_id: species.name_en.clone(),
                data: species,
            })
        })
        .collect::<Vec<_>>();
    listing.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    Ok(listing)
}

/// The moves a species can learn, by primary name.
pub fn learnable_moves(species: &SpeciesData) -> Vec<String> {
    species
        .moves
        .iter()
        .map(|move_name| move_name.trim())
        .filter(|move_name| !move_name.is_empty())
        .map(|move_name| move_name.to_owned())
        .collect()
}
