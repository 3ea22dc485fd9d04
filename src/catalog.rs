// 📚 Creature Catalog - Loading the static data file
// Written once at startup, read on every submit

use crate::being::Creature;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

// ============================================================================
// RAW RECORDS (shape of the JSON file)
// ============================================================================

/// Top-level document: `{ "Dinos": [ ... ] }`
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "Dinos")]
    dinos: Vec<RawCreature>,
}

/// One entry exactly as authored in the data file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCreature {
    pub species: String,
    pub weight: f64,
    pub height: f64,
    pub diet: String,
    #[serde(rename = "where")]
    pub habitat: String,
    #[serde(rename = "when")]
    pub era: String,
    pub fact: String,
}

impl From<RawCreature> for Creature {
    fn from(raw: RawCreature) -> Self {
        Creature::new(
            raw.species,
            raw.weight,
            raw.height,
            raw.diet,
            raw.habitat,
            raw.era,
            raw.fact,
        )
    }
}

impl From<&Creature> for RawCreature {
    fn from(creature: &Creature) -> Self {
        RawCreature {
            species: creature.being.species.clone(),
            weight: creature.being.weight,
            height: creature.being.height,
            diet: creature.being.diet.clone(),
            habitat: creature.habitat.clone(),
            era: creature.era.clone(),
            fact: creature.trivia.clone(),
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Ordered, immutable list of creatures
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    creatures: Vec<Creature>,
}

impl Catalog {
    pub fn new(creatures: Vec<Creature>) -> Self {
        Catalog { creatures }
    }

    pub fn empty() -> Self {
        Catalog::default()
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Case-insensitive lookup by species
    pub fn find(&self, species: &str) -> Option<&Creature> {
        let wanted = species.to_lowercase();
        self.creatures
            .iter()
            .find(|c| c.species().to_lowercase() == wanted)
    }

    /// Page-load entry point: any failure leaves the catalog empty.
    /// The user never sees the error, it only goes to the log.
    pub fn load_or_empty(path: &Path) -> Catalog {
        match load_catalog(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "data file unavailable, comparing against nothing");
                Catalog::empty()
            }
        }
    }
}

/// Parse the JSON document, keeping file order
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    let creatures = file.dinos.into_iter().map(Creature::from).collect();
    Ok(Catalog::new(creatures))
}

/// Read and parse the data file
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&json)?;
    info!("Loaded {} creatures from {:?}", catalog.len(), path);
    Ok(catalog)
}

/// Same as `Catalog::load_or_empty`, on the tokio runtime
#[cfg(feature = "server")]
pub async fn load_catalog_async(path: &Path) -> Catalog {
    let read = tokio::fs::read_to_string(path).await.map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    });

    match read.and_then(|json| parse_catalog(&json)) {
        Ok(catalog) => {
            info!("Loaded {} creatures from {:?}", catalog.len(), path);
            catalog
        }
        Err(e) => {
            warn!(error = %e, "data file unavailable, comparing against nothing");
            Catalog::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"{
        "Dinos": [
            {
                "species": "Triceratops",
                "weight": 13000,
                "height": 114,
                "diet": "herbavor",
                "where": "North America",
                "when": "Late Cretaceous",
                "fact": "First discovered in 1889 by Othniel Charles Marsh"
            },
            {
                "species": "Pigeon",
                "weight": 0.5,
                "height": 9,
                "diet": "herbavor",
                "where": "World Wide",
                "when": "Holocene",
                "fact": "All birds are living dinosaurs."
            }
        ]
    }"#;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dino_compare_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_keeps_order_and_fields() {
        let catalog = parse_catalog(SAMPLE).unwrap();

        assert_eq!(catalog.len(), 2);
        let first = &catalog.creatures()[0];
        assert_eq!(first.species(), "Triceratops");
        assert_eq!(first.being.weight, 13000.0);
        assert_eq!(first.being.height, 114.0);
        assert_eq!(first.habitat, "North America");
        assert_eq!(first.era, "Late Cretaceous");
        assert_eq!(first.being.image, "triceratops.png");
        assert_eq!(catalog.creatures()[1].species(), "Pigeon");
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(parse_catalog("{\"dinos\": []}"), Err(CatalogError::Parse(_))));
        assert!(matches!(parse_catalog("not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = parse_catalog(SAMPLE).unwrap();

        assert!(catalog.find("triceratops").is_some());
        assert!(catalog.find("PIGEON").is_some());
        assert!(catalog.find("Stegosaurus").is_none());
    }

    #[test]
    fn test_load_from_disk() {
        let path = temp_file("ok.json", SAMPLE);

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_failures_resolve_to_empty() {
        let missing = std::env::temp_dir().join("dino_compare_does_not_exist.json");
        assert!(matches!(load_catalog(&missing), Err(CatalogError::Io { .. })));
        assert!(Catalog::load_or_empty(&missing).is_empty());

        let broken = temp_file("broken.json", "{ \"Dinos\": [ { \"species\": ");
        assert!(Catalog::load_or_empty(&broken).is_empty());
        fs::remove_file(&broken).ok();
    }

    #[test]
    fn test_raw_round_trip_keeps_json_keys() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        let raw = RawCreature::from(&catalog.creatures()[0]);
        let value = serde_json::to_value(&raw).unwrap();

        assert_eq!(value["where"], "North America");
        assert_eq!(value["when"], "Late Cretaceous");
        assert_eq!(value["fact"], "First discovered in 1889 by Othniel Charles Marsh");
    }
}
