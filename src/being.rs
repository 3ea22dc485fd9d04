// 🦖 Being Models - Creatures and the Person they are compared against
// Plain value objects: built once, never mutated afterwards

use serde::{Deserialize, Serialize};

/// Species name carried by every Person
pub const HUMAN_SPECIES: &str = "human";

/// Extension appended to the folded species name to get the image file
pub const IMAGE_EXTENSION: &str = ".png";

// ============================================================================
// BEING (shared field set)
// ============================================================================

/// Fields shared by creatures and the person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Being {
    pub species: String,

    /// Weight in pounds
    pub weight: f64,

    /// Height in inches
    pub height: f64,

    /// Free text (herbivore, omnivore, carnivore), compared case-insensitively
    pub diet: String,

    /// Derived from species, see `image_for`
    pub image: String,
}

impl Being {
    pub fn new(species: impl Into<String>, weight: f64, height: f64, diet: impl Into<String>) -> Self {
        let species = species.into();
        let image = image_for(&species);

        Being {
            species,
            weight,
            height,
            diet: diet.into(),
            image,
        }
    }

    /// Case-insensitive diet equality
    pub fn same_diet_as(&self, other: &Being) -> bool {
        self.diet.to_lowercase() == other.diet.to_lowercase()
    }
}

/// Image file name for a species: lowercase species + ".png"
pub fn image_for(species: &str) -> String {
    format!("{}{}", species.to_lowercase(), IMAGE_EXTENSION)
}

// ============================================================================
// CREATURE (dinosaurs and birds)
// ============================================================================

/// A non-human being loaded from the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    #[serde(flatten)]
    pub being: Being,

    /// Where it lived
    pub habitat: String,

    /// Geological period it lived in
    pub era: String,

    /// Pre-authored trivia sentence
    pub trivia: String,
}

impl Creature {
    pub fn new(
        species: impl Into<String>,
        weight: f64,
        height: f64,
        diet: impl Into<String>,
        habitat: impl Into<String>,
        era: impl Into<String>,
        trivia: impl Into<String>,
    ) -> Self {
        Creature {
            being: Being::new(species, weight, height, diet),
            habitat: habitat.into(),
            era: era.into(),
            trivia: trivia.into(),
        }
    }

    pub fn species(&self) -> &str {
        &self.being.species
    }
}

// ============================================================================
// PERSON (the user)
// ============================================================================

/// The user-described being built from one form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(flatten)]
    pub being: Being,

    /// Display name, inserted into markup verbatim
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>, weight: f64, height: f64, diet: impl Into<String>) -> Self {
        Person {
            being: Being::new(HUMAN_SPECIES, weight, height, diet),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_is_folded_species_with_extension() {
        assert_eq!(image_for("T-Rex"), "t-rex.png");
        assert_eq!(image_for("Pigeon"), "pigeon.png");

        let creature = Creature::new("Brachiosaurus", 70000.0, 372.0, "herbavor", "North America", "Late Jurasic", "An asteroid was named 9954 Brachiosaurus in 1991.");
        assert_eq!(creature.being.image, "brachiosaurus.png");
    }

    #[test]
    fn test_person_species_is_human() {
        let person = Person::new("Ada", 150.0, 66.0, "Omnivore");

        assert_eq!(person.being.species, HUMAN_SPECIES);
        assert_eq!(person.being.image, "human.png");
        assert_eq!(person.name, "Ada");
    }

    #[test]
    fn test_diet_comparison_ignores_case() {
        let rex = Being::new("T-Rex", 14000.0, 144.0, "Carnivore");
        let lower = Being::new(HUMAN_SPECIES, 150.0, 66.0, "carnivore");
        let omni = Being::new(HUMAN_SPECIES, 150.0, 66.0, "Omnivore");
        let wordy = Being::new(HUMAN_SPECIES, 150.0, 66.0, "Carnivorous");

        assert!(rex.same_diet_as(&lower));
        assert!(!rex.same_diet_as(&omni));
        assert!(!rex.same_diet_as(&wordy)); // Free text, no synonym matching
    }
}
