// 🎲 Fact Selector - One sentence per creature, picked at random
// Six generators stored as data, one uniform draw picks the sentence

use crate::being::{Creature, Person};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Species that is never compared, only its trivia is shown
pub const PIGEON: &str = "Pigeon";

// ============================================================================
// FACT KINDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactKind {
    Height,
    Weight,
    Diet,
    Habitat,
    Era,
    Trivia,
}

impl FactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactKind::Height => "height",
            FactKind::Weight => "weight",
            FactKind::Diet => "diet",
            FactKind::Habitat => "habitat",
            FactKind::Era => "era",
            FactKind::Trivia => "trivia",
        }
    }
}

/// A pure sentence generator over one creature and the person
pub type FactGenerator = fn(&Creature, &Person) -> String;

/// Candidate generators in draw order
pub const FACT_GENERATORS: [(FactKind, FactGenerator); 6] = [
    (FactKind::Height, height_fact),
    (FactKind::Weight, weight_fact),
    (FactKind::Diet, diet_fact),
    (FactKind::Habitat, habitat_fact),
    (FactKind::Era, era_fact),
    (FactKind::Trivia, trivia_fact),
];

// ============================================================================
// GENERATORS
// ============================================================================

/// Three-way numeric comparison. NaN on either side falls through to Less.
fn compare(creature_value: f64, person_value: f64) -> Ordering {
    if creature_value > person_value {
        Ordering::Greater
    } else if creature_value == person_value {
        Ordering::Equal
    } else {
        Ordering::Less
    }
}

pub fn height_fact(creature: &Creature, person: &Person) -> String {
    let species = creature.species();
    match compare(creature.being.height, person.being.height) {
        Ordering::Greater => format!("{} is taller than you", species),
        Ordering::Equal => format!("You are the same height as a {}", species),
        Ordering::Less => format!("{} is shorter than you", species),
    }
}

pub fn weight_fact(creature: &Creature, person: &Person) -> String {
    let species = creature.species();
    match compare(creature.being.weight, person.being.weight) {
        Ordering::Greater => format!("{} is heavier than you", species),
        Ordering::Equal => format!("You are the same weight as a {}", species),
        Ordering::Less => format!("{} is lighter than you", species),
    }
}

pub fn diet_fact(creature: &Creature, person: &Person) -> String {
    if creature.being.same_diet_as(&person.being) {
        format!("You have the same diet as a {}", creature.species())
    } else {
        format!("You have a different diet than a {}", creature.species())
    }
}

pub fn habitat_fact(creature: &Creature, _person: &Person) -> String {
    format!("The {} lived in {}", creature.species(), creature.habitat)
}

pub fn era_fact(creature: &Creature, _person: &Person) -> String {
    format!("The {} lived during the {} period", creature.species(), creature.era)
}

pub fn trivia_fact(creature: &Creature, _person: &Person) -> String {
    creature.trivia.clone()
}

// ============================================================================
// SELECTION
// ============================================================================

/// Pick one of the six candidates uniformly.
///
/// The draw covers the whole table, so the trivia sentence at the end is
/// as likely as any other.
pub fn choose_fact<R: Rng + ?Sized>(creature: &Creature, person: &Person, rng: &mut R) -> (FactKind, String) {
    let index = rng.gen_range(0..FACT_GENERATORS.len());
    let (kind, generate) = FACT_GENERATORS[index];
    (kind, generate(creature, person))
}

/// Sentence shown on a creature tile. Pigeons always show their trivia.
pub fn fact_for<R: Rng + ?Sized>(creature: &Creature, person: &Person, rng: &mut R) -> String {
    if creature.species() == PIGEON {
        creature.trivia.clone()
    } else {
        choose_fact(creature, person, rng).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rex() -> Creature {
        Creature::new(
            "T-Rex",
            11905.0,
            144.0,
            "Carnivore",
            "North America",
            "Late Cretaceous",
            "The largest known skull measures in at 5 feet long.",
        )
    }

    fn pigeon() -> Creature {
        Creature::new(
            "Pigeon",
            0.5,
            9.0,
            "herbavor",
            "World Wide",
            "Holocene",
            "All birds are living dinosaurs.",
        )
    }

    #[test]
    fn test_height_three_way() {
        let rex = rex();

        assert_eq!(height_fact(&rex, &Person::new("A", 150.0, 66.0, "x")), "T-Rex is taller than you");
        assert_eq!(height_fact(&rex, &Person::new("A", 150.0, 144.0, "x")), "You are the same height as a T-Rex");
        assert_eq!(height_fact(&rex, &Person::new("A", 150.0, 200.0, "x")), "T-Rex is shorter than you");
    }

    #[test]
    fn test_weight_three_way() {
        let rex = rex();

        assert_eq!(weight_fact(&rex, &Person::new("A", 150.0, 66.0, "x")), "T-Rex is heavier than you");
        assert_eq!(weight_fact(&rex, &Person::new("A", 11905.0, 66.0, "x")), "You are the same weight as a T-Rex");
        assert_eq!(weight_fact(&rex, &Person::new("A", 20000.0, 66.0, "x")), "T-Rex is lighter than you");
    }

    #[test]
    fn test_nan_input_falls_to_shorter_and_lighter() {
        let rex = rex();
        let person = Person::new("A", f64::NAN, f64::NAN, "x");

        assert_eq!(height_fact(&rex, &person), "T-Rex is shorter than you");
        assert_eq!(weight_fact(&rex, &person), "T-Rex is lighter than you");
    }

    #[test]
    fn test_diet_fact_case_insensitive() {
        let rex = rex();

        assert_eq!(diet_fact(&rex, &Person::new("A", 1.0, 1.0, "carnivore")), "You have the same diet as a T-Rex");
        assert_eq!(diet_fact(&rex, &Person::new("A", 1.0, 1.0, "Omnivore")), "You have a different diet than a T-Rex");
    }

    #[test]
    fn test_static_facts() {
        let rex = rex();
        let person = Person::new("A", 1.0, 1.0, "x");

        assert_eq!(habitat_fact(&rex, &person), "The T-Rex lived in North America");
        assert_eq!(era_fact(&rex, &person), "The T-Rex lived during the Late Cretaceous period");
        assert_eq!(trivia_fact(&rex, &person), "The largest known skull measures in at 5 feet long.");
    }

    #[test]
    fn test_every_candidate_is_reachable() {
        let rex = rex();
        let person = Person::new("A", 150.0, 66.0, "Omnivore");
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = HashSet::new();
        for _ in 0..600 {
            let (kind, sentence) = choose_fact(&rex, &person, &mut rng);
            let expected = FACT_GENERATORS
                .iter()
                .find(|(k, _)| *k == kind)
                .map(|(_, generate)| generate(&rex, &person));
            assert_eq!(Some(sentence), expected);
            seen.insert(kind);
        }

        // Trivia sits last in the table and must not be cut off by the draw
        assert!(seen.contains(&FactKind::Trivia));
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_draw_is_roughly_uniform() {
        let rex = rex();
        let person = Person::new("A", 150.0, 66.0, "Omnivore");
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0usize; 6];
        for _ in 0..6000 {
            let (kind, _) = choose_fact(&rex, &person, &mut rng);
            let index = FACT_GENERATORS.iter().position(|(k, _)| *k == kind).unwrap();
            counts[index] += 1;
        }

        for count in counts {
            assert!(count > 800 && count < 1200, "skewed draw: {:?}", counts);
        }
    }

    #[test]
    fn test_pigeon_always_shows_trivia() {
        let pigeon = pigeon();
        let mut rng = StdRng::seed_from_u64(1);

        for person in [
            Person::new("A", 150.0, 66.0, "herbavor"),
            Person::new("B", f64::NAN, 0.0, ""),
            Person::new("C", 0.5, 9.0, "Carnivore"),
        ] {
            for _ in 0..50 {
                assert_eq!(fact_for(&pigeon, &person, &mut rng), "All birds are living dinosaurs.");
            }
        }
    }

    #[test]
    fn test_pigeon_match_is_exact() {
        let mut lower = pigeon();
        lower.being.species = "pigeon".to_string();
        let person = Person::new("A", 150.0, 66.0, "herbavor");
        let mut rng = StdRng::seed_from_u64(3);

        let sentences: HashSet<String> = (0..200).map(|_| fact_for(&lower, &person, &mut rng)).collect();
        assert!(sentences.len() > 1);
    }
}
