// 🧱 Tile Renderer - One markup fragment per being
// Text goes in verbatim, nothing is escaped

use crate::being::{Creature, Person};
use crate::facts::fact_for;
use rand::Rng;

/// Image path prefix used when no config is given
pub const DEFAULT_IMAGE_PREFIX: &str = "images/";

/// Either kind of being that can appear in the grid
#[derive(Debug, Clone, Copy)]
pub enum Tile<'a> {
    Creature(&'a Creature),
    Person(&'a Person),
}

impl<'a> Tile<'a> {
    /// Title line of the tile
    pub fn heading(&self) -> &'a str {
        match *self {
            Tile::Creature(creature) => creature.species(),
            Tile::Person(person) => &person.name,
        }
    }

    pub fn image(&self) -> &'a str {
        match *self {
            Tile::Creature(creature) => &creature.being.image,
            Tile::Person(person) => &person.being.image,
        }
    }

    /// Fresh fact for creatures, none for the person
    pub fn fact<R: Rng + ?Sized>(&self, person: &Person, rng: &mut R) -> Option<String> {
        match self {
            Tile::Creature(creature) => Some(fact_for(creature, person, rng)),
            Tile::Person(_) => None,
        }
    }

    /// Resolve the tile's content, drawing a fact where one is needed
    pub fn card<R: Rng + ?Sized>(&self, person: &Person, rng: &mut R) -> Card {
        Card {
            heading: self.heading().to_string(),
            image: self.image().to_string(),
            fact: self.fact(person, rng),
        }
    }

    pub fn render<R: Rng + ?Sized>(&self, person: &Person, image_prefix: &str, rng: &mut R) -> String {
        self.card(person, rng).to_html(image_prefix)
    }
}

/// Tile content independent of how it is drawn (markup or terminal)
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub heading: String,
    pub image: String,
    pub fact: Option<String>,
}

impl Card {
    pub fn to_html(&self, image_prefix: &str) -> String {
        render_fragment(&self.heading, image_prefix, &self.image, self.fact.as_deref())
    }
}

/// Creature tile: species, image, one freshly chosen fact
pub fn creature_tile<R: Rng + ?Sized>(creature: &Creature, person: &Person, image_prefix: &str, rng: &mut R) -> String {
    Tile::Creature(creature).render(person, image_prefix, rng)
}

/// Person tile: name and image only
pub fn person_tile(person: &Person, image_prefix: &str) -> String {
    render_fragment(&person.name, image_prefix, &person.being.image, None)
}

fn render_fragment(heading: &str, image_prefix: &str, image: &str, fact: Option<&str>) -> String {
    let mut html = String::with_capacity(128);
    html.push_str("<div class=\"grid-item\">");
    html.push_str("<h3>");
    html.push_str(heading);
    html.push_str("</h3>");
    html.push_str("<img src=\"");
    html.push_str(image_prefix);
    html.push_str(image);
    html.push_str("\" />");
    if let Some(fact) = fact {
        html.push_str("<p>");
        html.push_str(fact);
        html.push_str("</p>");
    }
    html.push_str("</div>");
    html
}
