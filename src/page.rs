// 🗂️ Page Controller - Form in, tile grid out
// One-shot transition: Form -> Results, never back without a reload

use crate::being::{Creature, Person};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::PageError;
use crate::form::FormInput;
use crate::tile::{Card, Tile};
use rand::Rng;
use tracing::{debug, info};

/// Page shell; `{{main}}` is replaced by the form or the grid
const PAGE_TEMPLATE: &str = include_str!("../web/index.html");

/// Diet choices offered by the form, spelled the way the data file spells them
pub const DIET_OPTIONS: [&str; 3] = ["Herbavor", "Omnivor", "Carnivor"];

// ============================================================================
// GRID COMPOSITION
// ============================================================================

/// One card per creature in order, with the person's card spliced in at
/// `person_slot` (or at the end when the grid is shorter than that).
pub fn compose_cards<R: Rng + ?Sized>(
    creatures: &[Creature],
    person: &Person,
    person_slot: usize,
    rng: &mut R,
) -> Vec<Card> {
    let mut cards: Vec<Card> = creatures
        .iter()
        .map(|creature| Tile::Creature(creature).card(person, &mut *rng))
        .collect();

    let slot = person_slot.min(cards.len());
    cards.insert(slot, Tile::Person(person).card(person, &mut *rng));
    cards
}

/// Same grid as `compose_cards`, as markup fragments
pub fn compose_tiles<R: Rng + ?Sized>(
    creatures: &[Creature],
    person: &Person,
    image_prefix: &str,
    person_slot: usize,
    rng: &mut R,
) -> Vec<String> {
    compose_cards(creatures, person, person_slot, rng)
        .iter()
        .map(|card| card.to_html(image_prefix))
        .collect()
}

// ============================================================================
// VIEW STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Form,
    Results(Vec<String>),
}

pub struct PageController {
    view: View,
    image_prefix: String,
    person_slot: usize,
}

impl PageController {
    pub fn new(config: &Config) -> Self {
        PageController {
            view: View::Form,
            image_prefix: config.image_prefix.clone(),
            person_slot: config.person_slot,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn showing_results(&self) -> bool {
        matches!(self.view, View::Results(_))
    }

    /// Build the person, render every tile, swap the form for the grid
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        form: &FormInput,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<&[String], PageError> {
        if self.showing_results() {
            return Err(PageError::AlreadySubmitted);
        }

        let person = form.to_person();
        debug!(name = %person.name, height = person.being.height, weight = person.being.weight, "comparing");

        let tiles = compose_tiles(
            catalog.creatures(),
            &person,
            &self.image_prefix,
            self.person_slot,
            rng,
        );
        info!("Rendered {} tiles ({} creatures)", tiles.len(), catalog.len());

        self.view = View::Results(tiles);
        Ok(self.results().unwrap_or(&[]))
    }

    /// Rendered tiles once the form has been submitted
    pub fn results(&self) -> Option<&[String]> {
        match &self.view {
            View::Results(tiles) => Some(tiles),
            View::Form => None,
        }
    }

    /// Whole HTML document for the current view
    pub fn render(&self, ready: bool) -> String {
        match &self.view {
            View::Form => render_form_page(ready),
            View::Results(tiles) => render_results_page(tiles),
        }
    }
}

// ============================================================================
// DOCUMENTS
// ============================================================================

fn render_page(main: &str) -> String {
    PAGE_TEMPLATE.replace("{{main}}", main)
}

/// The comparison form. Submit stays disabled until the data has loaded.
pub fn render_form_page(ready: bool) -> String {
    let mut form = String::new();
    form.push_str("<form id=\"dino-compare\" method=\"post\" action=\"/compare\">");

    if !ready {
        form.push_str("<p class=\"notice\">Still loading the dinosaurs, try again in a moment.</p>");
    }

    form.push_str("<p>Name:</p><input id=\"name\" name=\"name\" type=\"text\">");
    form.push_str("<p>Height</p>");
    form.push_str("<label>Feet: <input id=\"feet\" name=\"feet\" type=\"number\"></label>");
    form.push_str("<label>inches: <input id=\"inches\" name=\"inches\" type=\"number\"></label>");
    form.push_str("<p>Weight:</p><label><input id=\"weight\" name=\"weight\" type=\"number\">lbs</label>");
    form.push_str("<p>Diet:</p><select id=\"diet\" name=\"diet\">");
    for diet in DIET_OPTIONS {
        form.push_str(&format!("<option>{}</option>", diet));
    }
    form.push_str("</select>");

    if ready {
        form.push_str("<button id=\"btn\" type=\"submit\">Compare Me!</button>");
    } else {
        form.push_str("<button id=\"btn\" type=\"submit\" disabled>Compare Me!</button>");
    }
    form.push_str("</form>");

    render_page(&form)
}

/// The tile grid that replaces the form
pub fn render_results_page(tiles: &[String]) -> String {
    let grid = format!("<main id=\"grid\">{}</main>", tiles.concat());
    render_page(&grid)
}
