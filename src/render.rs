//! Presentation of a recipe list.
//!
//! Every render replaces what was shown before. Nothing from a previous
//! render is kept or patched.

use crate::model::Recipe;
use html_escape::{encode_double_quoted_attribute, encode_text};
use log::error;
use std::io::Write;

/// Text shown by the "no results" indicator
pub const NO_RESULTS_TEXT: &str = "No recipes found.";

/// Something that can show a list of recipes
pub trait View {
    /// Replace whatever is shown with `recipes`, or the "no results" indicator when empty
    fn render(&mut self, recipes: &[&Recipe]);
}

/// HTML cards in a `recipesContainer`, plus a `noResults` paragraph toggled by a `hidden` class
#[derive(Debug, Default)]
pub struct HtmlView {
    cards: Vec<String>,
    no_results_visible: bool,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of each card currently shown
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn is_no_results_visible(&self) -> bool {
        self.no_results_visible
    }

    /// The results container followed by the indicator
    pub fn to_html(&self) -> String {
        let indicator_class = if self.no_results_visible {
            "no-results"
        } else {
            "no-results hidden"
        };

        let mut html = String::from("<section id=\"recipesContainer\">\n");
        for card in &self.cards {
            html.push_str(card);
        }
        html.push_str("</section>\n");
        html.push_str(&format!(
            "<p id=\"noResults\" class=\"{}\">{}</p>\n",
            indicator_class, NO_RESULTS_TEXT
        ));
        html
    }

    fn card(recipe: &Recipe) -> String {
        format!(
            r#"<article class="recipe-card">
  <img src="{image}" alt="{alt}" class="recipe-image" />
  <div class="recipe-content">
    <h2 class="recipe-title">{name}</h2>
    <div class="recipe-meta">
      <span class="badge">{category}</span>
      <span class="time">{time} min • {difficulty}</span>
    </div>
    <p class="recipe-section-title">Ingredients:</p>
    <p class="recipe-ingredients">{ingredients}</p>
    <p class="recipe-section-title">Instructions:</p>
    <p class="recipe-instructions">{instructions}</p>
  </div>
</article>
"#,
            image = encode_double_quoted_attribute(&recipe.image),
            alt = encode_double_quoted_attribute(&recipe.name),
            name = encode_text(&recipe.name),
            category = encode_text(&recipe.category),
            time = recipe.time,
            difficulty = encode_text(&recipe.difficulty),
            ingredients = encode_text(&recipe.ingredients.join(", ")),
            instructions = encode_text(&recipe.instructions),
        )
    }
}

impl View for HtmlView {
    fn render(&mut self, recipes: &[&Recipe]) {
        self.no_results_visible = recipes.is_empty();
        self.cards = recipes.iter().map(|r| Self::card(r)).collect();
    }
}

/// Plain text cards written to a terminal or any other writer
pub struct TextView<W: Write> {
    out: W,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_cards(&mut self, recipes: &[&Recipe]) -> std::io::Result<()> {
        if recipes.is_empty() {
            writeln!(self.out, "{}", NO_RESULTS_TEXT)?;
            return self.out.flush();
        }

        for recipe in recipes {
            writeln!(self.out, "== {} [{}]", recipe.name, recipe.category)?;
            writeln!(self.out, "   {} min • {}", recipe.time, recipe.difficulty)?;
            writeln!(self.out, "   Ingredients: {}", recipe.ingredients.join(", "))?;
            writeln!(self.out, "   Instructions: {}", recipe.instructions)?;
            if !recipe.image.is_empty() {
                writeln!(self.out, "   Image: {}", recipe.image)?;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out, "{} recipe(s)", recipes.len())?;
        self.out.flush()
    }
}

impl<W: Write> View for TextView<W> {
    fn render(&mut self, recipes: &[&Recipe]) {
        if let Err(e) = self.write_cards(recipes) {
            error!("Failed to write recipes: {}", e);
        }
    }
}
