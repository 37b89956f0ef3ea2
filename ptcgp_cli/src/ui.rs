//! Console output helpers for the ptcgp CLI.

use std::fmt;

use clap::ValueEnum;
use console::style;
use ptcgp_core::Card;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Styled human-readable output.
    #[default]
    Pretty,
    /// Raw JSON on stdout.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(text: &str) {
    eprintln!("{}", style(text).bold());
}

pub fn success(text: &str) {
    eprintln!("{} {}", style("✓").green(), text);
}

pub fn error(text: &str) {
    eprintln!("{} {}", style("✗").red(), text);
}

pub fn error_with_details(text: &str, details: &str) {
    eprintln!("{} {}: {}", style("✗").red(), text, details);
}

/// Print any serializable value as pretty JSON on stdout.
pub fn json_output<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(err) => error_with_details("Failed to serialize output", &err.to_string()),
    }
}

/// Print one card in the styled human-readable layout.
pub fn pretty_card(card: &Card) {
    println!(
        "{} {} ({})",
        style(&card.id).cyan(),
        style(&card.name).bold(),
        card.color
    );
    for attack in &card.attack {
        let name = attack.get("name").and_then(|v| v.as_str()).unwrap_or("?");
        match attack.get("damage").and_then(|v| v.as_u64()) {
            Some(damage) => println!("  attack: {} ({})", name, damage),
            None => println!("  attack: {}", name),
        }
    }
    for ability in &card.ability {
        println!("  ability: {}", ability.info);
    }
    for (key, value) in &card.extra {
        if !value.is_empty() {
            println!("  {}: {}", key, value);
        }
    }
}

/// Print a sequence of cards, blank-line separated.
pub fn pretty_cards(cards: &[&Card]) {
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            println!();
        }
        pretty_card(card);
    }
}
