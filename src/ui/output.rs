use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(icon: &str, text: &str) {
    println!("{} {}", icon, text.style(theme().banner));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().stored));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().failure));
}

pub fn not_found(label: &str) {
    println!("{} {}", Icons::EMPTY, label.style(theme().missing));
}

pub fn info(label: &str, value: &str) {
    println!("{} {}: {}", Icons::INFO, label.style(theme().label), value);
}

pub fn dim(text: &str) -> String {
    text.style(theme().label).to_string()
}

/// A keyword as shown in status lines
pub fn keyword(name: &str) -> String {
    format!("{:?}", name).style(theme().keyword).to_string()
}

/// Marker appended to hidden snippets
pub fn hidden_marker() -> String {
    "(hidden)".style(theme().hidden).to_string()
}
