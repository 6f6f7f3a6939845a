use owo_colors::{OwoColorize, Stream};

pub fn heading(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
}

pub fn success(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
}

pub fn warn(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string()
}

/// Dimmed text for stderr.
pub fn hint(text: &str) -> String {
    text.if_supports_color(Stream::Stderr, |t| t.dimmed()).to_string()
}
