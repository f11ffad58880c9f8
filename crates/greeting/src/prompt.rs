//! Prompt construction.

use std::fmt;

/// Recipient used when the name field is left blank.
pub const DEFAULT_NAME: &str = "Dear Guest";
/// Theme used when none is chosen.
pub const DEFAULT_THEME: &str = "Classic Royal";
/// Themes offered by the greeting panel.
pub const THEME_PRESETS: [&str; 4] = [
    "Classic Royal",
    "1920s Gatsby",
    "Warm & Cozy",
    "Magical Winter",
];
/// Word budget requested from the model.
pub const WORD_LIMIT: usize = 40;
/// Longest name or theme embedded verbatim, in characters.
pub const MAX_FIELD_CHARS: usize = 80;

/// Sanitized recipient and theme, ready to render into a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingPrompt {
    name: String,
    theme: String,
}

fn clean_field(raw: &str, fallback: &str) -> String {
    let collapsed: String = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('"', "'");
    if collapsed.is_empty() {
        return fallback.to_string();
    }
    collapsed.chars().take(MAX_FIELD_CHARS).collect()
}

impl GreetingPrompt {
    /// Build from raw form input.
    pub fn new(name: &str, theme: &str) -> Self {
        Self {
            name: clean_field(name, DEFAULT_NAME),
            theme: clean_field(theme, DEFAULT_THEME),
        }
    }

    /// Recipient as embedded in the prompt.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Theme as embedded in the prompt.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Instruction text sent to the model.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GreetingPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Write a short, luxurious, sophisticated, and heartwarming Christmas greeting for \"{}\".",
            self.name
        )?;
        writeln!(f, "The theme or vibe is \"{}\".", self.theme)?;
        writeln!(
            f,
            "The tone should be like a 1920s Gatsby party invitation or a royal decree: elegant, poetic, and full of grandeur."
        )?;
        write!(f, "Keep it under {WORD_LIMIT} words. Do not use hashtags.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_name_and_theme() {
        let prompt = GreetingPrompt::new("Ada", "Classic Royal").render();
        assert!(prompt.contains("greeting for \"Ada\""));
        assert!(prompt.contains("The theme or vibe is \"Classic Royal\""));
        assert!(prompt.contains("under 40 words"));
        assert!(prompt.contains("hashtags"));
    }

    #[test]
    fn blank_fields_use_defaults() {
        let prompt = GreetingPrompt::new("   ", "");
        assert_eq!(prompt.name(), DEFAULT_NAME);
        assert_eq!(prompt.theme(), DEFAULT_THEME);
    }

    #[test]
    fn fields_are_bounded_and_unquoted() {
        let long = "x".repeat(500);
        let prompt = GreetingPrompt::new(&long, "say \"hi\"\n\tnow");
        assert_eq!(prompt.name().chars().count(), MAX_FIELD_CHARS);
        assert_eq!(prompt.theme(), "say 'hi' now");
    }

    #[test]
    fn default_theme_is_a_preset() {
        assert!(THEME_PRESETS.contains(&DEFAULT_THEME));
    }
}
