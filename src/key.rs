//! Key bindings for programs hosting a countdown.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A set of key presses that trigger one action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes with the exact modifiers that must accompany them.
    pub keys: Vec<(KeyCode, KeyModifiers)>,
    /// Short key label shown in help, e.g. `"q"`.
    pub help: String,
    /// What the binding does, e.g. `"quit"`.
    pub description: String,
}

impl Binding {
    /// Creates a binding with empty help text.
    pub fn new(keys: Vec<(KeyCode, KeyModifiers)>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the help label.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether `key_msg` is one of this binding's keys.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys
            .iter()
            .any(|(code, mods)| *code == key_msg.key && *mods == key_msg.modifiers)
    }
}

/// Keys understood by the countdown demo program.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Exits the program.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: Binding::new(vec![
                (KeyCode::Char('q'), KeyModifiers::NONE),
                (KeyCode::Esc, KeyModifiers::NONE),
                (KeyCode::Char('c'), KeyModifiers::CONTROL),
            ])
            .with_help("q")
            .with_description("quit"),
        }
    }
}

impl KeyMap {
    /// Creates the default key map.
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line help such as `"q quit"`.
    pub fn short_help(&self) -> String {
        format!("{} {}", self.quit.help, self.quit.description)
    }
}
