//! Key binding primitives shared by the pager components.
//!
//! A [`Binding`] pairs one or more key presses with the short help text shown
//! in a component's footer. Components expose their bindings through the
//! [`KeyMap`] trait so a help line can be rendered from them.
//!
//! ```rust
//! use bubbletea_pager::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let refresh = Binding::new(vec![KeyCode::Char('r'), KeyCode::F(5)]).with_help("r", "refresh");
//! let msg = KeyMsg { key: KeyCode::F(5), modifiers: KeyModifiers::NONE };
//! assert!(refresh.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key as displayed to the user, e.g. `"r"` or `"↑/k"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A single key press, optionally with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must be held; empty means "any".
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key && (self.modifiers.is_empty() || msg.modifiers.contains(self.modifiers))
    }
}

/// A set of key presses that trigger the same action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates a binding that matches any of `keys` without modifiers.
    ///
    /// Entries may also be `(KeyCode, KeyModifiers)` pairs for chords such as
    /// `ctrl+r`.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text for the binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match and are
    /// left out of help output.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Components that can describe their key bindings for a help view.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
}

/// Renders the short help of a key map as `key desc • key desc`.
pub fn short_help_view(keymap: &dyn KeyMap, separator: &str) -> String {
    keymap
        .short_help()
        .into_iter()
        .filter(|b| b.enabled() && !b.help().key.is_empty())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_plain_binding_matches_any_listed_key() {
        let b = Binding::new(vec![KeyCode::Char('r'), KeyCode::F(5)]);
        assert!(b.matches(&key(KeyCode::Char('r'), KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::F(5), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Char('x'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_chord_requires_modifier() {
        let b = Binding::new(vec![(KeyCode::Char('r'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&key(KeyCode::Char('r'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('r'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "retry");
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_short_help_view_skips_disabled() {
        struct Keys {
            a: Binding,
            b: Binding,
        }
        impl KeyMap for Keys {
            fn short_help(&self) -> Vec<&Binding> {
                vec![&self.a, &self.b]
            }
        }

        let mut keys = Keys {
            a: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "refresh"),
            b: Binding::new(vec![KeyCode::Enter]).with_help("enter", "retry"),
        };
        assert_eq!(short_help_view(&keys, " • "), "r refresh • enter retry");

        keys.b.set_enabled(false);
        assert_eq!(short_help_view(&keys, " • "), "r refresh");
    }
}
