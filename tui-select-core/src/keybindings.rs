//! Keybindings: logical key actions mapped from platform key strings
//!
//! Widgets react to a small enum of logical actions (navigate, commit,
//! close) rather than to raw key codes. The mapping from keys to those
//! actions lives in a [`Keybindings`] table, which can be loaded from and
//! saved to JSON and merged over a widget's defaults.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

/// Trait for logical key action enums
///
/// # Example
/// ```ignore
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// pub enum ListKey {
///     Up,
///     Down,
/// }
///
/// impl BindingAction for ListKey {
///     fn name(&self) -> &'static str {
///         match self {
///             ListKey::Up => "up",
///             ListKey::Down => "down",
///         }
///     }
///
///     fn from_name(name: &str) -> Option<Self> {
///         Self::all().iter().copied().find(|k| k.name() == name)
///     }
///
///     fn all() -> &'static [Self] {
///         &[ListKey::Up, ListKey::Down]
///     }
/// }
/// ```
pub trait BindingAction: Clone + Copy + Eq + Hash + 'static {
    /// Get the action name as a string (for config file lookup)
    fn name(&self) -> &'static str;

    /// Parse an action from its name
    fn from_name(name: &str) -> Option<Self>;

    /// All actions, in lookup priority order
    fn all() -> &'static [Self];
}

/// Key table mapping each logical action to one or more key strings
#[derive(Debug, Clone)]
pub struct Keybindings<K: BindingAction> {
    bindings: HashMap<K, Vec<String>>,
}

impl<K: BindingAction> Default for Keybindings<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: BindingAction> Serialize for Keybindings<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.bindings.len()))?;
        // Stable order so saved files diff cleanly
        for action in K::all() {
            if let Some(keys) = self.bindings.get(action) {
                map.serialize_entry(action.name(), keys)?;
            }
        }
        map.end()
    }
}

impl<'de, K: BindingAction> Deserialize<'de> for Keybindings<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, Vec<String>> = HashMap::deserialize(deserializer)?;

        let mut keybindings = Keybindings::new();
        for (name, keys) in raw {
            // Unknown action names are skipped for forward compatibility
            if let Some(action) = K::from_name(&name) {
                keybindings.bindings.insert(action, keys);
            }
        }

        Ok(keybindings)
    }
}

impl<K: BindingAction> Keybindings<K> {
    /// Create a new empty keybindings table
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind an action to the given key strings, replacing earlier keys
    pub fn add(&mut self, action: K, keys: Vec<String>) {
        self.bindings.insert(action, keys);
    }

    /// Builder form of [`Keybindings::add`]
    pub fn with(mut self, action: K, keys: &[&str]) -> Self {
        self.add(action, keys.iter().map(|k| k.to_string()).collect());
        self
    }

    /// Key strings bound to an action
    pub fn keys_for(&self, action: K) -> &[String] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First key string bound to an action, for help text
    pub fn first_key(&self, action: K) -> Option<&str> {
        self.keys_for(action).first().map(String::as_str)
    }

    /// Resolve a key event to its logical action
    ///
    /// Actions are checked in [`BindingAction::all`] order, so the first
    /// declared action wins when two share a key.
    pub fn resolve(&self, key: &KeyEvent) -> Option<K> {
        K::all().iter().copied().find(|action| {
            self.keys_for(*action)
                .iter()
                .filter_map(|s| parse_key_string(s))
                .any(|parsed| key_matches(&parsed, key))
        })
    }

    /// Merge user config onto defaults - user config overrides defaults
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        for (action, keys) in user.bindings {
            defaults.bindings.insert(action, keys);
        }
        defaults
    }
}

/// Compare code and modifiers, ignoring kind and state.
/// Character keys compare case-insensitively.
fn key_matches(bound: &KeyEvent, pressed: &KeyEvent) -> bool {
    let codes_match = match (&bound.code, &pressed.code) {
        (KeyCode::Char(c1), KeyCode::Char(c2)) => c1.eq_ignore_ascii_case(c2),
        _ => bound.code == pressed.code,
    };
    codes_match && bound.modifiers == pressed.modifiers
}

/// Parse a key string like "q", "esc", "ctrl+p", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();

    if key_str.is_empty() {
        return None;
    }

    // Special case: shift+tab should be BackTab
    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // A lone "+" is a key, not a separator
    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        Some((mods, "")) => (mods.trim_end_matches('+'), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", key_str.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts.split('+').filter(|p| !p.is_empty()) {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        // Single character
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(press(code, modifiers))
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Format a key string for display (e.g., "ctrl+p" -> "^P", "q" -> "Q", "down" -> "↓")
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();

    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let key_part = parts.last().copied().unwrap_or(key_str.as_str());

    let mut prefix = String::new();
    for part in &parts[..parts.len().saturating_sub(1)] {
        match part.trim() {
            "ctrl" | "control" => prefix.push('^'),
            "shift" => prefix.push_str("Shift+"),
            "alt" => prefix.push_str("Alt+"),
            _ => {}
        }
    }

    let key_display = match key_part {
        "esc" | "escape" => "Esc".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "tab" => "Tab".to_string(),
        "backspace" => "Backspace".to_string(),
        "up" => "↑".to_string(),
        "down" => "↓".to_string(),
        "left" => "←".to_string(),
        "right" => "→".to_string(),
        "home" => "Home".to_string(),
        "end" => "End".to_string(),
        "pageup" => "PgUp".to_string(),
        "pagedown" => "PgDn".to_string(),
        "delete" => "Del".to_string(),
        "insert" => "Ins".to_string(),
        "space" => "Space".to_string(),
        f if f.len() > 1 && f.starts_with('f') && f[1..].parse::<u8>().is_ok() => f.to_uppercase(),
        // Letters are shown capitalized, everything else as-is
        c if c.chars().count() == 1 => c.to_uppercase(),
        other => other.to_string(),
    };

    format!("{}{}", prefix, key_display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestKey {
        Next,
        Quit,
    }

    impl BindingAction for TestKey {
        fn name(&self) -> &'static str {
            match self {
                TestKey::Next => "next",
                TestKey::Quit => "quit",
            }
        }

        fn from_name(name: &str) -> Option<Self> {
            Self::all().iter().copied().find(|k| k.name() == name)
        }

        fn all() -> &'static [Self] {
            &[TestKey::Next, TestKey::Quit]
        }
    }

    fn bindings() -> Keybindings<TestKey> {
        Keybindings::new()
            .with(TestKey::Next, &["down", "j"])
            .with(TestKey::Quit, &["q", "ctrl+c"])
    }

    #[test]
    fn test_parse_simple_key() {
        let result = parse_key_string("q").unwrap();
        assert_eq!(result.code, KeyCode::Char('q'));
        assert_eq!(result.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("Enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("up").unwrap().code, KeyCode::Up);
        assert_eq!(parse_key_string("down").unwrap().code, KeyCode::Down);
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert!(parse_key_string("f13").is_none());
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("nonsense").is_none());
    }

    #[test]
    fn test_parse_ctrl_key() {
        let result = parse_key_string("ctrl+p").unwrap();
        assert_eq!(result.code, KeyCode::Char('p'));
        assert!(result.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_parse_plus_key() {
        let result = parse_key_string("+").unwrap();
        assert_eq!(result.code, KeyCode::Char('+'));
        let result = parse_key_string("ctrl++").unwrap();
        assert_eq!(result.code, KeyCode::Char('+'));
        assert!(result.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_parse_shift_tab() {
        let result = parse_key_string("shift+tab").unwrap();
        assert_eq!(result.code, KeyCode::BackTab);
        assert!(result.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn test_resolve() {
        let bindings = bindings();
        assert_eq!(
            bindings.resolve(&parse_key_string("down").unwrap()),
            Some(TestKey::Next)
        );
        assert_eq!(
            bindings.resolve(&parse_key_string("J").unwrap()),
            Some(TestKey::Next)
        );
        assert_eq!(
            bindings.resolve(&parse_key_string("ctrl+c").unwrap()),
            Some(TestKey::Quit)
        );
        // Modifiers must match exactly
        assert_eq!(bindings.resolve(&parse_key_string("ctrl+q").unwrap()), None);
        assert_eq!(bindings.resolve(&parse_key_string("up").unwrap()), None);
    }

    #[test]
    fn test_first_declared_action_wins() {
        let bindings = Keybindings::new()
            .with(TestKey::Quit, &["x"])
            .with(TestKey::Next, &["x"]);
        assert_eq!(
            bindings.resolve(&parse_key_string("x").unwrap()),
            Some(TestKey::Next)
        );
    }

    #[test]
    fn test_merge() {
        let user = Keybindings::new().with(TestKey::Quit, &["x"]);
        let merged = Keybindings::merge(bindings(), user);

        assert_eq!(merged.keys_for(TestKey::Quit), ["x".to_string()]);
        assert_eq!(merged.first_key(TestKey::Next), Some("down"));
    }

    #[test]
    fn test_serde_by_action_name() {
        let json = serde_json::to_string(&bindings()).unwrap();
        assert_eq!(json, r#"{"next":["down","j"],"quit":["q","ctrl+c"]}"#);

        let loaded: Keybindings<TestKey> =
            serde_json::from_str(r#"{"quit":["esc"],"unknown":["z"]}"#).unwrap();
        assert_eq!(loaded.keys_for(TestKey::Quit), ["esc".to_string()]);
        assert!(loaded.keys_for(TestKey::Next).is_empty());
    }

    #[test]
    fn test_format_key_for_display() {
        assert_eq!(format_key_for_display("q"), "Q");
        assert_eq!(format_key_for_display("ctrl+p"), "^P");
        assert_eq!(format_key_for_display("esc"), "Esc");
        assert_eq!(format_key_for_display("down"), "↓");
        assert_eq!(format_key_for_display("space"), "Space");
        assert_eq!(format_key_for_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_for_display("f2"), "F2");
    }
}
