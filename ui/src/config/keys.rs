use serde::Deserialize;

/// Key bindings configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    key_quit: Option<char>,
    key_theme: Option<char>,

    // Theme picker navigation
    key_down: Option<char>,
    key_up: Option<char>,
}

impl KeyBindingsConfig {
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn theme(&self) -> char {
        self.key_theme.unwrap_or('t')
    }

    pub fn down(&self) -> char {
        self.key_down.unwrap_or('j')
    }

    pub fn up(&self) -> char {
        self.key_up.unwrap_or('k')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindingsConfig::default();
        assert_eq!(keys.quit(), 'q');
        assert_eq!(keys.theme(), 't');
        assert_eq!(keys.down(), 'j');
        assert_eq!(keys.up(), 'k');
    }

    #[test]
    fn test_partial_override() {
        let keys: KeyBindingsConfig = toml::from_str("key_theme = 'p'").expect("valid toml");
        assert_eq!(keys.theme(), 'p');
        assert_eq!(keys.quit(), 'q');
    }
}
