// SPDX-License-Identifier: MPL-2.0

use cosmic::cosmic_config::{self, cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Plural noun used to label both lists (e.g. "Rules")
    pub unit: String,
    /// Path to a JSON file with the options; empty uses the built-in sample
    pub options_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit: String::from("Items"),
            options_file: String::new(),
        }
    }
}

impl Config {
    /// Returns the configured options file, if any.
    pub fn options_path(&self) -> Option<&str> {
        let path = self.options_file.trim();
        (!path.is_empty()).then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_options_file_means_builtin() {
        let mut config = Config::default();
        assert_eq!(config.options_path(), None);

        config.options_file = "  /tmp/options.json ".to_string();
        assert_eq!(config.options_path(), Some("/tmp/options.json"));
    }
}
