use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::runner::OSASCRIPT_COMMAND;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Program used to execute the notification script.
    pub program: String,
    pub default_title: Option<String>,
    pub default_sound: Option<String>,
    /// Record sent notifications in the history log.
    pub history: bool,
    pub sounds: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            program: OSASCRIPT_COMMAND.to_string(),
            default_title: None,
            default_sound: None,
            history: true,
            sounds: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let mut sounds = Self::default_sounds();
        let mut config = Config::default();
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<Config>(&contents) {
                    Ok(user_config) => config = user_config,
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            %err,
                            "invalid config; using defaults"
                        );
                    }
                },
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "failed to read config; using defaults"
                    );
                }
            }
        }
        sounds.extend(std::mem::take(&mut config.sounds));
        config.sounds = sounds;
        config
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nsnotify")
            .join("config.toml")
    }

    fn default_sounds() -> HashMap<String, String> {
        HashMap::from([
            ("done".to_string(), "Glass".to_string()),
            ("alert".to_string(), "Sosumi".to_string()),
            ("ping".to_string(), "Ping".to_string()),
        ])
    }

    /// Maps a sound alias to its system sound name; unknown names pass through.
    pub fn resolve_sound<'a>(&'a self, name: &'a str) -> &'a str {
        self.sounds.get(name).map_or(name, |s| s.as_str())
    }
}
