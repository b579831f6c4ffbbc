// Settings file loading and change watching
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use crate::error::{Error, Result};

/// File name the host looks for
pub const SETTINGS_FILE_NAME: &str = "WordNavigate.sublime-settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") | Some("sublime-settings") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// A single value as written in the file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl RawValue {
    fn into_string(self) -> Option<String> {
        match self {
            RawValue::Bool(b) => Some(b.to_string()),
            RawValue::Integer(i) => Some(i.to_string()),
            RawValue::Float(f) => Some(f.to_string()),
            RawValue::Text(s) => Some(s),
            RawValue::Other(_) => None,
        }
    }
}

/// Parses flat `name = value` settings into raw strings.
pub fn parse_settings(content: &str, format: Format) -> Result<HashMap<String, String>> {
    let raw: HashMap<String, RawValue> = match format {
        Format::Json => serde_json::from_str(content)
            .map_err(|e| Error::ParseError(format!("Invalid settings JSON: {}", e)))?,
        Format::Toml => toml::from_str(content)
            .map_err(|e| Error::ParseError(format!("Invalid settings TOML: {}", e)))?,
    };

    let mut values = HashMap::new();
    for (name, value) in raw {
        match value.into_string() {
            Some(text) => {
                values.insert(name, text);
            }
            None => log::warn!("Ignoring setting '{}': not a plain value.", name),
        }
    }
    Ok(values)
}

/// The key-value store backing the plugin settings.
pub struct SettingsFile {
    path: PathBuf,
    format: Format,
    watcher: Option<RecommendedWatcher>,
    events: Option<Receiver<notify::Result<Event>>>,
}

impl SettingsFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            format: Format::from_path(&path),
            path,
            watcher: None,
            events: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file. A missing file has no settings.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_settings(&content, self.format),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}.", self.path.display());
                Ok(HashMap::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Starts watching the file. Changes are picked up by `has_changed`.
    pub fn watch(&mut self) -> Result<()> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        // Editors replace files on save, so watch the directory
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        log::debug!("Watching {} for settings changes.", dir.display());

        self.watcher = Some(watcher);
        self.events = Some(rx);
        Ok(())
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    pub fn unwatch(&mut self) {
        self.watcher = None;
        self.events = None;
    }

    /// Drains pending watcher events; true when any touched the file.
    pub fn has_changed(&mut self) -> bool {
        let Some(events) = &self.events else {
            return false;
        };

        let file_name = self.path.file_name();
        let mut changed = false;
        for event in events.try_iter() {
            match event {
                Ok(event) => {
                    let relevant = matches!(
                        event.kind,
                        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                    ) && event.paths.iter().any(|p| p.file_name() == file_name);
                    changed |= relevant;
                }
                Err(e) => log::warn!("Settings watch error: {}", e),
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("word-navigate-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new(SETTINGS_FILE_NAME)), Format::Json);
        assert_eq!(Format::from_path(Path::new("a/b.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("config.toml")), Format::Toml);
    }

    #[test]
    fn test_parse_json_settings() {
        let values = parse_settings(
            r#"{"log_level": "debug", "wrap_line": false, "columns": 80, "nested": {"a": 1}}"#,
            Format::Json,
        )
        .unwrap();
        assert_eq!(values.get("log_level").map(String::as_str), Some("debug"));
        assert_eq!(values.get("wrap_line").map(String::as_str), Some("false"));
        assert_eq!(values.get("columns").map(String::as_str), Some("80"));
        assert!(!values.contains_key("nested"));
    }

    #[test]
    fn test_parse_toml_settings() {
        let values = parse_settings("case_sensitive = true\nlog_level = \"info\"\n", Format::Toml).unwrap();
        assert_eq!(values.get("case_sensitive").map(String::as_str), Some("true"));
        assert_eq!(values.get("log_level").map(String::as_str), Some("info"));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_settings("{not json", Format::Json),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let file = SettingsFile::new(temp_path("missing.toml"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_file() {
        let path = temp_path("load.json");
        fs::write(&path, r#"{"expand_first": false}"#).unwrap();
        let file = SettingsFile::new(&path);
        let values = file.load().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(values.get("expand_first").map(String::as_str), Some("false"));
    }

    #[test]
    fn test_unwatched_file_never_changes() {
        let mut file = SettingsFile::new(temp_path("unwatched.toml"));
        assert!(!file.is_watching());
        assert!(!file.has_changed());
    }
}
