// Plugin settings with validation and change listeners

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::validators::{BooleanValidator, LogLevel, LogLevelValidator, Validator};

/// Called with (setting name, old value, new value) after a change.
pub type Listener<T> = Box<dyn FnMut(&str, &T, &T)>;

pub struct Setting<V: Validator> {
    name: &'static str,
    value: V::Value,
    validator: V,
    listeners: HashMap<String, Listener<V::Value>>,
}

impl<V: Validator> Setting<V> {
    pub fn new(name: &'static str, value: V::Value, validator: V) -> Self {
        Self {
            name,
            value,
            validator,
            listeners: HashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &V::Value {
        &self.value
    }

    pub fn validate(&self, raw: &str) -> Option<V::Value> {
        self.validator.validate(raw)
    }

    /// Validates and stores `raw`. Returns whether the value changed; the
    /// listeners only run when it did.
    pub fn update(&mut self, raw: &str) -> Result<bool> {
        let new_value = self.validate(raw).ok_or_else(|| Error::InvalidValue {
            name: self.name.to_string(),
            value: raw.to_string(),
            allowed: self.validator.allowed_values(),
        })?;

        if new_value
            .to_string()
            .eq_ignore_ascii_case(&self.value.to_string())
        {
            return Ok(false);
        }

        log::debug!(
            "Changed setting '{}' from '{}' to '{}'.",
            self.name,
            self.value,
            new_value
        );
        let old_value = std::mem::replace(&mut self.value, new_value);
        for listener in self.listeners.values_mut() {
            listener(self.name, &old_value, &self.value);
        }
        Ok(true)
    }

    pub fn add_on_change<F>(&mut self, tag: &str, listener: F) -> Result<()>
    where
        F: FnMut(&str, &V::Value, &V::Value) + 'static,
    {
        if self.listeners.contains_key(tag) {
            return Err(Error::DuplicateListener {
                setting: self.name.to_string(),
                tag: tag.to_string(),
            });
        }
        log::debug!("Adding callback '{}' for setting '{}'.", tag, self.name);
        self.listeners.insert(tag.to_string(), Box::new(listener));
        Ok(())
    }

    pub fn clear_on_change(&mut self, tag: &str) -> Result<()> {
        if self.listeners.remove(tag).is_none() {
            return Err(Error::UnknownListener {
                setting: self.name.to_string(),
                tag: tag.to_string(),
            });
        }
        log::debug!("Removing callback '{}' for setting '{}'.", tag, self.name);
        Ok(())
    }

    pub fn has_listener(&self, tag: &str) -> bool {
        self.listeners.contains_key(tag)
    }
}

impl<V: Validator> fmt::Debug for Setting<V>
where
    V::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

pub type BooleanSetting = Setting<BooleanValidator>;
pub type LogLevelSetting = Setting<LogLevelValidator>;

fn boolean(name: &'static str, value: bool) -> BooleanSetting {
    Setting::new(name, value, BooleanValidator)
}

/// Every option the plugin reads, one field each.
#[derive(Debug)]
pub struct Settings {
    pub log_level: LogLevelSetting,
    pub use_index: BooleanSetting,
    pub allow_multiple_words: BooleanSetting,
    pub expand_first: BooleanSetting,
    pub wrap_buffer: BooleanSetting,
    pub wrap_line: BooleanSetting,
    pub case_sensitive: BooleanSetting,
    pub mark_adjacent: BooleanSetting,
}

impl Settings {
    pub const NAMES: [&'static str; 8] = [
        "log_level",
        "use_index",
        "allow_multiple_words",
        "expand_first",
        "wrap_buffer",
        "wrap_line",
        "case_sensitive",
        "mark_adjacent",
    ];

    pub fn new(log_level: LogLevel) -> Self {
        Self {
            log_level: Setting::new("log_level", log_level, LogLevelValidator::new()),
            use_index: boolean("use_index", true),
            allow_multiple_words: boolean("allow_multiple_words", true),
            expand_first: boolean("expand_first", true),
            wrap_buffer: boolean("wrap_buffer", true),
            wrap_line: boolean("wrap_line", true),
            case_sensitive: boolean("case_sensitive", false),
            mark_adjacent: boolean("mark_adjacent", false),
        }
    }

    fn boolean_mut(&mut self, name: &str) -> Option<&mut BooleanSetting> {
        match name {
            "use_index" => Some(&mut self.use_index),
            "allow_multiple_words" => Some(&mut self.allow_multiple_words),
            "expand_first" => Some(&mut self.expand_first),
            "wrap_buffer" => Some(&mut self.wrap_buffer),
            "wrap_line" => Some(&mut self.wrap_line),
            "case_sensitive" => Some(&mut self.case_sensitive),
            "mark_adjacent" => Some(&mut self.mark_adjacent),
            _ => None,
        }
    }

    /// Current value of a setting, as text.
    pub fn get(&self, name: &str) -> Result<String> {
        let value = match name {
            "log_level" => self.log_level.value().to_string(),
            "use_index" => self.use_index.value().to_string(),
            "allow_multiple_words" => self.allow_multiple_words.value().to_string(),
            "expand_first" => self.expand_first.value().to_string(),
            "wrap_buffer" => self.wrap_buffer.value().to_string(),
            "wrap_line" => self.wrap_line.value().to_string(),
            "case_sensitive" => self.case_sensitive.value().to_string(),
            "mark_adjacent" => self.mark_adjacent.value().to_string(),
            _ => return Err(Error::UnknownSetting(name.to_string())),
        };
        Ok(value)
    }

    pub fn update(&mut self, name: &str, raw: &str) -> Result<bool> {
        if name == "log_level" {
            return self.log_level.update(raw);
        }
        match self.boolean_mut(name) {
            Some(setting) => setting.update(raw),
            None => Err(Error::UnknownSetting(name.to_string())),
        }
    }

    /// Updates every known setting present in `values`. Names that are not
    /// settings are ignored; rejected values are logged and returned.
    pub fn apply(&mut self, values: &HashMap<String, String>) -> Vec<Error> {
        log::debug!("Reloading settings.");
        let mut errors = Vec::new();
        for name in Self::NAMES {
            if let Some(raw) = values.get(name) {
                if let Err(e) = self.update(name, raw) {
                    log::error!("{}", e);
                    errors.push(e);
                }
            }
        }
        errors
    }

    pub fn allow_multiple_words(&self) -> bool {
        *self.allow_multiple_words.value()
    }

    pub fn expand_first(&self) -> bool {
        *self.expand_first.value()
    }

    pub fn use_index(&self) -> bool {
        *self.use_index.value()
    }

    pub fn wrap_buffer(&self) -> bool {
        *self.wrap_buffer.value()
    }

    pub fn wrap_line(&self) -> bool {
        *self.wrap_line.value()
    }

    pub fn case_sensitive(&self) -> bool {
        *self.case_sensitive.value()
    }

    pub fn mark_adjacent(&self) -> bool {
        *self.mark_adjacent.value()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}
