// Plugin lifecycle: activation, commands, settings reloads

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use log::LevelFilter;

use crate::command::Command;
use crate::config::SettingsFile;
use crate::error::{Error, Result};
use crate::index::IndexStore;
use crate::navigate::{Navigation, Navigator};
use crate::settings::Settings;
use crate::validators::{LogLevel, LogLevelValidator, Validator};
use crate::view::View;

/// Tag the plugin registers its own log level listener under
pub const LOG_LEVEL_LISTENER: &str = "word_navigate";

pub struct Plugin {
    settings: Settings,
    source: Option<SettingsFile>,
    indices: IndexStore,
}

impl Plugin {
    /// Loads the settings file (if any) and sets up the plugin state.
    ///
    /// The log level is read first so the rest of activation already logs
    /// at the configured level.
    pub fn activate(settings_path: Option<&Path>) -> Result<Self> {
        let source = settings_path.map(SettingsFile::new);
        let values = match &source {
            Some(file) => file.load()?,
            None => HashMap::new(),
        };

        let log_level = values
            .get("log_level")
            .and_then(|raw| LogLevelValidator::new().validate(raw))
            .unwrap_or_default();
        log::set_max_level(log_level.to_level_filter());

        let mut settings = Settings::new(log_level);
        settings
            .log_level
            .add_on_change(LOG_LEVEL_LISTENER, on_log_level_change)?;
        settings.apply(&values);

        log::debug!("Word navigation activated.");
        Ok(Self {
            settings,
            source,
            indices: IndexStore::new(),
        })
    }

    pub fn deactivate(mut self) -> Result<()> {
        self.settings.log_level.clear_on_change(LOG_LEVEL_LISTENER)?;
        if let Some(source) = &mut self.source {
            source.unwatch();
        }
        log::debug!("Word navigation deactivated.");
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn navigator(&self) -> Navigator<'_> {
        Navigator::new(&self.settings, &self.indices)
    }

    pub fn run(&self, view: &mut dyn View, command: Command) -> Result<Navigation> {
        log::info!("Navigating to {}.", command.description());
        let started = Instant::now();

        let navigator = self.navigator();
        let outcome = if command.is_in_line() {
            navigator.navigate_in_line(view, command.is_forward())
        } else {
            navigator.navigate(view, command.is_forward())
        };

        log::debug!("{} took {:?}.", command.as_str(), started.elapsed());
        outcome
    }

    pub fn navigate_forward(&self, view: &mut dyn View) -> Result<Navigation> {
        self.run(view, Command::NextSameWord)
    }

    pub fn navigate_backward(&self, view: &mut dyn View) -> Result<Navigation> {
        self.run(view, Command::PreviousSameWord)
    }

    pub fn navigate_forward_in_line(&self, view: &mut dyn View) -> Result<Navigation> {
        self.run(view, Command::NextWordInLine)
    }

    pub fn navigate_backward_in_line(&self, view: &mut dyn View) -> Result<Navigation> {
        self.run(view, Command::PreviousWordInLine)
    }

    /// Called by the host whenever the selection of `view` changed.
    pub fn on_selection_modified(&self, view: &mut dyn View) -> Result<()> {
        self.navigator().mark_adjacent_words(view)
    }

    /// Re-reads the settings file. Rejected values are returned; the
    /// settings they named keep their previous value.
    pub fn reload_settings(&mut self) -> Result<Vec<Error>> {
        let Some(source) = &self.source else {
            return Ok(Vec::new());
        };
        log::debug!("Loading settings from {}.", source.path().display());
        let values = source.load()?;
        Ok(self.settings.apply(&values))
    }

    pub fn watch_settings(&mut self) -> Result<()> {
        match &mut self.source {
            Some(source) if !source.is_watching() => source.watch(),
            _ => Ok(()),
        }
    }

    /// Reloads the settings if the watched file changed since the last poll.
    pub fn poll_settings(&mut self) -> Result<bool> {
        let changed = self
            .source
            .as_mut()
            .map_or(false, |source| source.has_changed());
        if changed {
            self.reload_settings()?;
        }
        Ok(changed)
    }
}

/// Applies a new log level, making sure the change itself is visible.
fn on_log_level_change(_name: &str, old: &LogLevel, new: &LogLevel) {
    if log::max_level() < LevelFilter::Info {
        log::set_max_level(LevelFilter::Info);
    }
    log::info!("Changing log level from '{}' to '{}'.", old, new);
    log::set_max_level(new.to_level_filter());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer_view::BufferView;
    use crate::navigate::ADJACENT_WORD_MARK;
    use crate::region::Region;
    use crate::selection::Selection;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("word-navigate-plugin-{}-{}", std::process::id(), name))
    }

    fn view_at(text: &str, a: usize, b: usize) -> BufferView {
        let mut view = BufferView::from_text(text);
        view.set_selection(Selection::new(Region::new(a, b)));
        view
    }

    #[test]
    fn test_activate_without_file_uses_defaults() {
        let plugin = Plugin::activate(None).unwrap();
        assert_eq!(*plugin.settings().log_level.value(), LogLevel::Warning);
        assert!(plugin.settings().expand_first());
        assert!(plugin.settings().log_level.has_listener(LOG_LEVEL_LISTENER));
        plugin.deactivate().unwrap();
    }

    #[test]
    fn test_activate_reads_settings_file() {
        let path = temp_path("activate.json");
        fs::write(&path, r#"{"case_sensitive": true, "wrap_line": "nope"}"#).unwrap();
        let plugin = Plugin::activate(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(plugin.settings().case_sensitive());
        assert!(plugin.settings().wrap_line());
    }

    #[test]
    fn test_reload_settings_reports_rejected_values() {
        let path = temp_path("reload.toml");
        fs::write(&path, "wrap_buffer = true\n").unwrap();
        let mut plugin = Plugin::activate(Some(&path)).unwrap();
        assert!(plugin.settings().wrap_buffer());

        fs::write(&path, "wrap_buffer = false\nexpand_first = \"often\"\n").unwrap();
        let errors = plugin.reload_settings().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(errors.len(), 1);
        assert!(!plugin.settings().wrap_buffer());
        assert!(plugin.settings().expand_first());
    }

    #[test]
    fn test_watch_settings_twice() {
        let path = temp_path("watch.toml");
        fs::write(&path, "wrap_line = false\n").unwrap();
        let mut plugin = Plugin::activate(Some(&path)).unwrap();
        plugin.watch_settings().unwrap();
        plugin.watch_settings().unwrap();
        fs::remove_file(&path).unwrap();

        assert!(!plugin.settings().wrap_line());
        plugin.deactivate().unwrap();
    }

    #[test]
    fn test_poll_without_watch_is_quiet() {
        let mut plugin = Plugin::activate(None).unwrap();
        plugin.watch_settings().unwrap();
        assert!(!plugin.poll_settings().unwrap());
    }

    #[test]
    fn test_run_dispatches_by_command() {
        let plugin = Plugin::activate(None).unwrap();

        let mut view = view_at("foo bar foo", 0, 3);
        assert_eq!(
            plugin.run(&mut view, Command::NextSameWord).unwrap(),
            Navigation::Moved(Region::new(8, 11))
        );

        let mut view = view_at("foo bar foo", 0, 3);
        assert_eq!(
            plugin.navigate_forward_in_line(&mut view).unwrap(),
            Navigation::Moved(Region::new(4, 7))
        );
    }

    #[test]
    fn test_selection_modified_marks_adjacent_words() {
        let mut plugin = Plugin::activate(None).unwrap();
        plugin.settings_mut().update("mark_adjacent", "true").unwrap();

        let mut view = view_at("ab x ab y ab", 5, 7);
        plugin.on_selection_modified(&mut view).unwrap();
        assert_eq!(
            view.highlights(ADJACENT_WORD_MARK),
            &[Region::new(0, 2), Region::new(10, 12)]
        );

        plugin.settings_mut().update("mark_adjacent", "false").unwrap();
        plugin.on_selection_modified(&mut view).unwrap();
        assert!(view.highlights(ADJACENT_WORD_MARK).is_empty());
    }
}
