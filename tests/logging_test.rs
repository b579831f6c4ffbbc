// Integration tests for what the plugin logs

#[cfg(test)]
mod logging_tests {
    use log::{Level, Log, Metadata, Record};
    use std::sync::{Mutex, MutexGuard, Once};
    use std::thread::{self, ThreadId};
    use word_navigate::{BufferView, Command, Navigation, Plugin, Region, Selection, View};

    struct CaptureLogger {
        records: Mutex<Vec<(ThreadId, Level, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            let entry = (thread::current().id(), record.level(), record.args().to_string());
            self.records.lock().unwrap().push(entry);
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };
    static INIT: Once = Once::new();
    // The max level is global, so tests touching it run one at a time
    static SERIAL: Mutex<()> = Mutex::new(());

    fn setup() -> MutexGuard<'static, ()> {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
        });
        SERIAL.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn records_here(level: Level) -> Vec<String> {
        let id = thread::current().id();
        LOGGER
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(thread, lvl, _)| *thread == id && *lvl == level)
            .map(|(_, _, msg)| msg.clone())
            .collect()
    }

    #[test]
    fn test_multiple_regions_warn_exactly_once() {
        let _guard = setup();
        let plugin = Plugin::activate(None).unwrap();
        let mut view = BufferView::from_text("ab cd ab");
        let regions = vec![Region::new(0, 2), Region::new(6, 8)];
        view.set_selection(Selection::from_regions(regions).unwrap());

        let outcome = plugin.run(&mut view, Command::NextSameWord).unwrap();

        assert_eq!(outcome, Navigation::Aborted);
        assert_eq!(view.sel().regions(), &[Region::new(0, 2), Region::new(6, 8)]);
        let warnings = records_here(Level::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Multiple regions selected"));
    }

    #[test]
    fn test_log_level_change_is_announced() {
        let _guard = setup();
        let mut plugin = Plugin::activate(None).unwrap();
        assert_eq!(log::max_level(), log::LevelFilter::Warn);

        plugin.settings_mut().update("log_level", "debug").unwrap();

        assert_eq!(log::max_level(), log::LevelFilter::Debug);
        assert!(records_here(Level::Info)
            .iter()
            .any(|msg| msg == "Changing log level from 'warning' to 'debug'."));

        plugin.settings_mut().update("log_level", "error").unwrap();
        assert_eq!(log::max_level(), log::LevelFilter::Error);
        plugin.deactivate().unwrap();
    }
}
