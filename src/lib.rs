// Word Navigate - Jump between occurrences of words in a text view
// Module declarations

pub mod buffer;
pub mod buffer_view;
pub mod classify;
pub mod command;
pub mod config;
pub mod error;
pub mod index;
pub mod locate;
pub mod navigate;
pub mod plugin;
pub mod region;
pub mod search;
pub mod selection;
pub mod settings;
pub mod validators;
pub mod view;
pub mod viewport;

// Re-export commonly used types
pub use buffer_view::BufferView;
pub use command::{parse_command, Command};
pub use error::{Error, Result};
pub use navigate::{Navigation, Navigator};
pub use plugin::Plugin;
pub use region::Region;
pub use selection::Selection;
pub use settings::Settings;
pub use view::View;
