//! Environment applied to every external command.
//!
//! pacman and pactree localise their output, and `PATH` decides which binaries
//! get picked up. Both are pinned so the text parsers always see the same
//! English, untranslated format.

/// Default search path for `pacman`, `pactree` and `sudo`.
pub const DEFAULT_SEARCH_PATH: &str = "/usr/bin";

/// Default `LC_ALL` value for child processes.
pub const DEFAULT_LOCALE: &str = "C";

/// Search path and locale handed to child processes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandEnv {
    /// `PATH`-style list of directories, used both to locate binaries and as
    /// the child's `PATH`
    pub search_path: String,

    /// Value of `LC_ALL` in the child
    pub locale: String,
}

impl Default for CommandEnv {
    fn default() -> Self {
        Self {
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}
