// Errors for the shell around the drawing core (window, config).
// The core itself is total: history and surface operations never fail.
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the frame to the window failed
    #[error("Config read error ({path}): {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
