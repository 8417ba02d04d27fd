use crate::color::{self, Color};
use crate::error::Error;
use crate::tool::{ToolKind, ToolSelection, DEFAULT_ERASER_WIDTH, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
    pub exists: bool,
}

impl LoadedConfig {
    /// Report where the config came from; call once logging is up.
    pub fn log_source(&self) {
        if self.exists {
            info!(path = %self.path.display(), "loaded config");
        } else {
            info!(path = %self.path.display(), "no config file, using defaults");
        }
    }
}

pub const CONFIG_ENV: &str = "SKETCHPAD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "sketchpad.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub background: String,
    pub tool: ToolKind,
    pub color: String,
    pub line_width: u32,
    pub min_line_width: u32,
    pub max_line_width: u32,
    pub eraser_width: u32,
    /// Colors cycled by the front-end's "next color" key.
    pub palette: Vec<String>,
    /// Maximum number of history entries; 0 keeps everything.
    pub history_limit: usize,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 960,
            height: 640,
            background: "#ffffff".into(),
            tool: ToolKind::Brush,
            color: "#000000".into(),
            line_width: DEFAULT_WIDTH,
            min_line_width: 1,
            max_line_width: 40,
            eraser_width: DEFAULT_ERASER_WIDTH,
            palette: ["#000000", "#e03131", "#2f9e44", "#1971c2", "#f08c00"]
                .into_iter()
                .map(String::from)
                .collect(),
            history_limit: 0,
            debug: false,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path`; a missing file yields the defaults. Nothing is logged here
    /// because this runs before the subscriber is installed.
    pub fn load(path: &Path) -> Result<LoadedConfig, Error> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(LoadedConfig {
                config: Self::from_toml(&text)?,
                path: path.to_path_buf(),
                exists: true,
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(LoadedConfig {
                config: Self::default(),
                path: path.to_path_buf(),
                exists: false,
            }),
            Err(source) => Err(Error::ConfigRead { path: path.to_path_buf(), source }),
        }
    }

    /// First CLI argument, then `$SKETCHPAD_CONFIG`, then `./sketchpad.toml`.
    pub fn resolve_path(arg: Option<String>) -> PathBuf {
        arg.or_else(|| std::env::var(CONFIG_ENV).ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.min_line_width == 0 || self.min_line_width > self.max_line_width {
            return Err(Error::InvalidConfig(format!(
                "line width bounds {}..={} are invalid",
                self.min_line_width, self.max_line_width
            )));
        }
        if self.eraser_width == 0 {
            return Err(Error::InvalidConfig("eraser_width must be at least 1".into()));
        }
        self.background_color()?;
        self.stroke_color()?;
        self.palette_colors()?;
        Ok(())
    }

    pub fn background_color(&self) -> Result<Color, Error> {
        color::parse_hex(&self.background)
    }

    pub fn stroke_color(&self) -> Result<Color, Error> {
        color::parse_hex(&self.color)
    }

    pub fn palette_colors(&self) -> Result<Vec<Color>, Error> {
        self.palette.iter().map(|c| color::parse_hex(c)).collect()
    }

    pub fn clamp_width(&self, width: u32) -> u32 {
        width.clamp(self.min_line_width, self.max_line_width)
    }

    pub fn tool_selection(&self) -> Result<ToolSelection, Error> {
        let width = self.clamp_width(self.line_width);
        if width != self.line_width {
            warn!(requested = self.line_width, width, "line_width outside bounds, clamped");
        }
        Ok(ToolSelection {
            kind: self.tool,
            color: self.stroke_color()?,
            width,
            eraser_width: self.eraser_width,
        })
    }
}
