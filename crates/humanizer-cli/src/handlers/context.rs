use crate::presentation::PlainView;
use crate::types::OutputFormat;
use anyhow::Result;
use humanizer_runtime::Config;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::path::PathBuf;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub data_dir: PathBuf,
    pub color: bool,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, data_dir: PathBuf) -> Self {
        let color = format == OutputFormat::Plain
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        Self {
            format,
            data_dir,
            color,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load_from(&self.config_path())?)
    }

    /// Render a view using the configured format
    pub fn render<T>(&self, view: &T) -> Result<()>
    where
        T: Serialize + PlainView,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
            OutputFormat::Plain => print!("{}", view.render_plain(self.color)),
        }
        Ok(())
    }
}
