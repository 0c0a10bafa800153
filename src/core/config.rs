use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", Config::config_file().display());
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report keys missing from the config file. Returns true when complete.
    pub fn check(path: &Path) -> AppResult<bool> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use). Run `stafftime init`.",
                path.display()
            ));
            return Ok(false);
        }

        let missing = migrate::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
            Ok(true)
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            info("Run `stafftime config --migrate` to add them with default values.");
            Ok(false)
        }
    }

    pub fn migrate(path: &Path) -> AppResult<usize> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "no configuration file at {}",
                path.display()
            )));
        }
        migrate::fill_missing_keys(path)
    }

    /// Open the config file in `editor`, falling back to $EDITOR / $VISUAL
    /// or the platform default when the requested one fails.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", editor_to_use));
                return Ok(());
            }
            _ if editor_to_use == default_editor => {
                return Err(AppError::Config(format!(
                    "failed to run editor '{}'",
                    editor_to_use
                )));
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using fallback '{}'",
                default_editor
            ))),
        }
    }
}
