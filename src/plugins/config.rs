//! Config command group: theme and colored-favorites settings.

use crate::core::error::IdeapodError;
use crate::core::settings::{self, ResolvedTheme, Theme};
use crate::core::store::Store;
use crate::core::time::command_envelope;
use crate::core::tui::{self, ItemStatus};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn as_bool(self) -> bool {
        matches!(self, Toggle::On)
    }
}

#[derive(Parser, Debug)]
#[clap(name = "config", about = "Inspect and change settings.")]
pub struct ConfigCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the current settings.
    Show,
    /// Get or set the color theme.
    Theme {
        /// New theme; omit to print the current one.
        #[clap(value_enum, value_name = "THEME")]
        value: Option<Theme>,
    },
    /// Get or set colorized favorite sentences.
    Colored {
        /// New state; omit to print the current one.
        #[clap(value_enum, value_name = "STATE")]
        value: Option<Toggle>,
    },
}

fn print_json(value: &serde_json::Value) -> Result<(), IdeapodError> {
    println!(
        "{}",
        serde_json::to_string_pretty(value)
            .map_err(|e| IdeapodError::ValidationError(e.to_string()))?
    );
    Ok(())
}

fn resolved_label(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Light => "light",
        ResolvedTheme::Dark => "dark",
    }
}

fn show(store: &Store, format: OutputFormat) -> Result<(), IdeapodError> {
    let current = settings::load(store)?;
    match format {
        OutputFormat::Json => print_json(&command_envelope(
            "config.show",
            "ok",
            serde_json::json!({
                "theme": current.theme,
                "resolved_theme": resolved_label(current.theme.resolve()),
                "colored_favorites": current.colored_favorites,
            }),
        )),
        OutputFormat::Text => {
            tui::print_section("Settings");
            tui::print_item(
                &format!(
                    "theme: {} (resolves to {})",
                    current.theme.as_str(),
                    resolved_label(current.theme.resolve())
                ),
                ItemStatus::Info,
            );
            tui::print_item(
                &format!(
                    "colored favorites: {}",
                    if current.colored_favorites { "on" } else { "off" }
                ),
                ItemStatus::Info,
            );
            Ok(())
        }
    }
}

pub fn run_config_cli(store: &Store, cli: ConfigCli) -> Result<(), IdeapodError> {
    match cli.command {
        None | Some(ConfigCommand::Show) => show(store, cli.format)?,
        Some(ConfigCommand::Theme { value }) => match value {
            None => {
                let current = settings::load(store)?;
                match cli.format {
                    OutputFormat::Json => print_json(&command_envelope(
                        "config.theme",
                        "ok",
                        serde_json::json!({
                            "theme": current.theme,
                            "resolved_theme": resolved_label(current.theme.resolve()),
                        }),
                    ))?,
                    OutputFormat::Text => println!("{}", current.theme.as_str()),
                }
            }
            Some(theme) => {
                settings::set_theme(store, theme)?;
                match cli.format {
                    OutputFormat::Json => print_json(&command_envelope(
                        "config.theme",
                        "ok",
                        serde_json::json!({ "theme": theme }),
                    ))?,
                    OutputFormat::Text => tui::print_status_line(
                        &format!("Theme set to {}.", theme.as_str()),
                        ItemStatus::Updated,
                    ),
                }
            }
        },
        Some(ConfigCommand::Colored { value }) => match value {
            None => {
                let current = settings::load(store)?;
                match cli.format {
                    OutputFormat::Json => print_json(&command_envelope(
                        "config.colored",
                        "ok",
                        serde_json::json!({ "colored_favorites": current.colored_favorites }),
                    ))?,
                    OutputFormat::Text => {
                        println!("{}", if current.colored_favorites { "on" } else { "off" })
                    }
                }
            }
            Some(toggle) => {
                settings::set_colored_favorites(store, toggle.as_bool())?;
                match cli.format {
                    OutputFormat::Json => print_json(&command_envelope(
                        "config.colored",
                        "ok",
                        serde_json::json!({ "colored_favorites": toggle.as_bool() }),
                    ))?,
                    OutputFormat::Text => tui::print_status_line(
                        &format!(
                            "Colored favorites {}.",
                            if toggle.as_bool() { "on" } else { "off" }
                        ),
                        ItemStatus::Updated,
                    ),
                }
            }
        },
    }
    Ok(())
}
