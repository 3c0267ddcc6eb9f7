//! Doctor: read-only health checks over the data directory.
//!
//! Inspects every document ideapod persists without rewriting any of
//! them, so running doctor never triggers a legacy upgrade or a
//! corrupt-file reset. Exits nonzero when any check fails.

use crate::core::error::IdeapodError;
use crate::core::favorites::{self, FavoritesHealth};
use crate::core::lexicon::Category;
use crate::core::localstore::{
    self, COLORED_FAVORITES_DOC, SESSION_DOC, THEME_DOC, UNDO_DOC,
};
use crate::core::session::Session;
use crate::core::settings::Theme;
use crate::core::store::Store;
use crate::core::tui::{self, ItemStatus};
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(name = "doctor", about = "Check the health of stored data.")]
pub struct DoctorCli {
    /// Output format.
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub checks: Vec<CheckResult>,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
}

fn check(name: &str, status: CheckStatus, message: impl Into<String>) -> CheckResult {
    CheckResult {
        name: name.to_string(),
        status,
        message: message.into(),
    }
}

fn check_data_dir(store: &Store) -> CheckResult {
    let dir = store.data_dir();
    if dir.is_dir() {
        check("Data Directory", CheckStatus::Pass, format!("{}", dir.display()))
    } else {
        check(
            "Data Directory",
            CheckStatus::Warn,
            "not created yet; the first write will create it",
        )
    }
}

fn check_favorites(store: &Store) -> CheckResult {
    match favorites::inspect(store) {
        Ok(FavoritesHealth::Missing) => {
            check("Favorites", CheckStatus::Pass, "none saved yet")
        }
        Ok(FavoritesHealth::Current(n)) => {
            check("Favorites", CheckStatus::Pass, format!("{} saved", n))
        }
        Ok(FavoritesHealth::Legacy(n)) => check(
            "Favorites",
            CheckStatus::Warn,
            format!("{} in the legacy format; `favorites list` upgrades them", n),
        ),
        Ok(FavoritesHealth::Corrupt) => check(
            "Favorites",
            CheckStatus::Fail,
            "unreadable; the next load resets them to empty",
        ),
        Err(e) => check("Favorites", CheckStatus::Fail, e.to_string()),
    }
}

fn check_theme(store: &Store) -> CheckResult {
    match localstore::read_raw(store, THEME_DOC) {
        Ok(None) => check("Theme", CheckStatus::Pass, "default (system)"),
        Ok(Some(raw)) => match serde_json::from_str::<Theme>(&raw) {
            Ok(theme) => check("Theme", CheckStatus::Pass, theme.as_str()),
            Err(_) => check(
                "Theme",
                CheckStatus::Warn,
                "unreadable; the default applies",
            ),
        },
        Err(e) => check("Theme", CheckStatus::Fail, e.to_string()),
    }
}

fn check_colored(store: &Store) -> CheckResult {
    match localstore::read_raw(store, COLORED_FAVORITES_DOC) {
        Ok(None) => check("Colored Favorites", CheckStatus::Pass, "default (off)"),
        Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
            Ok(on) => check(
                "Colored Favorites",
                CheckStatus::Pass,
                if on { "on" } else { "off" },
            ),
            Err(_) => check(
                "Colored Favorites",
                CheckStatus::Warn,
                "unreadable; the default applies",
            ),
        },
        Err(e) => check("Colored Favorites", CheckStatus::Fail, e.to_string()),
    }
}

fn check_session(store: &Store) -> CheckResult {
    match localstore::read_raw(store, SESSION_DOC) {
        Ok(None) => check("Session", CheckStatus::Pass, "no current idea"),
        Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
            Ok(sess) => {
                let locked = Category::ALL
                    .iter()
                    .filter(|c| sess.locks.is_locked(**c))
                    .count();
                let idea = if sess.parts.is_some() {
                    "current idea on deck"
                } else {
                    "no current idea"
                };
                check(
                    "Session",
                    CheckStatus::Pass,
                    format!("{}, {} locked", idea, locked),
                )
            }
            Err(_) => check(
                "Session",
                CheckStatus::Warn,
                "unreadable; the next roll starts fresh",
            ),
        },
        Err(e) => check("Session", CheckStatus::Fail, e.to_string()),
    }
}

fn check_undo(store: &Store) -> CheckResult {
    match localstore::read_raw(store, UNDO_DOC) {
        Ok(None) => check("Undo Slot", CheckStatus::Pass, "empty"),
        Ok(Some(_)) => check("Undo Slot", CheckStatus::Pass, "holding one removal"),
        Err(e) => check("Undo Slot", CheckStatus::Fail, e.to_string()),
    }
}

fn check_lexicon() -> CheckResult {
    let words: usize = Category::ALL.iter().map(|c| c.words().len()).sum();
    let empty = Category::ALL.iter().any(|c| c.words().is_empty());
    if empty {
        check("Lexicon", CheckStatus::Fail, "a category has no words")
    } else {
        check(
            "Lexicon",
            CheckStatus::Pass,
            format!("{} categories, {} words", Category::ALL.len(), words),
        )
    }
}

fn check_version() -> CheckResult {
    check("Version", CheckStatus::Pass, env!("CARGO_PKG_VERSION"))
}

fn run_checks(store: &Store) -> DoctorReport {
    let checks = vec![
        check_data_dir(store),
        check_favorites(store),
        check_theme(store),
        check_colored(store),
        check_session(store),
        check_undo(store),
        check_lexicon(),
        check_version(),
    ];

    let passed = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Pass)
        .count();
    let failed = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Fail)
        .count();
    let warnings = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warn)
        .count();

    DoctorReport {
        checks,
        passed,
        failed,
        warnings,
    }
}

pub fn run_doctor_cli(store: &Store, cli: DoctorCli) -> Result<(), IdeapodError> {
    let report = run_checks(store);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| IdeapodError::ValidationError(e.to_string()))?
            );
        }
        OutputFormat::Text => {
            tui::print_section("Ideapod Doctor");
            println!();
            for result in &report.checks {
                let status = match result.status {
                    CheckStatus::Pass => ItemStatus::Pass,
                    CheckStatus::Fail => ItemStatus::Fail,
                    CheckStatus::Warn => ItemStatus::Warn,
                };
                tui::print_item(&format!("{}: {}", result.name, result.message), status);
            }
            println!(
                "\nSummary: {} passed, {} failed, {} warnings",
                report.passed, report.failed, report.warnings
            );
        }
    }

    if report.failed > 0 {
        return Err(IdeapodError::ValidationError(format!(
            "doctor: {} check(s) failed",
            report.failed
        )));
    }
    Ok(())
}
