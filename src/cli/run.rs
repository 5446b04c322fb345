//! Interactive migration loop and single-file entry points
//!
//! The loop threads its state (the current status title) through explicit
//! parameters and enumerated outcomes; nothing is shared between iterations
//! behind the scenes.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::menu::{erase_lines, KeyedOption, Menu, MenuStyle, Selection};
use crate::migrate::{is_links_path, normalize, store, Normalized, LINKS_SUFFIX};
use crate::report::MigrationSummary;
use crate::utils::{print_completion, print_info, print_success, print_warning};

/// Where one pass through the main menu leads.
enum Outcome {
    Migrate(PathBuf),
    Status(String),
    Exit,
}

/// How a migration attempt ended.
enum MigrateOutcome {
    Written,
    Declined,
    Status(String),
}

/// Present the main menu until the user exits or a migration is written.
pub fn run_loop(schema_version: i64, assume_yes: bool) -> Result<()> {
    let mut title = String::from("Shortcut link config migration");
    loop {
        match menu_pass(&title)? {
            Outcome::Exit => return Ok(()),
            Outcome::Status(message) => title = message,
            Outcome::Migrate(path) => match migrate_file(&path, schema_version, assume_yes)? {
                MigrateOutcome::Written => {
                    print_completion();
                    return Ok(());
                }
                MigrateOutcome::Declined => {}
                MigrateOutcome::Status(message) => title = message,
            },
        }
    }
}

/// Migrate a single file given on the command line, outside the menu loop.
/// Unlike the loop, failures here are fatal.
pub fn run_single(path: &Path, schema_version: i64, assume_yes: bool) -> Result<()> {
    check_suffix_strict(path)?;
    let raw = store::load(path)?;
    let result = normalize(&raw, schema_version);
    print_diagnostics(&result);

    if !result.changed {
        return Ok(());
    }
    MigrationSummary::new(&result.config, &result.stats).display();

    if !assume_yes && !confirm_save()? {
        print_info("nothing written");
        return Ok(());
    }
    store::save(path, &result.config)?;
    print_success(&format!("updated {}", path.display()));
    print_completion();
    Ok(())
}

/// Dry run: report diagnostics and whether a migration would write, without
/// touching the file.
pub fn run_check(path: &Path, schema_version: i64) -> Result<()> {
    check_suffix_strict(path)?;
    let raw = store::load(path)?;
    let result = normalize(&raw, schema_version);
    print_diagnostics(&result);
    MigrationSummary::new(&result.config, &result.stats).display();

    if result.changed {
        print_info(&format!("migration would update {}", path.display()));
    } else {
        print_success(&format!("{} is already up to date", path.display()));
    }
    Ok(())
}

fn menu_pass(title: &str) -> Result<Outcome> {
    let menu = Menu::Sequence(vec![
        "Pick a config file",
        "Enter a config file path",
        "Exit",
    ]);
    match menu.prompt_key(&MenuStyle::block(title))? {
        Selection::Index(0) => pick_file(),
        Selection::Index(1) => enter_path(),
        Selection::Index(2) => Ok(Outcome::Exit),
        // Unrecognized input: show the same menu again
        _ => Ok(Outcome::Status(title.to_string())),
    }
}

fn pick_file() -> Result<Outcome> {
    let candidates = discover_links_files()?;
    if candidates.is_empty() {
        return Ok(Outcome::Status(format!(
            "no {LINKS_SUFFIX} files found here or in the home directory"
        )));
    }
    let labels: Vec<String> = candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    let menu = Menu::Sequence(labels);
    match menu.prompt_key(&MenuStyle::block("Pick a config file"))? {
        Selection::Index(i) => check_suffix(candidates[i].clone()),
        _ => Ok(Outcome::Status(
            "that was not one of the listed files".to_string(),
        )),
    }
}

fn enter_path() -> Result<Outcome> {
    let mut stdout = io::stdout();
    write!(stdout, "Config file path: ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let _ = erase_lines(1);
    check_suffix(PathBuf::from(line.trim()))
}

fn check_suffix(path: PathBuf) -> Result<Outcome> {
    if is_links_path(&path) {
        Ok(Outcome::Migrate(path))
    } else {
        Ok(Outcome::Status(format!(
            "{} is not a shortcut link config file ({LINKS_SUFFIX})",
            path.display()
        )))
    }
}

fn check_suffix_strict(path: &Path) -> Result<()> {
    if is_links_path(path) {
        Ok(())
    } else {
        anyhow::bail!(
            "{} is not a shortcut link config file ({LINKS_SUFFIX})",
            path.display()
        )
    }
}

fn migrate_file(path: &Path, schema_version: i64, assume_yes: bool) -> Result<MigrateOutcome> {
    let raw = match store::load(path) {
        Ok(raw) => raw,
        Err(err) => return Ok(MigrateOutcome::Status(err.to_string())),
    };

    let result = normalize(&raw, schema_version);
    print_diagnostics(&result);

    if !result.changed {
        return Ok(MigrateOutcome::Status(format!(
            "{} needs no update",
            path.display()
        )));
    }
    MigrationSummary::new(&result.config, &result.stats).display();

    if !assume_yes && !confirm_save()? {
        return Ok(MigrateOutcome::Declined);
    }
    store::save(path, &result.config)?;
    print_success(&format!("updated {}", path.display()));
    Ok(MigrateOutcome::Written)
}

fn print_diagnostics(result: &Normalized) {
    for message in &result.diagnostics {
        if result.changed {
            print_warning(message);
        } else {
            print_info(message);
        }
    }
}

/// Yes/no confirmation, defaulting to yes on unrecognized input.
fn confirm_save() -> Result<bool> {
    let menu = Menu::keyed(vec![
        KeyedOption::new("Y", &["y", "yes"]),
        KeyedOption::new("n", &["n", "no"]),
    ]);
    let menu_style = MenuStyle::inline("Save the updated config file?").fold_case();
    Ok(menu.prompt(&menu_style)?.value_or(&"Y") == &"Y")
}

/// `.links.json` files in the working directory, falling back to the home
/// directory when the working directory has none.
fn discover_links_files() -> Result<Vec<PathBuf>> {
    let mut found = scan_dir(Path::new("."))?;
    if found.is_empty() {
        if let Some(home) = dirs::home_dir() {
            found = scan_dir(&home)?;
        }
    }
    found.sort();
    Ok(found)
}

fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;
    let mut found = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_links_path(&path) {
            found.push(path);
        }
    }
    Ok(found)
}
