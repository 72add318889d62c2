// Terminal output. Results go to stdout, notes and summaries to stderr.

use colored::Colorize as _;
use locale_catalog::{LanguageIdentifier, LocaleSource, MessageOrigin, Translation};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

pub fn print_project(project_dir: &Path, assets_dir: &Path, locale_count: usize) {
    eprintln!(
        "{} {} ({} locale(s) under {})",
        "Project".dimmed(),
        project_dir.display().to_string().bold(),
        locale_count,
        assets_dir.display()
    );
}

pub fn print_resolution(locale: &LanguageIdentifier, source: LocaleSource) {
    println!("{}", locale.to_string().green().bold());
    eprintln!("{} {}", "resolved from".dimmed(), source.to_string().cyan());
}

pub fn print_translation(translation: &Translation, locale: &LanguageIdentifier) {
    println!("{}", translation.text);
    match translation.origin {
        MessageOrigin::Active => {},
        MessageOrigin::Fallback => eprintln!(
            "{} not translated in {}, served from the fallback locale",
            "note:".yellow().bold(),
            locale
        ),
        MessageOrigin::Missing => eprintln!(
            "{} no message found, the key was returned as-is",
            "warning:".yellow().bold()
        ),
    }
}

pub fn print_check_header(locales: &[LanguageIdentifier], fallback: &LanguageIdentifier) {
    let names: Vec<String> = locales.iter().map(ToString::to_string).collect();
    eprintln!(
        "{} {} against {}",
        "Checking".dimmed(),
        names.join(", ").bold(),
        fallback.to_string().bold()
    );
}

pub fn print_check_success() {
    eprintln!("{}", "No missing translations found.".green());
}

pub fn print_check_warnings(count: usize) {
    eprintln!(
        "{} {} warning(s), no missing translations.",
        "Done:".yellow().bold(),
        count
    );
}
