//! Resolve command: reports which locale a host would start in.

use crate::commands::{Project, ProjectArgs};
use crate::error::CliError;
use crate::ui;
use clap::Parser;
use locale_catalog::{
    JsonFilePreferenceStore, LocaleResolver, LocaleSignals, MemoryPreferenceStore,
    PreferenceStore,
};
use std::path::PathBuf;

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Page URL whose query string may carry the locale.
    #[arg(long)]
    pub url: Option<String>,

    /// JSON preference file, keyed by record identifier.
    #[arg(long)]
    pub preferences: Option<PathBuf>,

    /// Platform language to use instead of the operating system's.
    #[arg(long, conflicts_with = "no_platform")]
    pub platform_language: Option<String>,

    /// Ignore the platform language.
    #[arg(long)]
    pub no_platform: bool,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<(), CliError> {
    let project = Project::load(&args.project)?;
    let config = &project.catalog.config;
    let resolver = LocaleResolver::from_config(config)?;

    let store: Box<dyn PreferenceStore> = match args.preferences {
        Some(path) => Box::new(JsonFilePreferenceStore::new(path)),
        None => Box::new(MemoryPreferenceStore::new()),
    };

    let mut signals = LocaleSignals::capture(
        args.url.as_deref(),
        store.as_ref(),
        &config.preference_key,
    );
    if args.no_platform {
        signals.platform_language = None;
    } else if let Some(tag) = args.platform_language {
        signals = signals.with_platform_language(tag);
    }
    tracing::debug!(?signals, "Captured locale signals");

    let resolution = resolver.resolve(&signals);
    ui::print_resolution(&resolution.locale, resolution.source);
    Ok(())
}
