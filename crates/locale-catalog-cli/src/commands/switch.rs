//! Switch command: stores a language choice in a preference file.

use crate::commands::{Project, ProjectArgs};
use crate::error::{CliError, PreferenceNotSavedError};
use crate::ui;
use clap::Parser;
use locale_catalog::{
    JsonFilePreferenceStore, LocaleSource, PreferenceStore, TranslationService,
    preferred_language,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the switch command.
#[derive(Debug, Parser)]
pub struct SwitchArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// The locale to switch to.
    pub locale: String,

    /// JSON preference file to update. Created if missing.
    #[arg(long)]
    pub preferences: PathBuf,
}

/// Run the switch command.
pub fn run_switch(args: SwitchArgs) -> Result<(), CliError> {
    let project = Project::load(&args.project)?;
    let locale = project.supported_locale(&args.locale)?;
    let preference_key = project.catalog.config.preference_key.clone();

    let store = Arc::new(JsonFilePreferenceStore::new(&args.preferences));
    let service = TranslationService::builder()
        .catalog(project.catalog.catalog)
        .supported(project.supported)
        .fallback(project.fallback)
        .preferences(Arc::clone(&store) as Arc<dyn PreferenceStore>)
        .preference_key(preference_key.as_str())
        .build()?;

    service.set_locale(&locale)?;

    // The service only logs a failed write.
    let tag = locale.to_string();
    let stored = store.load(&preference_key);
    if stored.as_ref().and_then(preferred_language) != Some(tag.as_str()) {
        return Err(PreferenceNotSavedError {
            path: args.preferences,
        }
        .into());
    }

    ui::print_resolution(&service.current_locale(), LocaleSource::Preference);
    Ok(())
}
