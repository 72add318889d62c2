use crate::error::{CliError, LocaleNotFoundError};
use crate::ui;
use clap::Args;
use locale_catalog::{LanguageIdentifier, MessageCatalog, SupportedLocales};
use locale_catalog_embedded::{ProjectCatalog, load_project};
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Directory holding i18n.toml (defaults to current directory).
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// A loaded project: configuration, catalog and the parsed language settings.
#[derive(Debug)]
pub struct Project {
    pub path: PathBuf,
    pub catalog: ProjectCatalog,
    pub supported: SupportedLocales,
    pub fallback: LanguageIdentifier,
}

impl Project {
    pub fn load(args: &ProjectArgs) -> Result<Self, CliError> {
        let path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
        let catalog = load_project(&path)?;
        let supported = SupportedLocales::new(catalog.config.supported_language_identifiers()?);
        let fallback = catalog.config.fallback_language_identifier()?;

        ui::print_project(
            &path,
            &catalog.assets_dir,
            catalog.catalog.locales().len(),
        );

        Ok(Self {
            path,
            catalog,
            supported,
            fallback,
        })
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.catalog.catalog
    }

    /// Maps a command-line locale to a supported language.
    pub fn supported_locale(&self, tag: &str) -> Result<LanguageIdentifier, CliError> {
        self.supported
            .find(tag)
            .cloned()
            .ok_or_else(|| self.locale_not_found(tag).into())
    }

    fn locale_not_found(&self, tag: &str) -> LocaleNotFoundError {
        let available: Vec<String> = self.supported.iter().map(ToString::to_string).collect();
        LocaleNotFoundError {
            locale: tag.to_string(),
            available: available.join(", "),
        }
    }
}
