//! Catalog command: prints the merged catalog as JSON.

use crate::commands::{Project, ProjectArgs};
use crate::error::CliError;
use clap::Parser;

/// Arguments for the catalog command.
#[derive(Debug, Parser)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print only this locale's message tree.
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Print on a single line.
    #[arg(long)]
    pub compact: bool,
}

/// Run the catalog command.
pub fn run_catalog(args: CatalogArgs) -> Result<(), CliError> {
    let project = Project::load(&args.project)?;
    let messages = project.messages();

    let value = match &args.locale {
        Some(tag) => {
            let locale = project.supported_locale(tag)?;
            match messages.tree(&locale) {
                Some(tree) => serde_json::to_value(tree)?,
                None => serde_json::Value::Object(serde_json::Map::new()),
            }
        },
        None => messages.to_json(),
    };

    let rendered = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{rendered}");
    Ok(())
}
