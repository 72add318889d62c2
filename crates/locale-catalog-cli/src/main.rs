use clap::{Parser, Subcommand};
use locale_catalog_cli::commands::{
    CatalogArgs, CheckArgs, LookupArgs, ResolveArgs, SwitchArgs, run_catalog, run_check,
    run_lookup, run_resolve, run_switch,
};
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "locale-catalog")]
#[command(about = "Resolve locales and inspect JSON message catalogs")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the locale a host would start in
    Resolve(ResolveArgs),

    /// Translate a single key
    Lookup(LookupArgs),

    /// Print the merged catalog as JSON
    Catalog(CatalogArgs),

    /// Report keys missing from non-fallback locales
    Check(CheckArgs),

    /// Store a language choice in a preference file
    Switch(SwitchArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();
    locale_catalog_cli::ui::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Lookup(args) => run_lookup(args),
        Commands::Catalog(args) => run_catalog(args),
        Commands::Check(args) => run_check(args),
        Commands::Switch(args) => run_switch(args),
    };

    result.map_err(miette::Report::new)
}
