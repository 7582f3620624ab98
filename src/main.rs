use clap::Parser;
use miette::Result;
use mugshot::cli::{Cli, Commands};
use mugshot::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => mugshot::cli::generate::run(args, &printer)?,
        Commands::List(args) => mugshot::cli::list::run(args, &printer)?,
        Commands::Palette(args) => mugshot::cli::palette::run(args, &printer)?,
        Commands::Validate(args) => mugshot::cli::validate::run(args, &printer)?,
        Commands::Init(args) => mugshot::cli::init::run(args, &printer)?,
        Commands::Completions(args) => mugshot::cli::completions::run(args)?,
    }

    Ok(())
}
