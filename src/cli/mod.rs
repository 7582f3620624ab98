pub mod completions;
pub mod generate;
pub mod init;
pub mod list;
pub mod palette;
pub mod validate;

use clap::{ArgAction, Parser, Subcommand};

/// mugshot - Layered character portrait generator
#[derive(Parser, Debug)]
#[command(name = "mugshot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "mugshot=warn",
            1 => "mugshot=info",
            2 => "mugshot=debug",
            _ => "mugshot=trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate portraits from the asset tree
    Generate(generate::GenerateArgs),

    /// List trait categories and their variants
    List(list::ListArgs),

    /// Print palette colours and weights
    Palette(palette::PaletteArgs),

    /// Validate the asset tree without generating
    Validate(validate::ValidateArgs),

    /// Initialize a mugshot project (generates mugshot.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "mugshot", "-vv", "generate", "--seed", "7", "--count", "3", "--hair-colour", "2",
            "--with", "glasses", "--without", "hats",
        ]);

        assert_eq!(cli.log_filter(), "mugshot=debug");
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.count, 3);
                assert_eq!(args.traits.hair_colour, Some(2));
                assert_eq!(args.traits.with, vec![crate::types::TraitKind::Glasses]);
                assert_eq!(args.traits.without, vec![crate::types::TraitKind::Hat]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_trait_rejected() {
        assert!(Cli::try_parse_from(["mugshot", "generate", "--with", "cape"]).is_err());
    }
}
