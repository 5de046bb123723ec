use anyhow::Result;
use cfpick::cli::{init_logging, Cli, Commands};
use cfpick::commands::{self, PickConfig};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pick {
            tag,
            min_rating,
            max_rating,
            format,
            output,
            config,
            plain,
            quiet,
            verbosity,
        } => {
            init_logging(verbosity);
            let succeeded = commands::handle_pick(PickConfig {
                tag,
                min_rating,
                max_rating,
                format,
                output,
                config,
                plain,
                quiet,
            })?;
            if !succeeded {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Tags => commands::print_tags(),
        Commands::Ratings { plain } => commands::print_ratings(plain),
        Commands::Init { force, user } => {
            init_logging(0);
            commands::init_config(force, user)
        }
    }
}
