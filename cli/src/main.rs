mod commands;
mod terminal;

use commands::{classify, decode, format, summary, CommandLine, Commands};
use meshaddr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        prefix: !commands.no_prefix,
        quiet: commands.quiet,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg)?;

    match commands.command {
        Commands::Classify { addresses } => {
            print::header("address classification", cfg.quiet);
            classify::classify(&addresses, &cfg)
        }
        Commands::Format { value } => format::format(&value, &cfg),
        Commands::Decode { bytes, order } => {
            print::header("byte decoding", cfg.quiet);
            decode::decode(&bytes, order, &cfg)
        }
        Commands::Summary => {
            print::header("address space", cfg.quiet);
            summary::summary(&cfg)
        }
    }
}
