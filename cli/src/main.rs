mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, roster, types};
use kennel_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        allow_reassign: !commands.no_reassign,
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Types => {
            print::header("supported pet types", cfg.quiet);
            types::types(&cfg);
            Ok(())
        }
        Commands::Demo => {
            print::header("running the demo", cfg.quiet);
            demo::demo(&cfg)
        }
        Commands::Roster { entries } => {
            print::header("building the roster", cfg.quiet);
            roster::roster(&entries, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
