use clap::Parser;

use api_snap::EXIT_FAILURE;
use api_snap::cli::{Cli, Commands};
use api_snap::commands::{run_check, run_delete, run_list, run_save, run_show};
use api_snap::logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version exit 0 through clap.
        Err(e) if e.exit_code() == 0 => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_FAILURE);
        }
    };
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Save(args) => run_save(args, &cli),
        Commands::Check(args) => run_check(args, &cli),
        Commands::List(args) => run_list(args, &cli),
        Commands::Show(args) => run_show(args, &cli),
        Commands::Delete(args) => run_delete(args, &cli),
    };

    std::process::exit(exit_code);
}
