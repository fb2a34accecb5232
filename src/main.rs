use clap::Parser;

use slidenav::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = slidenav::runtime::run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
