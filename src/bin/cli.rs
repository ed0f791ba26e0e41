// src/bin/cli.rs
use clap::Parser;
use page_search::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    let report = cli::run(&args)?;
    print!("{}", report.text);

    if report.failed {
        std::process::exit(1);
    }
    Ok(())
}
