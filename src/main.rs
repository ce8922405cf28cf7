use anyhow::Result;
use clap::Parser;
use pdf_to_md::cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    let verbose = args.verbose;
    if let Err(err) = cli::dispatch(args) {
        cli::report_error(&err, verbose);
        std::process::exit(1);
    }
    Ok(())
}
