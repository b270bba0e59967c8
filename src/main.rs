use clap::Parser;
use miette::Result;
use repix::cli::{Cli, Commands};
use repix::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => {
            repix::cli::render::run(args, &printer)?;
        }
        Commands::Batch(args) => {
            repix::cli::batch::run(args, &printer)?;
        }
        Commands::Info(args) => {
            repix::cli::info::run(args, &printer)?;
        }
        Commands::Completions(args) => repix::cli::completions::run(args)?,
    }

    Ok(())
}
