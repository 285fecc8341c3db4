use binop_gen::{GenerateOptions, Result, diagnostics, driver, spec};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "binop-gen")]
#[command(about = "Binary operator boilerplate generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate evaluator methods and parser branches (validates tables first).
    Generate {
        #[arg(short = 'o', long, default_value = driver::DEFAULT_OUT)]
        out: PathBuf,

        /// Emit whole parse_<tier> functions instead of bare branch blocks.
        #[arg(long)]
        wrap_tiers: bool,

        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the validated operator tables as JSON.
    Tables,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Generate {
            out,
            wrap_tiers,
            quiet,
        } => {
            diagnostics::set_quiet(quiet);

            let tables = spec::default_tables();
            let summary = driver::run(&tables, &GenerateOptions { wrap_tiers }, &out)?;
            println!("Wrote {}", summary.path.display());
        }
        Commands::Tables => {
            let validated = spec::default_tables().validate_and_build()?;
            println!("{}", serde_json::to_string_pretty(&validated)?);
        }
    }

    Ok(())
}
