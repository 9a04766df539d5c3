use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use zimbeat_whitepaper::{DEFAULT_OUTPUT_PATH, Error, docx, write_whitepaper};

#[derive(Parser)]
#[command(name = "zimbeat-whitepaper")]
#[command(version)]
#[command(about = "Generate the ZIMBEAT token whitepaper as a DOCX file", long_about = None)]
struct Cli {
    /// Output DOCX path
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print the visible text of the written document
    #[arg(long)]
    dump_text: bool,
}

fn dump_text(path: &Path) -> Result<(), Error> {
    let bytes = std::fs::read(path)?;
    let dump = docx::read::extract_text(&bytes)?;
    println!("{}", dump.to_plain_text());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = write_whitepaper(&cli.output) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    println!("Whitepaper created successfully!");

    if cli.dump_text
        && let Err(e) = dump_text(&cli.output)
    {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
