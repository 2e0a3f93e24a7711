//! Spellbook CLI - Convert spell CSV files to JSON
//!
//! ```bash
//! spellbook Wizard1.csv              # wizard spells → Wizard1.json
//! spellbook cleric_a.csv             # cleric spells → cleric_a.json
//! spellbook --raw cleric_a.csv       # keep field text as written
//! spellbook -s wizard -o out.json x.csv
//! ```

use clap::Parser;
use spellbook::logs::{log_error, LOGGER};
use spellbook::{convert_file, ConvertError, ConvertOptions, Normalization, SpellKind};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "spellbook")]
#[command(about = "Convert a wizard or cleric spell CSV file to JSON", long_about = None)]
struct Cli {
    /// Input CSV file (wizard spells if the path starts with 'W')
    #[arg(num_args = 0..)]
    inputs: Vec<PathBuf>,

    /// Output file (default: input name with a .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Record shape, overriding the input-path rule
    #[arg(short, long)]
    shape: Option<SpellKind>,

    /// Keep field text exactly as written (no title-casing)
    #[arg(long)]
    raw: bool,

    /// Skip schema validation
    #[arg(long)]
    no_validate: bool,

    /// Do not print progress to stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::from_env();
        if self.raw {
            options.normalization = Normalization::Raw;
        }
        if self.no_validate {
            options.skip_validation = true;
        }
        options.kind = self.shape;
        options.output = self.output.clone();
        options
    }
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let [input] = cli.inputs.as_slice() else {
        println!("Requires file name");
        process::exit(2);
    };

    LOGGER.set_quiet(cli.quiet);

    match convert_file(input, &cli.options()) {
        Ok(summary) => {
            println!("File created: {}", summary.output.display());
        }
        Err(e @ ConvertError::Record { .. }) => {
            println!("ERROR {}", e);
            process::exit(1);
        }
        Err(e) => {
            log_error(format!("Error: {}", e));
            process::exit(1);
        }
    }
}
