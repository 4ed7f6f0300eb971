use advent_index::{config, output, render, scan};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "advent-index")]
#[command(about = "Generate the README index of an Advent of Code solutions repository")]
#[command(long_about = "\
Generate the README index of an Advent of Code solutions repository

Every day_<n>_<title> directory at the calendar root is a solved puzzle.
Language subdirectories inside it become solution badges in the index.

Calendar structure:

  advent-of-code-2023/
  ├── index.toml                 # Index config (optional)
  ├── README.md                  # Generated index (overwritten)
  ├── docs/                      # Not a puzzle: ignored
  ├── day_1_trebuchet/           # Day 1, \"trebuchet\"
  │   └── python/main.py         # Python badge
  └── day_2_cube_conundrum/      # Day 2, \"cube conundrum\"
      ├── go/main.go             # Go badge
      └── rust/src/main.rs       # Rust badge

Run from the docs/ directory with no arguments to regenerate ../README.md.
Run 'advent-index gen-config' to generate a documented index.toml.")]
#[command(version)]
struct Cli {
    /// Calendar root directory
    #[arg(long, default_value = "..", global = true)]
    root: PathBuf,

    /// README to write [default: <root>/README.md]
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the calendar and write the README (default)
    Build,
    /// List the puzzle days found under the calendar root
    Scan {
        /// Print the calendar as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fail if the README is not what `build` would write
    Check,
    /// Print a stock index.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.root.join("README.md"));

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let config = config::load_config(&cli.root)?;
            println!("==> Scanning {}", cli.root.display());
            let calendar = scan::scan(&cli.root, &config)?;
            let document = render::render(&calendar, &config);
            render::write_index(&output_path, &document)?;
            output::print_build_output(&calendar, &output_path);
        }
        Command::Scan { json } => {
            let config = config::load_config(&cli.root)?;
            let calendar = scan::scan(&cli.root, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&calendar)?);
            } else {
                output::print_scan_output(&calendar, &config);
            }
        }
        Command::Check => {
            let config = config::load_config(&cli.root)?;
            println!("==> Checking {}", output_path.display());
            let calendar = scan::scan(&cli.root, &config)?;
            let document = render::render(&calendar, &config);
            let current = render::is_current(&output_path, &document)?;
            output::print_check_output(&output_path, current);
            if !current {
                return Err("index check failed".into());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
