use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bunnyhq::{room, triangle, walk::Walk, KeypadShape};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Debug, Parser)]
#[command(about = "Solve the Easter Bunny HQ puzzles")]
struct CLIArgs {
    #[command(subcommand)]
    puzzle: Puzzle,
}

#[derive(Debug, Subcommand)]
enum Puzzle {
    /// Decode the bathroom code from keypad instructions.
    Keypad {
        /// Keypad to decode on: square or diamond.
        #[arg(long, default_value_t = KeypadShape::Square)]
        shape: KeypadShape,
        input_path: PathBuf,
    },
    /// Follow taxicab directions to Easter Bunny HQ.
    Walk { input_path: PathBuf },
    /// Count possible triangles, by rows and by columns.
    Triangles { input_path: PathBuf },
    /// Sum the sector ids of the real rooms.
    Rooms { input_path: PathBuf },
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read puzzle input from given file({}).", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();

    match args.puzzle {
        Puzzle::Keypad { shape, input_path } => {
            let input = read_input(&input_path)?;
            info!("decoding {} on the {} keypad", input_path.display(), shape);
            println!("The bathroom code is {}.", shape.keypad().decode(&input));
        }
        Puzzle::Walk { input_path } => {
            let walk = Walk::parse(&read_input(&input_path)?)
                .with_context(|| format!("Failed to follow directions in given file({}).", input_path.display()))?;
            println!("Easter Bunny HQ is {} blocks away.", walk.distance());
            match walk.first_revisited() {
                Some(location) => println!("The first location visited twice is {} blocks away.", location.distance()),
                None => println!("No location is visited twice."),
            }
        }
        Puzzle::Triangles { input_path } => {
            let input = read_input(&input_path)?;
            let context = || format!("Failed to read triangles in given file({}).", input_path.display());
            println!("{} triangles are possible by rows.", triangle::count_valid_rows(&input).with_context(context)?);
            println!("{} triangles are possible by columns.", triangle::count_valid_columns(&input).with_context(context)?);
        }
        Puzzle::Rooms { input_path } => {
            let sum = room::sum_real_sector_ids(&read_input(&input_path)?)
                .with_context(|| format!("Failed to read room codes in given file({}).", input_path.display()))?;
            println!("The sector ids of the real rooms sum to {}.", sum);
        }
    }

    Ok(())
}
