//! CLI for the visual fraction exercise generator.
//!
//! Provides:
//! - Single-exercise generation as JSON (for piping into the UI or fixtures)
//! - Batch statistics over many generated exercises (sanity tooling)

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};

use fracvis_core::{generate, Fraction, RandomFractionOpts, ShapeKind};

mod stats;

#[derive(Parser)]
#[command(name = "fracvis")]
#[command(about = "Visual fraction exercise generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one exercise and print it as JSON
    Generate {
        /// Shape kind: triangle, square, hexagon, circle, or auto
        #[arg(short, long, default_value = "auto")]
        shape: ShapeKind,

        /// Difficulty level (maps to subdivision depth)
        #[arg(short, long, default_value = "1")]
        difficulty: u32,

        /// RNG seed for deterministic replay
        #[arg(long)]
        seed: Option<u64>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Draw random proper fractions (one per line, reduced form)
    Fraction {
        /// Number of fractions to draw
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Largest denominator to draw
        #[arg(short, long, default_value = "12")]
        max_denominator: u32,

        /// Occasionally draw improper fractions
        #[arg(short, long)]
        improper: bool,

        /// RNG seed for deterministic replay
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate many exercises and report distribution statistics
    Stats {
        /// Number of exercises to generate
        #[arg(short, long, default_value = "1000")]
        count: usize,

        /// Shape kind: triangle, square, hexagon, circle, or auto
        #[arg(short, long, default_value = "auto")]
        shape: ShapeKind,

        /// Difficulty level (maps to subdivision depth)
        #[arg(short, long, default_value = "2")]
        difficulty: u32,

        /// RNG seed for deterministic replay
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            shape,
            difficulty,
            seed,
            pretty,
            output,
        } => {
            let mut rng = rng_for(seed);
            let spec = generate(shape, difficulty, &mut rng)
                .context("exercise generation failed")?;
            let json = if pretty {
                serde_json::to_string_pretty(&spec)?
            } else {
                serde_json::to_string(&spec)?
            };
            match output {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("writing {}", path))?,
                None => println!("{}", json),
            }
        }

        Commands::Fraction {
            count,
            max_denominator,
            improper,
            seed,
        } => {
            let mut rng = rng_for(seed);
            let opts = RandomFractionOpts {
                max_denominator,
                allow_improper: improper,
            };
            for _ in 0..count {
                let raw = Fraction::random(opts, &mut rng);
                println!("{}", Fraction::simplify(raw.numerator, raw.denominator)?);
            }
        }

        Commands::Stats {
            count,
            shape,
            difficulty,
            seed,
        } => {
            let mut rng = rng_for(seed);
            let report = stats::run(count, shape, difficulty, &mut rng)?;
            print!("{}", report);
        }
    }
    Ok(())
}
