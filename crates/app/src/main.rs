//! string-patterns batch driver.
//!
//! Runs one generation pass: for every registered task (or the one selected
//! with `--task`), generates a batch of puzzles, writes them as JSONL sample
//! files, and emits the eval registry YAML referencing them.

mod config;
mod output;

use config::Config;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use string_patterns_core::builder::generate_puzzle_set;
use string_patterns_core::generators::TASKS;
use string_patterns_core::record::Sample;
use string_patterns_core::RenderOptions;

/// Counters for one generation pass.
#[derive(Debug, Default)]
struct RunStats {
    tasks: usize,
    puzzles: usize,
    samples_written: usize,
}

impl RunStats {
    fn print_summary(&self, elapsed_ms: u128, seed: u64) {
        println!("=== Generation Summary ===");
        println!("Tasks: {}", self.tasks);
        println!("Puzzles: {}", self.puzzles);
        println!("Samples written: {}", self.samples_written);
        println!("Duration: {} ms", elapsed_ms);
        println!("Seed: {} (pass --seed {} to reproduce)", seed, seed);
    }
}

fn run(config: &Config) -> Result<RunStats, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let options = RenderOptions::default();
    let mut stats = RunStats::default();

    let selected: Vec<&(&str, string_patterns_core::generators::GeneratorFn)> = TASKS
        .iter()
        .filter(|(name, _)| config.task.as_deref().map_or(true, |t| t == *name))
        .collect();

    let mut emitted_tasks = Vec::with_capacity(selected.len());
    for &&(name, generator) in &selected {
        let puzzles = generate_puzzle_set(generator, &mut rng, config.num_puzzles, config.examplars)?;

        let samples: Vec<Sample> = puzzles
            .iter()
            .map(|p| Sample::from_puzzle(p, &options))
            .collect();

        if config.print_puzzles {
            for sample in &samples {
                println!("{}\n", sample.input[1].content);
            }
        }

        let written = output::write_samples(&config.out_dir, name, &samples)?;
        println!(
            "{} lines written to {}",
            written,
            output::samples_path(&config.out_dir, name).display()
        );

        emitted_tasks.push(name);
        stats.tasks += 1;
        stats.puzzles += puzzles.len();
        stats.samples_written += written;
    }

    let yaml_path = output::write_registry_yaml(&config.out_dir, &emitted_tasks)?;
    println!("wrote {}", yaml_path.display());

    stats.print_summary(start.elapsed().as_millis(), config.seed);
    Ok(stats)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("try: string-patterns --help");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(error) = run(&config) {
        eprintln!("generation pass failed: {}", error);
        std::process::exit(1);
    }
}
