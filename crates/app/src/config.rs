//! Configuration for the string-patterns batch driver.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//! The tool works with ZERO arguments: the seed defaults to wall-clock time
//! and is always printed so any run can be reproduced with `--seed`.

use std::path::PathBuf;
use string_patterns_core::generators;

/// Complete configuration for one generation pass.
#[derive(Debug, Clone)]
pub struct Config {
    /// Registry output directory (data and YAML land beneath it)
    pub out_dir: PathBuf,

    /// Random seed for the whole pass
    pub seed: u64,

    /// Puzzles per task
    pub num_puzzles: usize,

    /// Demonstrations per puzzle (the query is added on top)
    pub examplars: usize,

    /// Restrict the pass to one task (None = all registered tasks)
    pub task: Option<String>,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print each rendered puzzle while writing
    pub print_puzzles: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut out_dir: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut num_puzzles: Option<usize> = None;
        let mut examplars: Option<usize> = None;
        let mut task: Option<String> = None;
        let mut print_config = false;
        let mut print_puzzles = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    out_dir = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--puzzles" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--puzzles requires a number".to_string());
                    }
                    num_puzzles = Some(args[i].parse().map_err(|_| "invalid puzzles")?);
                }
                "--examplars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--examplars requires a number".to_string());
                    }
                    examplars = Some(args[i].parse().map_err(|_| "invalid examplars")?);
                }
                "--task" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--task requires a task name".to_string());
                    }
                    generators::lookup(&args[i]).map_err(|e| e.to_string())?;
                    task = Some(args[i].clone());
                }
                "--print-config" => {
                    print_config = true;
                }
                "--quiet" => {
                    print_puzzles = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Explicit seed or wall-clock millis.
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            out_dir: out_dir.unwrap_or_else(|| PathBuf::from("evals/registry")),
            seed,
            num_puzzles: num_puzzles.unwrap_or(10),
            examplars: examplars.unwrap_or(generators::DEFAULT_EXAMPLARS),
            task,
            print_config,
            print_puzzles,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Output dir: {}", self.out_dir.display());
        println!("Seed: {}", self.seed);
        println!("Puzzles per task: {}", self.num_puzzles);
        println!("Examplars: {}", self.examplars);
        println!(
            "Tasks: {}",
            self.task.as_deref().unwrap_or("(all registered)")
        );
        println!();
    }
}

fn print_help() {
    println!("string-patterns: generate pattern-recognition puzzle sample files");
    println!();
    println!("USAGE:");
    println!("    string-patterns [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --out <DIR>        Registry output directory (default: evals/registry)");
    println!("    --seed <N>         Random seed for determinism (default: wall-clock)");
    println!("    --puzzles <N>      Puzzles per task (default: 10)");
    println!("    --examplars <N>    Demonstrations per puzzle (default: 3)");
    println!("    --task <NAME>      Generate a single task instead of all");
    println!("    --print-config     Print resolved configuration");
    println!("    --quiet            Don't print each rendered puzzle");
    println!("    --help, -h         Print this help");
    println!();
    println!("TASKS:");
    for (name, _) in string_patterns_core::generators::TASKS {
        println!("    {}", name);
    }
    println!();
    println!("EXAMPLES:");
    println!("    string-patterns                          # Full pass, random seed");
    println!("    string-patterns --seed 42                # Deterministic pass");
    println!("    string-patterns --task fill_between --puzzles 25");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&[]).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("evals/registry"));
        assert_eq!(config.num_puzzles, 10);
        assert_eq!(config.examplars, 3);
        assert!(config.task.is_none());
        assert!(config.print_puzzles);
    }

    #[test]
    fn test_explicit_flags() {
        let config = Config::from_args(&args(&[
            "--seed", "42", "--puzzles", "25", "--task", "fill_between", "--quiet",
        ]))
        .unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.num_puzzles, 25);
        assert_eq!(config.task.as_deref(), Some("fill_between"));
        assert!(!config.print_puzzles);
    }

    #[test]
    fn test_unknown_task_rejected() {
        let result = Config::from_args(&args(&["--task", "nope"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_value_rejected() {
        assert!(Config::from_args(&args(&["--seed"])).is_err());
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }
}
