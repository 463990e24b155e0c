//! Sample file and registry emission.
//!
//! For each task one JSONL file is written under the registry data tree:
//!
//! ```text
//! <out_dir>/data/string_patterns/<task>/samples.v0.jsonl
//! <out_dir>/evals/string_patterns.yaml
//! ```
//!
//! One JSON object per line, shaped by `string_patterns_core::record::Sample`.
//! The YAML registry references every emitted data file and is small enough
//! that it is rendered from a literal template rather than a YAML library.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use string_patterns_core::record::Sample;

/// Per-task stanza of the eval registry YAML.
const YAML_STANZA: &str = "sp_{task_name}:
  id: sp_{task_name}.dev.v0
  metrics: [accuracy]
sp_{task_name}.dev.v0:
  class: evals.elsuite.basic.match:Match
  args:
    samples_jsonl: string_patterns/{task_name}/samples.v0.jsonl
";

/// Path of the samples file for one task, inside the registry data tree.
pub fn samples_path(out_dir: &Path, task_name: &str) -> PathBuf {
    out_dir
        .join("data")
        .join("string_patterns")
        .join(task_name)
        .join("samples.v0.jsonl")
}

/// Write one task's samples as JSONL, creating parent directories.
///
/// Returns the number of lines written.
pub fn write_samples(out_dir: &Path, task_name: &str, samples: &[Sample]) -> std::io::Result<usize> {
    let path = samples_path(out_dir, task_name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(&path)?;
    for sample in samples {
        let line = serde_json::to_string(sample)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
    }
    Ok(samples.len())
}

/// Render the registry YAML for the given task names.
pub fn registry_yaml(task_names: &[&str]) -> String {
    let mut out = String::from("# This file is generated by string-patterns\n\n");
    for name in task_names {
        out.push_str(&YAML_STANZA.replace("{task_name}", name));
        out.push('\n');
    }
    out
}

/// Write the registry YAML beneath the output directory.
pub fn write_registry_yaml(out_dir: &Path, task_names: &[&str]) -> std::io::Result<PathBuf> {
    let dir = out_dir.join("evals");
    fs::create_dir_all(&dir)?;

    let path = dir.join("string_patterns.yaml");
    fs::write(&path, registry_yaml(task_names))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use string_patterns_core::builder::generate_puzzle_set;
    use string_patterns_core::generators::{lookup, DEFAULT_EXAMPLARS};
    use string_patterns_core::RenderOptions;

    #[test]
    fn test_write_samples_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let generator = lookup("fill_between").unwrap();
        let puzzles = generate_puzzle_set(generator, &mut rng, 4, DEFAULT_EXAMPLARS).unwrap();

        let options = RenderOptions::default();
        let samples: Vec<Sample> = puzzles
            .iter()
            .map(|p| Sample::from_puzzle(p, &options))
            .collect();

        let written = write_samples(dir.path(), "fill_between", &samples).unwrap();
        assert_eq!(written, 4);

        let content = fs::read_to_string(samples_path(dir.path(), "fill_between")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(parsed["ideal"].is_string());
        }
    }

    #[test]
    fn test_registry_yaml_shape() {
        let yaml = registry_yaml(&["fill_between", "string_dilation"]);
        assert!(yaml.contains("sp_fill_between:"));
        assert!(yaml.contains("sp_fill_between.dev.v0:"));
        assert!(yaml.contains("samples_jsonl: string_patterns/string_dilation/samples.v0.jsonl"));
    }

    #[test]
    fn test_write_registry_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_registry_yaml(dir.path(), &["fill_between"]).unwrap();
        assert!(path.ends_with("evals/string_patterns.yaml"));
        assert!(fs::read_to_string(path).unwrap().contains("sp_fill_between"));
    }
}
