use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{get_config_path, Config};
use crate::prompt::Prompter;
use crate::scoring::{
    AlignmentPolicy, FeedbackConfig, ScoringConfig, DEFAULT_GOOD_THRESHOLD, DEFAULT_GREAT_THRESHOLD,
};

/// Serialize a config and write it atomically, creating parent directories.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

/// Ask for a threshold until the answer parses as 0..=100.
fn prompt_threshold<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    label: &str,
    default: u8,
) -> Result<Option<u8>> {
    loop {
        let Some(input) = prompter.prompt_with_default(label, &default.to_string())? else {
            return Ok(None);
        };
        match input.parse::<u8>() {
            Ok(v) if v <= 100 => return Ok(Some(v)),
            _ => writeln!(prompter.output(), "  Invalid: must be a whole number from 0 to 100. Try again.")?,
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, it is offered as the destination; otherwise the
/// default config path is. Returns the path written, or None if the user
/// aborted or input ran out.
pub fn run_init_wizard<R: BufRead, W: Write>(
    input: R,
    output: W,
    default_path: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    let mut p = Prompter::new(input, output);

    writeln!(p.output(), "Write-from-Dictation Scorer Configuration")?;
    writeln!(p.output(), "=========================================")?;
    writeln!(p.output())?;

    writeln!(
        p.output(),
        "The alignment policy decides how your words are paired with the original."
    )?;
    writeln!(
        p.output(),
        "  greedy  -- words in the wrong place still count (historical scoring)"
    )?;
    writeln!(p.output(), "  ordered -- only words in the original order count")?;
    let policy = loop {
        let Some(input) = p.prompt_with_default("Alignment policy", AlignmentPolicy::Greedy.as_str())?
        else {
            return Ok(None);
        };
        match input.parse::<AlignmentPolicy>() {
            Ok(policy) => break policy,
            Err(e) => writeln!(p.output(), "  Invalid: {}. Try again.", e)?,
        }
    };

    writeln!(p.output())?;
    writeln!(p.output(), "Feedback thresholds pick the message shown under a score.")?;
    let (great, good) = loop {
        let Some(great) = prompt_threshold(&mut p, "Score for \"great\"", DEFAULT_GREAT_THRESHOLD)?
        else {
            return Ok(None);
        };
        let Some(good) = prompt_threshold(&mut p, "Score for \"good\"", DEFAULT_GOOD_THRESHOLD)?
        else {
            return Ok(None);
        };
        if good <= great {
            break (great, good);
        }
        writeln!(
            p.output(),
            "  Invalid: \"good\" ({}) must not exceed \"great\" ({}). Try again.",
            good, great
        )?;
    };

    let default_config_path = match default_path {
        Some(path) => path,
        None => get_config_path()?,
    };
    writeln!(p.output())?;
    let Some(path_str) = p.prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?
    else {
        return Ok(None);
    };
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = p.prompt_yes_no(
            &format!("Config already exists at {}. Overwrite?", config_path.display()),
            false,
        )?;
        if overwrite != Some(true) {
            writeln!(p.output(), "Aborted.")?;
            return Ok(None);
        }
    }

    let config = Config {
        scoring: Some(ScoringConfig {
            policy: Some(policy),
            feedback: Some(FeedbackConfig {
                great: Some(great),
                good: Some(good),
            }),
        }),
        samples: Vec::new(),
    };
    write_config(&config_path, &config)?;

    writeln!(p.output())?;
    writeln!(p.output(), "Config written to {}", config_path.display())?;
    writeln!(p.output(), "Run `wfd-score` to start practicing.")?;

    Ok(Some(config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;

    #[test]
    fn test_write_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            scoring: Some(ScoringConfig::default()),
            samples: vec![crate::samples::SampleCase::new("a b", "a", 50)],
        };

        write_config(&path, &config).unwrap();
        let loaded = load_config(Some(path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_wizard_accepts_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut out = Vec::new();

        let written = run_init_wizard("\n\n\n\n".as_bytes(), &mut out, Some(path.clone())).unwrap();
        assert_eq!(written, Some(path.clone()));

        let loaded = load_config(Some(path)).unwrap();
        assert_eq!(loaded.effective_scoring(), ScoringConfig::default());
    }

    #[test]
    fn test_wizard_reprompts_on_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        // bad policy, then ordered; great 150 rejected, then 90; good 95 > great restarts pair
        let input = "optimal\nordered\n150\n90\n95\n90\n50\n\n";
        let mut out = Vec::new();

        run_init_wizard(input.as_bytes(), &mut out, Some(path.clone())).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown alignment policy"));
        assert!(text.contains("from 0 to 100"));
        assert!(text.contains("must not exceed"));

        let scoring = load_config(Some(path)).unwrap().effective_scoring();
        assert_eq!(scoring.effective_policy(), AlignmentPolicy::Ordered);
        assert_eq!(scoring.effective_feedback().effective_great(), 90);
        assert_eq!(scoring.effective_feedback().effective_good(), 50);
    }

    #[test]
    fn test_wizard_declines_overwrite() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut out = Vec::new();

        let written =
            run_init_wizard("\n\n\n\n\n".as_bytes(), &mut out, Some(file.path().to_path_buf()))
                .unwrap();
        assert_eq!(written, None);
        assert!(String::from_utf8(out).unwrap().contains("Aborted."));
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "");
    }

    #[test]
    fn test_wizard_stops_at_eof() {
        let mut out = Vec::new();
        let written = run_init_wizard("ordered\n".as_bytes(), &mut out, None).unwrap();
        assert_eq!(written, None);
    }
}
