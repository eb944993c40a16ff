//! Command-line options and config file loading for the `tetris80` binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::core::GameConfig;

pub const USAGE: &str = "\
usage: tetris80 [--seed <u64>] [--config <path>] [--trace <path>] [--mute]

  --seed <u64>     replay a fixed piece sequence
  --config <path>  JSON file overriding fall intervals / fast-piece chance
  --trace <path>   append one JSON line per game event
  --mute           start with sound off (toggle in game with S)

keys: arrows move/rotate/drop, space hard drop, M mirror, S sound, R restart, Q quit";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub seed: Option<u64>,
    pub config_path: Option<PathBuf>,
    pub trace_path: Option<PathBuf>,
    pub mute: bool,
    pub help: bool,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut opts = CliOptions::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                let v = value_for(args, &mut i, "--seed")?;
                opts.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--config" => {
                opts.config_path = Some(PathBuf::from(value_for(args, &mut i, "--config")?));
            }
            "--trace" => {
                opts.trace_path = Some(PathBuf::from(value_for(args, &mut i, "--trace")?));
            }
            "--mute" => opts.mute = true,
            "-h" | "--help" => opts.help = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(opts)
}

fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

/// Defaults when `path` is `None`; otherwise parse and validate the JSON file.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<GameConfig> {
    let config: GameConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}
