// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `emoji-ordering-gen`: regenerate the Google emoji ordering table.
//!
//! Fetches Google's emoji-metadata ordering document, flattens it with
//! `emoji-ordering-core`, and writes `GOOGLE_ORDERING` plus one
//! `(start, count)` constant per group. Logs go to stderr so `--stdout`
//! output stays clean.
//!
//! Invariants:
//! - The artifact is written whole or not at all.
//! - Identical upstream bytes produce identical output, which is what makes
//!   `generate --check` usable in CI.

pub mod cli;

use std::fs;
use std::io::{ErrorKind, IsTerminal};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use emoji_ordering_core::config::{ConfigService, ConfigStore, CONFIG_KEY};
use emoji_ordering_core::{CodeEmitter, GeneratorConfig, OutputFormat, Pipeline};
use emoji_ordering_io::FsConfigStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, DumpArgs, GenerateArgs};

/// Parse arguments, install logging, and run the selected command.
pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;
    run(cli)
}

/// Run an already-parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let configs = open_configs(cli.config_dir);
    let configs = configs.as_ref();

    match cli.command {
        Commands::Generate(args) => generate(configs, args),
        Commands::Dump(args) => dump(configs, args),
        Commands::InitConfig { force } => {
            let configs = configs.context(
                "failed to resolve config directory (pass --config-dir to choose one)",
            )?;
            init_config(configs, force)
        }
    }
}

/// Config service for `config_dir`, else the platform config dir. `None`
/// when neither is available; commands then run on flags and defaults.
fn open_configs(config_dir: Option<PathBuf>) -> Option<ConfigService<FsConfigStore>> {
    let store = match config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => match FsConfigStore::new() {
            Ok(store) => store,
            Err(err) => {
                warn!(%err, "no platform config directory, using built-in defaults");
                return None;
            }
        },
    };
    Some(ConfigService::new(store))
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

fn load_config<S: ConfigStore>(configs: Option<&ConfigService<S>>) -> Result<GeneratorConfig> {
    let Some(configs) = configs else {
        return Ok(GeneratorConfig::default());
    };
    configs.generator_config().with_context(|| {
        format!(
            "failed to load config from {}",
            configs.generator_config_location()
        )
    })
}

fn generate<S: ConfigStore>(configs: Option<&ConfigService<S>>, args: GenerateArgs) -> Result<()> {
    let config = load_config(configs)?;
    let const_name = args
        .const_name
        .unwrap_or_else(|| config.ordering_const.clone());
    let pipeline = Pipeline::new(CodeEmitter::new(const_name)?);
    let source = args.source.resolve(&config);

    if args.check {
        let path = args.output.out.unwrap_or_else(|| config.output.clone());
        let (_, text) = pipeline.render(&*source)?;
        let existing = match fs::read_to_string(&path) {
            Ok(existing) => Some(existing),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        if existing.as_deref() != Some(text.as_str()) {
            bail!(
                "{} is out of date (rerun `emoji-ordering-gen generate`)",
                path.display()
            );
        }
        info!(path = %path.display(), "ordering table is up to date");
        return Ok(());
    }

    let sink = args.output.resolve(Some(&config.output));
    pipeline.run(&*source, &*sink)?;
    Ok(())
}

fn dump<S: ConfigStore>(configs: Option<&ConfigService<S>>, args: DumpArgs) -> Result<()> {
    let config = load_config(configs)?;
    let pipeline = Pipeline::default().with_format(OutputFormat::Dump);
    let source = args.source.resolve(&config);
    let sink = args.output.resolve(None);
    pipeline.run(&*source, &*sink)?;
    Ok(())
}

fn init_config<S: ConfigStore>(configs: &ConfigService<S>, force: bool) -> Result<()> {
    let location = configs.generator_config_location();
    if !force {
        let existing: Option<GeneratorConfig> = configs
            .load(CONFIG_KEY)
            .with_context(|| format!("failed to read {location}"))?;
        if existing.is_some() {
            bail!("{location} already exists (pass --force to overwrite)");
        }
    }
    configs
        .save(CONFIG_KEY, &GeneratorConfig::default())
        .with_context(|| format!("failed to write {location}"))?;
    info!(path = %location, "wrote default config");
    Ok(())
}
