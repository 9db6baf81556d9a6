//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StoreBackend};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Path => show_paths(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    ctx.output.blank();
    let rendered = toml::to_string_pretty(&ctx.config).context("Failed to render config")?;
    println!("{}", rendered.trim_end());
    Ok(())
}

async fn show_paths(ctx: &Context) -> Result<()> {
    let config = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());
    let data = match ctx.config.store.backend {
        StoreBackend::File => Some(ctx.data_dir().display().to_string()),
        StoreBackend::Memory => None,
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config": config,
            "dataDir": data,
        }));
        return Ok(());
    }

    ctx.output
        .kv("config", config.as_deref().unwrap_or("(none found)"));
    ctx.output
        .kv("data", data.as_deref().unwrap_or("(in memory)"));
    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    let errors = ctx.config.validate();
    let warnings = advisories(ctx);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
            "warnings": warnings,
        }));
    } else {
        ctx.output.header("Validating configuration");
        warnings.iter().for_each(|w| ctx.output.warn(w));
        errors.iter().for_each(|e| ctx.output.error(e));
    }

    match errors.len() {
        0 if warnings.is_empty() => ctx.output.success("Configuration is valid"),
        0 => ctx
            .output
            .success(&format!("Configuration is valid ({} warning(s))", warnings.len())),
        n => bail!("Configuration has {} error(s)", n),
    }
    Ok(())
}

/// Settings that work but probably are not what the user wants.
fn advisories(ctx: &Context) -> Vec<String> {
    let mut warnings = Vec::new();
    if ctx.config_path.is_none() {
        warnings.push("no config file found; using defaults".to_string());
    }
    if let Some(path) = &ctx.config.catalog.path {
        let path = ctx.resolve_path(path);
        if !path.exists() {
            warnings.push(format!("catalog.path {} does not exist", path.display()));
        }
    }
    if ctx.config.store.backend == StoreBackend::Memory {
        warnings.push("store.backend = \"memory\" keeps no cart or sign-in between commands".to_string());
    }
    warnings
}
