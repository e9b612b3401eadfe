//! Configuration management commands.

use std::fs;
use std::path::{Path, PathBuf};

use agrimart_commerce::Currency;
use anyhow::{anyhow, bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.info("No config file found; using defaults."),
    }

    let config = &ctx.config;

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        config.catalog.path.as_deref().unwrap_or("(built-in sample)"),
    );
    ctx.output.kv("currency", config.catalog.currency.code());

    ctx.output.info("");
    ctx.output.info("[browse]");
    ctx.output.kv(
        "initial_display",
        &config.browse.settings.initial_display.to_string(),
    );
    ctx.output
        .kv("page_size", &config.browse.settings.page_size.to_string());
    ctx.output.kv("default_sort", config.browse.default_sort.as_str());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", config.logging.level.as_str());
    ctx.output.kv("format", config.logging.format.as_str());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = match &ctx.config_path {
        Some(path) => path.clone(),
        None => find_config_file(&ctx.cwd)?,
    };

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.validate()?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    ctx.config.validate()?;

    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.browse.settings.initial_display == 0 {
        warnings.push("browse.initial_display is 0; the grid starts empty".to_string());
    }

    if let Some(path) = &ctx.config.catalog.path {
        let resolved = ctx.resolve_path(path);
        if !resolved.exists() {
            warnings.push(format!("catalog.path '{}' does not exist", resolved.display()));
        }
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["catalog", "path"] => config.catalog.path.clone().unwrap_or_default(),
        ["catalog", "currency"] => config.catalog.currency.code().to_string(),
        ["browse", "initial_display"] => config.browse.settings.initial_display.to_string(),
        ["browse", "page_size"] => config.browse.settings.page_size.to_string(),
        ["browse", "default_sort"] => config.browse.default_sort.to_string(),
        ["logging", "level"] => config.logging.level.to_string(),
        ["logging", "format"] => config.logging.format.to_string(),
        _ => bail!("Unknown config key: {}", key),
    };

    Ok(value)
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "path"] => {
            config.catalog.path = (!value.is_empty()).then(|| value.to_string())
        }
        ["catalog", "currency"] => {
            config.catalog.currency = Currency::from_code(value)
                .ok_or_else(|| anyhow!("Unknown currency: {}", value))?
        }
        ["browse", "initial_display"] => config.browse.settings.initial_display = value.parse()?,
        ["browse", "page_size"] => config.browse.settings.page_size = value.parse()?,
        ["browse", "default_sort"] => config.browse.default_sort = value.parse()?,
        ["logging", "level"] => config.logging.level = value.parse()?,
        ["logging", "format"] => config.logging.format = value.parse()?,
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &Path) -> Result<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| cwd.join(name))
        .find(|path| path.exists())
        .ok_or_else(|| anyhow!("No config file found. Run `agrimart config init` to create one."))
}
