//! Configuration management commands.

use anyhow::{bail, Result};
use serde::Serialize;
use shop_core::config::PUBLISHABLE_KEY_ENV;
use shop_core::StoreConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

#[derive(Serialize)]
struct ShownConfig<'a> {
    source: Option<String>,
    #[serde(flatten)]
    config: &'a StoreConfig,
}

fn show_config(ctx: &Context) -> Result<()> {
    let source = ctx.config_path.as_ref().map(|p| p.display().to_string());

    if ctx.output.is_json() {
        let mut config = ctx.config.clone();
        config.api.publishable_key = config.api.publishable_key.as_deref().map(mask_key);
        ctx.output.json(&ShownConfig {
            source,
            config: &config,
        });
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &source {
        Some(path) => ctx.output.kv("file", path),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[store]");
    ctx.output.kv("name", &ctx.config.store.name);
    ctx.output.kv("tagline", &ctx.config.store.tagline);
    ctx.output.kv("description", &ctx.config.store.description);
    if let Some(ref logo) = ctx.config.store.logo {
        ctx.output.kv("logo", logo);
    }

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    let key = match ctx.config.api.publishable_key() {
        Ok(key) => mask_key(&key),
        Err(_) => "(not set)".to_string(),
    };
    ctx.output.kv("publishable_key", &key);
    ctx.output.kv("price_units", &format!("{:?}", ctx.config.api.price_units).to_lowercase());
    ctx.output.kv("currency", &ctx.config.api.currency);
    let timeout = ctx
        .config
        .api
        .timeout_secs
        .map(|s| format!("{}s", s))
        .unwrap_or_else(|| "none".to_string());
    ctx.output.kv("timeout", &timeout);

    ctx.output.info("[page]");
    ctx.output.kv("origin", &ctx.config.page.origin);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let mut config = StoreConfig::default();
    if let Some(name) = ctx.cwd.file_name().and_then(|n| n.to_str()) {
        config.store.name = name.to_string();
    }
    config.save(&config_path)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    ctx.output.info(&format!(
        "Set {} or api.publishable_key before loading products",
        PUBLISHABLE_KEY_ENV
    ));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.validate();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_path.is_none() {
        warnings.push("no shop.toml found; using defaults".to_string());
    }
    if ctx.config.api.base_url.starts_with("http://") {
        warnings.push("api.base_url is not HTTPS".to_string());
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
            "warnings": warnings,
        }));
        if !errors.is_empty() {
            bail!("Configuration has {} error(s)", errors.len());
        }
        return Ok(());
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Show only the key's prefix.
fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(8).collect();
    if key.chars().count() <= 8 {
        visible
    } else {
        format!("{}…", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("pk_test_abcdef123"), "pk_test_…");
        assert_eq!(mask_key("pk_1"), "pk_1");
    }
}
