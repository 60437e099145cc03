//! Context management commands.

use std::path::Path;

use anyhow::Result;

use crate::config::{ClientConfig, Context};

/// List all contexts.
pub fn list(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    if config.contexts.is_empty() {
        println!("No contexts. Run `hera context set <name> --server <url>`.");
        return Ok(());
    }

    println!("{:<3} {:<16} SERVER", "", "NAME");
    for ctx in &config.contexts {
        let marker = if ctx.name == config.current_context { "*" } else { "" };
        println!("{:<3} {:<16} {}", marker, ctx.name, ctx.server);
    }
    Ok(())
}

/// Set properties on a context, creating it if missing.
pub fn set(
    name: &str,
    server: Option<String>,
    token: Option<String>,
    config_path: &Path,
) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    if config.get_mut(name).is_none() {
        config.contexts.push(Context {
            name: name.to_string(),
            server: String::new(),
            token: String::new(),
        });
        // First context becomes current.
        if config.current_context.is_empty() {
            config.current_context = name.to_string();
        }
    }

    let ctx = config.get_mut(name).expect("just inserted");
    if let Some(server) = server {
        ctx.server = server;
    }
    if let Some(token) = token {
        ctx.token = token;
    }

    config.save(config_path)?;
    println!("Context \"{}\" updated.", name);
    Ok(())
}

/// Delete a context.
pub fn delete(name: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    let before = config.contexts.len();
    config.contexts.retain(|c| c.name != name);
    if config.contexts.len() == before {
        anyhow::bail!("Context \"{}\" not found.", name);
    }
    if config.current_context == name {
        config.current_context = String::new();
    }
    config.save(config_path)?;
    println!("Context \"{}\" deleted.", name);
    Ok(())
}

/// Switch the current context.
pub fn use_context(name: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    if !config.contexts.iter().any(|c| c.name == name) {
        anyhow::bail!("Context \"{}\" not found.", name);
    }
    config.current_context = name.to_string();
    config.save(config_path)?;
    println!("Switched to context \"{}\".", name);
    Ok(())
}
