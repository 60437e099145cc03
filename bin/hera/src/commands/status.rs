//! Server status command.

use std::path::Path;

use anyhow::Result;

use crate::config::ClientConfig;

/// Default request headers for a context: the bearer token, when set.
fn context_headers(token: &str) -> Result<reqwest::header::HeaderMap> {
    let mut headers = reqwest::header::HeaderMap::new();
    if !token.is_empty() {
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
    }
    Ok(headers)
}

/// Query /health and /version on the current context's server.
pub fn status(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let ctx = config
        .current()
        .ok_or_else(|| anyhow::anyhow!("No current context. Run `hera use context <name>`."))?;

    if ctx.server.is_empty() {
        anyhow::bail!(
            "No server URL set for context \"{}\". Run `hera context set {} --server <url>`.",
            ctx.name,
            ctx.name
        );
    }

    let base = ctx.server.trim_end_matches('/');
    let client = reqwest::blocking::Client::builder()
        .default_headers(context_headers(&ctx.token)?)
        .build()?;

    let health: serde_json::Value = client
        .get(format!("{}/health", base))
        .send()
        .map_err(|e| anyhow::anyhow!("failed to connect to server: {}", e))?
        .json()?;
    let version: serde_json::Value = client.get(format!("{}/version", base)).send()?.json()?;

    println!("context:  {}", ctx.name);
    println!("server:   {}", base);
    println!("status:   {}", health["status"].as_str().unwrap_or("unknown"));
    println!(
        "version:  {} {}",
        version["name"].as_str().unwrap_or("?"),
        version["version"].as_str().unwrap_or("?")
    );
    Ok(())
}
