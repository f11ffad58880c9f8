use anyhow::{Context, Result};
use noel_luxe_core::{MaterialPalette, SceneSeed, PALETTE};
use noel_luxe_greeting::GreetingService;
use noel_luxe_layout::{OrnamentCategory, SceneLayout};
use serde::Serialize;
use std::{fs, io::Write, path::Path};
use tracing::info;

use crate::config::AppConfig;

/// Everything the renderer needs to draw the tree.
#[derive(Debug, Serialize)]
pub struct SceneDocument<'a> {
    pub materials: &'a MaterialPalette,
    pub scene: &'a SceneLayout,
}

pub fn run_layout(
    config: &AppConfig,
    seed: Option<u64>,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let mut params = config.scene;
    if let Some(seed) = seed {
        params.seed = SceneSeed::Fixed(seed);
    }

    let layout = SceneLayout::from_params(&params);
    for category in OrnamentCategory::ALL {
        info!(
            category = category.label(),
            count = layout.ornaments.category(category).len(),
            "Ornaments"
        );
    }
    info!(
        beads = layout.garlands.len(),
        gifts = layout.gifts.len(),
        seed = ?layout.seed,
        "Scene generated"
    );

    let document = SceneDocument {
        materials: &PALETTE,
        scene: &layout,
    };
    let mut json = if compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    json.push('\n');

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)
                .with_context(|| format!("Failed to write layout to {}", path.display()))?;
            info!(path = %path.display(), "Layout written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn run_greet(config: &AppConfig, name: &str, theme: &str) -> Result<()> {
    let service = GreetingService::from_config(config.greeting.clone())
        .context("Failed to create text-generation client")?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(service.request(name, theme))?;
    if outcome.is_fallback() {
        tracing::warn!("Showing fallback greeting");
    }
    println!("{}", outcome.text());
    Ok(())
}

pub fn write_config(config: &AppConfig, path: &Path) -> Result<()> {
    config
        .save_to_path(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    info!(path = %path.display(), "Config written");
    Ok(())
}
