use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fs;
use std::sync::Arc;

use crate::config::GalleryConfig;
use crate::errors::GalleryError;
use crate::models::{default_template, Card, GalleryPage};
use crate::services::explorer::{TokenSource, WALLET_ADDRESS};
use crate::services::renderer::{GalleryRenderer, RenderOutcome};

/// Immutable result of the startup pass, shared by the HTTP handlers.
#[derive(Debug, Clone)]
pub struct GallerySnapshot {
    pub account: String,
    pub html: String,
    pub cards: Vec<Card>,
    pub outcome: RenderOutcome,
    pub rendered_at: DateTime<Utc>,
}

/// Load the hosting page from the configured template, or the built-in page.
pub fn load_page(config: &GalleryConfig) -> Result<GalleryPage, GalleryError> {
    let html = match &config.template_path {
        Some(path) => {
            debug!("Loading gallery template from {}", path);
            fs::read_to_string(path)
                .map_err(|e| GalleryError::Template(format!("{}: {}", path, e)))?
        }
        None => default_template(&config.title),
    };

    GalleryPage::parse(html, &config.container_id)
}

/// Page-ready entry point: load the page, then run the rendering pass once.
///
/// A missing container aborts before anything is fetched. Fetch failures and
/// bad token records do not; they are recorded in the snapshot's outcome.
pub async fn build_gallery(
    config: &GalleryConfig,
    source: Arc<dyn TokenSource>,
) -> Result<GallerySnapshot, GalleryError> {
    let mut page = load_page(config)?;
    info!(
        "Gallery page ready, rendering tokens of {} into #{}",
        WALLET_ADDRESS, config.container_id
    );

    let outcome = GalleryRenderer::new(source)
        .run(page.container_mut())
        .await;

    Ok(GallerySnapshot {
        account: WALLET_ADDRESS.to_string(),
        html: page.render()?,
        cards: page.container().cards().to_vec(),
        outcome,
        rendered_at: Utc::now(),
    })
}
