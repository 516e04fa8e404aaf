use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::RenderState;

/// One card as exposed by the gallery API
#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub image: String,
    pub name: String,
}

/// Response model for GET /gallery
#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub account: String,
    pub state: RenderState,
    pub cards: Vec<CardResponse>,
    pub skipped: usize,
    pub error: Option<String>,
    pub rendered_at: DateTime<Utc>,
}
