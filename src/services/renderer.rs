use log::{debug, error, info};
use serde::Serialize;
use std::sync::Arc;

use crate::errors::GalleryError;
use crate::models::{Card, GalleryContainer, Qualification};
use crate::services::explorer::TokenSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderState {
    Idle,
    Fetching,
    Rendering,
    Done,
    Failed,
}

impl RenderState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RenderState::Done | RenderState::Failed)
    }
}

/// Result of the one rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub state: RenderState,
    pub cards_appended: usize,
    pub skipped: usize,
    pub error: Option<String>,
}

/// Fetches the wallet's tokens once and appends a card per token with metadata.
pub struct GalleryRenderer {
    source: Arc<dyn TokenSource>,
    state: RenderState,
    outcome: Option<RenderOutcome>,
}

impl GalleryRenderer {
    pub fn new(source: Arc<dyn TokenSource>) -> Self {
        Self {
            source,
            state: RenderState::Idle,
            outcome: None,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Run the pass into `container`. The hook does not re-arm: once the pass has
    /// finished, further calls return the first outcome and touch nothing.
    pub async fn run(&mut self, container: &mut GalleryContainer) -> RenderOutcome {
        if let Some(outcome) = &self.outcome {
            debug!("Gallery pass already finished ({:?}), ignoring", outcome.state);
            return outcome.clone();
        }

        let mut cards_appended = 0;
        let mut skipped = 0;
        let result = self
            .render_into(container, &mut cards_appended, &mut skipped)
            .await;

        let error = match result {
            Ok(()) => {
                self.state = RenderState::Done;
                info!(
                    "Rendered {} cards into #{} ({} tokens without metadata)",
                    cards_appended,
                    container.id(),
                    skipped
                );
                None
            }
            Err(e) => {
                self.state = RenderState::Failed;
                error!("Error fetching NFTs: {}", e);
                Some(e.to_string())
            }
        };

        let outcome = RenderOutcome {
            state: self.state,
            cards_appended,
            skipped,
            error,
        };
        self.outcome = Some(outcome.clone());
        outcome
    }

    async fn render_into(
        &mut self,
        container: &mut GalleryContainer,
        cards_appended: &mut usize,
        skipped: &mut usize,
    ) -> Result<(), GalleryError> {
        self.state = RenderState::Fetching;
        let tokens = self.source.fetch_tokens().await?;

        self.state = RenderState::Rendering;
        for (index, token) in tokens.data.iter().enumerate() {
            match token.qualify() {
                Qualification::Card(found) => {
                    container.append(Card::new(found.image_url(), found.name));
                    *cards_appended += 1;
                }
                Qualification::Skip => *skipped += 1,
                Qualification::Malformed(reason) => {
                    return Err(GalleryError::Malformed { index, reason });
                }
            }
        }

        Ok(())
    }
}
