use log::debug;

use crate::{
    handlers::gallery::dto::{CardResponse, GalleryResponse},
    models::Card,
    services::GallerySnapshot,
};

/// Service layer for the gallery endpoints
pub struct GalleryService;

impl GalleryService {
    /// Summarise the startup rendering pass
    ///
    /// # Arguments
    /// * `snapshot` - Result of the one-shot gallery pass
    ///
    /// # Returns
    /// GalleryResponse DTO
    pub fn get_gallery(snapshot: &GallerySnapshot) -> GalleryResponse {
        debug!(
            "Building gallery response with {} cards",
            snapshot.cards.len()
        );

        GalleryResponse {
            account: snapshot.account.clone(),
            state: snapshot.outcome.state,
            cards: snapshot.cards.iter().map(Self::map_to_response).collect(),
            skipped: snapshot.outcome.skipped,
            error: snapshot.outcome.error.clone(),
            rendered_at: snapshot.rendered_at,
        }
    }

    fn map_to_response(card: &Card) -> CardResponse {
        CardResponse {
            image: card.image.clone(),
            name: card.name.clone(),
        }
    }
}
