use crate::shared::api_utils::catalog_client;
use crate::shared::view_loader::load_into;
use contracts::pages::detail::{load_grape, GrapeDetail};
use contracts::pages::ViewState;
use contracts::shared::request_sequence::RequestSequence;
use leptos::prelude::*;

#[derive(Clone)]
pub struct GrapeDetailsViewModel {
    pub state: RwSignal<ViewState<GrapeDetail>>,
    sequence: RequestSequence,
}

impl GrapeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewState::Loading),
            sequence: RequestSequence::new(),
        }
    }

    /// Grape, then its best rated wines
    pub fn load(&self, slug: String) {
        load_into(&self.sequence, self.state, async move {
            load_grape(&catalog_client(), &slug).await
        });
    }
}
