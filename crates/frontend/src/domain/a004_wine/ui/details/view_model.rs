use crate::shared::api_utils::catalog_client;
use crate::shared::view_loader::load_into;
use contracts::pages::detail::{load_wine, WineDetail};
use contracts::pages::ViewState;
use contracts::shared::request_sequence::RequestSequence;
use leptos::prelude::*;

#[derive(Clone)]
pub struct WineDetailsViewModel {
    pub state: RwSignal<ViewState<WineDetail>>,
    sequence: RequestSequence,
}

impl WineDetailsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewState::Loading),
            sequence: RequestSequence::new(),
        }
    }

    /// Wine first, then the other wines of its winery
    pub fn load(&self, slug: String) {
        load_into(&self.sequence, self.state, async move {
            load_wine(&catalog_client(), &slug).await
        });
    }
}
