use crate::shared::api_utils::catalog_client;
use crate::shared::view_loader::load_into;
use contracts::pages::detail::{load_winery, WineryDetail};
use contracts::pages::ViewState;
use contracts::shared::request_sequence::RequestSequence;
use leptos::prelude::*;

#[derive(Clone)]
pub struct WineryDetailsViewModel {
    pub state: RwSignal<ViewState<WineryDetail>>,
    sequence: RequestSequence,
}

impl WineryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewState::Loading),
            sequence: RequestSequence::new(),
        }
    }

    pub fn load(&self, slug: String) {
        load_into(&self.sequence, self.state, async move {
            load_winery(&catalog_client(), &slug).await
        });
    }
}
