use crate::shared::api_utils::catalog_client;
use crate::shared::view_loader::load_into;
use contracts::pages::detail::{load_country, CountryDetail};
use contracts::pages::ViewState;
use contracts::shared::request_sequence::RequestSequence;
use leptos::prelude::*;

#[derive(Clone)]
pub struct CountryDetailsViewModel {
    pub state: RwSignal<ViewState<CountryDetail>>,
    sequence: RequestSequence,
}

impl CountryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewState::Loading),
            sequence: RequestSequence::new(),
        }
    }

    pub fn load(&self, slug: String) {
        load_into(&self.sequence, self.state, async move {
            load_country(&catalog_client(), &slug).await
        });
    }
}
