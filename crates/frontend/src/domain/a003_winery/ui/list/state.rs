use contracts::domain::common::CatalogResource;
use contracts::pages::list::ListQuery;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery::new(CatalogResource::Wineries))
}
