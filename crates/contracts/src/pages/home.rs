use super::view_state::ViewState;
use crate::api::{CatalogClient, CatalogTransport};
use crate::domain::a004_wine::aggregate::Wine;

/// Wines shown in the home page strip
pub const HOME_TOP_RATED: u32 = 8;

pub async fn load_top_rated<T: CatalogTransport>(client: &CatalogClient<T>) -> ViewState<Vec<Wine>> {
    match client.top_rated_wines(HOME_TOP_RATED).await {
        Ok(wines) => ViewState::from_items(wines),
        Err(e) => {
            log::warn!("failed to load top rated wines: {}", e);
            ViewState::Empty
        }
    }
}
