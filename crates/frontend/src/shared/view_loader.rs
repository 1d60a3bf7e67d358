//! Runs page loaders into reactive view state.

use contracts::pages::ViewState;
use contracts::shared::request_sequence::RequestSequence;
use leptos::prelude::*;
use std::future::Future;

/// Reset `target` to loading and commit the loader's result, unless a newer
/// load started on the same `sequence` before this one finished.
pub fn load_into<T, F>(sequence: &RequestSequence, target: RwSignal<ViewState<T>>, loader: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = ViewState<T>> + 'static,
{
    let ticket = sequence.begin();
    let sequence = sequence.clone();
    target.set(ViewState::Loading);
    wasm_bindgen_futures::spawn_local(async move {
        let state = loader.await;
        if sequence.is_current(ticket) {
            target.set(state);
        } else {
            log::debug!("dropping stale page load");
        }
    });
}
