use contracts::seo::metadata::{simple_title, PageMetadata};
use web_sys::Document;

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Set the browser tab title
pub fn set_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

/// Find `selector` in `<head>` or append a fresh `tag`, then set `attrs` on it
fn upsert_head_element(
    document: &Document,
    selector: &str,
    tag: &str,
    attrs: &[(&str, &str)],
) -> Result<(), wasm_bindgen::JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let element = match document.query_selector(selector)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element(tag)?;
            head.append_child(&created)?;
            created
        }
    };
    for (name, value) in attrs {
        element.set_attribute(name, value)?;
    }
    Ok(())
}

fn write_head(document: &Document, meta: &PageMetadata) -> Result<(), wasm_bindgen::JsValue> {
    for (name, content) in meta.meta_tags() {
        upsert_head_element(
            document,
            &format!("meta[name=\"{}\"]", name),
            "meta",
            &[("name", name), ("content", content.as_str())],
        )?;
    }
    let origin = document
        .location()
        .and_then(|l| l.origin().ok())
        .unwrap_or_default();
    let canonical = meta.canonical_url(&origin);
    upsert_head_element(
        document,
        "link[rel=\"canonical\"]",
        "link",
        &[("rel", "canonical"), ("href", canonical.as_str())],
    )
}

/// Title, description, keywords and canonical link
pub fn apply_metadata(meta: &PageMetadata) {
    let Some(document) = document() else {
        return;
    };
    document.set_title(&meta.document_title());
    if let Err(e) = write_head(&document, meta) {
        log::warn!("failed to update page metadata: {:?}", e);
    }
}

pub fn set_page_title(page: &str) {
    set_title(&simple_title(page));
}
