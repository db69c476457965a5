//! Browser-backed implementations of the resolver's injected capabilities.

use listing::resolver::{FetchError, OverrideStore, RemoteSource, Resolver};
use listing::Dataset;
use wasm_bindgen::{JsCast, JsValue};

/// Override slots persisted in the browser's localStorage.
///
/// When storage is unavailable (private browsing, storage disabled) every
/// slot reads as absent and writes are dropped, so the site just keeps
/// serving the static files.
pub struct BrowserOverrides {
    storage: Option<web_sys::Storage>,
}

impl BrowserOverrides {
    pub fn new() -> Self {
        let storage = leptos::window().local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("localStorage is unavailable, overrides are disabled");
        }
        Self { storage }
    }
}

impl Default for BrowserOverrides {
    fn default() -> Self {
        Self::new()
    }
}

impl OverrideStore for BrowserOverrides {
    fn get(&self, dataset: Dataset) -> Option<String> {
        self.storage
            .as_ref()?
            .get_item(&dataset.storage_key())
            .ok()
            .flatten()
    }

    fn set(&self, dataset: Dataset, raw: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(&dataset.storage_key(), raw) {
                tracing::warn!("Failed to persist override for {}: {:?}", dataset.name(), e);
            }
        }
    }

    fn remove(&self, dataset: Dataset) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(&dataset.storage_key());
        }
    }
}

/// The static JSON files the site ships with, served next to the page.
pub struct StaticFiles;

#[async_trait::async_trait(?Send)]
impl RemoteSource for StaticFiles {
    async fn fetch(&self, dataset: Dataset) -> Result<String, FetchError> {
        let res = reqwasm::http::Request::get(&format!("/{}", dataset.static_path()))
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !(200..300).contains(&res.status()) {
            return Err(FetchError::Status(res.status()));
        }

        res.text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))
    }
}

pub fn resolver() -> Resolver<BrowserOverrides, StaticFiles> {
    Resolver::new(BrowserOverrides::new(), StaticFiles)
}

/// Offers an exported dataset as a file download via a Blob object URL.
pub fn download(file: &listing::admin::ExportFile) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&file.content));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = leptos::document();
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    if let Some(body) = document.body() {
        body.append_child(&anchor)?;
    }
    anchor.click();
    anchor.remove();

    web_sys::Url::revoke_object_url(&url)
}
