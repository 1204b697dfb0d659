//! Browser-backed archive implementations
//!
//! `HttpRemoteStore` talks to the notes service over `fetch`;
//! `LocalStorageCache` keeps the fallback copy under a single
//! localStorage key. Both are thin: all policy lives in
//! [`super::NoteArchive`].

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::error::TransportError;
use super::{FallbackCache, RemoteStore};
use crate::models::Note;

/// localStorage key holding the cached note list.
pub const CACHE_KEY: &str = "typewriter-notes";

#[derive(Deserialize)]
struct NotesResponse {
    notes: Vec<Note>,
}

#[derive(Deserialize)]
struct NoteResponse {
    note: Note,
}

#[derive(Serialize)]
struct CreateBody<'a> {
    content: &'a str,
}

/// Notes service client over the browser fetch API.
pub struct HttpRemoteStore {
    base_url: String,
    anon_key: String,
}

impl HttpRemoteStore {
    /// `base_url` is the service root; routes are `{base_url}/notes`.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<JsValue, TransportError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_unreachable)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_unreachable)?;
        request
            .headers()
            .set("Authorization", &format!("Bearer {}", self.anon_key))
            .map_err(js_unreachable)?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Unreachable("no window".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_unreachable)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| TransportError::MalformedResponse("not a Response".to_string()))?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        let json = response.json().map_err(js_unreachable)?;
        JsFuture::from(json)
            .await
            .map_err(|e| TransportError::MalformedResponse(js_message(&e)))
    }
}

impl RemoteStore for HttpRemoteStore {
    async fn list(&self) -> Result<Vec<Note>, TransportError> {
        let json = self.request("GET", "notes", None).await?;
        let parsed: NotesResponse = serde_wasm_bindgen::from_value(json)
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
        Ok(parsed.notes)
    }

    async fn create(&self, content: &str) -> Result<Note, TransportError> {
        let body = serde_json::to_string(&CreateBody { content })
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
        let json = self.request("POST", "notes", Some(body)).await?;
        let parsed: NoteResponse = serde_wasm_bindgen::from_value(json)
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
        Ok(parsed.note)
    }

    async fn delete(&self, id: &str) -> Result<(), TransportError> {
        self.request("DELETE", &format!("notes/{id}"), None).await?;
        Ok(())
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

fn js_unreachable(value: JsValue) -> TransportError {
    TransportError::Unreachable(js_message(&value))
}

/// Fallback cache in the browser's localStorage, under [`CACHE_KEY`].
///
/// Storage failures are swallowed: a missing window or a full quota
/// degrades to an empty read or a dropped write, never an error.
#[derive(Default)]
pub struct LocalStorageCache;

impl LocalStorageCache {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl FallbackCache for LocalStorageCache {
    fn read(&self) -> Vec<Note> {
        let Some(storage) = Self::storage() else {
            return Vec::new();
        };
        match storage.get_item(CACHE_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn write(&self, notes: &[Note]) {
        let Some(storage) = Self::storage() else {
            return;
        };
        match serde_json::to_string(notes) {
            Ok(json) => {
                if storage.set_item(CACHE_KEY, &json).is_err() {
                    log::warn!("failed to persist note cache");
                }
            }
            Err(err) => log::warn!("failed to encode note cache: {err}"),
        }
    }
}
