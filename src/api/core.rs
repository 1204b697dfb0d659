//! WASM API for the typewriter session
//!
//! This module provides the JavaScript-facing API. The Rust side owns the
//! live session (buffer + paper scroll + ink intent) as the canonical
//! source of truth; every entry point returns the refreshed view so JS
//! renders straight from the returned structure.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::archive::{HttpRemoteStore, LocalStorageCache, NoteArchive};
use crate::layout::{carriage_position, present, CarriagePosition, LayoutConfig, PageView, PaperScroll};
use crate::models::InkStyle;
use crate::text::buffer::TypewriterBuffer;
use crate::text::codec::MARKER_SENTINEL;
use crate::{wasm_info, wasm_warn};

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<TypewriterSession> = Mutex::new(TypewriterSession::new());
    static ref ARCHIVE_ENDPOINT: Mutex<Option<ArchiveEndpoint>> = Mutex::new(None);
}

struct ArchiveEndpoint {
    base_url: String,
    anon_key: String,
}

/// The live typing session.
struct TypewriterSession {
    buffer: TypewriterBuffer,
    scroll: PaperScroll,
    config: LayoutConfig,
}

impl TypewriterSession {
    fn new() -> Self {
        let config = LayoutConfig::default();
        Self {
            buffer: TypewriterBuffer::new(config.columns_per_line),
            scroll: PaperScroll::new(),
            config,
        }
    }

    fn view(&self) -> TypewriterView {
        let caret = self.buffer.caret();
        TypewriterView {
            page: present(self.buffer.units(), caret),
            carriage: carriage_position(caret, &self.config),
            scroll_offset: self.scroll.offset(),
            ink_color: ink_color_label(self.buffer.style()).to_string(),
            blank: self.buffer.is_blank(),
        }
    }
}

/// Everything JS needs to render one frame.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TypewriterView {
    pub page: PageView,
    pub carriage: CarriagePosition,
    pub scroll_offset: f32,
    /// "black" or "red", matching the ribbon selector buttons.
    pub ink_color: String,
    /// True when the page has nothing sendable on it.
    pub blank: bool,
}

fn ink_color_label(style: InkStyle) -> &'static str {
    match style {
        InkStyle::Default => "black",
        InkStyle::Accent => "red",
    }
}

fn ink_style_from_label(color: &str) -> InkStyle {
    match color {
        "red" | "accent" => InkStyle::Accent,
        _ => InkStyle::Default,
    }
}

fn lock_session() -> Result<MutexGuard<'static, TypewriterSession>, JsValue> {
    SESSION
        .lock()
        .map_err(|_| JsValue::from_str("session lock poisoned"))
}

fn view_result(session: &TypewriterSession) -> Result<JsValue, JsValue> {
    serialize(&session.view(), "View serialization error")
}

// ============================================================================
// Typing surface
// ============================================================================

/// Type one printable character.
///
/// Multi-character keys ("Shift", "ArrowLeft", ...) and the reserved
/// marker sentinel are ignored. Any buffer mutation snaps the paper
/// scroll back to the typing position.
#[wasm_bindgen(js_name = keyPress)]
pub fn key_press(key: &str) -> Result<JsValue, JsValue> {
    let mut session = lock_session()?;

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch != MARKER_SENTINEL && ch != '\n' => {
            session.scroll.reset();
            session.buffer.append_char(ch);
        }
        _ => wasm_warn!("ignoring non-printable key: {:?}", key),
    }

    view_result(&session)
}

/// Delete backward one unit.
#[wasm_bindgen]
pub fn backspace() -> Result<JsValue, JsValue> {
    let mut session = lock_session()?;
    session.scroll.reset();
    session.buffer.backspace();
    view_result(&session)
}

/// Carriage return: explicit line break.
#[wasm_bindgen(js_name = carriageReturn)]
pub fn carriage_return() -> Result<JsValue, JsValue> {
    let mut session = lock_session()?;
    session.scroll.reset();
    session.buffer.append_line_break();
    view_result(&session)
}

/// Select the ink ribbon color ("black" or "red").
///
/// Only records intent; the stream is untouched until the next typed
/// character, so toggling is free.
#[wasm_bindgen(js_name = setInkColor)]
pub fn set_ink_color(color: &str) -> Result<JsValue, JsValue> {
    let mut session = lock_session()?;
    session.buffer.set_style(ink_style_from_label(color));
    view_result(&session)
}

/// Apply a wheel delta to the paper scroll. Returns the clamped offset.
#[wasm_bindgen(js_name = wheelScroll)]
pub fn wheel_scroll(delta_y: f64) -> Result<f64, JsValue> {
    let mut session = lock_session()?;
    Ok(session.scroll.apply_wheel(delta_y as f32) as f64)
}

/// Current view without mutating anything.
#[wasm_bindgen(js_name = getView)]
pub fn get_view() -> Result<JsValue, JsValue> {
    let session = lock_session()?;
    view_result(&session)
}

// ============================================================================
// Archive surface
// ============================================================================

/// Point the archive at its backend. Until configured, sends land in the
/// local fallback cache only.
#[wasm_bindgen(js_name = configureArchive)]
pub fn configure_archive(base_url: &str, anon_key: &str) -> Result<(), JsValue> {
    let mut endpoint = ARCHIVE_ENDPOINT
        .lock()
        .map_err(|_| JsValue::from_str("archive config lock poisoned"))?;
    *endpoint = Some(ArchiveEndpoint {
        base_url: base_url.to_string(),
        anon_key: anon_key.to_string(),
    });
    wasm_info!("archive configured: {}", base_url);
    Ok(())
}

fn web_archive() -> Result<NoteArchive<HttpRemoteStore, LocalStorageCache>, JsValue> {
    let endpoint = ARCHIVE_ENDPOINT
        .lock()
        .map_err(|_| JsValue::from_str("archive config lock poisoned"))?;
    // an unconfigured endpoint fails as unreachable and the gateway
    // falls back to the local cache, so typing still works offline
    let remote = match endpoint.as_ref() {
        Some(ep) => HttpRemoteStore::new(ep.base_url.clone(), ep.anon_key.clone()),
        None => HttpRemoteStore::new("", ""),
    };
    Ok(NoteArchive::new(remote, LocalStorageCache::new()))
}

/// Send the current page to the archive and feed a fresh sheet.
///
/// The buffer is captured and reset *before* the network call, so an
/// in-flight submission can never corrupt the next page; a transport
/// failure is absorbed into the local cache by the gateway. Rejects only
/// blank pages.
#[wasm_bindgen(js_name = sendNote)]
pub async fn send_note() -> Result<JsValue, JsValue> {
    let content = {
        let mut session = lock_session()?;
        if session.buffer.is_blank() {
            return Err(JsValue::from_str("note content is required"));
        }
        let content = session.buffer.to_wire_string();
        session.buffer.reset();
        session.scroll.reset();
        content
    };

    let archive = web_archive()?;
    let note = archive
        .submit(&content, Utc::now().timestamp_millis())
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    wasm_info!("note {} archived", note.id);
    serialize(&note, "Note serialization error")
}

/// All archived notes, newest first. Never rejects: an unreachable
/// backend degrades to the cached list.
#[wasm_bindgen(js_name = fetchNotes)]
pub async fn fetch_notes() -> Result<JsValue, JsValue> {
    let archive = web_archive()?;
    let notes = archive.list_all().await;
    serialize(&notes, "Notes serialization error")
}

/// Remove an archived note by id.
#[wasm_bindgen(js_name = deleteNote)]
pub async fn delete_note(id: String) -> Result<(), JsValue> {
    let archive = web_archive()?;
    archive
        .delete(&id)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
