//! Note archive gateway
//!
//! Finished pages leave the typewriter as notes. The archive prefers the
//! remote store but treats the local cache as a write-ahead backstop: the
//! cache is written on every send, successful or not, so a note is never
//! lost to an unreachable backend. Transport failures are absorbed here —
//! the typing path only ever sees validation errors.
//!
//! The remote store and the fallback cache are trait seams; the web
//! implementations live in [`web`], and tests substitute in-memory fakes.

pub mod error;
pub mod web;

pub use error::{ArchiveError, TransportError};
pub use web::{HttpRemoteStore, LocalStorageCache};

use uuid::Uuid;

use crate::models::Note;

/// Remote note store boundary.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// Fetch all notes.
    async fn list(&self) -> Result<Vec<Note>, TransportError>;

    /// Persist a new note, returning the stored (server-authoritative) note.
    async fn create(&self, content: &str) -> Result<Note, TransportError>;

    /// Remove a note by id.
    async fn delete(&self, id: &str) -> Result<(), TransportError>;
}

/// Durable local fallback: one keyed record holding the full note list.
///
/// The cache itself never fails — storage errors degrade to an empty
/// read or a dropped write.
pub trait FallbackCache {
    fn read(&self) -> Vec<Note>;
    fn write(&self, notes: &[Note]);
}

/// The archive gateway: remote store with local fallback.
pub struct NoteArchive<R, C> {
    remote: R,
    cache: C,
}

impl<R: RemoteStore, C: FallbackCache> NoteArchive<R, C> {
    pub fn new(remote: R, cache: C) -> Self {
        Self { remote, cache }
    }

    /// Archive a finished page.
    ///
    /// Blank content is rejected before any storage is touched. Otherwise
    /// a client note is synthesized (`now_ms` timestamp, fresh uuid), the
    /// remote store is attempted, and the result — the server's note on
    /// success, the client's on transport failure — is merged into the
    /// cache and returned. Transport failure is never surfaced.
    pub async fn submit(&self, content: &str, now_ms: i64) -> Result<Note, ArchiveError> {
        if content.trim().is_empty() {
            return Err(ArchiveError::Validation);
        }

        let local = Note::new(Uuid::new_v4().to_string(), content, now_ms);
        let note = match self.remote.create(content).await {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("note submission failed, keeping local copy: {err}");
                local
            }
        };

        let mut notes = self.cache.read();
        merge_note(&mut notes, note.clone());
        self.cache.write(&notes);
        Ok(note)
    }

    /// All archived notes, newest first.
    ///
    /// Prefers the remote list (and refreshes the cache from it); falls
    /// back to the possibly-stale cache when the remote is unreachable.
    /// Never fails.
    pub async fn list_all(&self) -> Vec<Note> {
        match self.remote.list().await {
            Ok(mut notes) => {
                notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.cache.write(&notes);
                notes
            }
            Err(err) => {
                log::warn!("note listing failed, serving local cache: {err}");
                self.cache.read()
            }
        }
    }

    /// Remove a note everywhere.
    pub async fn delete(&self, id: &str) -> Result<(), ArchiveError> {
        self.remote.delete(id).await?;
        let notes: Vec<Note> = self
            .cache
            .read()
            .into_iter()
            .filter(|n| n.id != id)
            .collect();
        self.cache.write(&notes);
        Ok(())
    }
}

/// Insert a note into a newest-first list, replacing any previous entry
/// with the same id.
fn merge_note(notes: &mut Vec<Note>, note: Note) {
    notes.retain(|n| n.id != note.id);
    notes.push(note);
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Remote fake: either answers from a vec or fails every call.
    struct FakeRemote {
        notes: RefCell<Vec<Note>>,
        reachable: bool,
    }

    impl FakeRemote {
        fn reachable() -> Self {
            Self {
                notes: RefCell::new(Vec::new()),
                reachable: true,
            }
        }

        fn unreachable() -> Self {
            Self {
                notes: RefCell::new(Vec::new()),
                reachable: false,
            }
        }
    }

    impl RemoteStore for FakeRemote {
        async fn list(&self) -> Result<Vec<Note>, TransportError> {
            if !self.reachable {
                return Err(TransportError::Unreachable("fake".into()));
            }
            Ok(self.notes.borrow().clone())
        }

        async fn create(&self, content: &str) -> Result<Note, TransportError> {
            if !self.reachable {
                return Err(TransportError::Unreachable("fake".into()));
            }
            if content.trim().is_empty() {
                return Err(TransportError::Status(400));
            }
            let note = Note::new(
                format!("srv-{}", self.notes.borrow().len()),
                content,
                1_700_000_000_000,
            );
            self.notes.borrow_mut().push(note.clone());
            Ok(note)
        }

        async fn delete(&self, id: &str) -> Result<(), TransportError> {
            if !self.reachable {
                return Err(TransportError::Unreachable("fake".into()));
            }
            self.notes.borrow_mut().retain(|n| n.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryCache {
        notes: RefCell<Vec<Note>>,
    }

    impl FallbackCache for MemoryCache {
        fn read(&self) -> Vec<Note> {
            self.notes.borrow().clone()
        }

        fn write(&self, notes: &[Note]) {
            *self.notes.borrow_mut() = notes.to_vec();
        }
    }

    #[test]
    fn test_blank_submit_rejected_before_storage() {
        let archive = NoteArchive::new(FakeRemote::reachable(), MemoryCache::default());

        let result = block_on(archive.submit("   \n  ", 1));
        assert!(matches!(result, Err(ArchiveError::Validation)));
        assert!(block_on(archive.list_all()).is_empty());
    }

    #[test]
    fn test_submit_adopts_server_note() {
        let archive = NoteArchive::new(FakeRemote::reachable(), MemoryCache::default());

        let note = block_on(archive.submit("hello", 1)).unwrap();
        assert_eq!(note.id, "srv-0");
        assert_eq!(block_on(archive.list_all()), vec![note]);
    }

    #[test]
    fn test_submit_falls_back_to_client_note() {
        let archive = NoteArchive::new(FakeRemote::unreachable(), MemoryCache::default());

        let note = block_on(archive.submit("hello", 42)).unwrap();
        assert_eq!(note.created_at, 42);
        assert_eq!(note.content, "hello");

        // the note survived into the cache despite the dead remote
        assert_eq!(block_on(archive.list_all()), vec![note]);
    }

    #[test]
    fn test_list_all_newest_first() {
        let archive = NoteArchive::new(FakeRemote::unreachable(), MemoryCache::default());

        block_on(archive.submit("first", 10)).unwrap();
        block_on(archive.submit("second", 20)).unwrap();

        let notes = block_on(archive.list_all());
        assert_eq!(notes[0].content, "second");
        assert_eq!(notes[1].content, "first");
    }

    #[test]
    fn test_list_all_never_fails() {
        let archive = NoteArchive::new(FakeRemote::unreachable(), MemoryCache::default());
        assert!(block_on(archive.list_all()).is_empty());
    }

    #[test]
    fn test_delete_propagates_transport_error() {
        let archive = NoteArchive::new(FakeRemote::unreachable(), MemoryCache::default());
        let result = block_on(archive.delete("any"));
        assert!(matches!(result, Err(ArchiveError::Transport(_))));
    }

    #[test]
    fn test_delete_removes_from_cache() {
        let archive = NoteArchive::new(FakeRemote::reachable(), MemoryCache::default());
        let note = block_on(archive.submit("bye", 1)).unwrap();

        block_on(archive.delete(&note.id)).unwrap();
        assert!(block_on(archive.list_all()).is_empty());
    }
}
