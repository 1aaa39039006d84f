//! Roster paginator
//!
//! Keeps the accumulated list of mock students, grows it one page at a time up
//! to a fixed cap, and mirrors every change into the key-value store as a
//! single snapshot.
//!
//! The paginator is a cheap `Clone` handle: the UI keeps one copy to read
//! [`RosterPaginator::view`] every frame, and background tasks get their own
//! copies to run [`RosterPaginator::load_more`] / [`RosterPaginator::refresh`].
//!
//! Persistence failures never reach the caller. Reads fall back to a fresh
//! first page and failed writes leave the in-memory roster as the source of
//! truth for the session.
//!
//! Every mutation bumps a revision number. Writes are funnelled through one
//! writer lock and a write is dropped unless its revision is newer than the
//! last one attempted, so an overlapping refresh and load-more can never leave
//! an older roster in storage.

use crate::storage::{snapshot, KeyValueStore, Settings, ROSTER_KEY};
use crate::student::{generate, AvatarPalette, Student};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterConfig {
    /// Students appended per load-more (and size of the first page)
    pub page_size: usize,
    /// Maximum roster size
    pub capacity: usize,
    /// Artificial latency before a load-more applies
    pub load_delay: Duration,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            capacity: 50,
            load_delay: Duration::from_millis(500),
        }
    }
}

impl From<&Settings> for RosterConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            page_size: settings.page_size,
            capacity: settings.max_students,
            load_delay: settings.load_delay(),
        }
    }
}

/// How the roster was obtained on startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// Loaded from the stored snapshot
    Restored {
        /// Students kept after applying the cap
        count: usize,
        /// Whether the stored snapshot exceeded the cap
        truncated: bool,
    },
    /// Nothing stored yet; the first page was generated and saved
    Seeded,
    /// The snapshot could not be read or parsed; replaced by the first page
    Recovered,
}

/// What the list footer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterState {
    /// A load-more is in flight
    Loading,
    /// The cap has been reached
    Exhausted,
    /// More students can be loaded
    MoreAvailable,
}

/// Point-in-time copy of the paginator state for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    /// Students in generation order
    pub students: Vec<Student>,
    /// A refresh is in progress
    pub refreshing: bool,
    /// A load-more is in progress
    pub loading_more: bool,
    /// The roster is below the cap
    pub has_more: bool,
}

impl RosterView {
    /// Footer state derived from the flags
    pub fn footer(&self) -> FooterState {
        if self.loading_more {
            FooterState::Loading
        } else if !self.has_more {
            FooterState::Exhausted
        } else {
            FooterState::MoreAvailable
        }
    }
}

#[derive(Debug, Default)]
struct RosterState {
    students: Vec<Student>,
    /// Refreshes started but not yet persisted
    refreshes: usize,
    loading_more: bool,
    has_more: bool,
    revision: u64,
}

impl RosterState {
    /// Bump the revision and capture what should be written
    fn stage(&mut self) -> (u64, Vec<Student>) {
        self.revision += 1;
        (self.revision, self.students.clone())
    }
}

/// Paginated, persisted roster of mock students
#[derive(Clone)]
pub struct RosterPaginator {
    store: Arc<dyn KeyValueStore>,
    palette: Arc<AvatarPalette>,
    config: RosterConfig,
    state: Arc<Mutex<RosterState>>,
    /// Revision of the last write handed to the store
    writer: Arc<tokio::sync::Mutex<u64>>,
}

impl RosterPaginator {
    /// Create an empty paginator; call [`initialize`](Self::initialize) before use
    pub fn new(store: Arc<dyn KeyValueStore>, palette: AvatarPalette, config: RosterConfig) -> Self {
        Self {
            store,
            palette: Arc::new(palette),
            config,
            state: Arc::new(Mutex::new(RosterState {
                has_more: true,
                ..RosterState::default()
            })),
            writer: Arc::new(tokio::sync::Mutex::new(0)),
        }
    }

    /// Create a paginator with the default palette and pagination parameters
    pub fn with_defaults(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, AvatarPalette::default(), RosterConfig::default())
    }

    /// Pagination parameters in use
    pub fn config(&self) -> RosterConfig {
        self.config
    }

    /// Snapshot of the current state
    pub fn view(&self) -> RosterView {
        let state = self.lock_state();
        RosterView {
            students: state.students.clone(),
            refreshing: state.refreshes > 0,
            loading_more: state.loading_more,
            has_more: state.has_more,
        }
    }

    /// Number of students currently loaded
    pub fn len(&self) -> usize {
        self.lock_state().students.len()
    }

    /// Whether no students are loaded
    pub fn is_empty(&self) -> bool {
        self.lock_state().students.is_empty()
    }

    /// Whether the roster is below the cap
    pub fn has_more(&self) -> bool {
        self.lock_state().has_more
    }

    /// Whether a load-more is in flight
    pub fn is_loading_more(&self) -> bool {
        self.lock_state().loading_more
    }

    /// Whether a refresh is in flight
    pub fn is_refreshing(&self) -> bool {
        self.lock_state().refreshes > 0
    }

    /// Rehydrate the roster from storage, or seed it with the first page
    pub async fn initialize(&self) -> Hydration {
        let capacity = self.config.capacity;

        let (students, outcome) = match self.store.get(ROSTER_KEY).await {
            Ok(Some(bytes)) => match snapshot::decode(&bytes) {
                Ok(mut students) => {
                    let truncated = students.len() > capacity;
                    students.truncate(capacity);
                    let count = students.len();
                    (students, Hydration::Restored { count, truncated })
                }
                Err(e) => {
                    tracing::warn!("Stored roster is unreadable, starting fresh: {}", e);
                    (self.first_page(), Hydration::Recovered)
                }
            },
            Ok(None) => (self.first_page(), Hydration::Seeded),
            Err(e) => {
                tracing::warn!("Failed to read stored roster, starting fresh: {}", e);
                (self.first_page(), Hydration::Recovered)
            }
        };

        let pending = {
            let mut state = self.lock_state();
            state.has_more = students.len() < capacity;
            state.students = students;
            state.stage()
        };

        match outcome {
            Hydration::Restored { count, truncated } => {
                tracing::info!("Restored {} students from storage (truncated: {})", count, truncated);
            }
            Hydration::Seeded | Hydration::Recovered => {
                tracing::info!("Seeded roster with {} students ({:?})", pending.1.len(), outcome);
                self.persist_revision(pending.0, &pending.1).await;
            }
        }

        outcome
    }

    /// Append the next page after the artificial delay
    ///
    /// Returns `false` without touching anything when a load-more is already
    /// in flight or the cap has been reached.
    pub async fn load_more(&self) -> bool {
        {
            let mut state = self.lock_state();
            if state.loading_more || !state.has_more {
                return false;
            }
            state.loading_more = true;
        }

        if !self.config.load_delay.is_zero() {
            tokio::time::sleep(self.config.load_delay).await;
        }

        let pending = {
            let mut state = self.lock_state();
            state.loading_more = false;

            let current = state.students.len();
            let remaining = self.config.capacity.saturating_sub(current);
            let to_load = self.config.page_size.min(remaining);

            if to_load == 0 {
                state.has_more = false;
                None
            } else {
                let page = generate(current, to_load, &self.palette);
                state.students.extend(page);
                state.has_more = state.students.len() < self.config.capacity;
                tracing::debug!("Loaded {} students (total {})", to_load, state.students.len());
                Some(state.stage())
            }
        };

        if let Some((revision, students)) = pending {
            self.persist_revision(revision, &students).await;
        }

        true
    }

    /// Discard every loaded page and start over from the first page
    ///
    /// Overlapping refreshes are allowed; the refreshing flag stays up until
    /// the last of them has finished writing.
    pub async fn refresh(&self) {
        let (revision, students) = {
            let mut state = self.lock_state();
            state.refreshes += 1;
            state.students = self.first_page();
            state.has_more = state.students.len() < self.config.capacity;
            state.stage()
        };

        tracing::info!("Refreshed roster ({} students)", students.len());
        self.persist_revision(revision, &students).await;

        let mut state = self.lock_state();
        state.refreshes = state.refreshes.saturating_sub(1);
    }

    /// Write a staged roster unless a newer revision was already written
    ///
    /// Returns whether the store accepted the write.
    pub(crate) async fn persist_revision(&self, revision: u64, students: &[Student]) -> bool {
        let mut last = self.writer.lock().await;
        if revision <= *last {
            tracing::debug!("Dropping stale roster write (revision {} <= {})", revision, *last);
            return false;
        }
        *last = revision;

        let bytes = match snapshot::encode(students) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to encode roster: {}", e);
                return false;
            }
        };

        match self.store.set(ROSTER_KEY, &bytes).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to persist roster: {}", e);
                false
            }
        }
    }

    fn first_page(&self) -> Vec<Student> {
        let count = self.config.page_size.min(self.config.capacity);
        generate(0, count, &self.palette)
    }

    fn lock_state(&self) -> MutexGuard<'_, RosterState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
