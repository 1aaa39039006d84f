//! Main TUI application state and logic

use crate::roster::{Hydration, RosterConfig, RosterPaginator, RosterView};
use crate::storage::{KeyValueStore, Settings, SqliteStore};
use crate::student::AvatarPalette;
use crate::tui::screens::*;
use crate::tui::types::Screen;
use crate::Result;
use chrono::Local;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Should quit
    pub should_quit: bool,
    /// Loaded settings
    pub settings: Settings,
    /// How the roster was obtained on startup
    pub hydration: Hydration,
    /// Student list screen (always present, it is the root screen)
    pub list_screen: StudentListScreen,
    /// Student detail screen (when active)
    pub detail_screen: Option<StudentDetailScreen>,
    /// Roster shared with background tasks
    roster: RosterPaginator,
    /// Runtime driving load-more and refresh
    runtime: Runtime,
    /// In-flight load-more task, if any
    load_more_task: Option<JoinHandle<()>>,
    /// In-flight refresh task, if any
    refresh_task: Option<JoinHandle<()>>,
    /// Other background roster operations not yet reaped
    background: Vec<JoinHandle<()>>,
}

impl App {
    /// Create new application backed by the SQLite database from `settings`
    pub fn new(settings: Settings) -> Result<Self> {
        let store = SqliteStore::new(&settings.database_path)?;
        Self::new_with_store(Arc::new(store), settings)
    }

    /// Create new application over an arbitrary store
    ///
    /// Blocks until the roster has been rehydrated or seeded.
    pub fn new_with_store(store: Arc<dyn KeyValueStore>, settings: Settings) -> Result<Self> {
        settings.validate()?;

        let runtime = Runtime::new()?;
        let roster = RosterPaginator::new(
            store,
            AvatarPalette::default(),
            RosterConfig::from(&settings),
        );
        let hydration = runtime.block_on(roster.initialize());
        tracing::info!("Roster ready: {:?}", hydration);

        let mut list_screen = StudentListScreen::new();
        list_screen.set_status(hydration_status(hydration, roster.len()));

        Ok(Self {
            current_screen: Screen::StudentList,
            should_quit: false,
            settings,
            hydration,
            list_screen,
            detail_screen: None,
            roster,
            runtime,
            load_more_task: None,
            refresh_task: None,
            background: Vec::new(),
        })
    }

    /// Snapshot of the roster for rendering
    pub fn roster_view(&self) -> RosterView {
        self.roster.view()
    }

    /// Handle to the roster
    pub fn roster(&self) -> &RosterPaginator {
        &self.roster
    }

    /// Rows from the end of the list at which the next page is requested
    pub fn load_more_threshold(&self) -> usize {
        (self.settings.page_size / 2).max(1)
    }

    /// Start a load-more in the background
    ///
    /// Returns false when one is already running or the roster is full.
    pub fn trigger_load_more(&mut self) -> bool {
        let in_flight = self
            .load_more_task
            .as_ref()
            .is_some_and(|task| !task.is_finished());
        if in_flight || self.roster.is_loading_more() || !self.roster.has_more() {
            return false;
        }
        let roster = self.roster.clone();
        let handle = self.runtime.spawn(async move {
            roster.load_more().await;
        });
        if let Some(finished) = self.load_more_task.replace(handle) {
            self.track(finished);
        }
        true
    }

    /// Start a refresh in the background and jump to the top of the list
    ///
    /// Returns false while a previous refresh is still running.
    pub fn trigger_refresh(&mut self) -> bool {
        let in_flight = self
            .refresh_task
            .as_ref()
            .is_some_and(|task| !task.is_finished());
        if in_flight || self.roster.is_refreshing() {
            return false;
        }
        let roster = self.roster.clone();
        let handle = self.runtime.spawn(async move {
            roster.refresh().await;
        });
        if let Some(finished) = self.refresh_task.replace(handle) {
            self.track(finished);
        }
        self.list_screen.reset_selection();
        self.list_screen.mark_refreshed(Local::now());
        true
    }

    /// Block until every background roster operation has finished
    pub fn wait_for_background(&mut self) {
        let mut handles = std::mem::take(&mut self.background);
        handles.extend(self.load_more_task.take());
        handles.extend(self.refresh_task.take());
        self.runtime.block_on(async move {
            for handle in handles {
                if let Err(e) = handle.await {
                    tracing::error!("Roster task failed: {}", e);
                }
            }
        });
    }

    /// Move selection down, requesting more students near the end
    pub fn next(&mut self) {
        let count = self.roster.len();
        self.list_screen.next(count);
        if self.list_screen.is_near_end(count, self.load_more_threshold()) {
            self.trigger_load_more();
        }
    }

    /// Move selection up
    pub fn previous(&mut self) {
        self.list_screen.previous();
    }

    /// Open the detail screen for the selected student
    pub fn open_selected_student(&mut self) {
        let view = self.roster.view();
        self.list_screen.clamp(view.students.len());

        let Some(student) = view.students.get(self.list_screen.selected_index) else {
            return;
        };

        self.detail_screen = Some(StudentDetailScreen::new(
            student.id.clone(),
            Some(student.name.clone()),
        ));
        self.current_screen = Screen::StudentDetail;
    }

    /// Return to student list
    pub fn back_to_student_list(&mut self) {
        self.current_screen = Screen::StudentList;
        self.detail_screen = None;
        self.list_screen.clamp(self.roster.len());
    }

    fn track(&mut self, handle: JoinHandle<()>) {
        self.background.retain(|h| !h.is_finished());
        self.background.push(handle);
    }
}

/// Status line describing how the roster was obtained on startup
fn hydration_status(hydration: Hydration, count: usize) -> String {
    match hydration {
        Hydration::Restored { count, truncated: false } => format!("Restored {} students", count),
        Hydration::Restored { count, truncated: true } => {
            format!("Restored {} students (saved roster was over the limit)", count)
        }
        Hydration::Seeded => format!("Loaded {} students", count),
        Hydration::Recovered => format!("Saved roster was unreadable, loaded {} students", count),
    }
}
