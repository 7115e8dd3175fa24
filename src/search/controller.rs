use std::ops::Range;
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::FetchError;
use crate::search::state::{SearchState, SearchUpdate};
use crate::source::Suggestion;

/// Identity of one input change. Timers and requests started for an input
/// carry its ticket; results under an outdated ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// What the runtime has to do after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Replace any pending debounce timer with one that calls
    /// [`Search::debounce_elapsed`] after `delay`.
    Debounce { ticket: Ticket, delay: Duration },
    /// Abort the pending debounce timer and the in-flight request.
    Cancel,
}

/// A request the runtime should send, superseding the previous one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub ticket: Ticket,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Host notification, called once per committed selection
pub type OnSelect = Box<dyn FnMut(i64)>;

/// Owns the query and [`SearchState`] and implements every transition of the
/// search box. All mutation goes through `&mut self` on the UI thread.
pub struct Search {
    config: SearchConfig,
    query: String,
    state: SearchState,
    /// Bumped on every input change, escape, selection, clear and shutdown
    generation: u64,
    /// Last ticket a request was issued for
    issued: Option<Ticket>,
    /// Ticket of the request whose result may still be applied
    in_flight: Option<Ticket>,
    typing: bool,
    pointer_in_list: bool,
    scroll_offset: usize,
    on_select: Option<OnSelect>,
}

impl Search {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            query: String::new(),
            state: SearchState::default(),
            generation: 0,
            issued: None,
            in_flight: None,
            typing: false,
            pointer_in_list: false,
            scroll_offset: 0,
            on_select: None,
        }
    }

    pub fn with_on_select(mut self, on_select: impl FnMut(i64) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Loading indicator visibility: a request is out, or the user typed
    /// within the last `loading_delay`.
    pub fn is_busy(&self) -> bool {
        self.state.is_loading || self.typing
    }

    pub fn shows_no_results(&self) -> bool {
        !self.state.message.is_empty() && self.state.message == self.config.no_results_message
    }

    /// Rows currently scrolled into view
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.state.suggestions.len();
        let start = self.scroll_offset.min(len);
        start..(start + self.rows()).min(len)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Shallow merge into the state, keeping the scroll position consistent.
    pub fn update(&mut self, update: SearchUpdate) {
        if update.suggestions.is_some() {
            // A replaced list is a fresh list: the pointer cannot be over it
            self.scroll_offset = 0;
            self.pointer_in_list = false;
        }
        self.state.update(update);
        self.sync_scroll();
    }

    // ---- Input ----

    /// Handle an edit of the input text.
    pub fn set_query(&mut self, text: impl Into<String>) -> Effect {
        self.query = text.into();
        self.generation += 1;
        self.typing = true;
        self.update(SearchUpdate {
            active_index: Some(None),
            ..SearchUpdate::default()
        });

        if self.query.chars().count() >= self.config.min_chars() {
            return Effect::Debounce {
                ticket: self.ticket(),
                delay: self.config.debounce(),
            };
        }

        // Anything scheduled for a longer query must not land now
        self.in_flight = None;
        self.update(SearchUpdate {
            suggestions: Some(Vec::new()),
            message: Some(self.config.too_short_message()),
            is_loading: Some(false),
            ..SearchUpdate::default()
        });
        Effect::Cancel
    }

    /// Ticket for the timer that hides the typing indicator.
    /// Only the latest input's ticket settles it.
    pub fn typing_ticket(&self) -> Ticket {
        self.ticket()
    }

    pub fn settle_typing(&mut self, ticket: Ticket) {
        if ticket == self.ticket() {
            self.typing = false;
        }
    }

    // ---- Fetching ----

    /// The debounce timer for `ticket` survived; returns the request to send,
    /// or `None` when a newer input has superseded it.
    pub fn debounce_elapsed(&mut self, ticket: Ticket) -> Option<Request> {
        if ticket != self.ticket() {
            tracing::debug!("Dropping stale debounce timer {:?}", ticket);
            return None;
        }
        if self.issued.is_some_and(|issued| issued >= ticket) {
            return None;
        }

        if let Some(previous) = self.in_flight.replace(ticket) {
            tracing::debug!("Request {:?} superseded by {:?}", previous, ticket);
        }
        self.issued = Some(ticket);
        self.update(SearchUpdate {
            is_loading: Some(true),
            ..SearchUpdate::default()
        });

        Some(Request {
            ticket,
            query: self.query.clone(),
        })
    }

    /// Apply the outcome of the request issued under `ticket`.
    /// Returns false when the result was stale and ignored.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<Vec<Suggestion>, FetchError>) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!("Discarding result of superseded request {:?}", ticket);
            return false;
        }
        self.in_flight = None;

        let update = match result {
            Ok(suggestions) => {
                tracing::debug!("Request {:?} returned {} suggestions", ticket, suggestions.len());
                let message = if suggestions.is_empty() {
                    self.config.no_results_message.clone()
                } else {
                    String::new()
                };
                SearchUpdate {
                    suggestions: Some(suggestions),
                    message: Some(message),
                    is_loading: Some(false),
                    ..SearchUpdate::default()
                }
            }
            Err(e) => {
                tracing::warn!("Failed to fetch suggestions: {}", e);
                SearchUpdate {
                    suggestions: Some(Vec::new()),
                    message: Some(e.user_message(&self.config.error_message)),
                    is_loading: Some(false),
                    ..SearchUpdate::default()
                }
            }
        };
        self.update(update);
        true
    }

    // ---- Navigation ----

    pub fn navigate(&mut self, direction: Direction) {
        if self.config.hover_locks_keyboard && self.pointer_in_list {
            return;
        }
        let len = self.state.suggestions.len();
        if len == 0 {
            return;
        }

        let next = match (direction, self.state.active_index) {
            (Direction::Down, Some(i)) if i + 1 < len => i + 1,
            (Direction::Down, _) => 0,
            (Direction::Up, Some(i)) if i > 0 => i - 1,
            (Direction::Up, _) => len - 1,
        };
        self.update(SearchUpdate {
            active_index: Some(Some(next)),
            ..SearchUpdate::default()
        });
    }

    pub fn hover(&mut self, index: usize) {
        if index >= self.state.suggestions.len() {
            return;
        }
        self.pointer_in_list = true;
        self.update(SearchUpdate {
            active_index: Some(Some(index)),
            ..SearchUpdate::default()
        });
    }

    pub fn leave_list(&mut self) {
        self.pointer_in_list = false;
        if self.config.hover_locks_keyboard {
            self.update(SearchUpdate {
                active_index: Some(None),
                ..SearchUpdate::default()
            });
        }
    }

    /// Enter: commit the active suggestion, if any.
    pub fn submit(&mut self) -> Effect {
        let Some(id) = self.state.active_suggestion().map(|s| s.id) else {
            return Effect::None;
        };
        self.select(id)
    }

    /// Escape: close the dropdown, keep the query. Pending work for the
    /// query is cancelled so nothing reopens the dropdown.
    pub fn escape(&mut self) -> Effect {
        self.supersede();
        self.update(SearchUpdate {
            suggestions: Some(Vec::new()),
            active_index: Some(None),
            is_loading: Some(false),
            ..SearchUpdate::default()
        });
        Effect::Cancel
    }

    // ---- Selection / teardown ----

    /// Commit `id`: record it, close the dropdown, empty the input and notify
    /// the host. Pending work for the old query is cancelled.
    pub fn select(&mut self, id: i64) -> Effect {
        tracing::info!("Selected suggestion {}", id);
        self.supersede();
        self.query.clear();
        self.update(SearchUpdate {
            selected_id: Some(Some(id)),
            suggestions: Some(Vec::new()),
            is_loading: Some(false),
            ..SearchUpdate::default()
        });
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(id);
        }
        Effect::Cancel
    }

    /// Reset the input to empty without touching the last selection.
    pub fn clear(&mut self) -> Effect {
        self.supersede();
        self.query.clear();
        self.update(SearchUpdate {
            suggestions: Some(Vec::new()),
            message: Some(String::new()),
            is_loading: Some(false),
            ..SearchUpdate::default()
        });
        Effect::Cancel
    }

    /// Teardown: nothing issued so far may mutate state afterwards.
    pub fn shutdown(&mut self) -> Effect {
        self.supersede();
        self.state.is_loading = false;
        Effect::Cancel
    }

    // ---- Helpers ----

    fn ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    fn supersede(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.typing = false;
    }

    fn rows(&self) -> usize {
        self.config.visible_rows.max(1)
    }

    fn sync_scroll(&mut self) {
        let len = self.state.suggestions.len();
        if let Some(active) = self.state.active_index {
            self.scroll_offset = scroll_into_view(self.scroll_offset, active, self.rows());
        }
        self.scroll_offset = self.scroll_offset.min(len.saturating_sub(self.rows()));
    }
}

/// Smallest change to `offset` that brings row `index` into a window of
/// `rows` rows ("nearest" block alignment).
fn scroll_into_view(offset: usize, index: usize, rows: usize) -> usize {
    if index < offset {
        index
    } else if index >= offset + rows {
        index + 1 - rows
    } else {
        offset
    }
}
