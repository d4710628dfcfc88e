//! Typeahead state management
//!
//! The headless combobox state machine: debounced query edits, paginated
//! fetches through the search worker, panel visibility, highlight
//! navigation and selection. Rendering and raw input events live in the
//! app layer; everything here is a pure state transition with time passed
//! in explicitly.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::search::{SearchOption, SearchProvider, SearchRequest, SearchResponse, spawn_worker};

use super::debouncer::Debouncer;

/// Tuning knobs for a typeahead instance
#[derive(Debug, Clone)]
pub struct TypeaheadConfig {
    /// Minimum trimmed query length before a search is issued
    pub min_query_len: usize,
    /// Quiet period after the last keystroke before searching
    pub debounce: Duration,
    /// Requested page size; a full page implies more pages exist
    pub page_size: usize,
    /// Grace period between blur and panel close, so an in-flight press
    /// on an option can still land
    pub blur_grace: Duration,
    /// Whether selecting an option resets the query (one-shot lookup) or
    /// only closes the panel (the caller shows the selection elsewhere)
    pub clear_on_select: bool,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            debounce: Duration::from_millis(300),
            page_size: 10,
            blur_grace: Duration::from_millis(100),
            clear_on_select: true,
        }
    }
}

/// Typeahead state
pub struct TypeaheadState {
    config: TypeaheadConfig,
    /// Current query text, mirrored from the input field on every keystroke
    query: String,
    debouncer: Debouncer,
    /// Whether the suggestion panel is visible
    open: bool,
    /// Whether a fetch is in flight for the current request id
    loading: bool,
    /// Options fetched so far for the active query (all pages, appended)
    options: Vec<SearchOption>,
    /// Highlighted index into `options`, if any
    highlight: Option<usize>,
    /// The most recent selection
    selected: Option<SearchOption>,
    /// Last fetched page number for the active query (0 = none yet)
    page: u32,
    has_more: bool,
    total_count: Option<u64>,
    /// Current request ID, incremented for each issued fetch.
    /// Responses tagged with an older id are discarded.
    request_id: u64,
    /// Trimmed query the current options belong to; None after a failure so
    /// retyping the same text retries
    active_query: Option<String>,
    /// Pending blur-close deadline
    close_deadline: Option<Instant>,
    /// Channel to send requests to the worker thread
    request_tx: Option<Sender<SearchRequest>>,
    /// Channel to receive responses from the worker thread
    response_rx: Option<Receiver<SearchResponse>>,
}

impl TypeaheadState {
    /// Create a new TypeaheadState without a worker attached
    pub fn new(config: TypeaheadConfig) -> Self {
        let debouncer = Debouncer::new(config.debounce);
        Self {
            config,
            query: String::new(),
            debouncer,
            open: false,
            loading: false,
            options: Vec::new(),
            highlight: None,
            selected: None,
            page: 0,
            has_more: false,
            total_count: None,
            request_id: 0,
            active_query: None,
            close_deadline: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Create a TypeaheadState backed by a worker thread over `provider`
    ///
    /// The worker exits when this state is dropped (its request sender goes
    /// away), and any response resolving after that is simply never applied.
    pub fn with_provider<P: SearchProvider>(config: TypeaheadConfig, provider: P) -> Self {
        let mut state = Self::new(config);
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(provider, request_rx, response_tx);
        state.set_channels(request_tx, response_rx);
        state
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    // --- query edits -----------------------------------------------------

    /// Record a query edit and (re)schedule the debounced search
    ///
    /// Clearing the text closes the panel and discards all fetched options
    /// immediately, without waiting for the debounce.
    pub fn on_query_changed(&mut self, text: &str, now: Instant) {
        if text == self.query {
            return;
        }
        self.query = text.to_string();

        if self.query.trim().is_empty() {
            self.debouncer.cancel();
            self.invalidate_in_flight();
            self.discard_results();
            self.loading = false;
            self.open = false;
            self.active_query = None;
            return;
        }

        self.debouncer.schedule(now);
    }

    /// Advance time: fire a due debounce, apply an elapsed blur-close
    /// deadline, and drain worker responses
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.poll(now) {
            self.fire_search();
        }

        if let Some(deadline) = self.close_deadline
            && now >= deadline
        {
            self.close_deadline = None;
            self.open = false;
        }

        self.drain_responses();
    }

    /// Time until the nearest pending deadline (debounce or blur-close)
    ///
    /// Drives the event-loop poll timeout.
    pub fn time_until_deadline(&self, now: Instant) -> Option<Duration> {
        let debounce = self.debouncer.time_until(now);
        let close = self
            .close_deadline
            .map(|d| d.saturating_duration_since(now));
        match (debounce, close) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }

    /// The debounce elapsed: validate the query and issue a page-1 fetch
    fn fire_search(&mut self) {
        let term = self.query.trim().to_string();

        if term.chars().count() < self.config.min_query_len {
            self.invalidate_in_flight();
            self.discard_results();
            self.loading = false;
            self.open = false;
            self.active_query = None;
            return;
        }

        // Unchanged query: reopen cached results instead of refetching
        if self.active_query.as_deref() == Some(term.as_str()) {
            if !self.options.is_empty() {
                self.open = true;
            }
            return;
        }

        self.issue_fetch(term, 1);
    }

    /// Fetch the next page for the unchanged active query, appending results
    ///
    /// Only ever triggered by an explicit user request.
    pub fn load_more(&mut self) {
        if !self.has_more || self.loading {
            return;
        }
        let Some(term) = self.active_query.clone() else {
            return;
        };
        self.issue_fetch(term, self.page + 1);
    }

    fn issue_fetch(&mut self, term: String, page: u32) {
        self.request_id += 1;
        self.loading = true;
        self.open = true;
        self.page = page;
        self.active_query = Some(term.clone());

        let request = SearchRequest {
            query: term,
            page,
            request_id: self.request_id,
        };

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());
        if !sent {
            // No worker to serve the fetch; same degradation as a failure
            log::debug!("search request {} could not be sent", self.request_id);
            self.apply_failure();
        }
    }

    // --- responses -------------------------------------------------------

    fn drain_responses(&mut self) {
        let mut pending = Vec::new();
        if let Some(rx) = &self.response_rx {
            while let Ok(response) = rx.try_recv() {
                pending.push(response);
            }
        }
        for response in pending {
            self.apply_response(response);
        }
    }

    /// Apply one worker response, discarding it if it is stale
    pub fn apply_response(&mut self, response: SearchResponse) {
        match response {
            SearchResponse::Page {
                request_id,
                page,
                result,
            } => {
                if request_id != self.request_id {
                    log::debug!(
                        "dropping stale page for request {} (current {})",
                        request_id,
                        self.request_id
                    );
                    return;
                }
                self.loading = false;

                if page <= 1 {
                    self.options = result.items;
                    self.highlight = None;
                } else {
                    self.options.extend(result.items);
                }

                if result.total_count.is_some() {
                    self.total_count = result.total_count;
                } else if page <= 1 {
                    self.total_count = None;
                }

                self.page = page.max(1);
                // Page-level signal from the provider (full page implies more),
                // or a known total that exceeds everything fetched so far
                self.has_more = result.has_more
                    || self
                        .total_count
                        .is_some_and(|total| total as usize > self.options.len());
                self.open = true;

                if let Some(h) = self.highlight
                    && h >= self.options.len()
                {
                    self.highlight = self.options.len().checked_sub(1);
                }
            }
            SearchResponse::Failed { request_id } => {
                if request_id != self.request_id {
                    log::debug!("dropping stale failure for request {}", request_id);
                    return;
                }
                self.apply_failure();
            }
        }
    }

    /// Degrade to the idle-empty state; the panel stays visible showing the
    /// no-results row, and nothing is surfaced to the caller
    fn apply_failure(&mut self) {
        self.loading = false;
        self.discard_results();
        self.active_query = None;
    }

    // --- keyboard --------------------------------------------------------

    /// Move the highlight down one option, clamped to the last one
    ///
    /// Opens the panel when closed and cached options exist.
    pub fn move_highlight_down(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.open = true;
        self.highlight = Some(match self.highlight {
            Some(h) => (h + 1).min(self.options.len() - 1),
            None => 0,
        });
    }

    /// Move the highlight up one option, clamped to the first one
    pub fn move_highlight_up(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.open = true;
        self.highlight = Some(match self.highlight {
            Some(h) => h.saturating_sub(1),
            None => 0,
        });
    }

    /// Select the highlighted option (Enter)
    pub fn select_highlighted(&mut self) -> Option<SearchOption> {
        if !self.open {
            return None;
        }
        let index = self.highlight?;
        self.select_option(index)
    }

    /// Close the panel without touching the query or the fetched options
    pub fn escape(&mut self) {
        self.open = false;
        self.close_deadline = None;
    }

    // --- pointer ---------------------------------------------------------

    /// Pointer moved over an option: track it as the highlight
    pub fn hover_option(&mut self, index: usize) {
        if index < self.options.len() {
            self.highlight = Some(index);
        }
    }

    /// Pointer pressed on an option: commit the selection on the press phase
    ///
    /// Cancels a pending blur-close first, so a blur that raced ahead of the
    /// press cannot hide the option before the press lands.
    pub fn press_option(&mut self, index: usize) -> Option<SearchOption> {
        self.close_deadline = None;
        self.select_option(index)
    }

    /// Input lost focus: close the panel after the grace delay
    pub fn blur(&mut self, now: Instant) {
        if self.open {
            self.close_deadline = Some(now + self.config.blur_grace);
        }
    }

    /// Input regained focus: reopen cached results without refetching
    pub fn focus(&mut self) {
        self.close_deadline = None;
        if !self.options.is_empty() {
            self.open = true;
        }
    }

    // --- selection and clearing ------------------------------------------

    /// Select the option at `index`, reporting it exactly once
    ///
    /// Per the configured policy this either resets the query and results
    /// (one-shot lookup) or only closes the panel.
    pub fn select_option(&mut self, index: usize) -> Option<SearchOption> {
        let option = self.options.get(index)?.clone();
        self.selected = Some(option.clone());

        self.debouncer.cancel();
        self.close_deadline = None;
        self.invalidate_in_flight();
        self.loading = false;
        self.open = false;

        if self.config.clear_on_select {
            self.query.clear();
            self.discard_results();
            self.active_query = None;
        }

        Some(option)
    }

    /// Explicit clear ("x" control): back to the initial state
    ///
    /// Never reports a selection, and no pending timer or stale fetch can
    /// mutate state afterwards.
    pub fn clear(&mut self) {
        self.query.clear();
        self.debouncer.cancel();
        self.close_deadline = None;
        self.invalidate_in_flight();
        self.discard_results();
        self.loading = false;
        self.open = false;
        self.active_query = None;
    }

    fn discard_results(&mut self) {
        self.options.clear();
        self.highlight = None;
        self.has_more = false;
        self.total_count = None;
        self.page = 0;
    }

    /// Bump the request id so any in-flight response is dropped as stale
    fn invalidate_in_flight(&mut self) {
        self.request_id += 1;
    }

    // --- accessors -------------------------------------------------------

    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn options(&self) -> &[SearchOption] {
        &self.options
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn selected(&self) -> Option<&SearchOption> {
        self.selected.as_ref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    #[cfg(test)]
    pub(crate) fn current_request_id(&self) -> u64 {
        self.request_id
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

#[cfg(test)]
#[path = "property_tests.rs"]
mod property_tests;
