#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Instant;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::search::{ResultPage, SearchOption, SearchRequest, SearchResponse};
    use crate::typeahead::{TypeaheadConfig, TypeaheadState};

    /// The test's ends of the worker channels; tests play the worker's role
    pub struct SearchChannels {
        pub requests: Receiver<SearchRequest>,
        pub responses: Sender<SearchResponse>,
    }

    pub fn wired_app(stay: bool) -> (App, SearchChannels) {
        wired_app_with(TypeaheadConfig::default(), stay)
    }

    pub fn wired_app_with(config: TypeaheadConfig, stay: bool) -> (App, SearchChannels) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut typeahead = TypeaheadState::new(config);
        typeahead.set_channels(request_tx, response_rx);
        (
            App::new(typeahead, stay),
            SearchChannels {
                requests: request_rx,
                responses: response_tx,
            },
        )
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn options(count: usize) -> Vec<SearchOption> {
        (1..=count)
            .map(|i| SearchOption::new(format!("{i}"), format!("row {i:02}")))
            .collect()
    }

    pub fn page(count: usize, total_count: Option<u64>) -> ResultPage {
        ResultPage {
            items: options(count),
            has_more: count == 10,
            total_count,
        }
    }

    /// Type `text` into the input and let the debounce elapse
    ///
    /// Returns the worker request that fired and the instant it fired at.
    pub fn type_and_fire(
        app: &mut App,
        channels: &SearchChannels,
        text: &str,
        start: Instant,
    ) -> (SearchRequest, Instant) {
        app.textarea.insert_str(text);
        app.sync_query(start);
        let fired = start + app.typeahead.config().debounce;
        app.tick(fired);
        (channels.requests.recv().expect("search request"), fired)
    }

    /// Answer `request` with a page of results and apply it
    pub fn respond_page(
        app: &mut App,
        channels: &SearchChannels,
        request: &SearchRequest,
        result: ResultPage,
        now: Instant,
    ) {
        channels
            .responses
            .send(SearchResponse::Page {
                request_id: request.request_id,
                page: request.page,
                result,
            })
            .expect("send response");
        app.tick(now);
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| app.render(frame)).expect("draw");
        terminal.backend().to_string()
    }
}
