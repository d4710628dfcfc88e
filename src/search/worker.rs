//! Search worker thread
//!
//! Runs provider fetches in a background thread so the UI never blocks on
//! HTTP. Receives requests via channel and sends pages back tagged with the
//! request id they were issued for; the typeahead drops responses whose id
//! no longer matches (stale-response guard).

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::option::ResultPage;
use super::provider::SearchProvider;

/// Request messages sent to the search worker thread
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Trimmed query text this fetch is for
    pub query: String,
    /// 1-based page number
    pub page: u32,
    /// Unique ID for this request, used to filter stale responses
    pub request_id: u64,
}

/// Response messages received from the search worker thread
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    /// One fetched page for the request
    Page {
        request_id: u64,
        /// Page number the result belongs to (1 replaces, >1 appends)
        page: u32,
        result: ResultPage,
    },
    /// The fetch failed; absorbed as an empty result set downstream
    Failed { request_id: u64 },
}

/// Spawn the search worker thread
///
/// The worker exits when the request channel is closed (the typeahead
/// dropping its sender is the unmount signal). Send failures on the response
/// channel are ignored for the same reason.
pub fn spawn_worker<P: SearchProvider>(
    provider: P,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(provider, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
///
/// Queued requests are coalesced latest-wins: if several requests piled up
/// while a fetch was running, only the newest is worth issuing, since the
/// typeahead will discard every older response anyway.
fn worker_loop<P: SearchProvider>(
    provider: P,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let request = drain_to_latest(&request_rx, request);
        let request_id = request.request_id;

        match provider.fetch(&request.query, request.page) {
            Ok(result) => {
                if response_tx
                    .send(SearchResponse::Page {
                        request_id,
                        page: request.page,
                        result,
                    })
                    .is_err()
                {
                    // Main thread disconnected, stop working
                    return;
                }
            }
            Err(e) => {
                log::debug!("search for {:?} failed: {}", request.query, e);
                if response_tx
                    .send(SearchResponse::Failed { request_id })
                    .is_err()
                {
                    return;
                }
            }
        }
    }

    log::debug!("search worker thread shutting down");
}

/// Replace a pending request with the newest one waiting in the channel
fn drain_to_latest(request_rx: &Receiver<SearchRequest>, mut request: SearchRequest) -> SearchRequest {
    loop {
        match request_rx.try_recv() {
            Ok(newer) => {
                log::debug!(
                    "request {} superseded by {} before fetch",
                    request.request_id,
                    newer.request_id
                );
                request = newer;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return request,
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
