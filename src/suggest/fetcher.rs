//! Background fetching with newest-wins sequencing
//!
//! Every request gets a monotonically increasing sequence number. A slow
//! response that completes after a newer query has been issued is dropped
//! instead of overwriting fresher results.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::error::Result;
use crate::logging;
use crate::suggest::client::SuggestSource;

/// Pure sequencing logic for out-of-order completions.
///
/// `issue` hands out sequence numbers, `admit` accepts a completion only if
/// it is newer than every previously admitted one, and `cancel_pending`
/// marks everything currently in flight as stale.
#[derive(Debug, Default)]
pub struct ResponseGate {
    issued: u64,
    applied: u64,
}

impl ResponseGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next sequence number for an outgoing request
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Accept a completed sequence if no newer one has been admitted
    pub fn admit(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }

    /// Mark all in-flight sequences stale
    pub fn cancel_pending(&mut self) {
        self.applied = self.issued;
    }
}

/// A completed fetch, tagged with its request sequence
struct FetchDone {
    seq: u64,
    result: Result<Vec<String>>,
}

/// Runs suggestion fetches on background threads for one field.
///
/// `poll` is called from the UI loop each frame; it drains completions and
/// returns only the outcome the gate admits.
pub struct SuggestFetcher {
    field: String,
    source: Arc<dyn SuggestSource>,
    tx: Sender<FetchDone>,
    rx: Receiver<FetchDone>,
    gate: ResponseGate,
    pending: usize,
}

impl SuggestFetcher {
    /// Create a fetcher for a field backed by the given source.
    /// `field` is a tag used in log entries.
    pub fn new(field: impl Into<String>, source: Arc<dyn SuggestSource>) -> Self {
        let (tx, rx) = channel();
        Self {
            field: field.into(),
            source,
            tx,
            rx,
            gate: ResponseGate::new(),
            pending: 0,
        }
    }

    /// Issue one request carrying the query's current value
    pub fn request(&mut self, query: &str) {
        let seq = self.gate.issue();
        self.pending += 1;
        logging::log_query_issued(&self.field, seq, query);

        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        let query = query.to_string();

        thread::spawn(move || {
            let result = source.suggest(&query);
            // Receiver gone means the app is shutting down
            let _ = tx.send(FetchDone { seq, result });
        });
    }

    /// Mark all in-flight requests stale; their completions will be dropped
    pub fn cancel_pending(&mut self) {
        self.gate.cancel_pending();
    }

    /// Drain completed fetches and return the newest admitted outcome, if any
    pub fn poll(&mut self) -> Option<Result<Vec<String>>> {
        let mut newest = None;

        while let Ok(done) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);

            if self.gate.admit(done.seq) {
                match &done.result {
                    Ok(names) => {
                        logging::log_response_applied(&self.field, done.seq, names.len())
                    }
                    Err(e) => logging::log_fetch_error(&self.field, done.seq, &e.to_string()),
                }
                newest = Some(done.result);
            } else {
                logging::log_stale_dropped(&self.field, done.seq);
            }
        }

        newest
    }

    /// Whether any request has not completed yet
    pub fn is_fetching(&self) -> bool {
        self.pending > 0
    }
}
