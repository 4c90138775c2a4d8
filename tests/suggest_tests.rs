// Fetch sequencing behavior against scripted suggestion sources.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rosterbox::{RosterError, SuggestFetcher, SuggestSource};

/// Returns "<query> A" / "<query> B"; queries starting with "slow" are
/// delayed so a newer request can complete first.
struct ScriptedSource {
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl SuggestSource for ScriptedSource {
    fn suggest(&self, query: &str) -> rosterbox::Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if query.starts_with("slow") {
            thread::sleep(Duration::from_millis(150));
        }
        Ok(vec![format!("{} A", query), format!("{} B", query)])
    }
}

struct FailingSource;

impl SuggestSource for FailingSource {
    fn suggest(&self, _query: &str) -> rosterbox::Result<Vec<String>> {
        Err(RosterError::EndpointStatus {
            endpoint: "/search_student_name".to_string(),
            status: 500,
            body: "internal error".to_string(),
        })
    }
}

/// Poll the fetcher until it yields an admitted outcome or the timeout passes
fn poll_until(
    fetcher: &mut SuggestFetcher,
    timeout: Duration,
) -> Option<rosterbox::Result<Vec<String>>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(outcome) = fetcher.poll() {
            return Some(outcome);
        }
        if Instant::now() >= deadline {
            return None;
        }
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn single_request_applies_names_in_server_order() {
    let source = Arc::new(ScriptedSource::new());
    let mut fetcher = SuggestFetcher::new("student_name", Arc::clone(&source) as Arc<dyn SuggestSource>);

    fetcher.request("Ali");

    let outcome = poll_until(&mut fetcher, Duration::from_secs(2))
        .expect("fetch should complete")
        .expect("fetch should succeed");
    assert_eq!(outcome, vec!["Ali A".to_string(), "Ali B".to_string()]);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert!(!fetcher.is_fetching());
}

#[test]
fn stale_response_never_overwrites_newer_results() {
    let source = Arc::new(ScriptedSource::new());
    let mut fetcher = SuggestFetcher::new("student_name", Arc::clone(&source) as Arc<dyn SuggestSource>);

    // The first request is slow; the second completes first
    fetcher.request("slow Ali");
    fetcher.request("Alic");

    let outcome = poll_until(&mut fetcher, Duration::from_secs(2))
        .expect("fast fetch should complete")
        .expect("fast fetch should succeed");
    assert_eq!(outcome, vec!["Alic A".to_string(), "Alic B".to_string()]);

    // The slow completion arrives later and must be dropped, not applied
    assert!(poll_until(&mut fetcher, Duration::from_millis(400)).is_none());
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn cancelled_requests_are_never_applied() {
    let source = Arc::new(ScriptedSource::new());
    let mut fetcher = SuggestFetcher::new("student_name", Arc::clone(&source) as Arc<dyn SuggestSource>);

    fetcher.request("slow Bob");
    fetcher.cancel_pending();

    assert!(poll_until(&mut fetcher, Duration::from_millis(500)).is_none());
    // The completion was drained and dropped, not left pending
    assert!(!fetcher.is_fetching());

    // A request issued after the cancel still goes through
    fetcher.request("Bob");
    let outcome = poll_until(&mut fetcher, Duration::from_secs(2))
        .expect("fetch should complete")
        .expect("fetch should succeed");
    assert_eq!(outcome, vec!["Bob A".to_string(), "Bob B".to_string()]);
}

#[test]
fn failed_fetch_surfaces_recoverable_error() {
    let mut fetcher = SuggestFetcher::new("student_name", Arc::new(FailingSource));

    fetcher.request("Ali");

    let outcome = poll_until(&mut fetcher, Duration::from_secs(2)).expect("fetch should complete");
    let err = outcome.expect_err("fetch should fail");
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("500"));
}
