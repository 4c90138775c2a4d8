// Autocomplete field state transitions, exercised without a window.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rosterbox::gui::autocomplete::AutocompleteField;
use rosterbox::SuggestSource;

struct CountingSource {
    calls: AtomicUsize,
}

impl CountingSource {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl SuggestSource for CountingSource {
    fn suggest(&self, query: &str) -> rosterbox::Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            format!("{}ce Carter", query),
            format!("{}stair Brown", query),
        ])
    }
}

/// Pump completed fetches into the field until its list fills or time runs out
fn pump(field: &mut AutocompleteField, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    while field.suggestions().is_empty() && Instant::now() < deadline {
        field.process_messages();
        thread::sleep(Duration::from_millis(5));
    }
}

fn new_field(source: Arc<CountingSource>, max: usize) -> AutocompleteField {
    AutocompleteField::new("Student name", "student_name", source, max)
}

#[test]
fn whitespace_input_clears_without_a_request() {
    let source = Arc::new(CountingSource::new());
    let mut field = new_field(Arc::clone(&source), 8);

    field.value = "   ".to_string();
    field.edited();

    assert!(field.suggestions().is_empty());
    assert!(!field.is_fetching());
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn edit_issues_one_request_and_renders_rows_in_order() {
    let source = Arc::new(CountingSource::new());
    let mut field = new_field(Arc::clone(&source), 8);

    field.value = "Ali".to_string();
    field.edited();
    pump(&mut field, Duration::from_secs(2));

    assert_eq!(
        field.suggestions(),
        &["Alice Carter".to_string(), "Alistair Brown".to_string()]
    );
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn choosing_a_row_copies_the_name_and_empties_the_list() {
    let source = Arc::new(CountingSource::new());
    let mut field = new_field(Arc::clone(&source), 8);

    field.value = "Ali".to_string();
    field.edited();
    pump(&mut field, Duration::from_secs(2));
    assert!(!field.suggestions().is_empty());

    let chosen = field.suggestions()[0].clone();
    field.choose(&chosen);

    assert_eq!(field.value, "Alice Carter");
    assert!(field.suggestions().is_empty());
}

#[test]
fn suggestion_rows_are_capped_at_the_configured_maximum() {
    let source = Arc::new(CountingSource::new());
    let mut field = new_field(source, 1);

    field.value = "Ali".to_string();
    field.edited();
    pump(&mut field, Duration::from_secs(2));

    assert_eq!(field.suggestions(), &["Alice Carter".to_string()]);
}

#[test]
fn clearing_the_field_discards_a_pending_fetch() {
    let source = Arc::new(CountingSource::new());
    let mut field = new_field(source, 8);

    field.value = "Ali".to_string();
    field.edited();

    // The user deletes the text before the response lands
    field.value = String::new();
    field.edited();

    // Give the stale completion time to arrive; it must be dropped
    let deadline = Instant::now() + Duration::from_millis(300);
    while Instant::now() < deadline {
        field.process_messages();
        thread::sleep(Duration::from_millis(5));
    }
    assert!(field.suggestions().is_empty());
}
