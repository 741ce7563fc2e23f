//! Tests for diagnostic routing: the default `tracing` sink and injected sinks.

use std::io;
use std::sync::Arc;

use lens_groups::diagnostics::{CollectingSink, DiagnosticCategory, SilentSink};
use lens_groups::{LensGroup, LensGroupDescriptor};
use parking_lot::Mutex;
use serde_json::json;

// =============================================================================
// Captured tracing output
// =============================================================================

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_tracing<F: FnOnce()>(body: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, body);
    captured.contents()
}

#[test]
fn test_usage_warnings_go_to_tracing_by_default() {
    let output = with_captured_tracing(|| {
        let group = LensGroup::create(LensGroupDescriptor::new(["id"])).unwrap();
        let _ = group.view("size", &json!({}));
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("`size` is not on the lens group"));
    assert!(output.contains("operation=LensGroup::view"));
}

#[test]
fn test_construction_errors_go_to_tracing_by_default() {
    let output = with_captured_tracing(|| {
        let result = LensGroup::create(LensGroupDescriptor::new(["id"]).with_extra_props(true));
        assert!(result.is_err());
    });

    assert!(output.contains("ERROR"));
    assert!(output.contains("only partial validation info provided"));
}

#[test]
fn test_silent_sink_drops_everything() {
    let output = with_captured_tracing(|| {
        let group =
            LensGroup::create_with_sink(LensGroupDescriptor::new(["id"]), Arc::new(SilentSink))
                .unwrap();
        let _ = group.set("id", json!(1), &json!("not a record"));
    });

    assert!(output.is_empty());
}

#[test]
fn test_collecting_sink_records_operation_and_category() {
    let sink = Arc::new(CollectingSink::new());
    let group =
        LensGroup::create_with_sink(LensGroupDescriptor::new(["id"]), sink.clone()).unwrap();

    let _ = group.view_target(&json!(42));
    let _ = group.clone_of(&json!([1]));

    let diagnostics = sink.take();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].operation, "LensGroup::view_target");
    assert_eq!(diagnostics[1].operation, "LensGroup::clone_of");
    assert!(diagnostics
        .iter()
        .all(|diagnostic| diagnostic.category == DiagnosticCategory::Usage));
    assert!(sink.is_empty());
}
