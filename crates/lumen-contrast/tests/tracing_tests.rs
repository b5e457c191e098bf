#![forbid(unsafe_code)]

//! Tracing instrumentation tests.
//!
//! Spans and events enabled:
//!   cargo test -p lumen-contrast --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p lumen-contrast --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use lumen_contrast::{Rgb, adjust_for_contrast, hex};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span or event with its fields.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Captured {
    name: String,
    level: tracing::Level,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records spans and events.
struct Capture {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

/// Handle to read what was captured.
struct CaptureHandle {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<Captured> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }
}

/// Visitor that extracts fields as strings.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(Captured {
            name: attrs.metadata().name().to_string(),
            level: *attrs.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            name: event.metadata().name().to_string(),
            level: *event.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

/// Run a closure under a capturing subscriber.
fn with_capture<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        spans: spans.clone(),
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn adjust_opens_span_with_inputs() {
    let handle = with_capture(|| {
        let _ = adjust_for_contrast(Rgb::gray(0x44), Rgb::gray(0x12), 4.5);
    });
    let spans = handle.spans();
    let span = spans
        .iter()
        .find(|s| s.name == "adjust_for_contrast")
        .expect("adjust span");
    assert_eq!(span.level, tracing::Level::DEBUG);
    assert_eq!(span.fields.get("fg").map(String::as_str), Some("#444444"));
    assert_eq!(span.fields.get("bg").map(String::as_str), Some("#121212"));
    assert_eq!(span.fields.get("direction").map(String::as_str), Some("lighten"));
}

#[test]
#[cfg(feature = "tracing")]
fn non_convergence_is_logged_at_debug() {
    let handle = with_capture(|| {
        let _ = adjust_for_contrast(Rgb::BLACK, Rgb::BLACK, 4.5);
    });
    let events = handle.events();
    let event = events
        .iter()
        .find(|e| e.level == tracing::Level::DEBUG)
        .expect("best-effort event");
    assert_eq!(event.fields.get("iterations").map(String::as_str), Some("100"));
    assert_eq!(event.fields.get("result").map(String::as_str), Some("#646464"));
}

#[test]
#[cfg(feature = "tracing")]
fn invalid_text_background_warns() {
    let handle = with_capture(|| {
        assert_eq!(hex::pick_text_color("#zz"), "#000000");
    });
    let events = handle.events();
    assert!(
        events.iter().any(|e| e.level == tracing::Level::WARN),
        "expected a warning, got {events:?}"
    );
}

#[test]
fn zero_overhead_without_feature() {
    let handle = with_capture(|| {
        let _ = adjust_for_contrast(Rgb::BLACK, Rgb::BLACK, 4.5);
        let _ = hex::pick_text_color("bogus");
    });
    if cfg!(feature = "tracing") {
        assert!(!handle.spans().is_empty());
    } else {
        assert!(handle.spans().is_empty());
        assert!(handle.events().is_empty());
    }
}
