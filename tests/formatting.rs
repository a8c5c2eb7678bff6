use std::io;
use std::sync::{Arc, Mutex};

use dungeon::formatter::{increment_turn, level_label, turn_count, TurnFormatter};
use dungeon::logging::{default_filter, setup_logging};
use pretty_assertions::assert_eq;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[test]
fn test_level_labels_are_aligned() {
    let levels = [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR];
    for level in levels {
        assert_eq!(level_label(&level).len(), 5, "{level} label is not five characters");
        assert_eq!(level_label(&level).trim(), level.to_string());
    }
}

#[test]
fn test_turn_counter_increments() {
    // Other tests in this binary may bump the counter too, so only check it grows.
    let before = turn_count();
    increment_turn();
    increment_turn();
    assert!(turn_count() >= before + 2);
}

#[test]
fn test_setup_logging_twice() {
    setup_logging(false);
    setup_logging(true);
    tracing::info!("still logging");
}

#[test]
fn test_default_filter_names_crate() {
    assert!(default_filter(false).ends_with("dungeon=info"));
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_formatter_line_layout() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = FmtSubscriber::builder()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .event_format(TurnFormatter)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let span = tracing::info_span!("turn", room = "a0");
        let _guard = span.enter();
        tracing::warn!(input = "ez", "Rejected move sequence");
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains(" 0x"), "missing turn counter: {output}");
    assert!(output.contains("  WARN turn{room=\"a0\"}: formatting: "), "{output}");
    assert!(output.contains("Rejected move sequence"), "{output}");
    assert!(output.contains("input=\"ez\""), "{output}");
    assert!(output.ends_with('\n'));
}
