#![cfg(feature = "in_memory")]

use std::time::Duration;

use loadbar::{
    CancelToken, FixedDelay, InMemoryTerm, LoadConfig, SequenceRunner, SequenceStyle,
};
use pretty_assertions::assert_eq;

fn runner(config: LoadConfig, term: &InMemoryTerm) -> SequenceRunner {
    SequenceRunner::new(config.with_completion_hold(Duration::ZERO))
        .with_term(Box::new(term.clone()))
}

#[test]
fn bar_run_end_to_end() {
    let in_mem = InMemoryTerm::new(10, 100);
    let config = LoadConfig::bar(25)
        .with_loading_message("TEST")
        .with_complete_message("COMPLETE")
        .with_delay_bounds(Duration::from_millis(1), Duration::from_millis(5));

    runner(config, &in_mem).run().unwrap();

    assert_eq!(
        in_mem.contents(),
        format!("TEST\n{} 25/25 (100%)\nCOMPLETE", "█".repeat(40))
    );
}

#[test]
fn bar_run_with_label_and_default_messages() {
    let in_mem = InMemoryTerm::new(10, 100);
    let config = LoadConfig::bar(4).with_label("Unpacking");

    runner(config, &in_mem)
        .with_delay_source(Box::new(FixedDelay(Duration::ZERO)))
        .run()
        .unwrap();

    assert_eq!(
        in_mem.contents(),
        format!("Loading...\nUnpacking: {} 4/4 (100%)\nDone!", "█".repeat(40))
    );
}

#[test]
fn text_run_end_to_end() {
    let in_mem = InMemoryTerm::new(10, 80);
    let config = LoadConfig::text(5).with_step_delay(Duration::from_millis(3));

    runner(config, &in_mem).run().unwrap();

    assert_eq!(in_mem.contents(), "Loading...\nDone!");
}

#[test]
fn text_run_honors_custom_ellipsis() {
    let in_mem = InMemoryTerm::new(10, 80);
    let config = LoadConfig::text(2)
        .with_loading_message("Syncing")
        .with_step_delay(Duration::ZERO);

    runner(config, &in_mem)
        .with_style(SequenceStyle::default().ellipsis('*', 4))
        .run()
        .unwrap();

    assert_eq!(in_mem.contents(), "Syncing****\nDone!");
}

#[test]
fn cancelled_bar_run_still_prints_completion() {
    let in_mem = InMemoryTerm::new(10, 100);
    let cancel = CancelToken::new();
    cancel.cancel();

    let config = LoadConfig::bar(50).with_step_delay(Duration::ZERO);
    runner(config, &in_mem)
        .with_cancel_token(cancel)
        .run()
        .unwrap();

    assert_eq!(in_mem.contents(), "Loading...\n\nDone!");
}

#[test]
fn intermediate_bar_frames_overwrite_each_other() {
    let in_mem = InMemoryTerm::new(10, 100);
    let config = LoadConfig::bar(2)
        .with_loading_message("copy")
        .with_step_delay(Duration::ZERO);

    runner(config, &in_mem).run().unwrap();

    // only the final frame survives on the bar row
    let contents = in_mem.contents();
    assert_eq!(contents.matches("2/2").count(), 1);
    assert!(!contents.contains("1/2"));
}
