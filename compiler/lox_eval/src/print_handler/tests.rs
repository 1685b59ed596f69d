use super::*;

#[test]
fn buffer_captures_lines() {
    let handler = buffer_handler();
    handler.println("one");
    handler.println("two");
    assert_eq!(handler.output(), "one\ntwo\n");
}

#[test]
fn buffer_clear_empties_output() {
    let handler = buffer_handler();
    handler.println("one");
    handler.clear();
    assert!(handler.output().is_empty());
}

#[test]
fn silent_discards_output() {
    let handler = silent_handler();
    handler.println("gone");
    handler.clear();
    assert_eq!(handler.output(), "");
}

#[test]
fn stdout_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.output(), "");
}

#[test]
fn clones_share_one_buffer() {
    let handler = buffer_handler();
    let host_side = Arc::clone(&handler);
    handler.println("seen by host");
    assert_eq!(host_side.output(), "seen by host\n");
}
