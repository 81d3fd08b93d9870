//! Acceptance tests: the "view full" action shows a truncated record in
//! full in the alert overlay.

use crate::model::{LogLevel, LogRecord};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

const TRACEBACK: &str = "Traceback (most recent call last):\n  \
                         File \"job.py\", line 3, in <module>\n    \
                         run()\n\
                         ValueError: bad input\n\
                         exit status 1";

fn traceback_harness() -> AcceptanceTestHarness {
    let records = vec![
        LogRecord::new(LogLevel::Info, "starting"),
        LogRecord::structured(LogLevel::Error, TRACEBACK),
    ];
    let mut harness =
        AcceptanceTestHarness::with_size(records, 60, 20, 3).expect("Should create harness");
    harness.draw();
    harness
}

#[test]
fn enter_on_truncated_cell_shows_full_text() {
    // GIVEN: a selected cell clipping a 5-line traceback at 3 rows
    let mut harness = traceback_harness();
    harness.send_key(KeyCode::Char('j'));

    // WHEN: the user presses Enter
    harness.send_key(KeyCode::Enter);

    // THEN: the alert holds the untruncated, preformatted text
    let request = harness.state().alert.request().expect("alert should be open");
    assert_eq!(request.message, TRACEBACK);
    assert!(request.preformatted);

    let screen = harness.render_to_string();
    assert!(screen.contains("Full Message"), "screen:\n{screen}");
    assert!(screen.contains("exit status 1"), "last line is visible in the alert");
}

#[test]
fn v_is_an_alias_for_view_full() {
    let mut harness = traceback_harness();
    harness.send_key_with_mods(KeyCode::Char('G'), KeyModifiers::SHIFT);
    harness.send_key(KeyCode::Char('v'));

    assert!(harness.state().alert.is_visible());
}

#[test]
fn enter_on_fitting_cell_shows_nothing() {
    let mut harness = traceback_harness();

    harness.send_key(KeyCode::Enter);

    assert!(!harness.state().alert.is_visible());
}

#[test]
fn clicking_banner_shows_full_text_and_selects_cell() {
    let mut harness = traceback_harness();
    let banner = harness.banner_of(1).expect("traceback cell has a banner");

    harness.click_at(banner.x + 1, banner.y);

    assert_eq!(harness.state().selected(), 1);
    let request = harness.state().alert.request().expect("alert should be open");
    assert_eq!(request.message, TRACEBACK);
}

#[test]
fn clicking_text_of_truncated_cell_only_selects() {
    let mut harness = traceback_harness();
    let banner = harness.banner_of(1).expect("traceback cell has a banner");

    // First row of the cell, above the banner row
    harness.click_at(banner.x, banner.y - 2);

    assert_eq!(harness.state().selected(), 1);
    assert!(!harness.state().alert.is_visible());
}

#[test]
fn escape_closes_alert_and_app_keeps_running() {
    let mut harness = traceback_harness();
    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Enter]);

    let quit = harness.send_key(KeyCode::Esc);

    assert!(!quit);
    assert!(harness.is_running());
    assert!(!harness.state().alert.is_visible());
}

#[test]
fn alert_swallows_selection_keys() {
    let mut harness = traceback_harness();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);

    harness.send_key(KeyCode::Char('k'));

    assert_eq!(harness.state().selected(), 1, "k scrolls the alert instead");
    assert!(harness.state().alert.is_visible());
}

#[test]
fn ctrl_c_quits_even_with_alert_open() {
    let mut harness = traceback_harness();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);

    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!harness.is_running());
}

#[test]
fn q_quits_when_no_alert_is_open() {
    let mut harness = traceback_harness();
    assert!(harness.send_key(KeyCode::Char('q')));
}
