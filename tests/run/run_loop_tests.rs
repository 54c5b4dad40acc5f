//! Run loop tests driven by scripted keys

#[path = "../common/mod.rs"]
mod common;

use common::{CountingScreen, ScriptedKeys, labels, strip_ansi};
use conmenu_core::{ErrorKind, MenuState, MenuWidget};
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

fn counting(hits: &Rc<Cell<u32>>) -> impl Fn() + 'static {
    let hits = hits.clone();
    move || hits.set(hits.get() + 1)
}

#[test]
fn test_navigate_to_exit_and_leave() {
    let foo = Rc::new(Cell::new(0));
    let bar = Rc::new(Cell::new(0));
    let mut menu = MenuWidget::new();
    menu.add_field("Foo", counting(&foo));
    menu.add_field("Bar", counting(&bar));
    let before = labels(&menu);

    let mut keys = ScriptedKeys::new("ssq");
    let mut screen = CountingScreen::default();
    let mut out = Vec::new();
    menu.run_with(&mut keys, &mut screen, &mut out).unwrap();

    assert_eq!(keys.remaining(), 0);
    assert_eq!(labels(&menu), before);
    assert_eq!(menu.state(), MenuState::Idle);
    assert_eq!(menu.cursor(), Some(0));
    assert_eq!((foo.get(), bar.get()), (0, 0));
    assert_eq!(screen.clears, 3);
}

#[test]
fn test_exit_entry_exists_only_while_running() {
    let mut menu = MenuWidget::new();
    menu.add_field("Foo", || {});
    menu.add_field("Bar", || {});

    let mut keys = ScriptedKeys::new("ssq");
    let mut out = Vec::new();
    menu.run_with(&mut keys, CountingScreen::default(), &mut out).unwrap();

    let frames = strip_ansi(&String::from_utf8(out).unwrap());
    assert!(frames.contains("Exit"));
    assert!(frames.contains("Press w and s to move up and down the menu."));
    assert!(frames.contains("Press q to select an item."));
    assert!(!menu.has_field("Exit"));
    assert_eq!(menu.len(), 2);
}

/// Boxed entry rows of the first frame, between the heading border and the
/// closing border
fn first_frame_rows(frames: &str) -> Vec<String> {
    let mut borders = 0;
    let mut rows = Vec::new();
    for line in frames.lines() {
        if line.starts_with('=') {
            borders += 1;
            if borders == 3 {
                break;
            }
        } else if borders == 2 {
            rows.push(line.to_string());
        }
    }
    rows
}

#[test]
fn test_run_adds_exactly_one_entry() {
    let mut menu = MenuWidget::new();
    menu.set_max_field_width(6).unwrap();
    menu.add_field("Foo", || {});
    menu.add_field("Bar", || {});
    let before = menu.len();

    let mut out = Vec::new();
    menu.run_with(ScriptedKeys::new("ssq"), CountingScreen::default(), &mut out).unwrap();

    let rows = first_frame_rows(&strip_ansi(&String::from_utf8(out).unwrap()));
    assert_eq!(rows.len(), before + 1);
    assert_eq!(rows, ["< Foo  >", "| Bar  |", "| Exit |"]);
    assert_eq!(menu.len(), before);
}

#[test]
fn test_run_on_empty_menu_adds_only_exit() {
    let mut menu = MenuWidget::new();
    menu.set_max_field_width(6).unwrap();

    let mut out = Vec::new();
    menu.run_with(ScriptedKeys::new("q"), CountingScreen::default(), &mut out).unwrap();

    let rows = first_frame_rows(&strip_ansi(&String::from_utf8(out).unwrap()));
    assert_eq!(rows, ["< Exit >"]);
    assert!(menu.is_empty());
}

#[test]
fn test_frames_show_cursor_progress() {
    let mut menu = MenuWidget::new();
    menu.set_max_field_width(6).unwrap();
    menu.add_field("Foo", || {});
    menu.add_field("Bar", || {});

    let mut out = Vec::new();
    menu.run_with(ScriptedKeys::new("ssq"), CountingScreen::default(), &mut out).unwrap();

    let frames = strip_ansi(&String::from_utf8(out).unwrap());
    let selected: Vec<&str> = frames.lines().filter(|line| line.starts_with('<')).collect();
    assert_eq!(selected, ["< Foo  >", "< Bar  >", "< Exit >"]);
}

#[test]
fn test_up_at_top_is_noop() {
    let foo = Rc::new(Cell::new(0));
    let mut menu = MenuWidget::new();
    menu.set_wait_after_action(false);
    menu.add_field("Foo", counting(&foo));
    menu.add_field("Bar", || {});

    // w at the top keeps the cursor on Foo, so q invokes Foo
    let mut keys = ScriptedKeys::new("wqsssq");
    menu.run_with(&mut keys, CountingScreen::default(), &mut Vec::new()).unwrap();

    assert_eq!(foo.get(), 1);
}

#[test]
fn test_down_at_bottom_is_noop() {
    let mut menu = MenuWidget::new();
    menu.add_field("Foo", || {});

    let mut keys = ScriptedKeys::new("sssssq");
    menu.run_with(&mut keys, CountingScreen::default(), &mut Vec::new()).unwrap();

    assert_eq!(keys.remaining(), 0);
}

#[test]
fn test_unbound_keys_are_ignored() {
    let foo = Rc::new(Cell::new(0));
    let mut menu = MenuWidget::new();
    menu.add_field("Foo", counting(&foo));

    let mut keys = ScriptedKeys::new("xyz\r sq");
    menu.run_with(&mut keys, CountingScreen::default(), &mut Vec::new()).unwrap();

    assert_eq!(foo.get(), 0);
    assert_eq!(keys.remaining(), 0);
}

#[test]
fn test_select_waits_for_one_key_after_action() {
    let foo = Rc::new(Cell::new(0));
    let mut menu = MenuWidget::new();
    menu.add_field("Foo", counting(&foo));

    // q invokes Foo, then 's' is swallowed by the wait; the next s/q exit
    let mut keys = ScriptedKeys::new("qssq");
    let mut screen = CountingScreen::default();
    menu.run_with(&mut keys, &mut screen, &mut Vec::new()).unwrap();

    assert_eq!(foo.get(), 1);
    assert_eq!(keys.reads, 4);
    // three frames plus one clear before the action runs
    assert_eq!(screen.clears, 4);
}

#[test]
fn test_select_without_wait_resumes_immediately() {
    let foo = Rc::new(Cell::new(0));
    let mut menu = MenuWidget::new();
    menu.set_wait_after_action(false);
    menu.add_field("Foo", counting(&foo));

    let mut keys = ScriptedKeys::new("qqsq");
    menu.run_with(&mut keys, CountingScreen::default(), &mut Vec::new()).unwrap();

    assert_eq!(foo.get(), 2);
    assert_eq!(keys.reads, 4);
}

#[test]
fn test_wait_swallows_bound_keys() {
    let foo = Rc::new(Cell::new(0));
    let mut menu = MenuWidget::new();
    menu.add_field("Foo", counting(&foo));

    // the q read during the wait must not trigger a second invocation
    let mut keys = ScriptedKeys::new("qqsq");
    menu.run_with(&mut keys, CountingScreen::default(), &mut Vec::new()).unwrap();

    assert_eq!(foo.get(), 1);
}

#[test]
fn test_empty_menu_only_offers_exit() {
    let mut menu = MenuWidget::new();

    let mut out = Vec::new();
    menu.run_with(ScriptedKeys::new("q"), CountingScreen::default(), &mut out).unwrap();

    assert!(menu.is_empty());
    assert_eq!(menu.cursor(), None);
    assert!(strip_ansi(&String::from_utf8(out).unwrap()).contains("Exit"));
}

#[test]
fn test_run_starts_from_first_entry() {
    let bar = Rc::new(Cell::new(0));
    let mut menu = MenuWidget::new();
    menu.set_wait_after_action(false);
    menu.add_field("Foo", || {});
    menu.add_field("Bar", counting(&bar));
    menu.handle_key('s');
    assert_eq!(menu.cursor(), Some(1));

    // starting from Foo, one s lands on Bar
    menu.run_with(ScriptedKeys::new("sqsq"), CountingScreen::default(), &mut Vec::new()).unwrap();

    assert_eq!(bar.get(), 1);
}

#[test]
fn test_custom_keybinds_drive_loop() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut menu = MenuWidget::new();
    menu.set_wait_after_action(false);
    menu.set_up_key('k');
    menu.set_down_key('j');
    menu.set_select_key('\r');
    for name in ["A", "B"] {
        let order = order.clone();
        menu.add_field(name, move || order.borrow_mut().push(name));
    }

    menu.run_with(ScriptedKeys::new("j\rk\rjj\r"), CountingScreen::default(), &mut Vec::new())
        .unwrap();

    assert_eq!(*order.borrow(), ["B", "A"]);
}

#[test]
fn test_reader_error_ends_run_and_restores_entries() {
    let mut menu = MenuWidget::new();
    menu.add_field("Foo", || {});

    let err = menu
        .run_with(ScriptedKeys::new("s"), CountingScreen::default(), &mut Vec::new())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(labels(&menu), ["Foo"]);
    assert_eq!(menu.state(), MenuState::Idle);
}

#[test]
fn test_panicking_action_restores_entries() {
    let mut menu = MenuWidget::new();
    menu.add_field("Boom", || panic!("action failed"));
    menu.add_field("Fine", || {});

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        menu.run_with(ScriptedKeys::new("q"), CountingScreen::default(), &mut Vec::new())
    }));

    assert!(result.is_err());
    assert_eq!(labels(&menu), ["Boom", "Fine"]);
    assert_eq!(menu.state(), MenuState::Idle);
}

#[test]
fn test_menu_can_run_repeatedly() {
    let mut menu = MenuWidget::new();
    menu.add_field("Foo", || {});

    for _ in 0..3 {
        menu.run_with(ScriptedKeys::new("sq"), CountingScreen::default(), &mut Vec::new()).unwrap();
        assert_eq!(labels(&menu), ["Foo"]);
    }
}
