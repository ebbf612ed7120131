use super::*;

#[test]
fn pending_flag_default_not_pending() {
    assert!(!PendingFlag::new().is_pending());
}

#[test]
fn acquire_sets_and_drop_clears() {
    let flag = PendingFlag::new();
    let guard = flag.try_acquire().expect("first acquire");
    assert!(flag.is_pending());
    drop(guard);
    assert!(!flag.is_pending());
}

#[test]
fn second_acquire_is_refused_while_pending() {
    let flag = PendingFlag::new();
    let _guard = flag.try_acquire().expect("first acquire");
    assert!(flag.try_acquire().is_none());
}

#[test]
fn clones_share_state() {
    let flag = PendingFlag::new();
    let ui_view = flag.clone();
    let guard = flag.try_acquire().expect("acquire");
    assert!(ui_view.is_pending());
    drop(guard);
    assert!(!ui_view.is_pending());
    assert!(ui_view.try_acquire().is_some());
}

#[test]
fn guard_released_on_panic_unwind() {
    let flag = PendingFlag::new();
    let inner = flag.clone();
    let result = std::panic::catch_unwind(move || {
        let _guard = inner.try_acquire().expect("acquire");
        panic!("boom");
    });
    assert!(result.is_err());
    assert!(!flag.is_pending());
}
