use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut notices = Notices::default();
    let a = notices.push(Notice::info("a"));
    let b = notices.push(Notice::info("b"));
    assert!(b > a);
    assert_eq!(notices.items().len(), 2);
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut notices = Notices::default();
    for i in 0..=MAX_VISIBLE {
        notices.push(Notice::info(format!("n{i}")));
    }
    assert_eq!(notices.items().len(), MAX_VISIBLE);
    assert_eq!(notices.items()[0].1.title, "n1");
}

#[test]
fn dismiss_removes_only_target() {
    let mut notices = Notices::default();
    let a = notices.push(Notice::info("a"));
    let b = notices.push(Notice::error("b"));

    assert!(notices.dismiss(a));
    assert!(!notices.dismiss(a));
    assert_eq!(notices.items().len(), 1);
    assert_eq!(notices.items()[0].0, b);
}
