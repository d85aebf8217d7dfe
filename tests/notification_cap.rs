use std::error::Error;

use resizewalk::batch::BatchCoordinator;
use resizewalk::notify::{CappedNotifier, Notifier, Severity, OK_NOTIFICATION_CAP};
use resizewalk::scan::DirectorySpec;
use resizewalk_test_utils::{init_tracing, FakeResizer, RecordingNotifier, TempTree};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn cap_withholds_routine_messages_but_never_warnings() {
    let mut capped = CappedNotifier::with_cap(RecordingNotifier::new(), 3);

    for i in 0..5 {
        capped.notify(&format!("ok {i}"), Severity::Ok);
    }
    capped.notify("warn", Severity::Warning);
    capped.notify("err", Severity::Error);
    capped.notify("late ok", Severity::Ok);

    let inner = capped.into_inner();
    assert_eq!(inner.count_at_or_below(Severity::Ok), 3);
    assert_eq!(inner.count_at_or_above(Severity::Warning), 2);
}

#[test]
fn notice_and_info_count_toward_the_cap() {
    let mut capped = CappedNotifier::with_cap(RecordingNotifier::new(), 2);

    capped.notify("notice", Severity::Notice);
    capped.notify("info", Severity::Info);
    capped.notify("ok", Severity::Ok);

    let inner = capped.into_inner();
    assert_eq!(inner.events.len(), 2);
}

#[test]
fn interactive_runs_see_at_most_twenty_ok_messages() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    for i in 0..25 {
        tree.file(&format!("fileadmin/img{i:02}.jpg"));
    }

    let watched = vec![DirectorySpec::new("fileadmin")];

    // Interactive channel: the per-run cap applies.
    let mut resizer = FakeResizer::new(&["jpg"]).with_ok_notifications();
    let mut interactive = CappedNotifier::new(RecordingNotifier::new());
    BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut resizer)
        .run_with_notifier(&watched, &mut interactive)?;

    let delivered = interactive.into_inner();
    assert_eq!(delivered.count_at_or_below(Severity::Ok), OK_NOTIFICATION_CAP);

    // Unattended channel: every event is delivered.
    let mut resizer = FakeResizer::new(&["jpg"]).with_ok_notifications();
    let mut unattended = RecordingNotifier::new();
    BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut resizer)
        .run_with_notifier(&watched, &mut unattended)?;

    assert_eq!(unattended.count_at_or_below(Severity::Ok), 25);

    Ok(())
}

#[test]
fn warnings_pass_through_even_after_the_cap_is_reached() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    for i in 0..25 {
        tree.file(&format!("fileadmin/img{i:02}.jpg"));
    }

    // The missing root produces a Warning after 25 Ok events have already
    // exhausted the cap.
    let watched = vec![DirectorySpec::new("fileadmin"), DirectorySpec::new("absent")];

    let mut resizer = FakeResizer::new(&["jpg"]).with_ok_notifications();
    let mut interactive = CappedNotifier::new(RecordingNotifier::new());
    let outcome = BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut resizer)
        .run_with_notifier(&watched, &mut interactive)?;

    assert!(!outcome.success);

    let delivered = interactive.into_inner();
    assert_eq!(delivered.count_at_or_below(Severity::Ok), OK_NOTIFICATION_CAP);
    assert_eq!(delivered.count_at_or_above(Severity::Warning), 1);

    Ok(())
}
