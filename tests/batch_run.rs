use std::error::Error;

use resizewalk::batch::BatchCoordinator;
use resizewalk::errors::ResizewalkError;
use resizewalk::notify::Severity;
use resizewalk::scan::DirectorySpec;
use resizewalk_test_utils::{init_tracing, FakeResizer, RecordingNotifier, TempTree};

type TestResult = Result<(), Box<dyn Error>>;

fn specs(raw: &[&str]) -> Vec<DirectorySpec> {
    raw.iter().map(|s| DirectorySpec::new(*s)).collect()
}

#[test]
fn overlapping_watched_roots_dispatch_each_file_once() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.file("fileadmin/a.jpg").file("fileadmin/sub/c.png");

    let mut resizer = FakeResizer::new(&["jpg", "png"]);
    let mut notifier = RecordingNotifier::new();
    let mut coordinator = BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut resizer);

    let outcome = coordinator
        .run_with_notifier(&specs(&["fileadmin", "fileadmin/sub"]), &mut notifier)?;

    assert!(outcome.success);
    assert_eq!(outcome.roots_walked, 1);
    assert_eq!(outcome.dispatched, 2);
    assert_eq!(
        resizer.processed,
        vec![tree.path("fileadmin/a.jpg"), tree.path("fileadmin/sub/c.png")]
    );

    Ok(())
}

#[test]
fn wildcard_specs_are_expanded_before_walking() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.file("media/2020/photos/x.jpg")
        .file("media/2021/photos/y.jpg")
        .file("media/notes/z.jpg");

    let mut resizer = FakeResizer::new(&["jpg"]);
    let mut notifier = RecordingNotifier::new();
    let mut coordinator = BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut resizer);

    let outcome = coordinator.run_with_notifier(&specs(&["media/*/photos"]), &mut notifier)?;

    assert!(outcome.success);
    assert_eq!(outcome.roots_walked, 2);
    assert_eq!(
        resizer.processed,
        vec![
            tree.path("media/2020/photos/x.jpg"),
            tree.path("media/2021/photos/y.jpg")
        ]
    );

    Ok(())
}

#[test]
fn missing_literal_root_fails_the_run_but_not_the_other_roots() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.file("fileadmin/a.jpg").file("uploads/b.jpg");

    let mut resizer = FakeResizer::new(&["jpg"]);
    let mut notifier = RecordingNotifier::new();
    let mut coordinator = BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut resizer);

    let outcome = coordinator
        .run_with_notifier(&specs(&["fileadmin", "absent", "uploads"]), &mut notifier)?;

    assert!(!outcome.success);
    assert_eq!(outcome.roots_walked, 2);
    assert_eq!(
        resizer.processed,
        vec![tree.path("fileadmin/a.jpg"), tree.path("uploads/b.jpg")]
    );
    assert_eq!(notifier.count_at_or_above(Severity::Warning), 1);

    Ok(())
}

#[test]
fn empty_watched_config_falls_back_to_ruleset_directories() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.file("fileadmin/a.jpg").file("elsewhere/b.jpg");

    let mut resizer = FakeResizer::new(&["jpg"]).with_directories(&["fileadmin"]);
    let mut notifier = RecordingNotifier::new();
    let mut coordinator = BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut resizer);

    let outcome = coordinator.run_with_notifier(&[], &mut notifier)?;

    assert!(outcome.success);
    assert_eq!(resizer.processed, vec![tree.path("fileadmin/a.jpg")]);

    Ok(())
}

#[test]
fn one_file_failing_never_aborts_the_rest_of_the_walk() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.file("fileadmin/a.jpg")
        .file("fileadmin/b.jpg")
        .file("fileadmin/c.jpg");

    let mut resizer =
        FakeResizer::new(&["jpg"]).with_failure_on(tree.path("fileadmin/b.jpg"));
    let mut notifier = RecordingNotifier::new();
    let mut coordinator = BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut resizer);

    let outcome = coordinator.run_with_notifier(&specs(&["fileadmin"]), &mut notifier)?;

    // The walk itself succeeded; all three files were dispatched and the
    // failure was routed to the notification channel.
    assert!(outcome.success);
    assert_eq!(outcome.dispatched, 3);
    assert_eq!(resizer.processed.len(), 3);
    assert_eq!(notifier.count_at_or_above(Severity::Error), 1);

    Ok(())
}

#[test]
fn excluded_subtrees_are_not_dispatched() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.file("fileadmin/a.jpg").file("fileadmin/_temp_/b.jpg");

    let mut resizer = FakeResizer::new(&["jpg"]);
    let mut notifier = RecordingNotifier::new();
    let mut coordinator = BatchCoordinator::new(
        tree.root(),
        specs(&["fileadmin/_temp_"]),
        "_recycler_",
        &mut resizer,
    );

    let outcome = coordinator.run_with_notifier(&specs(&["fileadmin"]), &mut notifier)?;

    assert!(outcome.success);
    assert_eq!(resizer.processed, vec![tree.path("fileadmin/a.jpg")]);

    Ok(())
}

#[test]
fn candidate_selection_is_idempotent_across_runs() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.file("fileadmin/a.jpg")
        .file("fileadmin/sub/c.png")
        .file("fileadmin/.hidden.jpg");

    let watched = specs(&["fileadmin"]);

    let mut first = FakeResizer::new(&["jpg", "png"]);
    let mut notifier = RecordingNotifier::new();
    BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut first)
        .run_with_notifier(&watched, &mut notifier)?;

    let mut second = FakeResizer::new(&["jpg", "png"]);
    BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut second)
        .run_with_notifier(&watched, &mut notifier)?;

    assert_eq!(first.processed, second.processed);
    assert!(!first.processed.is_empty());

    Ok(())
}

#[test]
fn a_resizer_without_file_types_is_a_configuration_error() {
    init_tracing();

    let tree = TempTree::new();
    tree.file("fileadmin/a.jpg");

    let mut resizer = FakeResizer::new(&[]);
    let mut notifier = RecordingNotifier::new();
    let mut coordinator = BatchCoordinator::new(tree.root(), vec![], "_recycler_", &mut resizer);

    let err = coordinator
        .run_with_notifier(&specs(&["fileadmin"]), &mut notifier)
        .unwrap_err();

    assert!(matches!(err, ResizewalkError::ConfigurationMissing(_)));
}
