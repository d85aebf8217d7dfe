use std::error::Error;

use resizewalk::scan::{expand, DirectorySpec};
use resizewalk_test_utils::{init_tracing, TempTree};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn wildcard_expands_to_matching_directories() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.dir("media/2020/photos")
        .dir("media/2021/photos")
        .dir("media/notes");

    let spec = DirectorySpec::new("media/*/photos");
    let expanded = expand(&spec, tree.root())?;

    let resolved: Vec<_> = expanded.iter().map(|s| s.resolve(tree.root())).collect();
    assert_eq!(
        resolved,
        vec![tree.path("media/2020/photos"), tree.path("media/2021/photos")]
    );

    Ok(())
}

#[test]
fn wildcard_segment_matches_exactly_one_component() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.dir("media/2020/photos")
        .dir("media/2020/nested/photos");

    let expanded = expand(&DirectorySpec::new("media/*/photos"), tree.root())?;

    // `media/2020/nested/photos` is two components below `media/`, so the
    // single-segment wildcard must not match it.
    assert_eq!(expanded.len(), 1);
    assert_eq!(expanded[0].as_str(), "media/2020/photos");

    Ok(())
}

#[test]
fn missing_base_path_yields_empty_expansion() -> TestResult {
    init_tracing();

    let tree = TempTree::new();

    let expanded = expand(&DirectorySpec::new("absent/*/photos"), tree.root())?;
    assert!(expanded.is_empty());

    Ok(())
}

#[test]
fn literal_spec_passes_through_unchanged() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    let spec = DirectorySpec::new("fileadmin");

    let expanded = expand(&spec, tree.root())?;
    assert_eq!(expanded, vec![spec]);

    Ok(())
}

#[test]
fn trailing_wildcard_expands_to_immediate_subdirectories() -> TestResult {
    init_tracing();

    let tree = TempTree::new();
    tree.dir("uploads/a").dir("uploads/b").file("uploads/not-a-dir.txt");

    let expanded = expand(&DirectorySpec::new("uploads/*"), tree.root())?;

    let names: Vec<_> = expanded.iter().map(|s| s.as_str().to_string()).collect();
    assert_eq!(names, vec!["uploads/a", "uploads/b"]);

    Ok(())
}

#[test]
fn spec_normalization_strips_self_reference_and_trailing_slash() {
    assert_eq!(DirectorySpec::new("media/photos/.").as_str(), "media/photos");
    assert_eq!(DirectorySpec::new("media/photos/").as_str(), "media/photos");
    assert_eq!(DirectorySpec::new("  media/photos ").as_str(), "media/photos");
}
