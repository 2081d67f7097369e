//! End-to-end integration tests for edi-pipeline
//!
//! Runs full batches over temporary inbox/outbox/archive/error trees.

use std::fs;
use std::path::{Path, PathBuf};

use edi_order::RecordingSink;
use edi_pipeline::{BatchRunner, Directories, Error};
use tempfile::TempDir;

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper to create the four working directories under a temp root
fn create_tree() -> (TempDir, Directories) {
    let root = tempfile::tempdir().unwrap();
    let dirs = Directories::new(
        root.path().join("inbox"),
        root.path().join("outbox"),
        root.path().join("archive"),
        root.path().join("error"),
    );
    fs::create_dir(&dirs.inbox).unwrap();
    dirs.ensure_output_dirs().unwrap();
    (root, dirs)
}

fn sample_order() -> String {
    fs::read_to_string(project_root().join("testdata/edi/orders_sample.edi")).unwrap()
}

fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_end_to_end_sample_order() -> anyhow::Result<()> {
    let (_root, dirs) = create_tree();
    fs::write(dirs.inbox.join("ORDERS_0042.EDI"), sample_order())?;

    let sink = RecordingSink::new();
    let summary = BatchRunner::new(dirs.clone(), &sink).run()?;

    assert!(summary.all_succeeded());
    assert_eq!(summary.converted.len(), 1);
    assert_eq!(summary.converted[0].item_count, 3);

    let xml = fs::read_to_string(&summary.converted[0].output)?;
    assert!(xml.contains("<OrderNumber>PO-2024-0042</OrderNumber>"));
    assert!(xml.contains("<GLNShipTo>5412345000020</GLNShipTo>"));
    assert!(xml.contains("<FreeTextField>Deliver to dock 4 &amp; call ahead</FreeTextField>"));
    assert!(xml.contains("<ItemDescription>Blue &lt;widget&gt;</ItemDescription>"));
    assert_eq!(xml.matches("<Detail>").count(), 3);

    assert_eq!(names_in(&dirs.archive), vec!["ORDERS_0042.EDI"]);
    assert!(names_in(&dirs.inbox).is_empty());
    assert!(names_in(&dirs.error).is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_bad_file_does_not_stop_batch() -> anyhow::Result<()> {
    let (_root, dirs) = create_tree();
    fs::write(dirs.inbox.join("a.edi"), "BGM+220+PO-A'LIN+1++A:EN'")?;
    // Listed by the scan but gone by the time it is read
    std::os::unix::fs::symlink(dirs.inbox.join("vanished"), dirs.inbox.join("b.edi"))?;
    fs::write(dirs.inbox.join("c.edi"), "BGM+220+PO-C'")?;

    let sink = RecordingSink::new();
    let summary = BatchRunner::new(dirs.clone(), &sink).run()?;

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.converted.len(), 2);
    assert_eq!(summary.failed.len(), 1);

    let failure = &summary.failed[0];
    assert!(failure.source.ends_with("b.edi"));
    assert!(matches!(failure.error, Error::Read { .. }));
    assert!(failure.moved_to_error);

    assert_eq!(names_in(&dirs.archive), vec!["a.edi", "c.edi"]);
    assert_eq!(names_in(&dirs.error), vec!["b.edi"]);
    assert!(sink.contains("Error processing b.edi"));
    assert!(sink.contains("Moved EDI file to error directory: b.edi"));
    assert!(sink.contains("Archived EDI file: c.edi"));
    assert_eq!(sink.infos().last().map(String::as_str), Some("All files processed."));
    Ok(())
}

#[test]
fn test_missing_file_fails_single_run() {
    let (_root, dirs) = create_tree();
    let sink = RecordingSink::new();
    let mut runner = BatchRunner::new(dirs.clone(), &sink);

    let failure = runner.process_file(&dirs.inbox.join("absent.edi")).unwrap_err();

    assert!(matches!(failure, Error::Read { .. }));
    assert!(sink.contains("File not found"));
    assert!(names_in(&dirs.outbox).is_empty());
}

#[test]
fn test_batch_outputs_have_distinct_names() -> anyhow::Result<()> {
    let (_root, dirs) = create_tree();
    for i in 0..5 {
        fs::write(dirs.inbox.join(format!("order_{i}.edi")), format!("BGM+220+PO{i}'"))?;
    }

    let sink = RecordingSink::new();
    let summary = BatchRunner::new(dirs.clone(), &sink).run()?;

    assert_eq!(summary.converted.len(), 5);
    let outputs = names_in(&dirs.outbox);
    assert_eq!(outputs.len(), 5);
    assert!(outputs.iter().all(|n| n.starts_with("outXML_") && n.ends_with(".xml")));
    assert_eq!(names_in(&dirs.archive).len(), 5);
    Ok(())
}

#[test]
fn test_event_sequence_for_one_file() -> anyhow::Result<()> {
    let (_root, dirs) = create_tree();
    fs::write(dirs.inbox.join("a.edi"), "BGM+220+PO-A'")?;

    let sink = RecordingSink::new();
    BatchRunner::new(dirs.clone(), &sink).run()?;

    let infos = sink.infos();
    assert_eq!(infos.first().map(String::as_str), Some("Process started."));
    assert_eq!(infos[1], "Processing EDI file: a.edi");
    assert_eq!(infos[2], "Reading EDI file: a.edi");
    assert!(infos.iter().any(|m| m.starts_with("XML file created: ")));
    assert!(infos.contains(&"Archived EDI file: a.edi".to_string()));
    assert_eq!(infos.last().map(String::as_str), Some("All files processed."));
    Ok(())
}
