//! Publishing scenarios against a real filesystem.

use std::path::PathBuf;

use genfence_publish::{LocalPublisher, PublishError};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

#[test]
fn test_publish_copies_artifacts_by_base_name() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let pom = write_file(&src, "a.pom", "<project/>");
    let jar = write_file(&src, "a.jar", "jar-bytes");

    let publisher = LocalPublisher::new(out.path());
    let mut progress: Vec<u8> = Vec::new();
    publisher
        .publish("com/example/a/1.0.0", &[pom, jar], &mut progress)
        .unwrap();

    let product = out.path().join("com/example/a/1.0.0");
    assert_eq!(std::fs::read_to_string(product.join("a.pom")).unwrap(), "<project/>");
    assert_eq!(std::fs::read_to_string(product.join("a.jar")).unwrap(), "jar-bytes");

    // One progress line per file.
    let progress = String::from_utf8(progress).unwrap();
    assert_eq!(progress.lines().count(), 2);
    assert!(progress.lines().all(|line| line.starts_with("Copying ")));
}

#[test]
fn test_republish_is_idempotent_overwrite() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let jar = write_file(&src, "a.jar", "v1");

    let publisher = LocalPublisher::new(out.path());
    publisher.publish("a", &[jar.clone()], &mut Vec::<u8>::new()).unwrap();

    std::fs::write(&jar, "v2").unwrap();
    publisher.publish("a", &[jar], &mut Vec::<u8>::new()).unwrap();

    assert_eq!(
        std::fs::read_to_string(out.path().join("a/a.jar")).unwrap(),
        "v2"
    );
}

#[test]
fn test_uncreatable_destination_copies_nothing() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let jar = write_file(&src, "a.jar", "jar-bytes");

    // A regular file where the destination root should be makes create_dir_all
    // fail before any copy happens.
    let blocker = out.path().join("blocked");
    std::fs::write(&blocker, "").unwrap();

    let publisher = LocalPublisher::new(&blocker);
    let err = publisher
        .publish("product", &[jar], &mut Vec::<u8>::new())
        .unwrap_err();

    assert!(matches!(err, PublishError::CreateDir { .. }));
    assert!(!blocker.join("product").exists());
}

#[test]
fn test_missing_source_is_copy_error() {
    let out = TempDir::new().unwrap();
    let publisher = LocalPublisher::new(out.path());

    let missing = out.path().join("nope.jar");
    let err = publisher
        .publish("product", &[missing.clone()], &mut Vec::<u8>::new())
        .unwrap_err();

    assert!(matches!(err, PublishError::Copy { src, .. } if src == missing));
}
