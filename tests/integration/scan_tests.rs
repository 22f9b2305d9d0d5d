use dupescan::duplicates::DuplicateFinder;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();

    let report = DuplicateFinder::new().scan(dir.path()).unwrap();

    assert_eq!(report.registry.total_files(), 0);
    assert_eq!(report.registry.duplicate_count(), 0);
    assert_eq!(report.registry.duplicate_size(), 0);
}

#[test]
fn test_scan_unique_files() {
    let dir = tempdir().unwrap();

    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"content a")
        .unwrap();
    File::create(dir.path().join("b.txt"))
        .unwrap()
        .write_all(b"content b")
        .unwrap();
    File::create(dir.path().join("c.txt"))
        .unwrap()
        .write_all(b"content c")
        .unwrap();

    let report = DuplicateFinder::new().scan(dir.path()).unwrap();

    assert_eq!(report.registry.total_files(), 3);
    assert_eq!(report.registry.duplicate_count(), 0);
    assert_eq!(report.registry.duplicate_size(), 0);
}

#[test]
fn test_scan_hello_world() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("A.txt"), b"hello").unwrap();
    fs::write(dir.path().join("B.txt"), b"hello").unwrap();
    fs::write(dir.path().join("C.txt"), b"world").unwrap();

    let report = DuplicateFinder::new().scan(dir.path()).unwrap();
    let registry = &report.registry;

    assert_eq!(registry.total_files(), 2);
    assert_eq!(registry.duplicate_count(), 1);
    assert_eq!(registry.duplicate_size(), 5);

    // Listing order decides which copy is the original
    let (original, dupes) = registry.iter_duplicates().next().unwrap();
    let mut pair = vec![original.to_path_buf(), dupes[0].clone()];
    pair.sort();
    assert_eq!(
        pair,
        vec![dir.path().join("A.txt"), dir.path().join("B.txt")]
    );
}

#[test]
fn test_scan_duplicates_across_subdirectories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("one").join("two");
    fs::create_dir_all(&nested).unwrap();

    fs::write(dir.path().join("top.bin"), vec![7u8; 2048]).unwrap();
    fs::write(nested.join("deep.bin"), vec![7u8; 2048]).unwrap();
    fs::write(dir.path().join("one").join("other.bin"), vec![8u8; 10]).unwrap();

    let report = DuplicateFinder::new().scan(dir.path()).unwrap();

    assert_eq!(report.registry.total_files(), 2);
    assert_eq!(report.registry.duplicate_count(), 1);
    assert_eq!(report.registry.duplicate_file_count(), 1);
    assert_eq!(report.registry.duplicate_size(), 2048);
}

#[test]
fn test_scan_many_copies_of_one_file() {
    let dir = tempdir().unwrap();
    for i in 0..4 {
        fs::write(dir.path().join(format!("copy{}.txt", i)), b"same bytes").unwrap();
    }

    let report = DuplicateFinder::new().scan(dir.path()).unwrap();
    let registry = &report.registry;

    assert_eq!(registry.total_files(), 1);
    assert_eq!(registry.duplicate_count(), 1);
    assert_eq!(registry.duplicate_file_count(), 3);
    assert_eq!(registry.duplicate_size(), 30);

    let (original, dupes) = registry.iter_duplicates().next().unwrap();
    assert_eq!(dupes.len(), 3);
    assert!(!dupes.iter().any(|d| d == original));
    assert_eq!(
        registry.latest_duplicate(original),
        dupes.last().map(PathBuf::as_path)
    );
}

#[test]
fn test_scan_empty_files_are_duplicates_of_each_other() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("empty1")).unwrap();
    File::create(dir.path().join("empty2")).unwrap();

    let report = DuplicateFinder::new().scan(dir.path()).unwrap();

    assert_eq!(report.registry.total_files(), 1);
    assert_eq!(report.registry.duplicate_count(), 1);
    assert_eq!(report.registry.duplicate_size(), 0);
}

#[test]
fn test_scan_is_idempotent() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("a"), b"alpha").unwrap();
    fs::write(dir.path().join("sub").join("a"), b"alpha").unwrap();
    fs::write(dir.path().join("b"), b"beta").unwrap();
    fs::write(dir.path().join("sub").join("b"), b"beta").unwrap();
    fs::write(dir.path().join("c"), b"gamma").unwrap();

    let finder = DuplicateFinder::new();
    let first = finder.scan(dir.path()).unwrap();
    let second = finder.scan(dir.path()).unwrap();

    assert_eq!(
        first.registry.total_files(),
        second.registry.total_files()
    );
    assert_eq!(
        first.registry.duplicate_count(),
        second.registry.duplicate_count()
    );
    assert_eq!(
        first.registry.duplicate_size(),
        second.registry.duplicate_size()
    );
    assert_eq!(first.registry.total_files(), 3);
    assert_eq!(first.registry.duplicate_count(), 2);
    assert_eq!(first.registry.duplicate_size(), 9);
}

#[test]
#[cfg(unix)]
fn test_scan_ignores_symlinks() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("real.txt"), b"data").unwrap();
    std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("alias.txt"))
        .unwrap();

    let report = DuplicateFinder::new().scan(dir.path()).unwrap();

    assert_eq!(report.registry.total_files(), 1);
    assert_eq!(report.registry.duplicate_count(), 0);
}
