use dupescan::cli::OutputFormat;
use dupescan::config::ScanConfig;
use dupescan::duplicates::DuplicateFinder;
use dupescan::error::ExitCode;
use dupescan::scanner::ScanError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Privileged users can list a directory regardless of its mode.
#[cfg(unix)]
fn permissions_enforced(locked: &Path) -> bool {
    fs::read_dir(locked).is_err()
}

#[cfg(unix)]
fn skip_note() {
    eprintln!("skipped: permission bits are not enforced for this user");
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

#[test]
fn test_missing_root_is_directory_read_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");

    match DuplicateFinder::new().scan(&missing) {
        Err(ScanError::DirectoryRead { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected DirectoryRead error, got {:?}", other),
    }
}

#[test]
fn test_file_root_is_directory_read_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, b"not a directory").unwrap();

    match DuplicateFinder::new().scan(&file) {
        Err(ScanError::DirectoryRead { path, .. }) => assert_eq!(path, file),
        other => panic!("Expected DirectoryRead error, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_aborts_scan() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    fs::write(dir.path().join("b.txt"), b"hello").unwrap();

    let locked = dir.path().join("no_access");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("hidden.txt"), b"secret").unwrap();
    set_mode(&locked, 0o000);

    if !permissions_enforced(&locked) {
        set_mode(&locked, 0o755);
        skip_note();
        return;
    }

    let result = DuplicateFinder::new().scan(dir.path());

    // Restore permissions so tempdir can be deleted
    set_mode(&locked, 0o755);

    match result {
        Err(err @ ScanError::DirectoryRead { .. }) => {
            assert!(err.is_fatal());
            assert_eq!(err.path(), locked.as_path());
        }
        other => panic!("Expected DirectoryRead error, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_prints_nothing() {
    let dir = tempdir().unwrap();
    let locked = dir.path().join("no_access");
    fs::create_dir(&locked).unwrap();
    set_mode(&locked, 0o000);

    if !permissions_enforced(&locked) {
        set_mode(&locked, 0o755);
        skip_note();
        return;
    }

    let config = ScanConfig {
        root: dir.path().to_path_buf(),
        output: OutputFormat::Text,
    };
    let mut buffer = Vec::new();
    let result = dupescan::run_scan(&config, &mut buffer);

    set_mode(&locked, 0o755);

    let err = result.unwrap_err();
    assert!(err.downcast_ref::<ScanError>().is_some());
    assert!(buffer.is_empty(), "No partial report may be printed");
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    fs::write(dir.path().join("b.txt"), b"hello").unwrap();

    let locked = dir.path().join("locked.txt");
    fs::write(&locked, b"hello").unwrap();
    set_mode(&locked, 0o000);

    if fs::read(&locked).is_ok() {
        set_mode(&locked, 0o644);
        skip_note();
        return;
    }

    let result = DuplicateFinder::new().scan(dir.path());
    set_mode(&locked, 0o644);
    let report = result.unwrap();

    assert!(report.is_partial());
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(report.skipped[0], ScanError::FileRead { .. }));
    assert_eq!(report.skipped[0].path(), locked.as_path());

    // The readable files are still counted
    assert_eq!(report.registry.total_files(), 1);
    assert_eq!(report.registry.duplicate_count(), 1);
    assert_eq!(report.registry.duplicate_size(), 5);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_gives_partial_success() {
    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked.bin");
    fs::write(&locked, b"data").unwrap();
    set_mode(&locked, 0o000);

    if fs::read(&locked).is_ok() {
        set_mode(&locked, 0o644);
        skip_note();
        return;
    }

    let config = ScanConfig {
        root: dir.path().to_path_buf(),
        output: OutputFormat::Text,
    };
    let mut buffer = Vec::new();
    let result = dupescan::run_scan(&config, &mut buffer);
    set_mode(&locked, 0o644);

    assert_eq!(result.unwrap(), ExitCode::PartialSuccess);
    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("TOTAL FILES: 0"));
}
