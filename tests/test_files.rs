use rshttpd::files::{FileStore, is_safe_filename};

#[test]
fn test_safe_filename_accepts_plain_names() {
    assert!(is_safe_filename("note.txt"));
    assert!(is_safe_filename("archive.tar.gz"));
    assert!(is_safe_filename("with spaces"));
    // Inner slashes are the caller's problem; the predicate only blocks
    // traversal and absolute paths.
    assert!(is_safe_filename("sub/name"));
}

#[test]
fn test_safe_filename_rejects_empty() {
    assert!(!is_safe_filename(""));
}

#[test]
fn test_safe_filename_rejects_absolute_paths() {
    assert!(!is_safe_filename("/etc/passwd"));
    assert!(!is_safe_filename("/x"));
}

#[test]
fn test_safe_filename_rejects_traversal() {
    assert!(!is_safe_filename(".."));
    assert!(!is_safe_filename("../secret"));
    assert!(!is_safe_filename("a/../b"));
    assert!(!is_safe_filename("trailing.."));
}

#[test]
fn test_safe_filename_rejects_backslashes() {
    assert!(!is_safe_filename("a\\b"));
    assert!(!is_safe_filename("..\\windows"));
}

#[tokio::test]
async fn test_store_write_then_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let payload = b"contents \x00\x01 binary ok";
    store.write("data.bin", payload).await.unwrap();

    let read_back = store.read("data.bin").await.unwrap();
    assert_eq!(read_back, payload);
}

#[tokio::test]
async fn test_store_read_absent_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let err = store.read("missing").await.unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[tokio::test]
async fn test_store_size_matches_contents() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.write("sized", b"12345").await.unwrap();
    assert_eq!(store.size("sized").await.unwrap(), 5);
}

#[tokio::test]
async fn test_store_size_absent_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let err = store.size("missing").await.unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[tokio::test]
async fn test_store_write_truncates_existing() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.write("f", b"a much longer original").await.unwrap();
    store.write("f", b"ab").await.unwrap();

    assert_eq!(store.read("f").await.unwrap(), b"ab");
}

#[tokio::test]
async fn test_store_empty_write_creates_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.write("empty", b"").await.unwrap();
    assert_eq!(store.size("empty").await.unwrap(), 0);
}
