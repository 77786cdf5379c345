//! End-to-end behavior of the temporary content store.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Cursor, Read};
use std::sync::Arc;
use std::thread;

use stowage::{folders, hash, ContentSource, StowageConfig, TempStore};
use tempfile::TempDir;

#[test]
fn put_round_trips_content() {
    let tmp = TempDir::new().unwrap();
    let store = TempStore::with_tmp_root(tmp.path());

    let path = store.put(b"hello", None).unwrap();

    assert!(path.is_absolute());
    assert_eq!(fs::read(&path).unwrap(), b"hello");
}

#[test]
fn put_twice_returns_distinct_paths() {
    let tmp = TempDir::new().unwrap();
    let store = TempStore::with_tmp_root(tmp.path());

    let first = store.put(b"hello", None).unwrap();
    let second = store.put(b"hello", None).unwrap();

    assert_ne!(first, second);
    assert_eq!(fs::read(&first).unwrap(), b"hello");
    assert_eq!(fs::read(&second).unwrap(), b"hello");
}

#[test]
fn put_drains_a_stream() {
    let tmp = TempDir::new().unwrap();
    let store = TempStore::with_tmp_root(tmp.path());

    let source = ContentSource::stream(Cursor::new(b"from a stream".to_vec()));
    let path = store.put(source, None).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"from a stream");
}

#[test]
fn put_named_fixes_the_filename() {
    let tmp = TempDir::new().unwrap();
    let store = TempStore::with_tmp_root(tmp.path());

    let path = store.put_named(b"test", "hello.txt", None).unwrap();

    assert_eq!(path.file_name().unwrap(), "hello.txt");
    assert_eq!(fs::read(&path).unwrap(), b"test");
}

#[test]
fn put_named_same_name_last_writer_wins() {
    let tmp = TempDir::new().unwrap();
    let store = TempStore::with_tmp_root(tmp.path());

    store.put_named(b"first", "hello.txt", None).unwrap();
    let path = store.put_named(b"second", "hello.txt", None).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"second");
}

#[test]
fn create_writes_into_directory() {
    let tmp = TempDir::new().unwrap();
    let store = TempStore::with_tmp_root(tmp.path());
    let dir = tmp.path().join("nested").join("out");

    let path = store.create(&dir, "a.txt", b"foo").unwrap();

    assert_eq!(path, dir.join("a.txt"));
    assert_eq!(fs::read(dir.join("a.txt")).unwrap(), b"foo");
}

#[test]
fn create_drains_a_mebibyte_stream() {
    let tmp = TempDir::new().unwrap();
    let store = TempStore::with_tmp_root(tmp.path());
    let dir = tmp.path().join("big");

    let source = ContentSource::stream(io::repeat(b'A').take(1024 * 1024));
    let path = store.create(&dir, "big.bin", source).unwrap();

    let data = fs::read(&path).unwrap();
    assert_eq!(data.len(), 1_048_576);
    assert!(data.iter().all(|&b| b == b'A'));
}

#[test]
fn failures_surface_as_operational_errors() {
    let tmp = TempDir::new().unwrap();
    let store = TempStore::with_tmp_root(tmp.path());

    // A root that resolves through a regular file cannot be provisioned.
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let err = store.put(b"content", Some(&blocker)).unwrap_err();
    assert_eq!(err.operation(), "create folder");
    assert!(err.path().starts_with(&blocker));
}

#[test]
fn concurrent_puts_never_collide() {
    let tmp = TempDir::new().unwrap();
    let store = Arc::new(TempStore::with_tmp_root(tmp.path()));

    let mut handles = vec![];
    for _ in 0..10 {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            store.put(b"concurrent data", None).expect("put failed")
        }));
    }

    let paths: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(paths.len(), 10);
    for path in &paths {
        assert_eq!(fs::read(path).unwrap(), b"concurrent data");
    }
}

#[test]
fn stored_files_hash_to_known_digests() {
    let tmp = TempDir::new().unwrap();
    let store = TempStore::with_tmp_root(tmp.path());

    let path = store.put(b"hehe", None).unwrap();

    assert_eq!(
        hash::md5_file(&path).unwrap(),
        "529ca8050a00180790cf88b63468826a"
    );
    assert_eq!(
        hash::sha1_file(&path).unwrap(),
        "42525bb6d3b0dc06bb78ae548733e8fbb55446b3"
    );
    assert_eq!(
        hash::sha256_file(&path).unwrap(),
        "0ebe2eca800cf7bd9d9d9f9f4aafbc0c77ae155f43bbbeca69cb256a24c7f9bb"
    );
}

#[test]
fn temp_folders_are_distinct_and_exist() {
    let tmp = TempDir::new().unwrap();

    let first = folders::create_temp_in(tmp.path()).unwrap();
    let second = folders::create_temp_in(tmp.path()).unwrap();

    assert!(first.is_dir());
    assert!(second.is_dir());
    assert_ne!(first, second);
}

#[test]
fn config_file_controls_the_temp_root() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("stowage.toml");
    fs::write(
        &config_path,
        format!("[storage]\ntmppath = {:?}\n", tmp.path().to_str().unwrap()),
    )
    .unwrap();

    let config = StowageConfig::from_file(&config_path).unwrap();
    let store = TempStore::new(config);

    let path = store.put(b"configured", None).unwrap();
    assert!(path.starts_with(tmp.path().join("stowage-tmp")));
}
