use std::io::Write;
use std::thread;

use pretty_assertions::assert_eq;

use super::*;

fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

fn reader_for(file: &tempfile::NamedTempFile) -> FileReader {
    let paths = Arc::new(PathTable::new());
    let id = paths.intern(file.path());
    FileReader::new(paths, id)
}

fn missing_reader() -> FileReader {
    let dir = tempfile::tempdir().unwrap();
    let paths = Arc::new(PathTable::new());
    let id = paths.intern(dir.path().join("does-not-exist.hk"));
    FileReader::new(paths, id)
}

#[test]
fn new_reader_is_closed() {
    let file = temp_file(b"abc");
    let reader = reader_for(&file);
    assert!(!reader.is_open());
    assert_eq!(reader.path(), file.path());
}

#[test]
fn read_opens_lazily() {
    let file = temp_file(b"hello");
    let reader = reader_for(&file);

    let mut buf = [0u8; 5];
    assert_eq!(reader.read(0, &mut buf).unwrap(), 5);
    assert_eq!(&buf, b"hello");
    assert!(reader.is_open());
}

#[test]
fn read_at_offset() {
    let file = temp_file(b"0123456789");
    let reader = reader_for(&file);

    let mut buf = [0u8; 3];
    assert_eq!(reader.read(4, &mut buf).unwrap(), 3);
    assert_eq!(&buf, b"456");

    // Backwards seek.
    assert_eq!(reader.read(1, &mut buf).unwrap(), 3);
    assert_eq!(&buf, b"123");
}

#[test]
fn short_read_at_end_of_file() {
    let file = temp_file(b"0123456789");
    let reader = reader_for(&file);

    let mut buf = [0u8; 8];
    assert_eq!(reader.read(6, &mut buf).unwrap(), 4);
    assert_eq!(&buf[..4], b"6789");
}

#[test]
fn read_past_end_returns_zero() {
    let file = temp_file(b"abc");
    let reader = reader_for(&file);

    let mut buf = [0u8; 4];
    assert_eq!(reader.read(3, &mut buf).unwrap(), 0);
    assert_eq!(reader.read(1000, &mut buf).unwrap(), 0);
    assert!(reader.is_open());
}

#[test]
fn unseekable_position_reads_as_end_of_file() {
    let file = temp_file(b"abc");
    let reader = reader_for(&file);

    let mut buf = [0u8; 4];
    assert_eq!(reader.read(u64::MAX, &mut buf).unwrap(), 0);
    assert!(reader.is_open());

    // The reader is still usable afterwards.
    assert_eq!(reader.read(0, &mut buf).unwrap(), 3);
    assert_eq!(&buf[..3], b"abc");
}

#[test]
fn empty_buffer_does_not_open() {
    let file = temp_file(b"abc");
    let reader = reader_for(&file);

    assert_eq!(reader.read(0, &mut []).unwrap(), 0);
    assert!(!reader.is_open());
}

#[test]
fn empty_buffer_on_missing_file_is_not_an_error() {
    let reader = missing_reader();
    assert_eq!(reader.read(0, &mut []).unwrap(), 0);
}

#[test]
fn open_missing_file_fails_and_stays_closed() {
    let reader = missing_reader();

    let err = reader.open().unwrap_err();
    assert!(matches!(err, IoError::OpenFailed { .. }), "{err:?}");
    assert_eq!(err.path(), reader.path());
    assert!(!reader.is_open());

    let mut buf = [0u8; 4];
    let err = reader.read(0, &mut buf).unwrap_err();
    assert!(matches!(err, IoError::OpenFailed { .. }), "{err:?}");
    assert!(!reader.is_open());
}

#[cfg(unix)]
#[test]
fn read_failure_closes_the_handle() {
    // Directories open fine on unix but cannot be read.
    let dir = tempfile::tempdir().unwrap();
    let paths = Arc::new(PathTable::new());
    let reader = FileReader::new(Arc::clone(&paths), paths.intern(dir.path()));

    let err = reader.read(0, &mut [0u8; 4]).unwrap_err();
    assert!(matches!(err, IoError::ReadFailed { .. }), "{err:?}");
    assert_eq!(err.path(), dir.path());
    assert!(!reader.is_open());

    // No retry behind the caller's back; the next read reopens and fails again.
    let err = reader.read(0, &mut [0u8; 4]).unwrap_err();
    assert!(matches!(err, IoError::ReadFailed { .. }), "{err:?}");
    assert!(!reader.is_open());
}

#[test]
fn open_error_message_names_the_file() {
    let reader = missing_reader();
    let err = reader.open().unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("failed to open file stream: "), "{message}");
    assert!(message.ends_with("does-not-exist.hk"), "{message}");
}

#[test]
fn open_is_idempotent() {
    let file = temp_file(b"abc");
    let reader = reader_for(&file);

    reader.open().unwrap();
    reader.open().unwrap();
    assert!(reader.is_open());
}

#[test]
fn close_then_reopen() {
    let file = temp_file(b"abc");
    let reader = reader_for(&file);

    reader.open().unwrap();
    reader.close();
    assert!(!reader.is_open());

    // Closing twice is harmless.
    reader.close();
    assert!(!reader.is_open());

    let mut buf = [0u8; 3];
    assert_eq!(reader.read(0, &mut buf).unwrap(), 3);
    assert!(reader.is_open());
}

#[test]
fn open_succeeds_once_file_appears() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("late.hk");
    let paths = Arc::new(PathTable::new());
    let reader = FileReader::new(Arc::clone(&paths), paths.intern(&path));

    assert!(reader.open().is_err());
    std::fs::write(&path, b"x").unwrap();
    reader.open().unwrap();
    assert!(reader.is_open());
}

#[test]
fn concurrent_reads_see_consistent_bytes() {
    let contents: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let file = temp_file(&contents);
    let reader = reader_for(&file);

    thread::scope(|s| {
        for worker in 0..8u64 {
            let reader = &reader;
            let contents = &contents;
            s.spawn(move || {
                let mut buf = [0u8; 64];
                for round in 0..32u64 {
                    let position = (worker * 97 + round * 61) % 4000;
                    let count = reader.read(position, &mut buf).unwrap();
                    let start = usize::try_from(position).unwrap();
                    assert_eq!(count, 64);
                    assert_eq!(&buf[..], &contents[start..start + 64]);
                }
            });
        }
    });
}

#[test]
fn debug_shows_path_and_state() {
    let file = temp_file(b"");
    let reader = reader_for(&file);
    let debug = format!("{reader:?}");
    assert!(debug.contains("open: false"), "{debug}");
}
