use gap_index::{Error, Index};
use std::io::Write;
use test_log::test;

#[test]
fn index_from_file_roundtrip() -> gap_index::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"ababab")?;

    let index = Index::from_file(file.path())?;

    assert_eq!(6, index.len());

    let pairs: Vec<_> = index.matches(b"a", b"b", 0, 0)?.collect();
    assert_eq!(vec![(0, 1), (2, 3), (4, 5)], pairs);

    Ok(())
}

#[test]
fn index_from_file_missing() {
    let dir = tempfile::tempdir().expect("should create temp dir");

    let result = Index::from_file(dir.path().join("does-not-exist"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn index_from_file_agrees_with_in_memory() -> gap_index::Result<()> {
    let text = b"the quick brown fox jumps over the lazy dog";

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(text)?;

    let from_file = Index::from_file(file.path())?;
    let in_memory = Index::new(&text[..])?;

    let pairs1: Vec<_> = from_file.matches(b"the", b"o", 0, 30)?.collect();
    let pairs2: Vec<_> = in_memory.matches(b"the", b"o", 0, 30)?.collect();

    assert_eq!(pairs1, pairs2);
    assert!(!pairs1.is_empty());

    Ok(())
}
