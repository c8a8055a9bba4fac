use gap_index::Index;
use test_log::test;

#[test]
fn match_adjacent_single_bytes() -> gap_index::Result<()> {
    let index = Index::new("ababab")?;

    let pairs: Vec<_> = index.matches(b"a", b"b", 0, 0)?.collect();
    assert_eq!(vec![(0, 1), (2, 3), (4, 5)], pairs);

    Ok(())
}

#[test]
fn match_adjacent_requires_exact_distance() -> gap_index::Result<()> {
    let index = Index::new("ababab")?;

    // every "b" is exactly one byte after an "a" start, so a gap of one
    // byte never fits between them
    assert_eq!(0, index.matches(b"a", b"b", 1, 1)?.count());

    // two bytes of gap pairs each "a" with the next-but-one "b"
    let pairs: Vec<_> = index.matches(b"a", b"b", 2, 2)?.collect();
    assert_eq!(vec![(0, 3), (2, 5)], pairs);

    Ok(())
}

#[test]
fn match_adjacent_same_pattern() -> gap_index::Result<()> {
    let index = Index::new("ababab")?;

    let pairs: Vec<_> = index.matches(b"ab", b"ab", 0, 3)?.collect();
    assert_eq!(vec![(0, 3), (0, 5), (2, 5)], pairs);

    let pairs: Vec<_> = index.matches(b"ab", b"ab", 0, 0)?.collect();
    assert_eq!(vec![(0, 3), (2, 5)], pairs);

    Ok(())
}

#[test]
fn match_adjacent_window_spans_multiple_ends() -> gap_index::Result<()> {
    let index = Index::new("abbbb")?;

    let pairs: Vec<_> = index.matches(b"a", b"b", 0, 2)?.collect();
    assert_eq!(vec![(0, 1), (0, 2), (0, 3)], pairs);

    Ok(())
}
