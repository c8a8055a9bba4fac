use gap_index::{Index, MatchPair};
use rand::prelude::*;
use test_log::test;

/// Triple-nested scan, the ground truth for small texts
fn naive_matches(
    text: &[u8],
    s1: &[u8],
    s2: &[u8],
    min_gap: usize,
    max_gap: usize,
) -> Vec<MatchPair> {
    let mut pairs = Vec::new();

    for a in 0..text.len() {
        if !text[a..].starts_with(s1) {
            continue;
        }

        for b_start in (a + s1.len())..text.len() {
            if !text[b_start..].starts_with(s2) {
                continue;
            }

            let gap = b_start - (a + s1.len());

            if gap >= min_gap && gap <= max_gap {
                pairs.push((a, b_start + s2.len() - 1));
            }
        }
    }

    pairs
}

fn check(text: &[u8], s1: &[u8], s2: &[u8], min_gap: usize, max_gap: usize) {
    let expected = naive_matches(text, s1, s2, min_gap, max_gap);

    let index = Index::new(text).expect("text contains no NUL byte");

    // the DFS stream agrees pair-for-pair, in (a, b) order
    let dfs: Vec<_> = index
        .matches(s1, s2, min_gap, max_gap)
        .expect("query inputs are valid")
        .collect();

    assert_eq!(
        expected, dfs,
        "dfs mismatch: text={text:?} s1={s1:?} s2={s2:?} gaps=[{min_gap}, {max_gap}]"
    );

    // the reference stream agrees as a multiset
    let mut reference: Vec<_> = index
        .matches_ref(s1, s2, min_gap, max_gap)
        .expect("query inputs are valid")
        .collect();
    reference.sort_unstable();

    assert_eq!(
        expected, reference,
        "reference mismatch: text={text:?} s1={s1:?} s2={s2:?} gaps=[{min_gap}, {max_gap}]"
    );
}

fn random_text(rng: &mut StdRng, alphabet: &[u8], len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Samples a pattern that actually occurs in the text
fn random_substring<'a>(rng: &mut StdRng, text: &'a [u8]) -> &'a [u8] {
    let start = rng.random_range(0..text.len());
    let max_len = (text.len() - start).min(3);
    let len = rng.random_range(1..=max_len);
    &text[start..start + len]
}

#[test]
fn match_oracle_fuzz_binary_alphabet() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);

    for _ in 0..150 {
        let len = rng.random_range(1..120);
        let text = random_text(&mut rng, b"ab", len);

        let s1 = random_substring(&mut rng, &text).to_vec();
        let s2 = random_substring(&mut rng, &text).to_vec();

        let min_gap = rng.random_range(0..8);
        let max_gap = min_gap + rng.random_range(0..20);

        check(&text, &s1, &s2, min_gap, max_gap);
    }
}

#[test]
fn match_oracle_fuzz_wider_alphabet() {
    let mut rng = StdRng::seed_from_u64(0xCAFE);

    for _ in 0..150 {
        let len = rng.random_range(1..200);
        let text = random_text(&mut rng, b"abcx ", len);

        let s1 = random_substring(&mut rng, &text).to_vec();
        let s2 = random_substring(&mut rng, &text).to_vec();

        let min_gap = rng.random_range(0..12);
        let max_gap = min_gap + rng.random_range(0..30);

        check(&text, &s1, &s2, min_gap, max_gap);
    }
}

#[test]
fn match_oracle_fuzz_absent_patterns() {
    let mut rng = StdRng::seed_from_u64(0xD1CE);

    for _ in 0..50 {
        let len = rng.random_range(1..80);
        let text = random_text(&mut rng, b"ab", len);

        // "z" never occurs
        check(&text, b"z", b"a", 0, 10);
        check(&text, b"a", b"z", 0, 10);

        let s1 = random_substring(&mut rng, &text).to_vec();
        check(&text, &s1, b"zz", 0, 5);
    }
}

#[test]
fn match_oracle_fuzz_gap_shapes() {
    // gap interval shapes mirroring the classic sweep: wide, prefix,
    // exact, doubling and shifted-narrow windows
    let mut rng = StdRng::seed_from_u64(0xF00D);

    let text = random_text(&mut rng, b"ab", 300);

    for i in (0..30).step_by(3) {
        for (min_gap, max_gap) in [
            (i, 30),
            (0, i),
            (i, i),
            (i, 2 * i),
            (10 * i, 10 * i + 3),
            (10 * i, 10 * i + 10),
        ] {
            check(&text, b"a", b"b", min_gap, max_gap);
            check(&text, b"ab", b"a", min_gap, max_gap);
            check(&text, b"b", b"ba", min_gap, max_gap);
        }
    }
}
