// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Builds the suffix array of `text` by prefix doubling, O(n log^2 n)
///
/// `text` must already be sentinel-terminated, so every suffix is distinct
/// and the returned array is a permutation of `0..text.len()`.
pub fn suffix_array(text: &[u8]) -> Vec<usize> {
    let n = text.len();

    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = text.iter().map(|&byte| usize::from(byte)).collect();
    let mut tmp = vec![0_usize; n];

    let mut k = 1;

    while k < n {
        // order by (rank of first half, rank of second half); suffixes too
        // short for a second half sort first (None < Some)
        let key = |i: usize| (rank.get(i).copied(), rank.get(i + k).copied());

        sa.sort_unstable_by_key(|&i| key(i));

        let mut prev_key = key(*sa.first().expect("suffix array should be non-empty"));
        let mut next_rank = 0;

        for &suffix in &sa {
            let cur_key = key(suffix);

            if cur_key != prev_key {
                next_rank += 1;
                prev_key = cur_key;
            }

            *tmp.get_mut(suffix).expect("should be in bounds") = next_rank;
        }

        std::mem::swap(&mut rank, &mut tmp);

        // all ranks distinct, the order is final
        if next_rank == n - 1 {
            break;
        }

        k *= 2;
    }

    sa
}
