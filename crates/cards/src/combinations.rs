// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lazy k-subsets enumeration.
use std::iter::FusedIterator;

/// Returns the binomial coefficient for n choose k.
///
/// Saturates to `usize::MAX` when the coefficient doesn't fit in a usize.
pub const fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let k = if k > n - k { n - k } else { k };
    let mut r = 1u128;
    let mut i = 0;
    while i < k {
        // r * (n - i) is always a multiple of (i + 1), r <= usize::MAX so
        // the product fits in a u128.
        r = r * (n - i) as u128 / (i + 1) as u128;
        if r > usize::MAX as u128 {
            return usize::MAX;
        }
        i += 1;
    }

    r as usize
}

/// Uses the combinatorial number system to convert nth to a K-combination
/// in colex order (see Theorem L pg. 260 Knuth 4a).
///
/// The caller must ensure nth is less than the number of K-combinations.
fn nth_ksubset<const K: usize>(mut nth: usize) -> [usize; K] {
    let mut out = [0; K];
    for j in (0..K).rev() {
        let mut c = j;
        while nck(c, j + 1) <= nth {
            c += 1;
        }

        c -= 1;
        out[j] = c;
        nth -= nck(c, j + 1);
    }

    out
}

/// An iterator over all the K-subsets of a slice.
///
/// Subsets are generated lazily in colex order of their positions, each
/// subset is returned as an array so there is no allocation per item. The
/// iterator length is [nck] of the slice length, so it saturates for slices
/// with more than `usize::MAX` subsets:
///
/// ```
/// # use showdown_cards::Combinations;
/// let items = [1, 2, 3, 4];
/// let pairs = Combinations::<_, 2>::new(&items).collect::<Vec<_>>();
/// assert_eq!(pairs, [[1, 2], [1, 3], [2, 3], [1, 4], [2, 4], [3, 4]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<'a, T, const K: usize> {
    items: &'a [T],
    indices: [usize; K],
    remaining: usize,
}

impl<'a, T: Copy, const K: usize> Combinations<'a, T, K> {
    /// Creates an iterator over all K-subsets of `items`.
    pub fn new(items: &'a [T]) -> Self {
        Self::starting_at(items, 0)
    }

    /// Creates an iterator that starts from the nth K-subset of `items`.
    ///
    /// This is used to split the subsets in contiguous ranges that can be
    /// processed by parallel tasks.
    pub fn starting_at(items: &'a [T], nth: usize) -> Self {
        let total = nck(items.len(), K);
        if nth >= total {
            return Self {
                items,
                indices: [0; K],
                remaining: 0,
            };
        }

        Self {
            items,
            indices: nth_ksubset::<K>(nth),
            remaining: total - nth,
        }
    }

    // Algorithm L from TAOCP 4a, the position after the last index acts as
    // the sentinel with value n.
    fn advance(&mut self) {
        let n = self.items.len();

        let mut j = 0;
        while j < K {
            let next = if j + 1 < K { self.indices[j + 1] } else { n };
            if self.indices[j] + 1 != next {
                break;
            }

            self.indices[j] = j;
            j += 1;
        }

        if j < K {
            self.indices[j] += 1;
        }
    }
}

impl<T: Copy, const K: usize> Iterator for Combinations<'_, T, K> {
    type Item = [T; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let subset = self.indices.map(|idx| self.items[idx]);

        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy, const K: usize> ExactSizeIterator for Combinations<'_, T, K> {}

impl<T: Copy, const K: usize> FusedIterator for Combinations<'_, T, K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 7, 21, 35, 35, 21, 7, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(7, k), v));

        assert_eq!(nck(0, 0), 1);
    }

    #[test]
    fn nck_large() {
        // The intermediate product overflows 64 bits but the result doesn't.
        let expected = usize::try_from(6_323_907_234_281_253_000u128).unwrap_or(usize::MAX);
        assert_eq!(nck(15_000, 5), expected);
        assert_eq!(nck(15_000, 14_995), expected);

        let expected = usize::try_from(26_653_335_666_500_004_000u128).unwrap_or(usize::MAX);
        assert_eq!(nck(20_000, 5), expected);

        let items = vec![0u16; 20_000];
        assert_eq!(Combinations::<_, 5>::new(&items).len(), expected);
    }

    #[test]
    fn seven_choose_five() {
        let items = (0..7).collect::<Vec<_>>();
        let subsets = Combinations::<_, 5>::new(&items).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 21);

        for s in &subsets {
            assert!(s.windows(2).all(|w| w[0] < w[1]));
        }

        let mut sorted = subsets.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 21);
    }

    #[test]
    fn exact_size() {
        let items = (0..10).collect::<Vec<_>>();
        let mut it = Combinations::<_, 3>::new(&items);
        assert_eq!(it.len(), 120);

        it.next();
        it.next();
        assert_eq!(it.len(), 118);
        assert_eq!(it.count(), 118);
    }

    #[test]
    fn short_and_empty() {
        let items = [1, 2, 3];
        assert_eq!(Combinations::<_, 5>::new(&items).count(), 0);
        assert_eq!(Combinations::<_, 3>::new(&items).next(), Some([1, 2, 3]));

        let empty = Combinations::<_, 0>::new(&items).collect::<Vec<_>>();
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn starting_at_matches_skip() {
        let items = (0..12).collect::<Vec<_>>();
        let total = nck(12, 4);

        for nth in [0, 1, 17, 200, total - 1] {
            let from_skip = Combinations::<_, 4>::new(&items)
                .skip(nth)
                .collect::<Vec<_>>();
            let from_nth = Combinations::<_, 4>::starting_at(&items, nth).collect::<Vec<_>>();
            assert_eq!(from_skip, from_nth);
        }

        assert_eq!(Combinations::<_, 4>::starting_at(&items, total).count(), 0);
    }
}
