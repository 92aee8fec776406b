/// Every K-subset of a slice, in lexicographic order of indices.
///
/// Items are yielded as `[T; K]` arrays so that nothing is allocated per
/// subset; the only state is K indices into the borrowed slice. Order within
/// a subset follows the slice. A fresh iterator restarts the enumeration.
///
/// This is how Omaha hands get assembled: 3 of the board times 2 of the hole.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T, const K: usize> {
    items: &'a [T],
    index: [usize; K],
    remaining: usize,
}

impl<'a, T: Copy, const K: usize> Combinations<'a, T, K> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            index: std::array::from_fn(|i| i),
            remaining: binomial(items.len(), K),
        }
    }

    /// move the rightmost index that still has room, reset everything right of it
    fn advance(&mut self) {
        let n = self.items.len();
        if let Some(i) = (0..K).rev().find(|&i| self.index[i] < n - K + i) {
            self.index[i] += 1;
            for j in i + 1..K {
                self.index[j] = self.index[j - 1] + 1;
            }
        }
    }
}

impl<'a, T: Copy, const K: usize> Iterator for Combinations<'a, T, K> {
    type Item = [T; K];
    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining {
            0 => None,
            _ => {
                let subset = std::array::from_fn(|j| self.items[self.index[j]]);
                self.remaining -= 1;
                self.advance();
                Some(subset)
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Copy, const K: usize> ExactSizeIterator for Combinations<'a, T, K> {}

/// shorthand for `Combinations::new`
pub fn combinations<T: Copy, const K: usize>(items: &[T]) -> Combinations<'_, T, K> {
    Combinations::new(items)
}

/// C(n, k), zero when k > n
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut x = 1;
    let mut i = 0;
    while i < k {
        x = x * (n - i) / (i + 1);
        i += 1;
    }
    x
}
