use super::combinations::binomial;
use super::hand::Hand;

/// HandIterator enumerates every n-card Hand that avoids a mask of dead cards.
///
/// It holds a single u64 of the current draw and steps to the next bit
/// pattern with the same popcount (Gosper's hack), skipping any pattern
/// that touches the mask. So it is
/// - allocation free, each step is a handful of bitwise ops
/// - deterministic, always the same colexicographic order
/// - restartable, a fresh ::from() starts over
///
/// With n = 1 it walks the unseen turn or river cards; with n = 2 it walks
/// every two-card runout and every rival pair of hole cards.
pub struct HandIterator {
    next: u64,
    mask: u64,
    remaining: usize,
}

impl HandIterator {
    fn exhausted(&self) -> bool {
        self.next == 0 || (64 - 52) > self.next.leading_zeros()
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_011 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.remaining -= 1;
            self.advance();
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// C(52 - |mask|, n) draws in total
impl ExactSizeIterator for HandIterator {}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let live = (!u64::from(mask) & Hand::mask()).count_ones() as usize;
        assert!(n > 0 && n <= live);
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
            remaining: binomial(live, n),
        };
        while this.next & this.mask > 0 && !this.exhausted() {
            this.next = this.permute();
        }
        this
    }
}
