use super::combinations::combinations;
use super::rank::Rank;
use super::ranking::Ranking;
use std::sync::LazyLock;

/// the ten straights as 13-bit rank masks, ace-high down to the wheel
const STRAIGHTS: [u16; 10] = [
    0b1111100000000,
    0b0111110000000,
    0b0011111000000,
    0b0001111100000,
    0b0000111110000,
    0b0000011111000,
    0b0000001111100,
    0b0000000111110,
    0b0000000011111,
    0b1000000001111,
];

static LOOKUP: LazyLock<Lookup> = LazyLock::new(Lookup::generate);

/// Perfect-hash tables for 5-card evaluation.
///
/// - `flushes` rank mask -> hand rank, for five suited cards
/// - `unique5` rank mask -> hand rank, for five distinct offsuit ranks
/// - `products` ascending prime products of every paired rank multiset
/// - `values` hand rank of `products[i]`
///
/// Generated once per process on first use and read-only from then on,
/// so any number of threads can share the one `&'static` copy.
pub struct Lookup {
    flushes: [u16; Self::N_MASKS],
    unique5: [u16; Self::N_MASKS],
    products: Vec<u32>,
    values: Vec<u16>,
}

impl Lookup {
    pub const N_MASKS: usize = 1 << 13;
    pub const N_PRODUCTS: usize = 4888;

    pub fn get() -> &'static Self {
        &LOOKUP
    }

    /// straight flush or flush rank, zero if the mask is not 5 distinct ranks
    pub fn flush(&self, mask: u16) -> u16 {
        self.flushes[mask as usize]
    }
    /// straight or high card rank, zero unless the mask has exactly 5 bits
    pub fn unique(&self, mask: u16) -> u16 {
        self.unique5[mask as usize]
    }
    /// index of an exact prime product
    pub fn find(&self, product: u32) -> Option<usize> {
        self.products.binary_search(&product).ok()
    }
    pub fn value(&self, index: usize) -> u16 {
        self.values[index]
    }

    fn generate() -> Self {
        let (flushes, unique5) = Self::distinct();
        let (products, values) = Self::paired().into_iter().unzip();
        log::debug!("generated hand evaluation lookup tables");
        Self {
            flushes,
            unique5,
            products,
            values,
        }
    }

    /// five distinct ranks: straights first, then every other mask
    /// from the highest to the lowest, which is exactly kicker order
    fn distinct() -> ([u16; Self::N_MASKS], [u16; Self::N_MASKS]) {
        let mut flushes = [0u16; Self::N_MASKS];
        let mut unique5 = [0u16; Self::N_MASKS];
        let straight = Ranking::Straight.range();
        let flush = Ranking::Flush.range();
        let nothing = Ranking::HighCard.range();
        for ((mask, sf), st) in STRAIGHTS
            .iter()
            .zip(Ranking::StraightFlush.range())
            .zip(straight)
        {
            flushes[*mask as usize] = sf;
            unique5[*mask as usize] = st;
        }
        let masks = (0..Self::N_MASKS as u16)
            .rev()
            .filter(|mask| mask.count_ones() == 5)
            .filter(|mask| !STRAIGHTS.contains(mask));
        for ((mask, fl), hc) in masks.zip(flush).zip(nothing) {
            flushes[mask as usize] = fl;
            unique5[mask as usize] = hc;
        }
        (flushes, unique5)
    }

    /// any repeated rank: each category enumerated strongest first,
    /// tagged with its band of ranks, then sorted by product for searching
    fn paired() -> Vec<(u32, u16)> {
        let ranks = Self::descending();
        let except = |skip: &[Rank]| {
            ranks
                .iter()
                .copied()
                .filter(|r| !skip.contains(r))
                .collect::<Vec<Rank>>()
        };
        let mut quads = Vec::new();
        let mut boats = Vec::new();
        let mut trips = Vec::new();
        let mut twos = Vec::new();
        let mut ones = Vec::new();
        for q in ranks {
            for k in except(&[q]) {
                quads.push(product([q, q, q, q, k]));
            }
        }
        for t in ranks {
            for p in except(&[t]) {
                boats.push(product([t, t, t, p, p]));
            }
        }
        for t in ranks {
            let kickers = except(&[t]);
            for [a, b] in combinations::<_, 2>(&kickers) {
                trips.push(product([t, t, t, a, b]));
            }
        }
        for [hi, lo] in combinations::<_, 2>(&ranks) {
            for k in except(&[hi, lo]) {
                twos.push(product([hi, hi, lo, lo, k]));
            }
        }
        for p in ranks {
            let kickers = except(&[p]);
            for [a, b, c] in combinations::<_, 3>(&kickers) {
                ones.push(product([p, p, a, b, c]));
            }
        }
        let mut table = [
            (Ranking::FourOAK, quads),
            (Ranking::FullHouse, boats),
            (Ranking::ThreeOAK, trips),
            (Ranking::TwoPair, twos),
            (Ranking::OnePair, ones),
        ]
        .into_iter()
        .inspect(|(ranking, products)| assert_eq!(ranking.classes(), products.len()))
        .flat_map(|(ranking, products)| products.into_iter().zip(ranking.range()))
        .collect::<Vec<(u32, u16)>>();
        table.sort_unstable_by_key(|(product, _)| *product);
        assert_eq!(table.len(), Self::N_PRODUCTS);
        table
    }

    fn descending() -> [Rank; 13] {
        let mut ranks = Rank::all();
        ranks.reverse();
        ranks
    }
}

fn product(ranks: [Rank; 5]) -> u32 {
    ranks.iter().map(|r| r.prime() as u32).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_are_sorted_and_distinct() {
        let lookup = Lookup::get();
        assert_eq!(lookup.products.len(), Lookup::N_PRODUCTS);
        assert_eq!(lookup.values.len(), Lookup::N_PRODUCTS);
        assert!(lookup.products.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_rank_assigned_once() {
        let lookup = Lookup::get();
        let mut ranks = lookup
            .flushes
            .iter()
            .chain(lookup.unique5.iter())
            .chain(lookup.values.iter())
            .copied()
            .filter(|&r| r != 0)
            .collect::<Vec<u16>>();
        ranks.sort();
        assert_eq!(ranks, (1..=7462).collect::<Vec<u16>>());
    }

    #[test]
    fn five_bit_masks_only() {
        let lookup = Lookup::get();
        for mask in 0..Lookup::N_MASKS as u16 {
            let five = mask.count_ones() == 5;
            assert_eq!(five, lookup.flush(mask) != 0);
            assert_eq!(five, lookup.unique(mask) != 0);
        }
    }

    #[test]
    fn known_entries() {
        let lookup = Lookup::get();
        assert_eq!(lookup.flush(0b1111100000000), 1);
        assert_eq!(lookup.flush(0b1000000001111), 10);
        assert_eq!(lookup.flush(0b1111010000000), 323);
        assert_eq!(lookup.unique(0b1111100000000), 1600);
        assert_eq!(lookup.unique(0b0000000101111), 7462);
        let aces_full = product([Rank::Ace, Rank::Ace, Rank::Ace, Rank::King, Rank::King]);
        assert_eq!(lookup.find(aces_full).map(|i| lookup.value(i)), Some(167));
        assert_eq!(lookup.find(41 * 41 * 41 * 41 * 41), None);
    }
}
