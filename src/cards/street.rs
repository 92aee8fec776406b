use crate::error::NutsError;

/// How much of the community board has been dealt.
///
/// Omaha nuts queries only make sense once the flop is out, so there is
/// no preflop street here.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// community cards still to come before showdown
    pub const fn n_pending(&self) -> usize {
        match self {
            Self::Flop => 2,
            Self::Turn => 1,
            Self::Rive => 0,
        }
    }
}

impl TryFrom<usize> for Street {
    type Error = NutsError;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            n => Err(NutsError::BoardSize(n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl crate::Arbitrary for Street {
    fn random() -> Self {
        use rand::Rng;
        let streets = Self::all();
        streets[rand::rng().random_range(0..streets.len())]
    }
}
