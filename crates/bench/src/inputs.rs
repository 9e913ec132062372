use std::fmt;
use std::str::FromStr;

use rand::Rng;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Distribution {
    Random,
    Sorted,
    ReverseSorted,
    NearlySorted,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::Random,
    Distribution::Sorted,
    Distribution::ReverseSorted,
    Distribution::NearlySorted,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "RANDOM",
            Self::Sorted => "SORTED",
            Self::ReverseSorted => "REVERSE_SORTED",
            Self::NearlySorted => "NEARLY_SORTED",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownDistribution(pub String);

impl fmt::Display for UnknownDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown distribution `{}` (expected random, sorted, reverse-sorted or nearly-sorted)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDistribution {}

impl FromStr for Distribution {
    type Err = UnknownDistribution;

    /// Accepts the CSV labels as well as their kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "random" => Ok(Self::Random),
            "sorted" => Ok(Self::Sorted),
            "reverse-sorted" | "reverse" => Ok(Self::ReverseSorted),
            "nearly-sorted" | "nearly" => Ok(Self::NearlySorted),
            _ => Err(UnknownDistribution(s.to_owned())),
        }
    }
}

/// Builds an input of `size` keys:
///
/// * `Random`: uniform in `0..size * 10`
/// * `Sorted`: `0, 1, .., size - 1`
/// * `ReverseSorted`: `size, size - 1, .., 1`
/// * `NearlySorted`: `Sorted` with `size / 100` random position swaps
pub fn generate<R: Rng + ?Sized>(dist: Distribution, size: usize, rng: &mut R) -> Vec<i32> {
    let mut data = Vec::with_capacity(size);
    if size == 0 {
        return data;
    }

    match dist {
        Distribution::Random => {
            let max = (size as i32).saturating_mul(10);
            for _ in 0..size {
                data.push(rng.random_range(0..max));
            }
        }
        Distribution::Sorted => {
            data.extend(0..size as i32);
        }
        Distribution::ReverseSorted => {
            data.extend((1..=size as i32).rev());
        }
        Distribution::NearlySorted => {
            data.extend(0..size as i32);
            for _ in 0..size / 100 {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
        }
    }

    data
}
