//! Injectable source of uniform random draws.

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform random draws.
///
/// The round selector only ever asks for an index below a bound, so any
/// generator (or a scripted replay in tests) can stand in.
pub trait RandomSource {
    /// A uniformly distributed integer in `0..bound`. `bound` is never zero.
    fn uniform_int(&mut self, bound: usize) -> usize;

    /// A uniformly chosen element, or `None` for an empty slice.
    fn uniform_choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.uniform_int(items.len()))
    }
}

impl RandomSource for StdRng {
    fn uniform_int(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Replays a fixed list of indices.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    draws: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn uniform_int(&mut self, bound: usize) -> usize {
        let value = self.draws.pop_front().expect("scripted source exhausted");
        assert!(value < bound, "scripted draw {value} out of range 0..{bound}");
        value
    }
}
