use std::fmt;

use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// How cells are initialized when a matrix is built from its dimensions.
pub enum Fill<'a, T> {
    /// Every cell is the additive identity.
    Zero,
    /// Every cell holds the same value.
    Constant(T),
    /// Invoked once per cell, in row-major order.
    Generator(Box<dyn FnMut() -> T + 'a>),
}

impl<'a, T> Fill<'a, T> {
    pub fn generator<F>(f: F) -> Self
    where
        F: FnMut() -> T + 'a,
    {
        Fill::Generator(Box::new(f))
    }

    /// Draw an independent value for every cell from `rng`.
    ///
    /// For floating point element types this samples uniformly from `[0, 1)`.
    pub fn random<R>(mut rng: R) -> Self
    where
        R: Rng + 'a,
        Standard: Distribution<T>,
    {
        Fill::Generator(Box::new(move || rng.gen()))
    }

    pub(crate) fn materialize(self, len: usize) -> Vec<T>
    where
        T: Copy + Zero,
    {
        match self {
            Fill::Zero => vec![T::zero(); len],
            Fill::Constant(value) => vec![value; len],
            Fill::Generator(mut f) => (0..len).map(|_| f()).collect(),
        }
    }
}

impl<'a, T> Default for Fill<'a, T> {
    fn default() -> Self {
        Fill::Zero
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Fill<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Zero => write!(f, "Zero"),
            Fill::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Fill::Generator(_) => write!(f, "Generator(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_is_zero() {
        let fill: Fill<'_, f64> = Fill::default();
        assert_eq!(fill.materialize(3), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn generator_runs_once_per_cell() {
        let mut calls = 0;
        let values = Fill::generator(|| {
            calls += 1;
            calls
        })
        .materialize(4);
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(calls, 4);
    }

    #[test]
    fn random_values_are_independent() {
        let values: Vec<f64> = Fill::random(StdRng::seed_from_u64(7)).materialize(8);
        assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
        assert!(values.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn debug_hides_generator() {
        let fill: Fill<'_, i32> = Fill::generator(|| 1);
        assert_eq!(format!("{:?}", fill), "Generator(..)");
        assert_eq!(format!("{:?}", Fill::Constant(2)), "Constant(2)");
    }
}
