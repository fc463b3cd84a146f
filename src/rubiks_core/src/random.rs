use fastrand::Rng;

/// Draws uniformly distributed samples from a fixed population.
#[derive(Debug, Clone)]
pub struct RandomGenerator<T: Copy, const N: usize> {
    population: [T; N],
    rng: Rng,
}

impl<T: Copy, const N: usize> RandomGenerator<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "Cannot draw from an empty population");

    /// A generator seeded from the system's entropy.
    #[must_use]
    pub fn new(population: [T; N]) -> Self {
        Self::with_rng(population, Rng::new())
    }

    /// A generator whose draws are fully determined by `seed`.
    #[must_use]
    pub fn with_seed(population: [T; N], seed: u64) -> Self {
        Self::with_rng(population, Rng::with_seed(seed))
    }

    #[must_use]
    pub fn with_rng(population: [T; N], rng: Rng) -> Self {
        let () = Self::NON_EMPTY;
        RandomGenerator { population, rng }
    }

    pub fn draw(&mut self) -> T {
        self.population[self.rng.usize(..N)]
    }
}
