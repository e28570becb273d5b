//! Model to add substitution error on read

/* standard use */

/* crate use */

/* local use */

/// Per base substitution error model
pub struct Error {
    rate: f64,
}

impl Error {
    /// Create model from a probability of substitution by base, rate must be in [0, 1)
    pub fn new(rate: f64) -> Self {
        debug_assert!((0.0..1.0).contains(&rate));

        Self { rate }
    }

    /// Probability of substitution by base
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Return true if model can change a sequence
    pub fn is_active(&self) -> bool {
        self.rate > 0.0
    }

    /// Substitute each base with rate probability, substitute base is diffrent than original
    pub fn add_errors<R>(&self, seq: &[u8], rng: &mut R) -> Vec<u8>
    where
        R: rand::Rng,
    {
        seq.iter()
            .map(|nuc| {
                if rng.gen_bool(self.rate) {
                    crate::random_base_diff(*nuc, rng)
                } else {
                    *nuc
                }
            })
            .collect()
    }
}
