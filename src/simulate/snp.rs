//! Introduce random snps in working sequence

/* standard use */

/* crate use */
use anyhow::Result;

/* local use */
use crate::error::Simulate;
use crate::references::Genome;

/// Mutate `count` distinct positions of genome, new bases are lowercase and diffrent than previous.
///
/// Return coordinates of mutated positions.
pub fn add_snps<R>(genome: &mut Genome, count: usize, rng: &mut R) -> Result<Vec<i64>>
where
    R: rand::Rng,
{
    let available = genome.nucleotide_index.len();
    if count > available {
        anyhow::bail!(Simulate::TooManySnps {
            requested: count,
            available,
        });
    }

    let mut coordinates = Vec::with_capacity(count);
    for offset in rand::seq::index::sample(rng, available, count).iter() {
        let new_base = crate::random_base_diff(genome.sequence[offset], rng).to_ascii_lowercase();

        log::trace!(
            "snp at {} {} -> {}",
            genome.nucleotide_index[offset],
            genome.sequence[offset] as char,
            new_base as char
        );

        genome.sequence[offset] = new_base;
        coordinates.push(genome.nucleotide_index[offset]);
    }

    Ok(coordinates)
}
