/* crate use */

/* module declaration */
pub mod amplicons;
pub mod cli;
pub mod error;
pub mod model;
pub mod references;
pub mod simulate;
pub mod variant;

const NUCS: [u8; 4] = [b'A', b'C', b'T', b'G'];

/// Get a random base
pub fn random_base<R>(rng: &mut R) -> u8
where
    R: rand::Rng,
{
    NUCS[rng.gen_range(0..=3)]
}

/// Get a random base diffrent than nuc, comparison ignore case
pub fn random_base_diff<R>(nuc: u8, rng: &mut R) -> u8
where
    R: rand::Rng,
{
    let nuc = nuc.to_ascii_uppercase();

    loop {
        let idx = rng.gen_range(0..=3);

        if NUCS[idx] != nuc {
            return NUCS[idx];
        }
    }
}

/// Get random sequences
pub fn random_seq<R>(length: usize, rng: &mut R) -> Vec<u8>
where
    R: rand::Rng,
{
    (0..length).map(|_| random_base(rng)).collect()
}

/// Reverse complement of a sequence, symbols outside ACGTN keep their value
pub fn revcomp(seq: &[u8]) -> Vec<u8> {
    bio::alphabets::dna::revcomp(seq)
}
