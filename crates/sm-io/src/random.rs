use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sm_matrix::{Buffer, Element};

/// Fill an N×N buffer with uniform 0/1 entries.
pub fn random_binary<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Buffer {
    let mut buffer = Buffer::zeros(dimension);
    for cell in buffer.as_mut_slice() {
        *cell = rng.gen_range(0..2) as Element;
    }
    buffer
}

/// Two random 0/1 matrices of the same dimension.
///
/// With a seed the pair is reproducible; without one the generator is
/// seeded from OS entropy.
pub fn random_pair(dimension: usize, seed: Option<u64>) -> (Buffer, Buffer) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let a = random_binary(dimension, &mut rng);
    let b = random_binary(dimension, &mut rng);
    (a, b)
}
