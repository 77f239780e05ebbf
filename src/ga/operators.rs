//! Variation operators for fixed-length slot genomes.
//!
//! - [`two_point_crossover`]: swap the segment between two cut points
//! - [`resample_mutation`]: redraw each gene independently with a fixed rate

use rand::Rng;

/// Two-point crossover in place.
///
/// Picks cut points `1 <= start < end <= len` and swaps `a[start..end]`
/// with `b[start..end]`. Returns the cut points, or `None` when the genomes
/// are too short to cut (fewer than 2 genes), in which case nothing changes.
///
/// # Panics
/// Panics if the genomes have different lengths.
pub fn two_point_crossover<T, R: Rng>(
    a: &mut [T],
    b: &mut [T],
    rng: &mut R,
) -> Option<(usize, usize)> {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    let n = a.len();
    if n < 2 {
        return None;
    }

    let mut start = rng.random_range(1..=n);
    let mut end = rng.random_range(1..n);
    if end >= start {
        end += 1;
    } else {
        std::mem::swap(&mut start, &mut end);
    }

    a[start..end].swap_with_slice(&mut b[start..end]);
    Some((start, end))
}

/// Replaces each gene with `sample(rng)` with probability `rate`.
///
/// Returns the number of genes redrawn.
pub fn resample_mutation<T, R, F>(genes: &mut [T], rate: f64, rng: &mut R, mut sample: F) -> usize
where
    R: Rng,
    F: FnMut(&mut R) -> T,
{
    let mut redrawn = 0;
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = sample(rng);
            redrawn += 1;
        }
    }
    redrawn
}
