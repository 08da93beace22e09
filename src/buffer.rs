//! Generates the pseudo-random buffer that gets written to the sink.

use crate::error::Error;
use rand::Rng;

/// First printable ASCII code point (space).
pub const PRINTABLE_LO: u8 = 0x20;
/// Exclusive upper bound of the sampled range; `~` (0x7E) is never produced.
pub const PRINTABLE_HI: u8 = 0x7E;
/// The fixed final byte of every non-empty buffer.
pub const TERMINATOR: u8 = b'\n';

fn random_printable<R: Rng>(rng: &mut R) -> u8 {
    PRINTABLE_LO + rng.gen_range(0..PRINTABLE_HI - PRINTABLE_LO)
}

/// Produces a buffer of exactly `length` bytes: `length - 1` random printable
/// characters followed by the [`TERMINATOR`]. A `length` of zero yields an
/// empty buffer.
///
/// The backing memory is reserved fallibly, so a `length` the system cannot
/// satisfy turns into [`Error::AllocationFailure`] instead of aborting the
/// process.
///
/// ```
/// use big_buffer_write::buffer;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let buffer = buffer::generate(&mut rng, 16).unwrap();
/// assert_eq!(buffer.len(), 16);
/// assert_eq!(buffer.last(), Some(&b'\n'));
/// ```
pub fn generate<R: Rng>(rng: &mut R, length: usize) -> Result<Vec<u8>, Error> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(length)
        .map_err(|_| Error::AllocationFailure { requested: length })?;
    if length == 0 {
        return Ok(buffer);
    }
    for _ in 1..length {
        buffer.push(random_printable(rng));
    }
    buffer.push(TERMINATOR);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn generates_exactly_the_requested_number_of_bytes() {
        for &length in &[1, 2, 3, 10, 4096] {
            let buffer = generate(&mut rng(0), length).unwrap();
            assert_eq!(buffer.len(), length);
        }
    }

    #[test]
    fn a_length_of_zero_yields_an_empty_buffer() {
        let buffer = generate(&mut rng(0), 0).unwrap();
        assert_eq!(buffer, Vec::<u8>::new());
    }

    #[test]
    fn a_length_of_one_is_just_the_terminator() {
        let buffer = generate(&mut rng(0), 1).unwrap();
        assert_eq!(buffer, vec![TERMINATOR]);
    }

    #[test]
    fn the_last_byte_is_the_terminator() {
        let buffer = generate(&mut rng(7), 100).unwrap();
        assert_eq!(buffer.last(), Some(&TERMINATOR));
    }

    #[test]
    fn content_bytes_are_printable_ascii() {
        let buffer = generate(&mut rng(7), 64 * 1024).unwrap();
        let content = &buffer[..buffer.len() - 1];
        assert!(content
            .iter()
            .all(|byte| (PRINTABLE_LO..PRINTABLE_HI).contains(byte)));
    }

    #[test]
    fn the_tilde_character_is_never_produced() {
        let buffer = generate(&mut rng(11), 64 * 1024).unwrap();
        assert!(!buffer.contains(&PRINTABLE_HI));
    }

    #[test]
    fn the_terminator_only_occurs_at_the_end() {
        let buffer = generate(&mut rng(3), 8192).unwrap();
        let content = &buffer[..buffer.len() - 1];
        assert!(!content.contains(&TERMINATOR));
    }

    #[test]
    fn every_printable_value_eventually_appears() {
        let buffer = generate(&mut rng(5), 64 * 1024).unwrap();
        let mut seen: std::collections::BTreeSet<u8> = std::collections::BTreeSet::new();
        seen.extend(&buffer[..buffer.len() - 1]);
        assert_eq!(seen.len(), usize::from(PRINTABLE_HI - PRINTABLE_LO));
    }

    #[test]
    fn the_same_seed_reproduces_the_same_buffer() {
        let first = generate(&mut rng(42), 1024).unwrap();
        let second = generate(&mut rng(42), 1024).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_produce_different_buffers() {
        let first = generate(&mut rng(1), 1024).unwrap();
        let second = generate(&mut rng(2), 1024).unwrap();
        assert_ne!(first, second);
    }
}
