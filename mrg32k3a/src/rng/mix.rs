//! Stafford variant 13 finalizer
//!
//! Used only to expand a single 64-bit seed into six sub-seeds.

/// Scramble the bits of `z`.
///
/// The final `>> 1` keeps the top bit clear. It is not needed for the modulo
/// reduction but is part of the reference sequence.
///
/// # Example
/// ```
/// use mrg32k3a::stafford_mix13;
///
/// assert_eq!(stafford_mix13(0), 0);
/// assert_eq!(stafford_mix13(1), 3119036373970289394);
/// ```
#[inline]
pub fn stafford_mix13(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    (z >> 1) ^ (z >> 32)
}
