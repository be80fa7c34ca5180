//! Short token derivation.
//!
//! Tokens are the 32-bit FNV-1a hash of the long URL's bytes, rendered as
//! eight lowercase hex characters. The same long URL always yields the same
//! token. Distinct URLs can collide; collisions are not detected.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Length of every generated token.
pub const TOKEN_LENGTH: usize = 8;

fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, b| {
        (hash ^ u32::from(*b)).wrapping_mul(FNV_PRIME)
    })
}

/// Derives the short token for a long URL.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(generate_token(""), "811c9dc5");
/// assert_eq!(generate_token("a"), "e40c292c");
/// ```
pub fn generate_token(long_url: &str) -> String {
    hex::encode(fnv1a_32(long_url.as_bytes()).to_be_bytes())
}

/// Returns whether `candidate` has the shape of a generated token.
pub fn is_token_shaped(candidate: &str) -> bool {
    candidate.len() == TOKEN_LENGTH
        && candidate
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
