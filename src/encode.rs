//! Base58 encoding module for neo58.
//! Bitcoin alphabet, leading zero bytes map 1:1 to leading '1's.
//! Repeated in-place long division of the base-256 number by 58; O(n^2) in input length,
//! which is fine for identifier-sized inputs.
use crate::divmod::divmod;
use crate::{ALPHABET, ENCODED_ZERO};

/// Encodes bytes as a Base58 string (no checksum).
///
/// Never fails; the empty slice encodes to the empty string.
#[must_use]
pub fn encode(input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    // Divided in place, so work on our own copy.
    let mut number = input.to_vec();
    // log58(256) < 2, so twice the input length always suffices.
    let mut encoded = vec![0u8; input.len() * 2];
    let mut output_start = encoded.len();
    let mut input_start = zeros;
    while input_start < number.len() {
        output_start -= 1;
        encoded[output_start] = ALPHABET[usize::from(divmod(&mut number, input_start, 256, 58))];
        if number[input_start] == 0 {
            input_start += 1;
        }
    }
    // Drop zero digits the division produced, then restore exactly one per leading zero byte.
    while output_start < encoded.len() && encoded[output_start] == ENCODED_ZERO {
        output_start += 1;
    }
    let mut result = String::with_capacity(zeros + encoded.len() - output_start);
    result.extend(std::iter::repeat_n(char::from(ENCODED_ZERO), zeros));
    result.extend(encoded[output_start..].iter().map(|&b| char::from(b)));
    result
}
