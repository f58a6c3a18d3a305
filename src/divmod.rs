//! Long division over a digit buffer, shared by encode (base 256 -> 58) and decode
//! (base 58 -> 256).

/// Divides the big-endian number held in `number[first_digit..]` (digits in `base`) by
/// `divisor` in place and returns the remainder.
///
/// Each element must already be in `[0, base)`; quotient digits are written back in the
/// same base. Only the pairs (256, 58) and (58, 256) are used by this crate.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn divmod(number: &mut [u8], first_digit: usize, base: u32, divisor: u32) -> u8 {
    debug_assert!(base <= 256 && divisor <= 256);
    // remainder < divisor and digit < base, so remainder * base + digit < 58 * 256 = 14_848
    // in both directions. A u32 accumulator never wraps.
    let mut remainder = 0u32;
    for digit in &mut number[first_digit..] {
        let temp = remainder * base + u32::from(*digit);
        // temp / divisor < base <= 256
        *digit = (temp / divisor) as u8;
        remainder = temp % divisor;
    }
    remainder as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_base256_by_58() {
        // 0x0100 = 256 = 4 * 58 + 24
        let mut num = [1u8, 0];
        assert_eq!(divmod(&mut num, 0, 256, 58), 24);
        assert_eq!(num, [0, 4]);
    }

    #[test]
    fn divides_base58_by_256() {
        // digits [1, 0] in base 58 = 58 -> 58 / 256 = 0 rem 58
        let mut num = [1u8, 0];
        assert_eq!(divmod(&mut num, 0, 58, 256), 58);
        assert_eq!(num, [0, 0]);
        // [57, 57, 57] = 195111 = 762 * 256 + 39
        let mut num = [57u8, 57, 57];
        assert_eq!(divmod(&mut num, 0, 58, 256), 39);
        // 762 in base 58 = 13 * 58 + 8
        assert_eq!(num, [0, 13, 8]);
    }

    #[test]
    fn respects_first_digit_offset() {
        let mut num = [0xFFu8, 0, 58];
        assert_eq!(divmod(&mut num, 2, 256, 58), 0);
        assert_eq!(num, [0xFF, 0, 1]);
    }

    #[test]
    fn max_accumulator_fits() {
        // Worst case per step: remainder 57, digit 255.
        let mut num = [0xFFu8; 64];
        let rem = divmod(&mut num, 0, 256, 58);
        assert!(rem < 58);
        let mut num = [57u8; 64];
        let _ = divmod(&mut num, 0, 58, 256);
        assert!(num.iter().all(|&d| d < 58));
    }
}
