//! Exact round-half-away-from-zero support.
//!
//! Rust's float formatting rounds correctly but breaks exact ties to even.
//! Labels must break ties away from zero, so ties are detected on the binary
//! representation and resolved on the exact decimal digits instead.

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;

/// Splits a finite, non-zero magnitude into `odd * 2^exponent` with `odd` odd.
fn odd_mantissa(magnitude: f64) -> (u64, i32) {
    let bits = magnitude.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << MANTISSA_BITS) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, 1 - EXPONENT_BIAS)
    } else {
        (fraction | (1u64 << MANTISSA_BITS), biased - EXPONENT_BIAS)
    };
    let shift = mantissa.trailing_zeros();
    (mantissa >> shift, exponent + shift as i32)
}

/// True when `value` sits exactly halfway between two consecutive multiples
/// of `10^-decimals`. `decimals` may be negative (rounding left of the point).
pub fn is_halfway(value: f64, decimals: i32) -> bool {
    if value == 0.0 || !value.is_finite() {
        return false;
    }
    let (odd, exponent) = odd_mantissa(value.abs());
    // 2 * value * 10^decimals must be an odd integer.
    if exponent + decimals + 1 != 0 {
        return false;
    }
    if decimals >= 0 {
        return true;
    }
    match 5u64.checked_pow(decimals.unsigned_abs()) {
        Some(divisor) => odd % divisor == 0,
        None => false,
    }
}

/// Adds one unit in the last place to a plain decimal digit string,
/// propagating the carry across the decimal point.
pub fn increment_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            b'0'..=b'8' => {
                *byte += 1;
                carry = false;
                break;
            }
            _ => break,
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    String::from_utf8(bytes).unwrap_or_else(|_| digits.to_string())
}

/// Rounds the exact decimal string of a tie (its last digit is the `5`)
/// away from zero, dropping that digit.
pub fn round_tie_up(exact: &str) -> String {
    let mut truncated = exact.to_string();
    truncated.pop();
    if truncated.ends_with('.') {
        truncated.pop();
    }
    increment_last_digit(&truncated)
}
