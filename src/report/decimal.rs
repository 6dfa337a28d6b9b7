pub const DECIMAL_SEPARATOR: char = ',';
pub const NOT_A_NUMBER: &str = "—";

// Finite f64 values at or above 2^-28 expand exactly within this many digits.
const EXACT_DIGITS: usize = 80;

/// Two-decimal display value with a decimal comma.
pub fn fmt_score(value: f64) -> String {
    fmt_fixed(value, 2)
}

/// Fixed-point formatting that rounds half away from zero on the exact
/// binary value, the way `Number.prototype.toFixed` does.
pub fn fmt_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return NOT_A_NUMBER.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|next| *next >= b'5');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() && kept.iter().any(|digit| *digit != 0) {
        out.push('-');
    }
    for (index, digit) in kept.iter().enumerate() {
        if index == int_len {
            out.push(DECIMAL_SEPARATOR);
        }
        out.push(char::from(b'0' + digit));
    }
    out
}
