//! Number formatting for report text.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal number formatter with fraction-digit bounds.
///
/// Values are rounded half away from zero on their shortest decimal
/// representation, so a value written as `1.005` displays as `1.01` with two
/// fraction digits. Trailing zeros are trimmed down to the minimum number of
/// fraction digits.
///
/// # Example
///
/// ```
/// use cad_region::NumberFormat;
///
/// let format = NumberFormat::default();
/// assert_eq!(format.format(1.005), "1.01");
/// assert_eq!(format.format(2.5), "2.5");
///
/// let whole = format.clone().with_max_fraction_digits(0).with_grouping(true);
/// assert_eq!(whole.format(12_345.6), "12,346");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormat {
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    grouping: bool,
}

impl NumberFormat {
    /// Create a formatter with the given fraction-digit bounds.
    ///
    /// `min` is lowered to `max` if it exceeds it.
    #[must_use]
    pub fn new(min_fraction_digits: usize, max_fraction_digits: usize) -> Self {
        Self {
            min_fraction_digits: min_fraction_digits.min(max_fraction_digits),
            max_fraction_digits,
            grouping: false,
        }
    }

    /// Set the maximum number of fraction digits (builder pattern).
    #[must_use]
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self.min_fraction_digits = self.min_fraction_digits.min(digits);
        self
    }

    /// Set the minimum number of fraction digits (builder pattern).
    #[must_use]
    pub fn with_min_fraction_digits(mut self, digits: usize) -> Self {
        self.min_fraction_digits = digits;
        self.max_fraction_digits = self.max_fraction_digits.max(digits);
        self
    }

    /// Enable or disable thousands grouping (builder pattern).
    #[must_use]
    pub const fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Minimum fraction digits.
    #[must_use]
    pub const fn min_fraction_digits(&self) -> usize {
        self.min_fraction_digits
    }

    /// Maximum fraction digits.
    #[must_use]
    pub const fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    /// Whether thousands grouping is on.
    #[must_use]
    pub const fn grouping(&self) -> bool {
        self.grouping
    }

    /// Format a value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        // `Display` for f64 prints the shortest round-trip decimal, never
        // in exponent form.
        let shortest = value.abs().to_string();
        let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
        let (int_digits, mut frac_digits) =
            round_half_up(int_part, frac_part, self.max_fraction_digits);

        while frac_digits.len() > self.min_fraction_digits && frac_digits.ends_with('0') {
            frac_digits.pop();
        }
        while frac_digits.len() < self.min_fraction_digits {
            frac_digits.push('0');
        }

        let int_digits = if self.grouping {
            group_thousands(&int_digits)
        } else {
            int_digits
        };

        let is_zero = int_digits
            .chars()
            .chain(frac_digits.chars())
            .all(|c| c == '0' || c == ',');
        let mut out = String::with_capacity(int_digits.len() + frac_digits.len() + 2);
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        out.push_str(&int_digits);
        if !frac_digits.is_empty() {
            out.push('.');
            out.push_str(&frac_digits);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(0, 2)
    }
}

/// Format a pair of quantities sharing a unit label, e.g. `"(1.5, 2) m"`.
///
/// ```
/// use cad_region::{format_quantity_pair, NumberFormat};
///
/// let text = format_quantity_pair(1.5, 2.0, &NumberFormat::default(), "m");
/// assert_eq!(text, "(1.5, 2) m");
/// ```
#[must_use]
pub fn format_quantity_pair(
    first: f64,
    second: f64,
    format: &NumberFormat,
    unit_label: &str,
) -> String {
    format!(
        "({}, {}) {unit_label}",
        format.format(first),
        format.format(second)
    )
}

/// Round a non-negative decimal digit string to `places` fraction digits.
fn round_half_up(int_part: &str, frac_part: &str, places: usize) -> (String, String) {
    if frac_part.len() <= places {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[places] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let int_digits: String = digits[..split].iter().map(|&d| char::from(d)).collect();
    let frac_digits: String = digits[split..].iter().map(|&d| char::from(d)).collect();
    (int_digits, frac_digits)
}

fn group_thousands(int_digits: &str) -> String {
    let len = int_digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
