/// Integral representation of monetary quantities up to two decimal places.
///
/// Serialized as a decimal number, rounded to the nearest cent on input.
/// Arithmetic saturates instead of overflowing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(pub i64);

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("amount {0} is out of range")]
pub struct OutOfRange(f64);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// Largest magnitude accepted on input, in cents.
    pub const MAX_INPUT: i64 = 10i64.pow(17);

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `self / denom`, or 0 when `denom` is not positive.
    pub fn ratio(self, denom: Self) -> f64 {
        if denom.0 > 0 {
            self.0 as f64 / denom.0 as f64
        } else {
            0.0
        }
    }

    /// Returns `amount.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let digits = digit_count(self.0.unsigned_abs().max(100));
        let mut len = digits + (digits - 3) / 3 + 1; // commas, decimal point
        if self.0 < 0 {
            len += 2; // parentheses
        }
        len
    }

    /// Returns `amount.charlen()` assuming a non-negative quantity has a
    /// trailing space in its string representation, so that right-aligning
    /// is equivalent to aligning on the decimal point.
    pub fn charlen_for_alignment(self) -> usize {
        self.charlen() + (self >= Self::ZERO) as usize
    }
}

fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

impl TryFrom<f64> for Amount {
    type Error = OutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > Self::MAX_INPUT as f64 {
            return Err(OutOfRange(value));
        }
        Ok(Self(cents as i64))
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0 as f64 / 100.0
    }
}

impl std::fmt::Display for Amount {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.0.unsigned_abs();
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if self.0 < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).map_err(|_| std::fmt::Error)?;
        f.write_str(s)
    }
}
