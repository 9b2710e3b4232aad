use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary amount held at cent precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    pub const TARGET_DECIMALS: u32 = 2;
    pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;
    /// Largest amount a balance may hold: 25 integer digits and two cents
    /// digits, well inside what `Decimal` stores exactly at scale 2.
    pub const MAX: Money = Money(Decimal::from_parts(3892314111, 2681241660, 54210108, false, 2));

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Rounds `value` half away from zero to whole cents.
    pub fn from_decimal(value: Decimal) -> Self {
        let mut rounded = value.round_dp_with_strategy(Self::TARGET_DECIMALS, Self::ROUNDING);
        rounded.rescale(Self::TARGET_DECIMALS);
        Self(rounded)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `None` when the sum leaves the `0..=MAX` range.
    pub fn checked_add(self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).and_then(Self::bounded)
    }

    /// `None` when the difference leaves the `0..=MAX` range.
    pub fn checked_sub(self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).and_then(Self::bounded)
    }

    fn bounded(value: Decimal) -> Option<Self> {
        if (value.is_sign_negative() && !value.is_zero()) || value > Self::MAX.0 {
            return None;
        }
        Some(Self::from_decimal(value))
    }

    /// `self * rate`, rounded back to cents.
    pub fn checked_scale(self, rate: Decimal) -> Option<Self> {
        self.0.checked_mul(rate).map(Self::from_decimal)
    }
}

impl PartialEq<Decimal> for Money {
    fn eq(&self, other: &Decimal) -> bool {
        self.0 == *other
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
