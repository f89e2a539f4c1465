use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length in PDF points (1/72 of an inch). All page geometry in this crate
/// is expressed in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Pt(pub f32);

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Conversion from inches
pub fn inches(value: f32) -> Pt {
    Pt(value * 72.0)
}

/// Conversion from millimetres
pub fn mm(value: f32) -> Pt {
    Pt(value * 72.0 / 25.4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_and_folds() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(3.5)].into_iter().sum();
        assert_eq!(total, Pt(7.0));
        assert_eq!(Pt(3.0).max(Pt(4.0)), Pt(4.0));
        assert_eq!(Pt(3.0).min(Pt(4.0)), Pt(3.0));
        assert_eq!(Pt(14.0) * 1.5, Pt(21.0));
        assert_eq!(inches(1.0), Pt(72.0));
    }
}
