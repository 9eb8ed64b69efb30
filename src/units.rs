use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Neg};

/// A length in PDF points (1/72 of an inch). All layout in this crate is done
/// in points, with the origin at the bottom-left of the page.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    MulAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
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

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_stays_in_points() {
        let a = Pt(10.0) + Pt(5.0) * 2.0 - Pt(4.0) / 2.0;
        assert_eq!(a, Pt(18.0));
        assert_eq!(-a, Pt(-18.0));
        assert_eq!(f32::from(a), 18.0);
    }

    #[test]
    fn sums_and_compares() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(0.5)].into_iter().sum();
        assert_eq!(total, Pt(4.0));
        assert!(Pt(3.0) < total);
        assert_eq!(Pt(3.0).max(total), total);
        assert_eq!(Pt(3.0).min(total), Pt(3.0));
    }
}
