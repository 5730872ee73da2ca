//! Typed lengths. All layout happens in PDF points ([Pt]); other units exist so
//! that sheet dimensions can be written the way they are printed on the box.

use crate::LabelError;
use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};
use std::str::FromStr;

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;
const POINTS_PER_PICA: f32 = 12.0;

/// A length in PDF points (1/72 of an inch)
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
    Display,
    From,
    Into,
    Deref,
)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display)]
pub struct In(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display)]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * POINTS_PER_INCH)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * POINTS_PER_INCH / MM_PER_INCH)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Mul<Pt> for f32 {
    type Output = Pt;

    fn mul(self, rhs: Pt) -> Pt {
        Pt(self * rhs.0)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// The ratio between two lengths
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

/// A named linear unit that configuration values are expressed in.
///
/// Parsed case-insensitively from the usual spellings: `pt`/`point`, `inch`/`in`,
/// `cm`, `mm` and `pica`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LengthUnit {
    Point,
    Inch,
    Centimetre,
    Millimetre,
    Pica,
}

impl LengthUnit {
    /// Convert a bare number expressed in this unit into points
    pub fn to_pt(self, value: f32) -> Pt {
        match self {
            LengthUnit::Point => Pt(value),
            LengthUnit::Inch => In(value).into(),
            LengthUnit::Centimetre => Mm(value * 10.0).into(),
            LengthUnit::Millimetre => Mm(value).into(),
            LengthUnit::Pica => Pt(value * POINTS_PER_PICA),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" | "point" | "points" => Ok(LengthUnit::Point),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inch),
            "cm" => Ok(LengthUnit::Centimetre),
            "mm" => Ok(LengthUnit::Millimetre),
            "pica" | "picas" => Ok(LengthUnit::Pica),
            _ => Err(LabelError::UnknownUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inches_and_millimetres_convert_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        let a4_width: Pt = Mm(210.0).into();
        assert!((a4_width.0 - 595.2756).abs() < 0.001);
    }

    #[test]
    fn configured_units_convert_like_the_newtypes() {
        assert_eq!(LengthUnit::Inch.to_pt(2.5), Pt::from(In(2.5)));
        assert_eq!(LengthUnit::Millimetre.to_pt(63.5), Pt::from(Mm(63.5)));
        assert_eq!(LengthUnit::Centimetre.to_pt(2.5), Pt::from(Mm(25.0)));
        assert_eq!(LengthUnit::Point.to_pt(11.0), Pt(11.0));
    }

    #[test]
    fn point_arithmetic() {
        let mut x = Pt(10.0) + Pt(5.0) * 2.0;
        x -= Pt(4.0) / 2.0;
        assert_eq!(x, Pt(18.0));
        assert_eq!(Pt(9.0) / Pt(3.0), 3.0);
        assert_eq!(-Pt(1.5), Pt(-1.5));
        let total: Pt = [Pt(1.0), Pt(2.0), Pt(3.0)].into_iter().sum();
        assert_eq!(total, Pt(6.0));
    }

    #[test]
    fn unit_names_resolve() {
        assert_eq!("mm".parse::<LengthUnit>().unwrap(), LengthUnit::Millimetre);
        assert_eq!("Inch".parse::<LengthUnit>().unwrap(), LengthUnit::Inch);
        assert_eq!(LengthUnit::Pica.to_pt(2.0), Pt(24.0));
        assert!((LengthUnit::Centimetre.to_pt(1.0).0 - LengthUnit::Millimetre.to_pt(10.0).0).abs() < 1e-4);
    }

    #[test]
    fn unknown_unit_is_an_error() {
        match "furlong".parse::<LengthUnit>() {
            Err(LabelError::UnknownUnit(name)) => assert_eq!(name, "furlong"),
            other => panic!("expected UnknownUnit, got {other:?}"),
        }
    }
}
