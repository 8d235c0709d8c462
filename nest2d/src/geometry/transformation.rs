use crate::geometry::d_transformation::DTransformation;

/// [Proper rigid transformation](https://en.wikipedia.org/wiki/Rigid_transformation):
/// a rotation about the origin followed by a translation, stored with the
/// rotation precomputed into its sine and cosine.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Transformation {
    cos: f64,
    sin: f64,
    tx: f64,
    ty: f64,
}

impl Transformation {
    pub const fn empty() -> Self {
        Self {
            cos: 1.0,
            sin: 0.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn from_translation((tx, ty): (f64, f64)) -> Self {
        Self {
            cos: 1.0,
            sin: 0.0,
            tx,
            ty,
        }
    }

    pub fn from_rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            cos,
            sin,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn from_rotation_translation(angle: f64, (tx, ty): (f64, f64)) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin, tx, ty }
    }

    pub fn from_dt(dt: &DTransformation) -> Self {
        Self::from_rotation_translation(dt.rotation(), dt.translation())
    }

    #[inline(always)]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.cos * x - self.sin * y + self.tx,
            self.sin * x + self.cos * y + self.ty,
        )
    }

    pub fn is_empty(&self) -> bool {
        *self == Transformation::empty()
    }

    pub fn decompose(&self) -> DTransformation {
        let angle = self.sin.atan2(self.cos);
        DTransformation::new(angle, (self.tx, self.ty))
    }
}

impl<T> From<T> for Transformation
where
    T: std::borrow::Borrow<DTransformation>,
{
    fn from(dt: T) -> Self {
        Self::from_dt(dt.borrow())
    }
}
