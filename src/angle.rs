use crate::{
    utils::radians_to_degrees, vector::Vector, Degeneracy, Result, VectorError, INFINITE_SMALL,
};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl Vector {
    fn unit_angle(&self, other: &Vector) -> Result<f64> {
        self.check_same_dimension(other)?;
        let u1 = self.normalized()?;
        let u2 = other.normalized()?;
        // Equal to acos(u1 · u2), but keeps full precision near 0 and π.
        let difference = u1.minus(&u2)?.magnitude();
        let sum = u1.plus(&u2)?.magnitude();
        Ok(2.0 * difference.atan2(sum))
    }

    /// Fails with [`Degeneracy::Angle`] if either operand is the zero vector.
    pub fn angle(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        let radians = self.unit_angle(other).map_err(|err| match err {
            VectorError::DegenerateVector(_) => VectorError::DegenerateVector(Degeneracy::Angle),
            err => err,
        })?;

        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians_to_degrees(radians),
        })
    }

    pub fn angle_radians(&self, other: &Vector) -> Result<f64> {
        self.angle(other, AngleUnit::Radians)
    }

    pub fn angle_degrees(&self, other: &Vector) -> Result<f64> {
        self.angle(other, AngleUnit::Degrees)
    }

    pub fn is_orthogonal(&self, other: &Vector) -> Result<bool> {
        Ok(self.dot(other)?.abs() < INFINITE_SMALL)
    }

    /// The zero vector is parallel to everything.
    pub fn is_parallel(&self, other: &Vector) -> Result<bool> {
        self.check_same_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let radians = self.unit_angle(other)?;
        Ok(radians < INFINITE_SMALL || PI - radians < INFINITE_SMALL)
    }
}
