use crate::{vector::Vector, Result, VectorError};
use log::trace;
use ndarray::{array, Array1};

impl Vector {
    /// Cross product of two 3D vectors.
    ///
    /// 2D operands are embedded in 3D with a zero `z` coordinate, so the
    /// result is always 3D; its `z` is the signed area spanned in the plane.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        match self.dimension() {
            2 | 3 => {}
            dimension => return Err(VectorError::UnsupportedDimension(dimension)),
        }
        self.check_same_dimension(other)?;

        if self.dimension() == 2 {
            trace!("embedding {} and {} in R3", self, other);
            return self.embedded_in_r3().cross(&other.embedded_in_r3());
        }

        let (x1, y1, z1) = (self[0], self[1], self[2]);
        let (x2, y2, z2) = (other[0], other[1], other[2]);
        Ok(Vector::from_raw(array![
            y1 * z2 - y2 * z1,
            -(x1 * z2 - x2 * z1),
            x1 * y2 - x2 * y1
        ]))
    }

    fn embedded_in_r3(&self) -> Vector {
        let mut coordinates = self.to_vec();
        coordinates.push(0.0);
        Vector::from_raw(Array1::from_vec(coordinates))
    }

    pub fn area_parallelogram(&self, other: &Vector) -> Result<f64> {
        Ok(self.cross(other)?.magnitude())
    }

    pub fn area_triangle(&self, other: &Vector) -> Result<f64> {
        Ok(self.area_parallelogram(other)? / 2.0)
    }
}
