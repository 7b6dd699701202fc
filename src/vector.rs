use crate::{Degeneracy, Result, VectorError, INFINITE_SMALL};
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, Mul, Neg};

/// An immutable, fixed-dimension vector of `f64` coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_array(coordinates.into_iter().collect())
    }

    fn from_array(data: Array1<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(VectorError::InvalidArgument(
                "coordinates must be nonempty".to_string(),
            ));
        }
        Ok(Self { data })
    }

    // Callers guarantee `data` is nonempty.
    pub(crate) fn from_raw(data: Array1<f64>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn coordinates(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    pub(crate) fn check_same_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        self.check_same_dimension(other)?;
        Ok(Self::from_raw(&self.data + &other.data))
    }

    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        self.check_same_dimension(other)?;
        Ok(Self::from_raw(&self.data - &other.data))
    }

    pub fn scale_by(&self, scalar: f64) -> Vector {
        Self::from_raw(self.data.mapv(|x| x * scalar))
    }

    fn largest_abs(&self) -> f64 {
        self.data.fold(0.0, |largest: f64, x| largest.max(x.abs()))
    }

    pub fn magnitude(&self) -> f64 {
        let largest = self.largest_abs();
        if largest == 0.0 || !largest.is_finite() {
            return largest;
        }
        // Rescale so the squares can neither overflow nor underflow.
        let rescaled = self.data.mapv(|x| x / largest);
        largest * rescaled.dot(&rescaled).sqrt()
    }

    /// Fails with [`Degeneracy::Normalize`] for the zero vector.
    pub fn normalized(&self) -> Result<Vector> {
        let largest = self.largest_abs();
        if largest == 0.0 {
            debug!("cannot normalize {}", self);
            return Err(VectorError::DegenerateVector(Degeneracy::Normalize));
        }
        let rescaled = self.data.mapv(|x| x / largest);
        let length = rescaled.dot(&rescaled).sqrt();
        Ok(Self::from_raw(rescaled.mapv(|x| x / length)))
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_same_dimension(other)?;
        Ok(self.data.dot(&other.data))
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude() < INFINITE_SMALL
    }

    /// Coordinate-wise comparison within [`INFINITE_SMALL`].
    pub fn approx_eq(&self, other: &Vector) -> bool {
        self.dimension() == other.dimension()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() < INFINITE_SMALL)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.data.iter().map(|x| x.to_string()).collect();
        write!(f, "Vector: ({})", rendered.join(", "))
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(coordinates))
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Self::new(coordinates.iter().copied())
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(data: Array1<f64>) -> Result<Self> {
        Self::from_array(data)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.data.to_vec()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale_by(-1.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale_by(scalar)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale_by(scalar)
    }
}
