use crate::{vector::Vector, Degeneracy, Result, VectorError};

impl Vector {
    /// Projection of `self` onto `basis`.
    pub fn component_parallel(&self, basis: &Vector) -> Result<Vector> {
        self.check_same_dimension(basis)?;
        let unit = basis.normalized().map_err(|err| match err {
            VectorError::DegenerateVector(_) => {
                VectorError::DegenerateVector(Degeneracy::ParallelComponent)
            }
            err => err,
        })?;
        let weight = self.dot(&unit)?;
        Ok(unit.scale_by(weight))
    }

    /// What is left of `self` once its projection onto `basis` is removed.
    pub fn component_orthogonal(&self, basis: &Vector) -> Result<Vector> {
        let projection = self.component_parallel(basis).map_err(|err| match err {
            VectorError::DegenerateVector(Degeneracy::ParallelComponent) => {
                VectorError::DegenerateVector(Degeneracy::OrthogonalComponent)
            }
            err => err,
        })?;
        self.minus(&projection)
    }
}
