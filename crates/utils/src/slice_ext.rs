use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use pictools_utils::SliceExt;
    /// # use pictools_utils::Error;
    /// assert_eq!([1.1_f64, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f64::NAN].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Same rules as [try_min()](SliceExt::try_min).
    ///
    /// ```rust
    /// # use pictools_utils::SliceExt;
    /// assert_eq!([1.1_f64, 0.5, 2.2].try_max(), Ok(2.2));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Evenly spaced levels strictly between the minimum and maximum
    ///
    /// The extremes themselves are excluded, since thresholding a field at
    /// its own minimum or maximum is rarely what anyone wants. Asking for
    /// zero levels gives an empty list.
    ///
    /// ```rust
    /// # use pictools_utils::SliceExt;
    /// let values = [0.0_f64, 4.0, 2.0];
    /// assert_eq!(values.try_levels(3), Ok(vec![1.0, 2.0, 3.0]));
    /// ```
    fn try_levels(&self, n: usize) -> Result<Vec<T>>;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        finite_values(self)?
            .min_by(|a, b| a.total_cmp(b))
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        finite_values(self)?
            .max_by(|a, b| a.total_cmp(b))
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_levels(&self, n: usize) -> Result<Vec<f64>> {
        let (low, high) = (self.try_min()?, self.try_max()?);
        let step = (high - low) / (n + 1) as f64;
        Ok((1..=n).map(|i| low + i as f64 * step).collect())
    }
}

/// Iterator over the values, provided none of them are undefined
fn finite_values(values: &[f64]) -> Result<impl Iterator<Item = f64> + '_> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::SliceContainsUndefinedValues);
    }
    Ok(values.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_exclude_extremes() {
        let values = [-1.0_f64, 1.0];
        assert_eq!(values.try_levels(1), Ok(vec![0.0]));
        assert_eq!(values.try_levels(0), Ok(vec![]));
    }

    #[test]
    fn levels_of_constant_field() {
        let values = [3.0_f64; 4];
        assert_eq!(values.try_levels(2), Ok(vec![3.0, 3.0]));
    }

    #[test]
    fn levels_propagate_errors() {
        assert_eq!(
            Vec::<f64>::new().try_levels(2),
            Err(Error::SliceContainsNoValues)
        );
        assert_eq!(
            [1.0, f64::INFINITY].try_levels(2),
            Err(Error::SliceContainsUndefinedValues)
        );
    }
}
