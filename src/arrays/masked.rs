use crate::error::{Result, SciError};
use ndarray::{Array, Array1, Dimension, Ix1, NdIndex, Zip};

/// A numeric array with a parallel mask. `true` in the mask marks an invalid (missing) entry.
/// The optional fill value travels with the array as the placeholder callers pass to
/// [`MaskedArray::filled`]; argsort/argmax/argmin ignore it.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedArray<T, D: Dimension = Ix1> {
    data: Array<T, D>,
    mask: Array<bool, D>,
    fill_value: Option<T>,
}

impl<T: Clone, D: Dimension> MaskedArray<T, D> {
    pub fn new(data: Array<T, D>, mask: Array<bool, D>) -> Result<Self> {
        if data.shape() != mask.shape() {
            return Err(SciError::ShapeMismatch(format!(
                "data shape {:?} and mask shape {:?} differ",
                data.shape(),
                mask.shape()
            )));
        }
        Ok(MaskedArray {
            data,
            mask,
            fill_value: None,
        })
    }
    /// nothing masked
    pub fn from_data(data: Array<T, D>) -> Self {
        let mask = Array::from_elem(data.raw_dim(), false);
        MaskedArray {
            data,
            mask,
            fill_value: None,
        }
    }
    /// mask every entry for which `condition` holds
    pub fn masked_where<F>(data: Array<T, D>, condition: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        let mask = data.map(|x| condition(x));
        MaskedArray {
            data,
            mask,
            fill_value: None,
        }
    }
    pub fn with_fill_value(mut self, fill_value: T) -> Self {
        self.fill_value = Some(fill_value);
        self
    }
    pub fn fill_value(&self) -> Option<&T> {
        self.fill_value.as_ref()
    }
    pub fn data(&self) -> &Array<T, D> {
        &self.data
    }
    pub fn mask(&self) -> &Array<bool, D> {
        &self.mask
    }
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// number of valid (unmasked) entries
    pub fn count(&self) -> usize {
        self.mask.iter().filter(|m| !**m).count()
    }
    /// `None` if the index is out of bounds
    pub fn is_masked<I: NdIndex<D>>(&self, index: I) -> Option<bool> {
        self.mask.get(index).copied()
    }
    /// plain array with masked entries replaced by `value`
    pub fn filled(&self, value: T) -> Array<T, D> {
        Zip::from(&self.data)
            .and(&self.mask)
            .map_collect(|d, &m| if m { value.clone() } else { d.clone() })
    }
    /// valid entries in logical (row-major) order
    pub fn compressed(&self) -> Vec<T> {
        self.data
            .iter()
            .zip(self.mask.iter())
            .filter(|(_, m)| !**m)
            .map(|(d, _)| d.clone())
            .collect()
    }
    /// iterator over `Some(&value)` for valid entries and `None` for masked ones, row-major
    pub fn iter_valid(&self) -> impl Iterator<Item = Option<&T>> {
        self.data
            .iter()
            .zip(self.mask.iter())
            .map(|(d, m)| if *m { None } else { Some(d) })
    }
}

impl<T: Clone> MaskedArray<T, Ix1> {
    pub fn from_vec(data: Vec<T>, mask: Vec<bool>) -> Result<Self> {
        MaskedArray::new(Array1::from(data), Array1::from(mask))
    }
}

impl MaskedArray<f64, Ix1> {
    /// mask NaN and infinite entries
    pub fn masked_invalid(data: Array1<f64>) -> Self {
        MaskedArray::masked_where(data, |x| !x.is_finite())
    }
}
