//! array helpers: masked arrays, index helpers (argsort, argmax, argmin) unifying plain arrays,
//! masked arrays and slices, and division with a zero guard
/// ndarray based masked array: data plus a parallel boolean mask of invalid entries
pub mod masked;
/// argsort/argmax/argmin over plain arrays, masked arrays and slices
pub mod argsort;
/// safe division returning a substitute value where the denominator is (near) zero
pub mod division;

pub use argsort::{
    ArgExtrema, ArgExtremaOptions, ArgSort, ArgSortOptions, argmax, argmin, argsort, argsort_axis,
};
pub use division::{DivisionOptions, div, division, division_masked, division_scalar, division_value};
pub use masked::MaskedArray;
