//! argsort, argmax and argmin for plain ndarray arrays, masked arrays and slices/vectors.
//!
//! The three input kinds follow their own conventions:
//! * plain arrays rank every element, argmax/argmin work on the flattened array;
//! * masked arrays rank masked entries as if they held the `fill_value` of the options, or put
//!   them last when none is given; argmax/argmin ignore masked entries unless the options carry
//!   a fill value. The fill value stored on the array is not consulted;
//! * slices and vectors behave like a sorted index list keyed by the elements themselves.
//!
//! All sorts are stable: equal elements keep their input order. Values that are unordered
//! even against themselves (NaN) sort after every other valid value, and argmax/argmin
//! return the first of them.
//! # Examples
//! ```
//! use RustedEnvSci::arrays::{argsort, argmax, ArgSortOptions, ArgExtremaOptions, MaskedArray};
//! let a = vec![0, 4, 6, 2, 1, 5, 3, 5];
//! let ii = argsort(&a, &ArgSortOptions::new());
//! let sorted: Vec<i32> = ii.iter().map(|&i| a[i]).collect();
//! assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5, 5, 6]);
//!
//! let ma = MaskedArray::from_vec(a.clone(), vec![false, false, true, true, false, false, false, false]).unwrap();
//! assert_eq!(argmax(&ma, &ArgExtremaOptions::new()), Some(5));
//! assert_eq!(argmax(&ma, &ArgExtremaOptions::new().fill_value(6)), Some(2));
//! ```
use crate::arrays::masked::MaskedArray;
use ndarray::{Array2, ArrayBase, Axis, Data, Dimension, Ix1, Ix2, Zip};
use std::cmp::Ordering;

/// options of argsort
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSortOptions<T> {
    /// descending order (stable)
    pub reverse: bool,
    /// value standing in for masked entries; only used by masked arrays
    pub fill_value: Option<T>,
}

impl<T> Default for ArgSortOptions<T> {
    fn default() -> Self {
        ArgSortOptions {
            reverse: false,
            fill_value: None,
        }
    }
}

impl<T> ArgSortOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
    pub fn fill_value(mut self, fill_value: T) -> Self {
        self.fill_value = Some(fill_value);
        self
    }
}

/// options of argmax and argmin
#[derive(Debug, Clone, PartialEq)]
pub struct ArgExtremaOptions<T> {
    /// value standing in for masked entries; only used by masked arrays
    pub fill_value: Option<T>,
}

impl<T> Default for ArgExtremaOptions<T> {
    fn default() -> Self {
        ArgExtremaOptions { fill_value: None }
    }
}

impl<T> ArgExtremaOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn fill_value(mut self, fill_value: T) -> Self {
        self.fill_value = Some(fill_value);
        self
    }
}

/// Indices that sort a one-dimensional collection.
pub trait ArgSort {
    type Elem;
    fn argsort_with(&self, opts: &ArgSortOptions<Self::Elem>) -> Vec<usize>;
}

/// Index of the first largest / smallest element, `None` if there is no candidate.
pub trait ArgExtrema {
    type Elem;
    fn argmax_with(&self, opts: &ArgExtremaOptions<Self::Elem>) -> Option<usize>;
    fn argmin_with(&self, opts: &ArgExtremaOptions<Self::Elem>) -> Option<usize>;
}

pub fn argsort<A: ArgSort + ?Sized>(a: &A, opts: &ArgSortOptions<A::Elem>) -> Vec<usize> {
    a.argsort_with(opts)
}

pub fn argmax<A: ArgExtrema + ?Sized>(a: &A, opts: &ArgExtremaOptions<A::Elem>) -> Option<usize> {
    a.argmax_with(opts)
}

pub fn argmin<A: ArgExtrema + ?Sized>(a: &A, opts: &ArgExtremaOptions<A::Elem>) -> Option<usize> {
    a.argmin_with(opts)
}

/// argsort of every lane of a 2D array along `axis`, e.g. `Axis(1)` sorts each row
pub fn argsort_axis<S, T>(a: &ArrayBase<S, Ix2>, axis: Axis, opts: &ArgSortOptions<T>) -> Array2<usize>
where
    S: Data<Elem = T>,
    T: PartialOrd,
{
    let mut out = Array2::<usize>::zeros(a.raw_dim());
    Zip::from(out.lanes_mut(axis))
        .and(a.lanes(axis))
        .for_each(|mut out_lane, lane| {
            let keys: Vec<Option<&T>> = lane.iter().map(Some).collect();
            let order = sort_keys(&keys, opts.reverse);
            for (dst, i) in out_lane.iter_mut().zip(order) {
                *dst = i;
            }
        });
    out
}

///////////////////////////////////////ORDERING HELPERS//////////////////////////////////////

fn is_unordered<T: PartialOrd>(x: &T) -> bool {
    x.partial_cmp(x).is_none()
}

/// total order over optional keys: valid values < NaN-like values < missing (masked) keys
fn key_cmp<T: PartialOrd>(a: &Option<&T>, b: &Option<&T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match x.partial_cmp(y) {
            Some(ord) => ord,
            None => match (is_unordered(*x), is_unordered(*y)) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            },
        },
    }
}

fn sort_keys<T: PartialOrd>(keys: &[Option<&T>], reverse: bool) -> Vec<usize> {
    let mut index: Vec<usize> = (0..keys.len()).collect();
    if reverse {
        index.sort_by(|&i, &j| key_cmp(&keys[j], &keys[i]));
    } else {
        index.sort_by(|&i, &j| key_cmp(&keys[i], &keys[j]));
    }
    index
}

/// first index whose key is extreme in direction `want`; `None` keys are skipped and a
/// NaN-like key wins as soon as it is met
fn arg_extreme<'a, T, I>(keys: I, want: Ordering) -> Option<usize>
where
    T: PartialOrd + 'a,
    I: Iterator<Item = Option<&'a T>>,
{
    let mut best: Option<(usize, &T)> = None;
    for (i, key) in keys.enumerate() {
        let Some(x) = key else { continue };
        match best {
            None => best = Some((i, x)),
            Some((_, b)) => {
                if is_unordered(b) {
                    break;
                }
                if is_unordered(x) || x.partial_cmp(b) == Some(want) {
                    best = Some((i, x));
                }
            }
        }
    }
    best.map(|(i, _)| i)
}

/// keys of a masked array: masked entries are replaced by the fill value when one is given
fn masked_keys<'a, T, D>(a: &'a MaskedArray<T, D>, fill_value: Option<&'a T>) -> Vec<Option<&'a T>>
where
    T: Clone,
    D: Dimension,
{
    a.iter_valid()
        .map(|key| match key {
            Some(x) => Some(x),
            None => fill_value,
        })
        .collect()
}

///////////////////////////////////////IMPLEMENTATIONS///////////////////////////////////////

impl<T: PartialOrd> ArgSort for [T] {
    type Elem = T;
    fn argsort_with(&self, opts: &ArgSortOptions<T>) -> Vec<usize> {
        let keys: Vec<Option<&T>> = self.iter().map(Some).collect();
        sort_keys(&keys, opts.reverse)
    }
}

impl<T: PartialOrd> ArgSort for Vec<T> {
    type Elem = T;
    fn argsort_with(&self, opts: &ArgSortOptions<T>) -> Vec<usize> {
        self.as_slice().argsort_with(opts)
    }
}

impl<S, T> ArgSort for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
    T: PartialOrd,
{
    type Elem = T;
    fn argsort_with(&self, opts: &ArgSortOptions<T>) -> Vec<usize> {
        let keys: Vec<Option<&T>> = self.iter().map(Some).collect();
        sort_keys(&keys, opts.reverse)
    }
}

impl<T: PartialOrd + Clone> ArgSort for MaskedArray<T, Ix1> {
    type Elem = T;
    fn argsort_with(&self, opts: &ArgSortOptions<T>) -> Vec<usize> {
        let fill = opts.fill_value.as_ref();
        let keys = masked_keys(self, fill);
        sort_keys(&keys, opts.reverse)
    }
}

impl<T: PartialOrd> ArgExtrema for [T] {
    type Elem = T;
    fn argmax_with(&self, _opts: &ArgExtremaOptions<T>) -> Option<usize> {
        arg_extreme(self.iter().map(Some), Ordering::Greater)
    }
    fn argmin_with(&self, _opts: &ArgExtremaOptions<T>) -> Option<usize> {
        arg_extreme(self.iter().map(Some), Ordering::Less)
    }
}

impl<T: PartialOrd> ArgExtrema for Vec<T> {
    type Elem = T;
    fn argmax_with(&self, opts: &ArgExtremaOptions<T>) -> Option<usize> {
        self.as_slice().argmax_with(opts)
    }
    fn argmin_with(&self, opts: &ArgExtremaOptions<T>) -> Option<usize> {
        self.as_slice().argmin_with(opts)
    }
}

impl<S, T, D> ArgExtrema for ArrayBase<S, D>
where
    S: Data<Elem = T>,
    T: PartialOrd,
    D: Dimension,
{
    type Elem = T;
    fn argmax_with(&self, _opts: &ArgExtremaOptions<T>) -> Option<usize> {
        arg_extreme(self.iter().map(Some), Ordering::Greater)
    }
    fn argmin_with(&self, _opts: &ArgExtremaOptions<T>) -> Option<usize> {
        arg_extreme(self.iter().map(Some), Ordering::Less)
    }
}

impl<T: PartialOrd + Clone, D: Dimension> ArgExtrema for MaskedArray<T, D> {
    type Elem = T;
    fn argmax_with(&self, opts: &ArgExtremaOptions<T>) -> Option<usize> {
        let fill = opts.fill_value.as_ref();
        arg_extreme(masked_keys(self, fill).into_iter(), Ordering::Greater)
    }
    fn argmin_with(&self, opts: &ArgExtremaOptions<T>) -> Option<usize> {
        let fill = opts.fill_value.as_ref();
        arg_extreme(masked_keys(self, fill).into_iter(), Ordering::Less)
    }
}
