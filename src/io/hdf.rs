use crate::error::{Result, SciError};
use ndarray::ArrayD;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// What to read from an HDF file.
#[derive(Debug, Clone, PartialEq)]
pub enum HdfRequest {
    /// values of one variable (dataset), all length-1 axes removed if `squeeze`
    Variable { name: String, squeeze: bool },
    /// names of all variables, alphabetically if `sort`
    Variables { sort: bool },
    /// attributes attached to one variable
    Attributes { name: String },
    /// global attributes of the file
    FileAttributes,
}

impl HdfRequest {
    pub fn variable(name: &str) -> Self {
        HdfRequest::Variable {
            name: name.to_string(),
            squeeze: false,
        }
    }
    pub fn squeezed(name: &str) -> Self {
        HdfRequest::Variable {
            name: name.to_string(),
            squeeze: true,
        }
    }
    pub fn attributes(name: &str) -> Self {
        HdfRequest::Attributes {
            name: name.to_string(),
        }
    }
}

/// value of a single attribute; scalars are vectors of length one
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(v) if v.len() == 1 => write!(f, "{}", v[0]),
            AttrValue::Float(v) if v.len() == 1 => write!(f, "{}", v[0]),
            AttrValue::Text(v) if v.len() == 1 => write!(f, "{}", v[0]),
            AttrValue::Int(v) => write!(f, "{:?}", v),
            AttrValue::Float(v) => write!(f, "{:?}", v),
            AttrValue::Text(v) => write!(f, "{:?}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HdfOutput {
    Array(ArrayD<f64>),
    Names(Vec<String>),
    Attributes(BTreeMap<String, AttrValue>),
}

impl HdfOutput {
    pub fn into_array(self) -> Result<ArrayD<f64>> {
        match self {
            HdfOutput::Array(a) => Ok(a),
            other => Err(SciError::InvalidOptions(format!("{} is not an array", other.kind()))),
        }
    }
    pub fn into_names(self) -> Result<Vec<String>> {
        match self {
            HdfOutput::Names(n) => Ok(n),
            other => Err(SciError::InvalidOptions(format!("{} is not a name list", other.kind()))),
        }
    }
    pub fn into_attributes(self) -> Result<BTreeMap<String, AttrValue>> {
        match self {
            HdfOutput::Attributes(a) => Ok(a),
            other => Err(SciError::InvalidOptions(format!(
                "{} is not an attribute map",
                other.kind()
            ))),
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            HdfOutput::Array(_) => "array",
            HdfOutput::Names(_) => "names",
            HdfOutput::Attributes(_) => "attributes",
        }
    }
}

pub fn require_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SciError::InvalidOptions(
            "Variable name has to be given".to_string(),
        ));
    }
    Ok(())
}

pub fn require_known(name: &str, known: &[String], file: &Path) -> Result<()> {
    if !known.iter().any(|k| k == name) {
        return Err(SciError::UnknownVariable {
            name: name.to_string(),
            file: file.to_path_buf(),
        });
    }
    Ok(())
}

pub fn sorted_if(mut names: Vec<String>, sort: bool) -> Vec<String> {
    if sort {
        names.sort();
    }
    names
}

/// removes every axis of length one
pub fn squeeze(arr: ArrayD<f64>) -> Result<ArrayD<f64>> {
    let shape: Vec<usize> = arr.shape().iter().copied().filter(|&n| n != 1).collect();
    arr.as_standard_layout()
        .into_owned()
        .into_shape_with_order(shape)
        .map_err(|e| SciError::ShapeMismatch(e.to_string()))
}

/// Reader-independent convenience calls built on a `read(path, request)` function.
macro_rules! hdf_convenience {
    ($read:ident, $variable:ident, $variables:ident, $attributes:ident, $file_attributes:ident) => {
        /// values of variable `name`
        pub fn $variable(
            path: impl AsRef<std::path::Path>,
            name: &str,
            squeeze: bool,
        ) -> $crate::error::Result<ndarray::ArrayD<f64>> {
            $read(
                path,
                &$crate::io::hdf::HdfRequest::Variable {
                    name: name.to_string(),
                    squeeze,
                },
            )?
            .into_array()
        }
        /// names of all variables
        pub fn $variables(
            path: impl AsRef<std::path::Path>,
            sort: bool,
        ) -> $crate::error::Result<Vec<String>> {
            $read(path, &$crate::io::hdf::HdfRequest::Variables { sort })?.into_names()
        }
        /// attributes of variable `name`
        pub fn $attributes(
            path: impl AsRef<std::path::Path>,
            name: &str,
        ) -> $crate::error::Result<
            std::collections::BTreeMap<String, $crate::io::hdf::AttrValue>,
        > {
            $read(path, &$crate::io::hdf::HdfRequest::attributes(name))?.into_attributes()
        }
        /// global attributes
        pub fn $file_attributes(
            path: impl AsRef<std::path::Path>,
        ) -> $crate::error::Result<
            std::collections::BTreeMap<String, $crate::io::hdf::AttrValue>,
        > {
            $read(path, &$crate::io::hdf::HdfRequest::FileAttributes)?.into_attributes()
        }
    };
}
pub(crate) use hdf_convenience;

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, IxDyn};

    #[test]
    fn test_squeeze() {
        let a = Array::from_shape_vec(IxDyn(&[1, 3, 1]), vec![1.0, 2.0, 3.0]).unwrap();
        let s = squeeze(a).unwrap();
        assert_eq!(s.shape(), &[3]);
        let a = Array::from_shape_vec(IxDyn(&[1, 1]), vec![5.0]).unwrap();
        assert_eq!(squeeze(a).unwrap().ndim(), 0);
    }

    #[test]
    fn test_name_checks() {
        assert!(matches!(require_name(""), Err(SciError::InvalidOptions(_))));
        let known = vec!["lat".to_string(), "lon".to_string()];
        assert!(require_known("lat", &known, Path::new("a.h5")).is_ok());
        assert!(matches!(
            require_known("time", &known, Path::new("a.h5")),
            Err(SciError::UnknownVariable { .. })
        ));
        assert_eq!(
            sorted_if(vec!["b".to_string(), "a".to_string()], true),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_output_accessors() {
        let out = HdfOutput::Names(vec!["x".to_string()]);
        assert!(out.clone().into_array().is_err());
        assert_eq!(out.into_names().unwrap(), vec!["x".to_string()]);
        assert_eq!(AttrValue::Float(vec![2.5]).to_string(), "2.5");
        assert_eq!(AttrValue::Int(vec![1, 2]).to_string(), "[1, 2]");
    }
}
