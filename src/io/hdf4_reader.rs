//! HDF4 reader. Scientific data sets of HDF4 files are read through libnetcdf (crate `netcdf`,
//! cargo feature `hdf4`), which has to be built with HDF4 support. Without the feature every
//! call returns [`SciError::Unsupported`].
use super::hdf::{HdfOutput, HdfRequest, hdf_convenience};
use crate::error::{Result, SciError};
use std::path::Path;

cfg_if::cfg_if! {
    if #[cfg(feature = "hdf4")] {
        use super::hdf::{AttrValue, require_known, require_name, sorted_if, squeeze};
        use log::{debug, warn};
        use ndarray::{ArrayD, IxDyn};
        use netcdf::AttributeValue;
        use std::collections::BTreeMap;

        fn nc_err(path: &Path, e: netcdf::Error) -> SciError {
            SciError::Hdf {
                file: path.to_path_buf(),
                message: e.to_string(),
            }
        }

        fn ints<T: Into<i64>>(v: Vec<T>) -> AttrValue {
            AttrValue::Int(v.into_iter().map(Into::into).collect())
        }

        /// unsigned 64 bit values beyond `i64::MAX` turn the attribute into floats
        fn unsigned_ints(v: Vec<u64>) -> AttrValue {
            match v.iter().map(|&x| i64::try_from(x)).collect::<std::result::Result<Vec<i64>, _>>() {
                Ok(ints) => AttrValue::Int(ints),
                Err(_) => AttrValue::Float(v.into_iter().map(|x| x as f64).collect()),
            }
        }

        fn convert(value: AttributeValue) -> Option<AttrValue> {
            #[allow(unreachable_patterns)]
            let converted = match value {
                AttributeValue::Uchar(x) => ints(vec![x]),
                AttributeValue::Uchars(x) => ints(x),
                AttributeValue::Schar(x) => ints(vec![x]),
                AttributeValue::Schars(x) => ints(x),
                AttributeValue::Ushort(x) => ints(vec![x]),
                AttributeValue::Ushorts(x) => ints(x),
                AttributeValue::Short(x) => ints(vec![x]),
                AttributeValue::Shorts(x) => ints(x),
                AttributeValue::Uint(x) => ints(vec![x]),
                AttributeValue::Uints(x) => ints(x),
                AttributeValue::Int(x) => ints(vec![x]),
                AttributeValue::Ints(x) => ints(x),
                AttributeValue::Longlong(x) => ints(vec![x]),
                AttributeValue::Longlongs(x) => ints(x),
                AttributeValue::Ulonglong(x) => unsigned_ints(vec![x]),
                AttributeValue::Ulonglongs(x) => unsigned_ints(x),
                AttributeValue::Float(x) => AttrValue::Float(vec![f64::from(x)]),
                AttributeValue::Floats(x) => AttrValue::Float(x.into_iter().map(f64::from).collect()),
                AttributeValue::Double(x) => AttrValue::Float(vec![x]),
                AttributeValue::Doubles(x) => AttrValue::Float(x),
                AttributeValue::Str(x) => AttrValue::Text(vec![x]),
                AttributeValue::Strs(x) => AttrValue::Text(x),
                _ => return None,
            };
            Some(converted)
        }

        fn collect_attributes<'a>(
            attributes: impl Iterator<Item = netcdf::Attribute<'a>>,
            path: &Path,
        ) -> Result<BTreeMap<String, AttrValue>> {
            let mut attrs = BTreeMap::new();
            for attr in attributes {
                let name = attr.name().to_string();
                match convert(attr.value().map_err(|e| nc_err(path, e))?) {
                    Some(value) => {
                        attrs.insert(name, value);
                    }
                    None => warn!("{}: attribute {} skipped", path.display(), name),
                }
            }
            Ok(attrs)
        }

        /// Reads a variable, the variable names or attributes from an HDF4 file.
        pub fn readhdf4(path: impl AsRef<Path>, request: &HdfRequest) -> Result<HdfOutput> {
            let path = path.as_ref();
            let file = netcdf::open(path)
                .map_err(|e| SciError::io(path, std::io::Error::other(e.to_string())))?;
            debug!("{}: {:?}", path.display(), request);
            let names: Vec<String> = file.variables().map(|v| v.name()).collect();
            match request {
                HdfRequest::FileAttributes => {
                    Ok(HdfOutput::Attributes(collect_attributes(file.attributes(), path)?))
                }
                HdfRequest::Variables { sort } => Ok(HdfOutput::Names(sorted_if(names, *sort))),
                HdfRequest::Attributes { name } => {
                    require_known(name, &names, path)?;
                    let var = file.variable(name).ok_or_else(|| SciError::UnknownVariable {
                        name: name.clone(),
                        file: path.to_path_buf(),
                    })?;
                    Ok(HdfOutput::Attributes(collect_attributes(var.attributes(), path)?))
                }
                HdfRequest::Variable { name, squeeze: squeezed } => {
                    require_name(name)?;
                    require_known(name, &names, path)?;
                    let var = file.variable(name).ok_or_else(|| SciError::UnknownVariable {
                        name: name.clone(),
                        file: path.to_path_buf(),
                    })?;
                    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
                    let values = var.get_values::<f64, _>(..).map_err(|e| nc_err(path, e))?;
                    let arr = ArrayD::from_shape_vec(IxDyn(&shape), values)
                        .map_err(|e| SciError::ShapeMismatch(e.to_string()))?;
                    if *squeezed {
                        Ok(HdfOutput::Array(squeeze(arr)?))
                    } else {
                        Ok(HdfOutput::Array(arr))
                    }
                }
            }
        }
    } else {
        /// Reads a variable, the variable names or attributes from an HDF4 file.
        /// This build has no HDF4 backend.
        pub fn readhdf4(path: impl AsRef<Path>, request: &HdfRequest) -> Result<HdfOutput> {
            log::warn!(
                "{}: {:?} requested but the crate was built without the hdf4 feature",
                path.as_ref().display(),
                request
            );
            Err(SciError::Unsupported("No HDF4 support available".to_string()))
        }
    }
}

/// same as [`readhdf4`]
pub fn hdf4read(path: impl AsRef<Path>, request: &HdfRequest) -> Result<HdfOutput> {
    readhdf4(path, request)
}

hdf_convenience!(
    readhdf4,
    hdf4_variable,
    hdf4_variables,
    hdf4_attributes,
    hdf4_file_attributes
);
