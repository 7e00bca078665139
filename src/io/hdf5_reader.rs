//! HDF5 reader. The backend is the `hdf5` crate (published as `hdf5-metno`) behind the cargo
//! feature `hdf5`; without it every call returns [`SciError::Unsupported`].
use super::hdf::{HdfOutput, HdfRequest, hdf_convenience};
use crate::error::{Result, SciError};
use std::path::Path;

cfg_if::cfg_if! {
    if #[cfg(feature = "hdf5")] {
        use super::hdf::{AttrValue, require_known, require_name, sorted_if, squeeze};
        use hdf5::types::{FixedAscii, FixedUnicode, TypeDescriptor, VarLenAscii, VarLenUnicode};
        use log::{debug, warn};
        use std::collections::BTreeMap;

        fn hdf_err(path: &Path, e: hdf5::Error) -> SciError {
            SciError::Hdf {
                file: path.to_path_buf(),
                message: e.to_string(),
            }
        }

        /// longest fixed-length string attribute read in full
        const MAX_FIXED_LEN: usize = 1024;

        fn read_value(attr: &hdf5::Attribute, descriptor: &TypeDescriptor) -> hdf5::Result<Option<AttrValue>> {
            let value = match descriptor {
                TypeDescriptor::Integer(_) | TypeDescriptor::Unsigned(_) => {
                    AttrValue::Int(attr.read_raw::<i64>()?)
                }
                TypeDescriptor::Float(_) => AttrValue::Float(attr.read_raw::<f64>()?),
                // fixed and variable length strings do not convert into each other
                TypeDescriptor::FixedAscii(_) => AttrValue::Text(
                    attr.read_raw::<FixedAscii<MAX_FIXED_LEN>>()?
                        .iter()
                        .map(|s| s.as_str().to_string())
                        .collect(),
                ),
                TypeDescriptor::FixedUnicode(_) => AttrValue::Text(
                    attr.read_raw::<FixedUnicode<MAX_FIXED_LEN>>()?
                        .iter()
                        .map(|s| s.as_str().to_string())
                        .collect(),
                ),
                TypeDescriptor::VarLenAscii => AttrValue::Text(
                    attr.read_raw::<VarLenAscii>()?
                        .iter()
                        .map(|s| s.as_str().to_string())
                        .collect(),
                ),
                TypeDescriptor::VarLenUnicode => AttrValue::Text(
                    attr.read_raw::<VarLenUnicode>()?
                        .iter()
                        .map(|s| s.as_str().to_string())
                        .collect(),
                ),
                _ => return Ok(None),
            };
            Ok(Some(value))
        }

        /// attributes of a file, group or dataset; unreadable ones are skipped with a warning
        fn read_attributes(location: &hdf5::Location, path: &Path) -> Result<BTreeMap<String, AttrValue>> {
            let mut attrs = BTreeMap::new();
            for name in location.attr_names().map_err(|e| hdf_err(path, e))? {
                let attr = location.attr(&name).map_err(|e| hdf_err(path, e))?;
                let descriptor = attr
                    .dtype()
                    .and_then(|t| t.to_descriptor())
                    .map_err(|e| hdf_err(path, e))?;
                match read_value(&attr, &descriptor) {
                    Ok(Some(value)) => {
                        attrs.insert(name, value);
                    }
                    Ok(None) => {
                        warn!("{}: attribute {} of type {:?} skipped", path.display(), name, descriptor)
                    }
                    Err(e) => warn!("{}: attribute {} not readable: {}", path.display(), name, e),
                }
            }
            Ok(attrs)
        }

        /// Reads a variable, the variable names or attributes from an HDF5 file.
        pub fn readhdf5(path: impl AsRef<Path>, request: &HdfRequest) -> Result<HdfOutput> {
            let path = path.as_ref();
            let file = hdf5::File::open(path)
                .map_err(|e| SciError::io(path, std::io::Error::other(e.to_string())))?;
            debug!("{}: {:?}", path.display(), request);
            if let HdfRequest::FileAttributes = request {
                return Ok(HdfOutput::Attributes(read_attributes(&file, path)?));
            }
            let members = file.member_names().map_err(|e| hdf_err(path, e))?;
            match request {
                HdfRequest::Variables { sort } => Ok(HdfOutput::Names(sorted_if(members, *sort))),
                HdfRequest::Attributes { name } => {
                    require_known(name, &members, path)?;
                    let attrs = match file.dataset(name) {
                        Ok(ds) => read_attributes(&ds, path)?,
                        Err(_) => {
                            let group = file.group(name).map_err(|e| hdf_err(path, e))?;
                            read_attributes(&group, path)?
                        }
                    };
                    Ok(HdfOutput::Attributes(attrs))
                }
                HdfRequest::Variable { name, squeeze: squeezed } => {
                    require_name(name)?;
                    require_known(name, &members, path)?;
                    let arr = file
                        .dataset(name)
                        .and_then(|ds| ds.read_dyn::<f64>())
                        .map_err(|e| hdf_err(path, e))?;
                    if *squeezed {
                        Ok(HdfOutput::Array(squeeze(arr)?))
                    } else {
                        Ok(HdfOutput::Array(arr))
                    }
                }
                HdfRequest::FileAttributes => Ok(HdfOutput::Attributes(read_attributes(&file, path)?)),
            }
        }
    } else {
        /// Reads a variable, the variable names or attributes from an HDF5 file.
        /// This build has no HDF5 backend.
        pub fn readhdf5(path: impl AsRef<Path>, request: &HdfRequest) -> Result<HdfOutput> {
            log::warn!(
                "{}: {:?} requested but the crate was built without the hdf5 feature",
                path.as_ref().display(),
                request
            );
            Err(SciError::Unsupported("No HDF5 support available".to_string()))
        }
    }
}

/// same as [`readhdf5`]
pub fn hdf5read(path: impl AsRef<Path>, request: &HdfRequest) -> Result<HdfOutput> {
    readhdf5(path, request)
}

hdf_convenience!(
    readhdf5,
    hdf5_variable,
    hdf5_variables,
    hdf5_attributes,
    hdf5_file_attributes
);
