//! file readers: delimited ascii tables and HDF4/HDF5 containers
/// `sread`/`fread` ascii table readers with column selection, separator sniffing,
/// comment and blank line handling, header extraction and fill values
pub mod ascii;
/// line counter for ascii files
pub mod lif;
/// request/response types shared by the HDF readers
pub mod hdf;
/// HDF5 reader (cargo feature `hdf5`)
pub mod hdf5_reader;
/// HDF4 reader through libnetcdf (cargo feature `hdf4`)
pub mod hdf4_reader;

pub use ascii::{
    Columns, ReadOptions, Separator, Strip, Table, fread, fread_header, sread, sread_array,
    sread_header,
};
pub use hdf::{AttrValue, HdfOutput, HdfRequest};
pub use hdf4_reader::{
    hdf4_attributes, hdf4_file_attributes, hdf4_variable, hdf4_variables, hdf4read, readhdf4,
};
pub use hdf5_reader::{
    hdf5_attributes, hdf5_file_attributes, hdf5_variable, hdf5_variables, hdf5read, readhdf5,
};
pub use lif::{LifOptions, lif, lif_maxcol};
