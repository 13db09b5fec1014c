//! File output for datasets with bounds.
//!
//! NetCDF export requires the `netcdf` feature.

#[cfg(feature = "netcdf")]
mod netcdf_io;

#[cfg(feature = "netcdf")]
pub use netcdf_io::{write_dataset, NetCDFError, TIME_UNITS};
