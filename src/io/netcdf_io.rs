//! NetCDF export of coordinates and their bounds variables.
//!
//! Output follows CF-1.8:
//! - one dimension per coordinate, named after it
//! - one size-2 dimension per distinct bounds dimension name
//! - bounds variables shaped `(dim, bounds_dim)`, stored row-major
//! - timestamps encoded as "seconds since 1970-01-01 00:00:00"
//!
//! # Example
//!
//! ```rust,ignore
//! use cf_bounds::BoundsOptions;
//! use cf_bounds::io::write_dataset;
//!
//! let ds = ds.infer_bounds(&[], &BoundsOptions::default())?;
//! write_dataset("grid.nc", &ds)?;
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use netcdf::create;
use thiserror::Error;
use tracing::debug;

use crate::dataset::{Attributes, BoundsData, CoordinateData, Dataset};
use crate::error::BoundsError;
use crate::types::BoundsArray;

/// Units attribute for encoded timestamps.
pub const TIME_UNITS: &str = "seconds since 1970-01-01 00:00:00";

/// Error type for NetCDF operations.
#[derive(Debug, Error)]
pub enum NetCDFError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// NetCDF library error
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// Bounds were rejected
    #[error("bounds error: {0}")]
    Bounds(#[from] BoundsError),

    /// Invalid data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Write every coordinate and bounds variable of a dataset to a new file.
///
/// Existing files are overwritten.
///
/// # Errors
/// - `InvalidData` for an empty coordinate or bounds without a coordinate
/// - `Bounds` if a bounds variable has an inverted row
/// - `NetCDF` for library failures
pub fn write_dataset(path: impl AsRef<Path>, dataset: &Dataset) -> Result<(), NetCDFError> {
    let path = path.as_ref();
    let mut file = create(path)?;

    file.add_attribute("Conventions", "CF-1.8")?;
    file.add_attribute(
        "history",
        format!("{}: Created by cf-bounds", Utc::now().format("%Y-%m-%d %H:%M:%S UTC")).as_str(),
    )?;

    for (name, coord) in dataset.coords() {
        if coord.is_empty() {
            return Err(NetCDFError::InvalidData(format!("coordinate {:?} is empty", name)));
        }
        file.add_dimension(name, coord.len())?;
    }

    let bounds_dims: BTreeSet<&str> = dataset
        .bounds_vars()
        .map(|(_, var)| var.bounds_dim.as_str())
        .collect();
    for bounds_dim in bounds_dims {
        file.add_dimension(bounds_dim, 2)?;
    }

    for (name, coord) in dataset.coords() {
        let dims = [name];
        match &coord.data {
            CoordinateData::Float(values) => {
                let mut var = file.add_variable::<f64>(name, &dims)?;
                put_attributes(&mut var, &coord.attrs)?;
                var.put_values(values, ..)?;
            }
            CoordinateData::Integer(values) => {
                let mut var = file.add_variable::<i64>(name, &dims)?;
                put_attributes(&mut var, &coord.attrs)?;
                var.put_values(values, ..)?;
            }
            CoordinateData::Time(values) => {
                let mut var = file.add_variable::<f64>(name, &dims)?;
                put_attributes(&mut var, &coord.attrs)?;
                put_time_attributes(&mut var, None)?;
                let encoded: Vec<f64> = values.iter().map(naive_seconds).collect();
                var.put_values(&encoded, ..)?;
            }
            CoordinateData::ZonedTime(values) => {
                let mut var = file.add_variable::<f64>(name, &dims)?;
                put_attributes(&mut var, &coord.attrs)?;
                put_time_attributes(&mut var, values.first().map(|t| t.timezone().name()))?;
                let encoded: Vec<f64> = values.iter().map(zoned_seconds).collect();
                var.put_values(&encoded, ..)?;
            }
        }
    }

    for (name, bounds) in dataset.bounds_vars() {
        if dataset.coord(&bounds.dim).is_none() {
            return Err(NetCDFError::InvalidData(format!(
                "bounds variable {:?} refers to missing coordinate {:?}",
                name, bounds.dim
            )));
        }
        bounds.data.validate()?;

        let dims = [bounds.dim.as_str(), bounds.bounds_dim.as_str()];
        match &bounds.data {
            BoundsData::Float(b) => {
                let mut var = file.add_variable::<f64>(name, &dims)?;
                put_attributes(&mut var, &bounds.attrs)?;
                var.put_values(&b.to_flat(), ..)?;
            }
            BoundsData::Integer(b) => {
                let mut var = file.add_variable::<i64>(name, &dims)?;
                put_attributes(&mut var, &bounds.attrs)?;
                var.put_values(&b.to_flat(), ..)?;
            }
            BoundsData::Time(b) => {
                let mut var = file.add_variable::<f64>(name, &dims)?;
                put_attributes(&mut var, &bounds.attrs)?;
                put_time_attributes(&mut var, None)?;
                var.put_values(&encode_rows(b, naive_seconds), ..)?;
            }
            BoundsData::ZonedTime(b) => {
                let mut var = file.add_variable::<f64>(name, &dims)?;
                put_attributes(&mut var, &bounds.attrs)?;
                put_time_attributes(&mut var, b.iter().next().map(|row| row.lower.timezone().name()))?;
                var.put_values(&encode_rows(b, zoned_seconds), ..)?;
            }
        }
    }

    debug!(
        path = %path.display(),
        coords = dataset.coords().count(),
        bounds = dataset.bounds_vars().count(),
        "wrote dataset"
    );
    Ok(())
}

fn put_attributes(var: &mut netcdf::VariableMut<'_>, attrs: &Attributes) -> Result<(), NetCDFError> {
    for (key, value) in attrs {
        var.put_attribute(key, value.as_str())?;
    }
    Ok(())
}

fn put_time_attributes(var: &mut netcdf::VariableMut<'_>, zone: Option<&str>) -> Result<(), NetCDFError> {
    var.put_attribute("units", TIME_UNITS)?;
    var.put_attribute("calendar", "standard")?;
    if let Some(zone) = zone {
        var.put_attribute("time_zone", zone)?;
    }
    Ok(())
}

fn naive_seconds(t: &NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64 / 1000.0
}

fn zoned_seconds<Tz: TimeZone>(t: &DateTime<Tz>) -> f64 {
    t.timestamp_millis() as f64 / 1000.0
}

fn encode_rows<T>(bounds: &BoundsArray<T>, encode: impl Fn(&T) -> f64) -> Vec<f64> {
    bounds
        .iter()
        .flat_map(|row| [encode(&row.lower), encode(&row.upper)])
        .collect()
}
