//! Data Processor Module
//! Schema normalization, coordinate splitting, numeric coercion and row filtering.

use super::error::ExtractError;
use super::loader::DataLoader;
use super::record::{Dataset, RentRecord};
use super::schema::{
    ColumnMapping, COORDONNEES, LOYER, PIECES, QUARTIER, REQUIRED_COLUMNS, TYPE_LOCATION,
};
use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Why a source row was left out of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DropReason {
    /// Coordinate cell empty or without a comma.
    MissingCoordinates,
    /// Latitude or longitude not a finite decimal.
    InvalidCoordinates,
    InvalidRent,
    InvalidPieces,
    /// Empty sector or rental type.
    MissingText,
}

/// Row accounting for one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub dropped: BTreeMap<DropReason, usize>,
}

impl ExtractReport {
    pub fn rows_dropped(&self) -> usize {
        self.dropped.values().sum()
    }

    pub fn dropped_for(&self, reason: DropReason) -> usize {
        self.dropped.get(&reason).copied().unwrap_or(0)
    }

    fn record_drop(&mut self, reason: DropReason) {
        *self.dropped.entry(reason).or_insert(0) += 1;
    }
}

/// Read, clean and validate a rent-control source file.
pub fn extract_transform(source_path: impl AsRef<Path>) -> Result<Dataset, ExtractError> {
    extract_transform_with_report(source_path).map(|(dataset, _)| dataset)
}

/// Same as [`extract_transform`], also returning how many rows were dropped and why.
pub fn extract_transform_with_report(
    source_path: impl AsRef<Path>,
) -> Result<(Dataset, ExtractReport), ExtractError> {
    let raw = DataLoader::load(source_path.as_ref())?;
    let normalized = DataProcessor::normalize_columns(&raw, &ColumnMapping::paris_rent_control())?;
    let (dataset, report) = DataProcessor::to_records(&normalized)?;

    log::debug!(
        "Extracted {} of {} rows from {} ({:?} dropped)",
        report.rows_kept,
        report.rows_read,
        source_path.as_ref().display(),
        report.dropped
    );
    Ok((dataset, report))
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Rename every column through `mapping` and check the required ones exist.
    ///
    /// Output columns keep their source order; all are `String` typed.
    pub fn normalize_columns(
        df: &DataFrame,
        mapping: &ColumnMapping,
    ) -> Result<DataFrame, ExtractError> {
        let mut columns: Vec<Column> = Vec::with_capacity(df.width());
        let mut names: Vec<String> = Vec::with_capacity(df.width());

        for column in df.get_columns() {
            let name = mapping.resolve(column.name().as_str());
            if names.contains(&name) {
                log::warn!(
                    "Column '{}' maps to already seen '{}', ignoring it",
                    column.name(),
                    name
                );
                continue;
            }
            let values = Self::text_values(column)?;
            columns.push(Column::new(name.as_str().into(), values));
            names.push(name);
        }

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !names.iter().any(|n| n == *required))
            .map(|s| s.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ExtractError::SchemaMismatch {
                missing,
                found: names,
            });
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Project a normalized frame onto [`RentRecord`]s, dropping invalid rows.
    pub fn to_records(df: &DataFrame) -> Result<(Dataset, ExtractReport), ExtractError> {
        let quartier = Self::text_values(df.column(QUARTIER)?)?;
        let pieces = Self::text_values(df.column(PIECES)?)?;
        let loyer = Self::text_values(df.column(LOYER)?)?;
        let type_location = Self::text_values(df.column(TYPE_LOCATION)?)?;
        let coordonnees = Self::text_values(df.column(COORDONNEES)?)?;

        let mut report = ExtractReport {
            rows_read: df.height(),
            ..Default::default()
        };
        let mut dataset = Dataset::with_capacity(df.height());

        for i in 0..df.height() {
            let row = RawRow {
                quartier: quartier[i].as_deref(),
                pieces: pieces[i].as_deref(),
                loyer: loyer[i].as_deref(),
                type_location: type_location[i].as_deref(),
                coordonnees: coordonnees[i].as_deref(),
            };
            match row.validate() {
                Ok(record) => dataset.push(record),
                Err(reason) => report.record_drop(reason),
            }
        }

        report.rows_kept = dataset.len();
        Ok((dataset, report))
    }

    fn text_values(column: &Column) -> Result<Vec<Option<String>>, PolarsError> {
        let series = column.as_materialized_series().cast(&DataType::String)?;
        let values = series
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_owned))
            .collect();
        Ok(values)
    }
}

/// Text cells of one source row, before coercion.
struct RawRow<'a> {
    quartier: Option<&'a str>,
    pieces: Option<&'a str>,
    loyer: Option<&'a str>,
    type_location: Option<&'a str>,
    coordonnees: Option<&'a str>,
}

impl RawRow<'_> {
    fn validate(&self) -> Result<RentRecord, DropReason> {
        let (lat_raw, lon_raw) = self
            .coordonnees
            .and_then(|c| c.split_once(','))
            .ok_or(DropReason::MissingCoordinates)?;

        let latitude = parse_decimal(lat_raw);
        let longitude = parse_decimal(lon_raw);
        let loyer = self.loyer.and_then(parse_decimal);
        let pieces = self.pieces.and_then(parse_room_count);

        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Err(DropReason::InvalidCoordinates);
        };
        let loyer = loyer.ok_or(DropReason::InvalidRent)?;
        let pieces = pieces.ok_or(DropReason::InvalidPieces)?;
        let quartier = non_empty(self.quartier).ok_or(DropReason::MissingText)?;
        let type_location = non_empty(self.type_location).ok_or(DropReason::MissingText)?;

        Ok(RentRecord {
            quartier,
            pieces,
            loyer,
            latitude,
            longitude,
            type_location,
        })
    }
}

/// Parse a finite decimal, ignoring surrounding whitespace.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Room counts arrive as "2" or "2.0" depending on the source format.
pub fn parse_room_count(raw: &str) -> Option<u32> {
    let value = parse_decimal(raw)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as u32)
}

/// Cell text as written; blank cells count as missing.
fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty()).map(str::to_owned)
}
