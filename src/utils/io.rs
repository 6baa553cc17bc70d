use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::distance_matrix::distance_table::DistanceMatrix;
use crate::edge_set::{Edge, EdgeSet};
use crate::error::{Result, TollError};
use crate::time_coverage::CoverageReport;
use crate::types::Distance;
use crate::unroll::{validate_unrolled_rows, UnrolledRow};
use crate::utils::data_structures::Matrix;

#[derive(Serialize)]
struct PointIdRow<'a, P> {
    id_start: &'a P
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageRow<K> {
    pub id: K,
    pub id_2: K,
    pub complete: bool
}

pub fn open_input(path: &dyn AsRef<Path>) -> Result<File> {
    File::open(path).map_err(|source| TollError::Io { path: path.as_ref().to_path_buf(), source })
}

pub fn create_output(path: &dyn AsRef<Path>) -> Result<File> {
    File::create(path).map_err(|source| TollError::Io { path: path.as_ref().to_path_buf(), source })
}

/// deserializes every row of a csv table with a header line. surrounding whitespace of fields is ignored
pub fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let rows = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()?;

    Ok(rows)
}

pub fn write_rows<T: Serialize, W: Write>(writer: W, rows: &[T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in rows {
        csv_writer.serialize(row).map_err(|error| TollError::WriteFailure(error.into()))?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn read_edges<P: DeserializeOwned + Ord + Clone + Debug, R: Read>(reader: R) -> Result<EdgeSet<P>> {
    let edges: Vec<Edge<P>> = read_rows(reader)?;
    Ok(EdgeSet::new(edges))
}

/// reads long format rows, rejecting self pairs and negative or non finite distances
pub fn read_unrolled_rows<P: DeserializeOwned + Debug + PartialEq, R: Read>(reader: R) -> Result<Vec<UnrolledRow<P>>> {
    let rows: Vec<UnrolledRow<P>> = read_rows(reader)?;
    validate_unrolled_rows(&rows)?;

    Ok(rows)
}

/// writes the table with the point ids as header line and as first column
pub fn write_distance_matrix<P: Ord + Clone + Debug + Display, W: Write>(writer: W, matrix: &DistanceMatrix<P>) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let write_error = |error: csv::Error| TollError::WriteFailure(error.into());

    let header: Vec<String> = std::iter::once(String::new())
        .chain(matrix.points().iter().map(|point| point.to_string()))
        .collect();
    csv_writer.write_record(&header).map_err(write_error)?;

    for (row, point) in matrix.points().iter().enumerate() {
        let record: Vec<String> = std::iter::once(point.to_string())
            .chain((0..matrix.len()).map(|col| matrix.get_by_index(row, col).to_string()))
            .collect();
        csv_writer.write_record(&record).map_err(write_error)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// reads a table written by write_distance_matrix. every row has to be labeled with the point of the same header column
pub fn read_distance_matrix<P: FromStr + Ord + Clone + Debug, R: Read>(reader: R) -> Result<DistanceMatrix<P>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let points: Vec<P> = csv_reader.headers()?
        .iter()
        .skip(1)
        .map(parse_point)
        .collect::<Result<Vec<P>>>()?;

    let mut distances = Matrix::new(points.len(), points.len(), 0.0);
    let mut num_rows = 0;

    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;

        if row >= points.len() {
            return Err(TollError::InvalidInput(format!("distance table has more than {} rows", points.len())));
        }

        let label: P = parse_point(record.get(0).unwrap_or_default())?;
        if label != points[row] {
            return Err(TollError::InvalidInput(format!("row {} is labeled {:?} but the header expects {:?}", row, label, points[row])));
        }

        for (col, field) in record.iter().skip(1).enumerate() {
            let distance: Distance = field.parse()
                .map_err(|_| TollError::InvalidInput(format!("'{}' is not a valid distance", field)))?;
            distances.set(row, col, distance);
        }

        num_rows += 1;
    }

    if num_rows != points.len() {
        return Err(TollError::InvalidInput(format!("distance table has {} rows but {} columns", num_rows, points.len())));
    }

    DistanceMatrix::from_parts(points, distances)
}

pub fn write_point_ids<P: Serialize, W: Write>(writer: W, points: &[P]) -> Result<()> {
    let rows: Vec<PointIdRow<P>> = points.iter().map(|id_start| PointIdRow { id_start }).collect();
    write_rows(writer, &rows)
}

pub fn write_coverage_report<K: Serialize + Clone, W: Write>(writer: W, report: &CoverageReport<K>) -> Result<()> {
    let rows: Vec<CoverageRow<K>> = report.iter()
        .map(|((id, id_2), complete)| CoverageRow { id: id.clone(), id_2: id_2.clone(), complete: *complete })
        .collect();
    write_rows(writer, &rows)
}

fn parse_point<P: FromStr>(field: &str) -> Result<P> {
    field.parse().map_err(|_| TollError::InvalidInput(format!("'{}' is not a valid point id", field)))
}
