use crate::experiment::ExperimentRecord;
use crate::parser::Instance;
use crate::{Matrix, Result, Solution};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column names of the experiment CSV
pub const CSV_HEADER: [&str; 4] = ["n1", "n2", "exact_change", "approx_change"];

/// Write size line followed by space-separated rows
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Matrix) -> std::io::Result<()> {
    writeln!(writer, "{}", matrix.size())?;
    for row in matrix.rows() {
        for (j, weight) in row.iter().enumerate() {
            if j > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", weight)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Minimal change on its own line, then the retained delta matrix
pub fn write_solution<W: Write>(writer: &mut W, solution: &Solution) -> std::io::Result<()> {
    writeln!(writer, "{}", solution.cost)?;
    write_matrix(writer, &solution.delta)
}

/// Pattern then target, in the layout `parser::parse_instance` reads
pub fn write_instance<W: Write>(writer: &mut W, instance: &Instance) -> std::io::Result<()> {
    write_matrix(writer, &instance.pattern)?;
    writeln!(writer)?;
    write_matrix(writer, &instance.target)
}

pub fn save_solution(path: &Path, solution: &Solution) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_solution(&mut writer, solution)?;
    writer.flush()?;
    Ok(())
}

pub fn save_instance(path: &Path, instance: &Instance) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_instance(&mut writer, instance)?;
    writer.flush()?;
    Ok(())
}

/// Header plus one row per experiment record
pub fn write_records_csv<W: Write>(writer: W, records: &[ExperimentRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(&[
            record.n1.to_string(),
            record.n2.to_string(),
            record.exact_cost.to_string(),
            record.approx_cost.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_records_csv(path: &Path, records: &[ExperimentRecord]) -> Result<()> {
    write_records_csv(File::create(path)?, records)
}
