//! CSV rendering of record collections.

use chrono::NaiveDateTime;
use luminous_core::Record;
use luminous_error::{ExportError, ExportErrorKind};
use luminous_table::TablePage;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File name prefix used when none is configured.
pub const DEFAULT_FILE_PREFIX: &str = "campaigns_report";

/// Write `records` as CSV, returning the number of data rows.
///
/// The header lists every field of the record type in declaration order.
/// Fields a record has no value for are written as empty cells.
pub fn export_csv<'a, T, I, W>(records: I, writer: W) -> Result<usize, ExportError>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write,
{
    let mut csv = csv::Writer::from_writer(writer);
    let fields = T::fields();

    csv.write_record(fields.iter().map(|field| field.to_string()))
        .map_err(csv_error)?;

    let mut rows = 0;
    for record in records {
        let cells = fields.iter().map(|field| {
            record
                .field(*field)
                .map(|value| value.as_text().into_owned())
                .unwrap_or_default()
        });
        csv.write_record(cells).map_err(csv_error)?;
        rows += 1;
    }
    csv.flush()?;

    debug!(rows, "CSV rows written");
    Ok(rows)
}

/// Name of an export file taken at `now`, e.g. `campaigns_report_2024-06-01_0930.csv`.
pub fn export_file_name(prefix: &str, now: NaiveDateTime) -> String {
    format!("{}_{}.csv", prefix, now.format("%Y-%m-%d_%H%M"))
}

/// Write `records` to a timestamped CSV file in `directory`.
///
/// The directory is created if missing. Returns the path written.
#[instrument(skip(records, directory), fields(directory = %directory.as_ref().display()))]
pub fn export_to_file<'a, T, I>(
    records: I,
    directory: impl AsRef<Path>,
    prefix: &str,
    now: NaiveDateTime,
) -> Result<PathBuf, ExportError>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let directory = directory.as_ref();
    fs::create_dir_all(directory)?;

    let path = directory.join(export_file_name(prefix, now));
    let file = File::create(&path)?;
    let rows = export_csv(records, file)?;

    info!(path = %path.display(), rows, "Exported CSV");
    Ok(path)
}

/// Write the rows of a table page to a timestamped CSV file.
pub fn export_page_to_file<T: Record>(
    page: &TablePage<'_, T>,
    directory: impl AsRef<Path>,
    prefix: &str,
    now: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    export_to_file(page.page_data().iter().copied(), directory, prefix, now)
}

fn csv_error(err: csv::Error) -> ExportError {
    ExportError::new(ExportErrorKind::Csv(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_export_file_name_pads_time() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 59))
            .unwrap();
        assert_eq!(
            export_file_name(DEFAULT_FILE_PREFIX, now),
            "campaigns_report_2024-03-07_0905.csv"
        );
    }
}
