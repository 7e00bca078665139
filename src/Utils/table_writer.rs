//! Writing and printing of the tables produced by the ascii readers.
use crate::error::{Result, SciError};
use crate::io::Table;
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// rows of cells as strings; a vector becomes one column
pub fn table_to_rows<T: ToString>(table: &Table<T>) -> Vec<Vec<String>> {
    match table {
        Table::Matrix(m) => m
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect(),
        Table::Vector(v) => v.iter().map(|x| vec![x.to_string()]).collect(),
    }
}

/// Writes an optional header line and the rows, cells joined by `separator`.
pub fn save_table_to_file(
    rows: &[Vec<String>],
    headers: Option<&[String]>,
    path: impl AsRef<Path>,
    separator: &str,
) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| SciError::io(path, e))?;
    if let Some(headers) = headers {
        writeln!(file, "{}", headers.join(separator)).map_err(|e| SciError::io(path, e))?;
    }
    for row in rows {
        writeln!(file, "{}", row.join(separator)).map_err(|e| SciError::io(path, e))?;
    }
    Ok(())
}

fn csv_err(path: &Path, e: csv::Error) -> SciError {
    SciError::io(path, std::io::Error::other(e.to_string()))
}

/// Same as [`save_table_to_file`] with comma separators and csv quoting.
pub fn save_table_to_csv(
    rows: &[Vec<String>],
    headers: Option<&[String]>,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SciError::io(path, e))?;
    // rows may differ in length
    let mut writer: Writer<File> = WriterBuilder::new().flexible(true).from_writer(file);
    if let Some(headers) = headers {
        writer.write_record(headers).map_err(|e| csv_err(path, e))?;
    }
    for row in rows {
        writer.write_record(row).map_err(|e| csv_err(path, e))?;
    }
    writer.flush().map_err(|e| SciError::io(path, e))?;
    Ok(())
}

/// rounded box table for terminal output
pub fn pretty_table(headers: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    if let Some(headers) = headers {
        builder.push_record(headers.iter().cloned());
    }
    for row in rows {
        builder.push_record(row.iter().cloned());
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["1.1".to_string(), "1.2".to_string()],
            vec!["2.1".to_string(), "".to_string()],
        ]
    }

    #[test]
    fn test_save_table_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.dat");
        let headers = vec!["a".to_string(), "b".to_string()];
        save_table_to_file(&rows(), Some(&headers), &path, " ").unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "a b\n1.1 1.2\n2.1 \n");
    }

    #[test]
    fn test_save_table_to_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let quoted = vec![vec!["x,y".to_string(), "1".to_string()]];
        save_table_to_csv(&quoted, None, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "\"x,y\",1\n");
    }

    #[test]
    fn test_table_to_rows_and_pretty() {
        let t = Table::Vector(vec![1.5, 2.5]);
        assert_eq!(table_to_rows(&t), vec![vec!["1.5".to_string()], vec!["2.5".to_string()]]);
        let s = pretty_table(None, &rows());
        assert!(s.contains("1.1") && s.contains("2.1"));
    }
}
