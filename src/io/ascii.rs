//! Readers for delimited ascii tables.
//!
//! [`sread`] returns the cells of a file as strings, [`fread`] parses them as `f64`.
//! Both share one scanner:
//! 1. `hskip` lines are discarded, the following `skip - hskip` lines are the header.
//! 2. Data lines follow. A blank line ends the data unless `skip_blank` is set, a line whose
//!    first character is one of the `comment` characters is ignored.
//! 3. Without an explicit separator it is sniffed from the first data line: `,` if the line
//!    contains one, else `;`, else runs of whitespace.
//! 4. Columns are chosen with `nc` (first n columns after `cskip`, or explicit indices)
//!    or by name with `cname` which is matched against the first header line.
//!
//! ```no_run
//! use RustedEnvSci::io::{sread, ReadOptions};
//! let table = sread("test.dat", &ReadOptions::new().skip(1).nc_indices(vec![1, 3])).unwrap();
//! assert_eq!(table.as_matrix().unwrap()[0], vec!["1.2", "1.4"]);
//! ```
use crate::Utils::task_parser::{SectionMap, Value, read_section};
use crate::error::{Result, SciError};
use log::{debug, info};
use ndarray::{Array2, ArrayD, IxDyn};
use std::fs;
use std::path::Path;

/// which columns to read
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Columns {
    /// every column after `cskip`
    #[default]
    All,
    /// `n` columns starting at `cskip`; `First(0)` is the same as `All`
    First(usize),
    /// explicit 0-based column indices in output order, `cskip` is ignored
    Indices(Vec<usize>),
}

/// characters removed from both ends of every cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Strip {
    /// double quotes, then single quotes
    #[default]
    Quotes,
    Nothing,
    Chars(String),
}

impl Strip {
    fn apply<'a>(&self, cell: &'a str) -> &'a str {
        match self {
            Strip::Quotes => cell.trim_matches('"').trim_matches('\''),
            Strip::Nothing => cell,
            Strip::Chars(chars) => cell.trim_matches(|c: char| chars.contains(c)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Separator {
    /// runs of whitespace, leading and trailing whitespace ignored
    Whitespace,
    /// literal separator, consecutive separators give empty cells
    Text(String),
}

impl Separator {
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Separator::Whitespace => line.split_whitespace().collect(),
            Separator::Text(sep) => line.split(sep.as_str()).collect(),
        }
    }

    fn sniff(line: &str) -> Separator {
        if line.split(',').count() > 1 {
            Separator::Text(",".to_string())
        } else if line.split(';').count() > 1 {
            Separator::Text(";".to_string())
        } else {
            Separator::Whitespace
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadOptions {
    pub nc: Columns,
    /// column names looked up in the first header line
    pub cname: Option<Vec<String>>,
    /// lines at the top of the file that are not data
    pub skip: usize,
    /// leading columns ignored by `Columns::All` and `Columns::First`
    pub cskip: usize,
    /// lines of `skip` that are not header either
    pub hskip: usize,
    /// trim whitespace of header cells and of `cname` before matching
    pub hstrip: bool,
    /// `None` sniffs the separator
    pub separator: Option<Separator>,
    /// collapse a single column to a vector
    pub squeeze: bool,
    pub skip_blank: bool,
    /// set of characters that start a comment line
    pub comment: Option<String>,
    /// tolerate short lines and replace empty cells
    pub fill: bool,
    /// replacement of empty cells in string output
    pub fill_value: String,
    /// replacement of empty cells in numeric output
    pub fill_number: f64,
    pub strip: Strip,
    /// header returned as the raw lines
    pub full_header: bool,
    pub transpose: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            nc: Columns::All,
            cname: None,
            skip: 0,
            cskip: 0,
            hskip: 0,
            hstrip: true,
            separator: None,
            squeeze: false,
            skip_blank: false,
            comment: None,
            fill: false,
            fill_value: String::new(),
            fill_number: f64::NAN,
            strip: Strip::Quotes,
            full_header: false,
            transpose: false,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn nc(mut self, nc: Columns) -> Self {
        self.nc = nc;
        self
    }
    pub fn nc_first(self, n: usize) -> Self {
        self.nc(Columns::First(n))
    }
    pub fn nc_indices(self, indices: Vec<usize>) -> Self {
        self.nc(Columns::Indices(indices))
    }
    pub fn cname<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cname = Some(names.into_iter().map(Into::into).collect());
        self
    }
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
    pub fn cskip(mut self, cskip: usize) -> Self {
        self.cskip = cskip;
        self
    }
    pub fn hskip(mut self, hskip: usize) -> Self {
        self.hskip = hskip;
        self
    }
    pub fn hstrip(mut self, hstrip: bool) -> Self {
        self.hstrip = hstrip;
        self
    }
    pub fn separator(mut self, separator: &str) -> Self {
        self.separator = Some(Separator::Text(separator.to_string()));
        self
    }
    pub fn whitespace(mut self) -> Self {
        self.separator = Some(Separator::Whitespace);
        self
    }
    pub fn squeeze(mut self, squeeze: bool) -> Self {
        self.squeeze = squeeze;
        self
    }
    /// same as [`ReadOptions::squeeze`]
    pub fn reform(self, reform: bool) -> Self {
        self.squeeze(reform)
    }
    pub fn skip_blank(mut self, skip_blank: bool) -> Self {
        self.skip_blank = skip_blank;
        self
    }
    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }
    /// switches filling on
    pub fn fill_value(mut self, fill_value: &str) -> Self {
        self.fill = true;
        self.fill_value = fill_value.to_string();
        self
    }
    /// switches filling on
    pub fn fill_number(mut self, fill_number: f64) -> Self {
        self.fill = true;
        self.fill_number = fill_number;
        self
    }
    pub fn strip(mut self, strip: Strip) -> Self {
        self.strip = strip;
        self
    }
    pub fn full_header(mut self, full_header: bool) -> Self {
        self.full_header = full_header;
        self
    }
    pub fn transpose(mut self, transpose: bool) -> Self {
        self.transpose = transpose;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.hskip > self.skip {
            return Err(SciError::InvalidOptions(format!(
                "hskip ({}) must not exceed skip ({})",
                self.hskip, self.skip
            )));
        }
        let nc_given = !matches!(self.nc, Columns::All | Columns::First(0));
        if nc_given && self.cname.is_some() {
            return Err(SciError::InvalidOptions(
                "nc and cname are mutually exclusive.".to_string(),
            ));
        }
        Ok(())
    }

    /// Options from a parsed task-file section, e.g.
    /// ```text
    /// sread
    ///   skip: 1
    ///   nc: 1, 3
    ///   separator: comma
    ///   comment: #!
    /// ```
    /// A single `nc` value means the first n columns, several values are indices.
    pub fn from_document(section: &SectionMap) -> Result<Self> {
        let mut opts = ReadOptions::default();
        // a fill value switches filling on, as the builder methods do
        let mut fill_given = false;
        for (key, values) in section {
            let Some(values) = values else { continue };
            match key.as_str() {
                "nc" => {
                    let n = values
                        .iter()
                        .map(|v| to_usize(key, v))
                        .collect::<Result<Vec<usize>>>()?;
                    opts.nc = match n.as_slice() {
                        [] | [0] => Columns::All,
                        [n] => Columns::First(*n),
                        _ => Columns::Indices(n),
                    };
                }
                "columns" => {
                    opts.nc = Columns::Indices(
                        values
                            .iter()
                            .map(|v| to_usize(key, v))
                            .collect::<Result<Vec<usize>>>()?,
                    )
                }
                "cname" => opts.cname = Some(values.iter().map(Value::to_string_value).collect()),
                "skip" => opts.skip = to_usize(key, single(key, values)?)?,
                "cskip" => opts.cskip = to_usize(key, single(key, values)?)?,
                "hskip" => opts.hskip = to_usize(key, single(key, values)?)?,
                "hstrip" => opts.hstrip = to_bool(key, single(key, values)?)?,
                "squeeze" | "reform" => opts.squeeze = to_bool(key, single(key, values)?)?,
                "skip_blank" => opts.skip_blank = to_bool(key, single(key, values)?)?,
                "fill" => opts.fill = to_bool(key, single(key, values)?)?,
                "full_header" => opts.full_header = to_bool(key, single(key, values)?)?,
                "transpose" => opts.transpose = to_bool(key, single(key, values)?)?,
                "separator" => {
                    let name = single(key, values)?.to_string_value();
                    opts.separator = Some(match name.as_str() {
                        "comma" => Separator::Text(",".to_string()),
                        "semicolon" => Separator::Text(";".to_string()),
                        "tab" => Separator::Text("\t".to_string()),
                        "whitespace" => Separator::Whitespace,
                        other => Separator::Text(other.to_string()),
                    });
                }
                "comment" => {
                    opts.comment = Some(values.iter().map(Value::to_string_value).collect())
                }
                "fill_value" => {
                    opts.fill_value = single(key, values)?.to_string_value();
                    fill_given = true;
                }
                "fill_number" => {
                    opts.fill_number = single(key, values)?.as_float().ok_or_else(|| {
                        SciError::Config(format!("{} expects a number", key))
                    })?;
                    fill_given = true;
                }
                "strip" => {
                    opts.strip = match single(key, values)? {
                        Value::Boolean(false) => Strip::Nothing,
                        Value::String(s) if s == "none" => Strip::Nothing,
                        Value::String(s) if s == "quotes" => Strip::Quotes,
                        other => Strip::Chars(other.to_string_value()),
                    }
                }
                other => {
                    return Err(SciError::Config(format!("unknown reader option '{}'", other)));
                }
            }
        }
        opts.fill |= fill_given;
        Ok(opts)
    }

    /// options from the section `title` of a task file
    pub fn from_task_file(path: impl AsRef<Path>, title: &str) -> Result<Self> {
        let section = read_section(path.as_ref(), title)?;
        ReadOptions::from_document(&section)
    }
}

fn single<'a>(key: &str, values: &'a [Value]) -> Result<&'a Value> {
    match values {
        [value] => Ok(value),
        _ => Err(SciError::Config(format!("{} expects exactly one value", key))),
    }
}

fn to_usize(key: &str, value: &Value) -> Result<usize> {
    value
        .as_integer()
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| SciError::Config(format!("{} expects a non-negative integer, got {}", key, value)))
}

fn to_bool(key: &str, value: &Value) -> Result<bool> {
    value
        .as_boolean()
        .ok_or_else(|| SciError::Config(format!("{} expects true or false, got {}", key, value)))
}

/// Result of the list-returning readers: one row per line, or a flat vector when squeezed
/// (or for a single header line).
#[derive(Debug, Clone, PartialEq)]
pub enum Table<T> {
    Matrix(Vec<Vec<T>>),
    Vector(Vec<T>),
}

impl<T> Table<T> {
    pub fn as_matrix(&self) -> Option<&Vec<Vec<T>>> {
        match self {
            Table::Matrix(m) => Some(m),
            Table::Vector(_) => None,
        }
    }
    pub fn as_vector(&self) -> Option<&Vec<T>> {
        match self {
            Table::Vector(v) => Some(v),
            Table::Matrix(_) => None,
        }
    }
    pub fn into_matrix(self) -> Option<Vec<Vec<T>>> {
        match self {
            Table::Matrix(m) => Some(m),
            Table::Vector(_) => None,
        }
    }
    pub fn into_vector(self) -> Option<Vec<T>> {
        match self {
            Table::Vector(v) => Some(v),
            Table::Matrix(_) => None,
        }
    }
    /// number of rows, or of elements for a vector
    pub fn len(&self) -> usize {
        match self {
            Table::Matrix(m) => m.len(),
            Table::Vector(v) => v.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Table<T> {
    /// 2-D array for a matrix, 1-D for a vector. Rows of unequal length are a shape error.
    pub fn to_array(&self) -> Result<ArrayD<T>> {
        match self {
            Table::Vector(v) => Ok(ArrayD::from_shape_vec(IxDyn(&[v.len()]), v.clone())
                .map_err(|e| SciError::ShapeMismatch(e.to_string()))?),
            Table::Matrix(m) => {
                let ncols = m.first().map_or(0, Vec::len);
                if m.iter().any(|row| row.len() != ncols) {
                    return Err(SciError::ShapeMismatch(
                        "rows of the table differ in length".to_string(),
                    ));
                }
                let flat: Vec<T> = m.iter().flatten().cloned().collect();
                ArrayD::from_shape_vec(IxDyn(&[m.len(), ncols]), flat)
                    .map_err(|e| SciError::ShapeMismatch(e.to_string()))
            }
        }
    }
}

/// everything the scanner extracts from a file before the output is shaped
struct Scan {
    /// raw header lines, trailing whitespace removed
    header: Vec<String>,
    separator: Separator,
    columns: Vec<usize>,
    /// 1-based line number and text of each data line
    data: Vec<(usize, String)>,
}

impl Scan {
    fn read(path: &Path, opts: &ReadOptions) -> Result<Scan> {
        opts.validate()?;
        let text = read_text(path)?;
        let mut lines = text.lines().map(str::trim_end).enumerate();

        for _ in 0..opts.hskip {
            lines.next();
        }
        let header: Vec<String> = (opts.hskip..opts.skip)
            .map(|_| lines.next().map_or_else(String::new, |(_, l)| l.to_string()))
            .collect();

        let mut data = Vec::new();
        for (i, line) in lines {
            if line.is_empty() {
                if opts.skip_blank {
                    continue;
                }
                break;
            }
            if let (Some(comment), Some(first)) = (&opts.comment, line.chars().next()) {
                if comment.contains(first) {
                    continue;
                }
            }
            data.push((i + 1, line.to_string()));
        }

        let first_line = data
            .first()
            .map(|(_, l)| l.as_str())
            .or_else(|| header.first().map(String::as_str))
            .unwrap_or("");
        let separator = opts
            .separator
            .clone()
            .unwrap_or_else(|| Separator::sniff(first_line));
        let columns = select_columns(opts, &header, &separator, separator.split(first_line).len())?;
        debug!(
            "{}: {} header lines, separator {:?}, columns {:?}",
            path.display(),
            header.len(),
            separator,
            columns
        );
        info!("{}: {} data lines", path.display(), data.len());
        Ok(Scan {
            header,
            separator,
            columns,
            data,
        })
    }

    /// selected cells of one line in column order, "" for missing cells when filling
    fn cells(&self, line: &str, opts: &ReadOptions) -> Result<Vec<String>> {
        let cells = self.separator.split(line);
        let max_col = self.columns.iter().copied().max().unwrap_or(0);
        if max_col >= cells.len() && !opts.fill {
            return Err(SciError::NotEnoughColumns {
                line: line.to_string(),
            });
        }
        Ok(self
            .columns
            .iter()
            .map(|&i| cells.get(i).map_or_else(String::new, |c| opts.strip.apply(c).to_string()))
            .collect())
    }

    fn data_rows(&self, opts: &ReadOptions) -> Result<Vec<(usize, Vec<String>)>> {
        self.data
            .iter()
            .map(|(n, line)| Ok((*n, self.cells(line, opts)?)))
            .collect()
    }
}

/// file contents with invalid UTF-8 sequences dropped
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| SciError::io(path, e))?;
    Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect())
}

fn select_columns(
    opts: &ReadOptions,
    header: &[String],
    separator: &Separator,
    ncells: usize,
) -> Result<Vec<usize>> {
    let columns: Vec<usize> = if let Some(cname) = &opts.cname {
        let Some(first) = header.first() else {
            return Err(SciError::InvalidOptions(
                "No header line left for choosing columns by name.".to_string(),
            ));
        };
        let clean = |s: &str| {
            if opts.hstrip {
                s.trim().to_string()
            } else {
                s.to_string()
            }
        };
        let names: Vec<String> = cname.iter().map(|n| clean(n)).collect();
        separator
            .split(first)
            .iter()
            .enumerate()
            .filter(|(_, h)| names.contains(&clean(h)))
            .map(|(k, _)| k)
            .collect()
    } else {
        match &opts.nc {
            Columns::Indices(indices) => indices.clone(),
            Columns::All | Columns::First(0) => (opts.cskip..ncells).collect(),
            Columns::First(n) => (opts.cskip..opts.cskip + n).collect(),
        }
    };
    if columns.is_empty() {
        return Err(SciError::NoColumns(match &opts.cname {
            Some(cname) => format!("none of {:?} found in header", cname),
            None => format!("{:?} with cskip {} on {} columns", opts.nc, opts.cskip, ncells),
        }));
    }
    Ok(columns)
}

/// squeeze then transpose
fn shape_rows<T: Clone>(rows: Vec<Vec<T>>, opts: &ReadOptions) -> Table<T> {
    if opts.squeeze && !rows.is_empty() && rows.iter().all(|r| r.len() == 1) {
        return Table::Vector(rows.into_iter().flatten().collect());
    }
    if opts.transpose && !rows.is_empty() {
        let ncols = rows.iter().map(Vec::len).min().unwrap_or(0);
        let transposed = (0..ncols)
            .map(|j| rows.iter().map(|r| r[j].clone()).collect())
            .collect();
        return Table::Matrix(transposed);
    }
    Table::Matrix(rows)
}

fn fill_strings(rows: &mut [Vec<String>], opts: &ReadOptions) {
    if opts.fill {
        for cell in rows.iter_mut().flatten() {
            if cell.is_empty() {
                *cell = opts.fill_value.clone();
            }
        }
    }
}

/// Data cells as strings.
pub fn sread(path: impl AsRef<Path>, opts: &ReadOptions) -> Result<Table<String>> {
    let scan = Scan::read(path.as_ref(), opts)?;
    let mut rows: Vec<Vec<String>> = scan.data_rows(opts)?.into_iter().map(|(_, r)| r).collect();
    fill_strings(&mut rows, opts);
    Ok(shape_rows(rows, opts))
}

/// Header cells, split and selected like data lines. A single header line gives a vector,
/// `full_header` gives the raw header lines.
pub fn sread_header(path: impl AsRef<Path>, opts: &ReadOptions) -> Result<Table<String>> {
    let scan = Scan::read(path.as_ref(), opts)?;
    if opts.full_header {
        return Ok(Table::Vector(scan.header));
    }
    let mut rows = scan
        .header
        .iter()
        .map(|line| scan.cells(line, opts))
        .collect::<Result<Vec<_>>>()?;
    fill_strings(&mut rows, opts);
    match rows.len() {
        0 => Ok(Table::Vector(Vec::new())),
        1 => Ok(Table::Vector(rows.remove(0))),
        _ => Ok(shape_rows(rows, opts)),
    }
}

/// Data cells as a string array: 2-D (lines x columns), transposed if asked, with all
/// axes of length one removed when squeezing.
pub fn sread_array(path: impl AsRef<Path>, opts: &ReadOptions) -> Result<ArrayD<String>> {
    let scan = Scan::read(path.as_ref(), opts)?;
    let rows = scan.data_rows(opts)?;
    let ncols = scan.columns.len();
    let nrows = rows.len();
    let flat: Vec<String> = rows.into_iter().flat_map(|(_, r)| r).collect();
    let mut arr = Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| SciError::ShapeMismatch(e.to_string()))?;
    if opts.transpose {
        arr = arr.reversed_axes();
    }
    let mut arr = arr.into_dyn();
    if opts.squeeze {
        let shape: Vec<usize> = arr.shape().iter().copied().filter(|&n| n != 1).collect();
        arr = arr
            .as_standard_layout()
            .into_owned()
            .into_shape_with_order(shape)
            .map_err(|e| SciError::ShapeMismatch(e.to_string()))?;
    }
    if opts.fill {
        arr.mapv_inplace(|c| if c.is_empty() { opts.fill_value.clone() } else { c });
    }
    Ok(arr)
}

fn parse_number(cell: &str, line: usize, opts: &ReadOptions) -> Result<f64> {
    let cell = cell.trim();
    if cell.is_empty() && opts.fill {
        return Ok(opts.fill_number);
    }
    cell.parse::<f64>()
        // Fortran exponents
        .or_else(|_| cell.replace(['d', 'D'], "e").parse::<f64>())
        .map_err(|_| SciError::Parse {
            cell: cell.to_string(),
            line,
        })
}

/// Data cells parsed as `f64`. Empty cells become `fill_number` when filling,
/// otherwise they are a parse error.
pub fn fread(path: impl AsRef<Path>, opts: &ReadOptions) -> Result<Table<f64>> {
    let scan = Scan::read(path.as_ref(), opts)?;
    let rows = scan
        .data_rows(opts)?
        .into_iter()
        .map(|(n, row)| {
            row.iter()
                .map(|cell| parse_number(cell, n, opts))
                .collect::<Result<Vec<f64>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(shape_rows(rows, opts))
}

/// header of a numeric file, identical to [`sread_header`]
pub fn fread_header(path: impl AsRef<Path>, opts: &ReadOptions) -> Result<Table<String>> {
    sread_header(path, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Utils::task_parser::parse_document;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn simple() -> NamedTempFile {
        write_file(&["head1 head2 head3 head4", "1.1 1.2 1.3 1.4", "2.1 2.2 2.3 2.4"])
    }

    /// simple file followed by a blank line, a data line, two comment lines and a data line
    fn long() -> NamedTempFile {
        write_file(&[
            "head1 head2 head3 head4",
            "1.1 1.2 1.3 1.4",
            "2.1 2.2 2.3 2.4",
            "",
            "3.1 3.2 3.3 3.4",
            "# First",
            "! Second second comment",
            "4.1 4.2 4.3 4.4",
        ])
    }

    fn m(rows: &[&[&str]]) -> Table<String> {
        Table::Matrix(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn v(cells: &[&str]) -> Table<String> {
        Table::Vector(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_header() {
        let f = simple();
        let h = sread_header(f.path(), &ReadOptions::new().nc_first(2).skip(1)).unwrap();
        assert_eq!(h, v(&["head1", "head2"]));
        let h = sread_header(f.path(), &ReadOptions::new().nc_first(2).skip(1).full_header(true))
            .unwrap();
        assert_eq!(h, v(&["head1 head2 head3 head4"]));
        let h = sread_header(f.path(), &ReadOptions::new().nc_first(1).skip(2)).unwrap();
        assert_eq!(h, m(&[&["head1"], &["1.1"]]));
        let opts = ReadOptions::new().nc_first(1).skip(2).squeeze(true);
        assert_eq!(sread_header(f.path(), &opts).unwrap(), v(&["head1", "1.1"]));
        assert_eq!(
            sread_header(f.path(), &opts.transpose(true)).unwrap(),
            v(&["head1", "1.1"])
        );
    }

    #[test]
    fn test_data_columns() {
        let f = simple();
        let all = m(&[&["1.1", "1.2", "1.3", "1.4"], &["2.1", "2.2", "2.3", "2.4"]]);
        assert_eq!(sread(f.path(), &ReadOptions::new().skip(1)).unwrap(), all);
        assert_eq!(
            sread(f.path(), &ReadOptions::new().skip(2)).unwrap(),
            m(&[&["2.1", "2.2", "2.3", "2.4"]])
        );
        assert_eq!(
            sread(f.path(), &ReadOptions::new().skip(1).cskip(1)).unwrap(),
            m(&[&["1.2", "1.3", "1.4"], &["2.2", "2.3", "2.4"]])
        );
        assert_eq!(
            sread(f.path(), &ReadOptions::new().skip(1).cskip(1).nc_first(2)).unwrap(),
            m(&[&["1.2", "1.3"], &["2.2", "2.3"]])
        );
        assert_eq!(
            sread(f.path(), &ReadOptions::new().skip(1).nc_indices(vec![1, 3])).unwrap(),
            m(&[&["1.2", "1.4"], &["2.2", "2.4"]])
        );
        assert_eq!(
            sread(f.path(), &ReadOptions::new().skip(1).nc_first(1)).unwrap(),
            m(&[&["1.1"], &["2.1"]])
        );
        assert_eq!(
            sread(f.path(), &ReadOptions::new().skip(1).nc_first(1).reform(true)).unwrap(),
            v(&["1.1", "2.1"])
        );
        assert_eq!(
            sread(f.path(), &ReadOptions::new().skip(1).transpose(true)).unwrap(),
            m(&[&["1.1", "2.1"], &["1.2", "2.2"], &["1.3", "2.3"], &["1.4", "2.4"]])
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        let f = long();
        let two = m(&[&["1.1", "1.2", "1.3", "1.4"], &["2.1", "2.2", "2.3", "2.4"]]);
        assert_eq!(sread(f.path(), &ReadOptions::new().skip(1)).unwrap(), two);

        let opts = ReadOptions::new().skip(1).skip_blank(true).comment("#");
        let t = sread(f.path(), &opts).unwrap();
        assert_eq!(t.len(), 5);
        assert_eq!(t.as_matrix().unwrap()[3], vec!["!", "Second", "second", "comment"]);

        let opts = ReadOptions::new().skip(1).skip_blank(true).comment("#!");
        let t = sread(f.path(), &opts).unwrap();
        assert_eq!(
            t,
            m(&[
                &["1.1", "1.2", "1.3", "1.4"],
                &["2.1", "2.2", "2.3", "2.4"],
                &["3.1", "3.2", "3.3", "3.4"],
                &["4.1", "4.2", "4.3", "4.4"]
            ])
        );
    }

    #[test]
    fn test_cname() {
        let f = long();
        let base = ReadOptions::new().skip(1).skip_blank(true).comment("#!");
        assert_eq!(
            sread(f.path(), &base.clone().cname(["head2"]).squeeze(true)).unwrap(),
            v(&["1.2", "2.2", "3.2", "4.2"])
        );
        let t = sread(f.path(), &base.clone().cname(["head1", "head2"])).unwrap();
        assert_eq!(t.as_matrix().unwrap()[3], vec!["4.1", "4.2"]);
        assert_eq!(
            sread_header(f.path(), &base.clone().cname(["head1", "head2"])).unwrap(),
            v(&["head1", "head2"])
        );
        // without stripping "  head1" is not a header cell
        assert_eq!(
            sread(f.path(), &base.clone().cname(["  head1", "head2"]).hstrip(false)).unwrap(),
            m(&[&["1.2"], &["2.2"], &["3.2"], &["4.2"]])
        );
        assert!(matches!(
            sread(f.path(), &base.clone().cname(["head9"])),
            Err(SciError::NoColumns(_))
        ));
    }

    #[test]
    fn test_option_conflicts() {
        let f = simple();
        let res = sread(f.path(), &ReadOptions::new().skip(1).nc_first(2).cname(["head1"]));
        assert!(matches!(res, Err(SciError::InvalidOptions(_))));
        let res = sread(f.path(), &ReadOptions::new().cname(["head1"]));
        assert!(matches!(res, Err(SciError::InvalidOptions(_))));
        let res = sread(f.path(), &ReadOptions::new().skip(1).hskip(2));
        assert!(matches!(res, Err(SciError::InvalidOptions(_))));
    }

    #[test]
    fn test_missing_file() {
        let res = sread("/nonexistent/dir/file.dat", &ReadOptions::new());
        assert!(matches!(res, Err(SciError::Io { .. })));
    }

    #[test]
    fn test_quotes_and_array() {
        let f = write_file(&[
            "\"head1\" \"head2\" \"head3\" \"head4\"",
            "\"1.1\" \"1.2\" \"1.3\" \"1.4\"",
            "2.1 nan Inf \"NaN\"",
        ]);
        let opts = ReadOptions::new()
            .skip(1)
            .transpose(true)
            .strip(Strip::Chars("\"".to_string()));
        let arr = sread_array(f.path(), &opts)
            .unwrap()
            .into_dimensionality::<ndarray::Ix2>()
            .unwrap();
        assert_eq!(arr.shape(), &[4, 2]);
        assert_eq!(arr[[1, 1]], "nan");
        assert_eq!(arr[[3, 1]], "NaN");

        let t = fread(f.path(), &ReadOptions::new().skip(1)).unwrap();
        let rows = t.into_matrix().unwrap();
        assert_eq!(rows[0], vec![1.1, 1.2, 1.3, 1.4]);
        assert!(rows[1][1].is_nan());
        assert!(rows[1][2].is_infinite());
        assert!(rows[1][3].is_nan());
    }

    #[test]
    fn test_array_squeeze() {
        let f = simple();
        let opts = ReadOptions::new().skip(1).nc_first(1).squeeze(true);
        let arr = sread_array(f.path(), &opts).unwrap();
        assert_eq!(arr.shape(), &[2]);
        assert_eq!(arr.iter().next().map(String::as_str), Some("1.1"));
        let arr = sread_array(f.path(), &ReadOptions::new().skip(1)).unwrap();
        assert_eq!(arr.shape(), &[2, 4]);
    }

    #[test]
    fn test_extra_header_line() {
        let f = write_file(&[
            "Extra header",
            "head1 head2 head3 head4",
            "1.1 1.2 1.3 1.4",
            "2.1 2.2 2.3 2.4",
        ]);
        let expected = m(&[&["1.1", "1.2", "1.3", "1.4"], &["2.1", "2.2", "2.3", "2.4"]]);
        assert_eq!(sread(f.path(), &ReadOptions::new().skip(2)).unwrap(), expected);
        assert_eq!(sread(f.path(), &ReadOptions::new().skip(2).hskip(1)).unwrap(), expected);
        assert_eq!(
            sread_header(f.path(), &ReadOptions::new().skip(2).hskip(1).nc_first(2)).unwrap(),
            v(&["head1", "head2"])
        );
    }

    #[test]
    fn test_missing_values_and_fill() {
        let f = write_file(&[
            "Extra header",
            "head1,head2,head3,head4",
            "1.1,1.2,1.3,1.4",
            "2.1,,2.3,2.4",
        ]);
        assert_eq!(
            sread(f.path(), &ReadOptions::new().skip(2)).unwrap(),
            m(&[&["1.1", "1.2", "1.3", "1.4"], &["2.1", "", "2.3", "2.4"]])
        );
        assert_eq!(
            sread(f.path(), &ReadOptions::new().skip(2).fill_value("-1")).unwrap(),
            m(&[&["1.1", "1.2", "1.3", "1.4"], &["2.1", "-1", "2.3", "2.4"]])
        );
        let res = fread(f.path(), &ReadOptions::new().skip(2));
        assert!(matches!(res, Err(SciError::Parse { line: 4, .. })));
        let t = fread(f.path(), &ReadOptions::new().skip(2).fill_number(-9999.0)).unwrap();
        assert_eq!(t.into_matrix().unwrap()[1][1], -9999.0);
    }

    #[test]
    fn test_short_lines() {
        let f = write_file(&["1;2;3", "4;5"]);
        let res = sread(f.path(), &ReadOptions::new());
        assert!(matches!(res, Err(SciError::NotEnoughColumns { line }) if line == "4;5"));
        let t = sread(f.path(), &ReadOptions::new().fill_value("x")).unwrap();
        assert_eq!(t, m(&[&["1", "2", "3"], &["4", "5", "x"]]));
    }

    #[test]
    fn test_short_header_line() {
        let f = write_file(&["h1 h2", "1 2 3", "4 5 6"]);
        let opts = ReadOptions::new().skip(1).nc_indices(vec![0, 2]);
        let res = sread_header(f.path(), &opts);
        assert!(matches!(res, Err(SciError::NotEnoughColumns { line }) if line == "h1 h2"));
        assert_eq!(sread(f.path(), &opts).unwrap(), m(&[&["1", "3"], &["4", "6"]]));
        let h = sread_header(f.path(), &opts.clone().fill(true)).unwrap();
        assert_eq!(h, v(&["h1", ""]));
    }

    #[test]
    fn test_explicit_separator() {
        // sniffing would split at the comma
        let f = write_file(&["a;b,c;d", "1;2,5;3"]);
        assert_eq!(sread(f.path(), &ReadOptions::new().skip(1)).unwrap(), m(&[&["1;2", "5;3"]]));
        let opts = ReadOptions::new().skip(1).separator(";");
        assert_eq!(sread_header(f.path(), &opts).unwrap(), v(&["a", "b,c", "d"]));
        assert_eq!(sread(f.path(), &opts).unwrap(), m(&[&["1", "2,5", "3"]]));

        let f = write_file(&["1,5  2,5"]);
        assert_eq!(sread(f.path(), &ReadOptions::new()).unwrap(), m(&[&["1", "5  2", "5"]]));
        assert_eq!(sread(f.path(), &ReadOptions::new().whitespace()).unwrap(), m(&[&["1,5", "2,5"]]));
    }

    #[test]
    fn test_invalid_utf8_dropped() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"a\xff b \xef\xbf\xbd\n").unwrap();
        f.flush().unwrap();
        // the invalid byte goes, the encoded replacement character stays
        assert_eq!(sread(f.path(), &ReadOptions::new()).unwrap(), m(&[&["a", "b", "\u{FFFD}"]]));
    }

    #[test]
    fn test_fread_fortran_exponent() {
        let f = write_file(&["1.5d2 2.0D-1"]);
        let t = fread(f.path(), &ReadOptions::new()).unwrap();
        assert_eq!(t, Table::Matrix(vec![vec![150.0, 0.2]]));
    }

    #[test]
    fn test_table_to_array() {
        let t = m(&[&["a", "b"], &["c", "d"]]);
        assert_eq!(t.to_array().unwrap().shape(), &[2, 2]);
        let ragged = m(&[&["a", "b"], &["c"]]);
        assert!(ragged.to_array().is_err());
        assert_eq!(v(&["a"]).to_array().unwrap().shape(), &[1]);
    }

    #[test]
    fn test_options_from_document() {
        let doc = parse_document(
            "sread\n  skip: 1\n  nc: 1, 3\n  separator: whitespace\n  comment: #!\n  strip: none\n",
        )
        .unwrap();
        let opts = ReadOptions::from_document(&doc["sread"]).unwrap();
        assert_eq!(opts.skip, 1);
        assert_eq!(opts.nc, Columns::Indices(vec![1, 3]));
        assert_eq!(opts.separator, Some(Separator::Whitespace));
        assert_eq!(opts.comment.as_deref(), Some("#!"));
        assert_eq!(opts.strip, Strip::Nothing);

        let doc = parse_document("fread\n  nc: 2\n  fill_number: -9999\n").unwrap();
        let opts = ReadOptions::from_document(&doc["fread"]).unwrap();
        assert_eq!(opts.nc, Columns::First(2));
        assert_eq!(opts.fill_number, -9999.0);
        assert!(opts.fill);
        let doc = parse_document("sread\n  fill_value: NA\n").unwrap();
        let opts = ReadOptions::from_document(&doc["sread"]).unwrap();
        assert!(opts.fill);
        assert_eq!(opts.fill_value, "NA");

        let doc = parse_document("sread\n  colour: red\n").unwrap();
        assert!(matches!(
            ReadOptions::from_document(&doc["sread"]),
            Err(SciError::Config(_))
        ));
    }
}
