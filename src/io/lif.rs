use super::ascii::read_text;
use crate::error::Result;
use log::debug;
use std::path::Path;

/// Which lines [`lif`] counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifOptions {
    /// lines at the top of the file that are never counted
    pub skip: usize,
    /// lines starting with one of these characters are not counted
    pub comment: Option<String>,
    /// blank lines are not counted
    pub noblank: bool,
}

impl LifOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
    pub fn noblank(mut self, noblank: bool) -> Self {
        self.noblank = noblank;
        self
    }
}

fn counted_lines(text: &str, opts: &LifOptions) -> Vec<String> {
    text.lines()
        .skip(opts.skip)
        .map(str::trim_end)
        .filter(|line| !(opts.noblank && line.trim().is_empty()))
        .filter(|line| match (&opts.comment, line.chars().next()) {
            (Some(comment), Some(first)) => !comment.contains(first),
            _ => true,
        })
        .map(str::to_string)
        .collect()
}


/// Number of lines in a file.
pub fn lif(path: impl AsRef<Path>, opts: &LifOptions) -> Result<usize> {
    let path = path.as_ref();
    let n = counted_lines(&read_text(path)?, opts).len();
    debug!("{}: {} lines", path.display(), n);
    Ok(n)
}

/// Number of lines and the largest number of whitespace separated columns in any of them.
pub fn lif_maxcol(path: impl AsRef<Path>, opts: &LifOptions) -> Result<(usize, usize)> {
    let lines = counted_lines(&read_text(path.as_ref())?, opts);
    let maxcol = lines
        .iter()
        .map(|l| l.split_whitespace().count())
        .max()
        .unwrap_or(0);
    Ok((lines.len(), maxcol))
}
