use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonIoError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed json document: {0}")]
    Document(#[source] serde_json::Error),
}

pub fn create_file_buf_write<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

pub fn open_file_buf_read<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

pub fn read_json_file<P, T>(path: P) -> Result<T, JsonIoError>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let reader = open_file_buf_read(path)?;
    serde_json::from_reader(reader).map_err(JsonIoError::Document)
}

/// Reads one JSON value per line. Blank lines are skipped; line numbers in
/// errors are 1-based.
pub fn read_json_lines<R, T>(reader: R) -> impl Iterator<Item = Result<T, JsonIoError>>
where
    R: BufRead,
    T: DeserializeOwned,
{
    reader
        .lines()
        .enumerate()
        .filter(|(_, line)| !matches!(line, Ok(line) if line.trim().is_empty()))
        .map(|(index, line)| -> Result<T, JsonIoError> {
            let line_number = index + 1;
            serde_json::from_str(&line?).map_err(|source| JsonIoError::Line {
                line: line_number,
                source,
            })
        })
}

pub struct JsonLinesWriter<W: Write> {
    writer: W,
    lines_written: usize,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }
    pub fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), JsonIoError> {
        serde_json::to_writer(&mut self.writer, value).map_err(|source| JsonIoError::Line {
            line: self.lines_written + 1,
            source,
        })?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        Ok(())
    }
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
    pub fn into_inner(self) -> W {
        self.writer
    }
}
