extern crate nalgebra as na;

use std::fs::File;
use std::io::{BufReader,BufRead,Lines};
use na::DMatrix;
use thiserror::Error;

use crate::Float;

#[derive(Debug,Error)]
pub enum MatrixLoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("no matrix variable named {0} in file")]
    MissingVariable(String),

    #[error("could not parse matrix entry: {0}")]
    Malformed(String),

    #[error("matrix declared as {rows}x{columns} but {count} entries found")]
    ElementCount { rows: usize, columns: usize, count: usize },

    #[error("matrix is {rows}x{columns}, expected {expected_rows}x{expected_columns}")]
    UnexpectedShape { rows: usize, columns: usize, expected_rows: usize, expected_columns: usize }
}

/// Loads one named matrix variable from an Octave/MATLAB text file. The
/// format carries a comment header per variable (`# name:`, `# type:`,
/// `# rows:`, `# columns:`) followed by whitespace-separated rows.
pub fn load_named_matrix(file_path: &str, variable: &str) -> Result<DMatrix<Float>,MatrixLoadError> {
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let (rows,columns) = seek_variable(&mut lines, variable)?;
    parse_matrix(&mut lines, rows, columns)
}

/// Scans headers until the named matrix variable is found, returning its
/// declared dimensions. The `columns` entry is always the last header field
/// before the data rows.
fn seek_variable(lines: &mut Lines<BufReader<File>>, variable: &str) -> Result<(usize,usize),MatrixLoadError> {
    let mut rows: usize = 0;
    let mut columns: usize = 0;
    let mut name_found = false;
    let mut matrix_found = false;

    for line in lines {
        let contents = line?;
        if !contents.starts_with('#') {
            continue;
        }

        let parts = contents.splitn(2,':').collect::<Vec<&str>>();
        if parts.len() != 2 {
            continue;
        }
        let field = parts[0][1..].trim();
        let value = parts[1].trim();

        match field {
            "name" => {
                rows = 0;
                columns = 0;
                matrix_found = false;
                name_found = value == variable;
            },
            "type" => matrix_found = value == "matrix",
            "rows" => rows = value.parse::<usize>().map_err(|_| MatrixLoadError::Malformed(contents.clone()))?,
            "columns" => {
                columns = value.parse::<usize>().map_err(|_| MatrixLoadError::Malformed(contents.clone()))?;
                if name_found && matrix_found && rows > 0 && columns > 0 {
                    return Ok((rows,columns));
                }
            },
            _ => ()
        };
    }

    Err(MatrixLoadError::MissingVariable(variable.to_string()))
}

fn parse_matrix(lines: &mut Lines<BufReader<File>>, rows: usize, columns: usize) -> Result<DMatrix<Float>,MatrixLoadError> {
    let mut vec_data: Vec<Float> = Vec::with_capacity(rows*columns);
    for line in lines {
        let row_as_string = line?;
        if row_as_string.trim().is_empty() {
            break;
        }
        for entry in row_as_string.split_whitespace() {
            let v = entry.parse::<Float>().map_err(|_| MatrixLoadError::Malformed(entry.to_string()))?;
            vec_data.push(v);
        }
    }

    if vec_data.len() != rows*columns {
        return Err(MatrixLoadError::ElementCount { rows, columns, count: vec_data.len() });
    }

    Ok(DMatrix::<Float>::from_row_slice(rows,columns,&vec_data))
}
