use crate::error::{GraphError, Result};
use crate::graph::Graph;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

/// Reads a weighted graph from an adjacency table file.
///
/// Comma-separated square table:
/// - first line is the header, its first cell is ignored and the rest are node labels,
/// - every following line starts with a node label, in header order, then one cell per column,
/// - `0` means "no edge", an empty cell or `nan` is an edge with a missing weight (stored as 0),
///   any other number is the edge weight,
/// - the diagonal is ignored and the table must be symmetric.
///
/// Example input:
/// ```text
/// ,A,B,C,D
/// A,0,1,0,0
/// B,1,0,2.5,0
/// C,0,2.5,0,
/// D,0,0,,0
/// ```
pub fn from_file(path: &str) -> Result<Graph<String>> {
    let file = File::open(path).map_err(|err| GraphError::Io {
        path: path.to_string(),
        message: err.to_string(),
    })?;
    parse_adjacency_table(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Graph<String>> {
    parse_adjacency_table(BufReader::new(Cursor::new(input)))
}

fn parse_adjacency_table<R: BufRead>(reader: R) -> Result<Graph<String>> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.map(|l| (i + 1, l)).map_err(|err| GraphError::Parse {
                line: i + 1,
                message: err.to_string(),
            })
        })
        .filter(|line| !matches!(line, Ok((_, l)) if l.trim().is_empty()));

    let Some(header) = lines.next().transpose()? else {
        return Ok(Graph::new());
    };
    let labels: Vec<String> = split_cells(&header.1).skip(1).map(str::to_string).collect();

    let mut rows = Vec::with_capacity(labels.len());
    for line in lines {
        let (number, line) = line?;
        let mut cells = split_cells(&line);
        let row_label = cells.next().unwrap_or_default();
        match labels.get(rows.len()) {
            Some(expected) if expected == row_label => {}
            _ => {
                return Err(GraphError::Parse {
                    line: number,
                    message: format!("unexpected row label {row_label:?}"),
                });
            }
        }
        let row = cells
            .map(|cell| parse_cell(cell, number))
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    Graph::from_adjacency(labels, &rows)
}

fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    line.trim_end_matches(['\r', '\n']).split(',').map(str::trim)
}

fn parse_cell(cell: &str, line: usize) -> Result<Option<f64>> {
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| GraphError::Parse {
        line,
        message: format!("{cell:?} is not a number"),
    })
}
