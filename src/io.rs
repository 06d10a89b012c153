//! Adjacency-matrix exchange: 0/1 text matrices and JSON

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::{Result, SlashError};

/// Parse a 0/1 adjacency matrix from text
///
/// Rules:
/// - One matrix row per line; blank lines are ignored.
/// - Entries are separated by whitespace, commas or semicolons, or packed
///   together (`0110`).
/// - Brackets are ignored and `]` ends a row, so `[[0,1],[1,0]]` on a
///   single line is accepted.
/// - The matrix must be square and symmetric with a zero diagonal.
pub fn parse_adjacency_matrix(text: &str) -> Result<Graph> {
    let mut rows = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        for segment in line.split(']') {
            let tokens: Vec<&str> = segment
                .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '['))
                .filter(|t| !t.is_empty())
                .collect();

            if tokens.is_empty() {
                continue;
            }

            let row = if tokens.len() == 1 && tokens[0].len() > 1 {
                parse_entries(tokens[0].chars().map(String::from), idx + 1)?
            } else {
                parse_entries(tokens.iter().map(|t| t.to_string()), idx + 1)?
            };
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(SlashError::Parse {
            line: 1,
            message: "input contains no matrix rows".to_string(),
        });
    }

    Graph::from_rows(rows)
}

fn parse_entries(tokens: impl Iterator<Item = String>, line: usize) -> Result<Vec<u8>> {
    tokens
        .map(|t| match t.as_str() {
            "0" => Ok(0),
            "1" => Ok(1),
            other => Err(SlashError::Parse {
                line,
                message: format!("invalid entry {:?}, expected 0 or 1", other),
            }),
        })
        .collect()
}

/// Write the adjacency matrix as space-separated 0/1 rows
pub fn write_adjacency_matrix<W: Write>(graph: &Graph, mut writer: W) -> Result<()> {
    write!(writer, "{}", graph)?;
    Ok(())
}

/// Load a graph from a text adjacency-matrix file
pub fn load_matrix_file(path: impl AsRef<Path>) -> Result<Graph> {
    let text = std::fs::read_to_string(path)?;
    parse_adjacency_matrix(&text)
}

/// Save a graph to a text adjacency-matrix file
pub fn save_matrix_file(graph: &Graph, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_adjacency_matrix(graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save object to JSON file
pub fn save_json<T: Serialize>(obj: &T, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(obj)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Load object from JSON file
pub fn load_json<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
