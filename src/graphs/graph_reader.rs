use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
    str::FromStr,
};

use clap::ValueEnum;
use indicatif::ProgressIterator;
use log::info;
use serde_derive::Deserialize;

use super::{edge::WeightedEdge, undirected_graph::UndirectedGraph, Graph};
use crate::error::{Error, Result};

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Comment lines, vertex count, edge count, one vertex name per line and
    /// one `tail head weight` line per edge.
    Fmi,
    /// `{"vertices": [..], "edges": [{"tail": .., "head": .., "weight": ..}]}`
    Json,
}

#[derive(Debug, Deserialize)]
struct GraphFile {
    vertices: Vec<String>,
    edges: Vec<WeightedEdge>,
}

pub fn read_graph(path: &Path, file_type: FileType) -> Result<UndirectedGraph<String>> {
    let reader = BufReader::new(File::open(path)?);
    let graph = match file_type {
        FileType::Fmi => read_fmi(reader)?,
        FileType::Json => read_json(reader)?,
    };
    info!(
        "read graph with {} vertices and {} edges from {}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        path.display()
    );
    Ok(graph)
}

pub fn read_json<R: BufRead>(reader: R) -> Result<UndirectedGraph<String>> {
    let GraphFile { vertices, edges } = serde_json::from_reader(reader)?;
    UndirectedGraph::from_edges(vertices, &edges)
}

pub fn read_fmi<R: BufRead>(reader: R) -> Result<UndirectedGraph<String>> {
    let mut lines = FmiLines {
        lines: reader.lines(),
        line_number: 0,
    };

    let number_of_vertices: usize = lines.parse_next("number of vertices")?;
    let number_of_edges: usize = lines.parse_next("number of edges")?;

    // Header counts are untrusted, the vectors grow with the lines actually read.
    let mut vertices = Vec::new();
    for _ in 0..number_of_vertices {
        vertices.push(lines.next_line("vertex")?.trim().to_string());
    }

    let mut edges = Vec::new();
    for _ in (0..number_of_edges).progress() {
        // srcIDX trgIDX cost
        let line = lines.next_line("edge")?;
        let mut values = line.split_whitespace();
        let tail = lines.parse_value(values.next(), "tail")?;
        let head = lines.parse_value(values.next(), "head")?;
        let weight = lines.parse_value(values.next(), "weight")?;
        edges.push(WeightedEdge { tail, head, weight });
    }

    UndirectedGraph::from_edges(vertices, &edges)
}

struct FmiLines<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> FmiLines<R> {
    /// Next line that is neither empty nor a comment.
    fn next_line(&mut self, expected: &str) -> Result<String> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line?;
            if !line.trim().is_empty() && !line.starts_with('#') {
                return Ok(line);
            }
        }
        Err(Error::Parse {
            line: self.line_number,
            message: format!("unexpected end of file, expected {}", expected),
        })
    }

    fn parse_next<V: FromStr>(&mut self, expected: &str) -> Result<V> {
        let line = self.next_line(expected)?;
        self.parse_value(Some(line.trim()), expected)
    }

    fn parse_value<V: FromStr>(&self, value: Option<&str>, expected: &str) -> Result<V> {
        let value = value.ok_or_else(|| Error::Parse {
            line: self.line_number,
            message: format!("no {} found", expected),
        })?;
        value.parse().map_err(|_| Error::Parse {
            line: self.line_number,
            message: format!("unable to parse {} from {:?}", expected, value),
        })
    }
}
