// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use thiserror::Error;
use tracing::debug;

use crate::{geometry::Point3, mesh::polyhedron::Polyhedron, numeric::scalar::Scalar};

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A coordinate has no `f64` representation.
    #[error("vertex {vertex} has a coordinate that cannot be written")]
    Coordinate { vertex: usize },
}

pub type ObjResult<T> = std::result::Result<T, ObjError>;

/// Writes `v` records for every vertex and one `f` record per face
/// (1-based indices, any arity).
pub fn write_obj<T: Scalar, W: Write>(mesh: &Polyhedron<T, 3>, writer: W) -> ObjResult<()> {
    let mut out = BufWriter::new(writer);

    for (i, p) in mesh.vertex_positions.iter().enumerate() {
        let [x, y, z] = p.to_f64_array().ok_or(ObjError::Coordinate { vertex: i })?;
        writeln!(out, "v {x} {y} {z}")?;
    }

    for face in &mesh.faces {
        write!(out, "f")?;
        for v in face {
            write!(out, " {}", v + 1)?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Wrote OBJ"
    );
    Ok(())
}

pub fn save_obj<T: Scalar, P: AsRef<Path>>(mesh: &Polyhedron<T, 3>, path: P) -> ObjResult<()> {
    let file = File::create(path)?;
    write_obj(mesh, file)
}

/// Reads `v x y z` and `f i j k ...` records; everything else is skipped.
/// Face entries may use `i/t/n` form (only `i` is kept) and negative,
/// relative indices.
pub fn read_obj<T: Scalar, R: BufRead>(reader: R) -> ObjResult<Polyhedron<T, 3>> {
    let mut mesh = Polyhedron::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let l = line?;
        let mut parts = l.split_whitespace();
        match parts.next() {
            Some("v") => {
                let mut coords = [0.0; 3];
                for c in coords.iter_mut() {
                    *c = parse_coord(parts.next(), line_no)?;
                }
                mesh.add_vertex_position(Point3::<T>::from_vals(coords));
            }
            Some("f") => {
                let count = mesh.vertex_count();
                let face = parts
                    .map(|tok| parse_face_index(tok, count, line_no))
                    .collect::<ObjResult<Vec<usize>>>()?;
                if face.len() < 3 {
                    return Err(parse_error(line_no, "face needs at least 3 vertices"));
                }
                mesh.add_face(&face);
            }
            _ => {}
        }
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Read OBJ"
    );
    Ok(mesh)
}

pub fn load_obj<T: Scalar, P: AsRef<Path>>(path: P) -> ObjResult<Polyhedron<T, 3>> {
    let file = File::open(path)?;
    read_obj(BufReader::new(file))
}

fn parse_error(line: usize, message: impl Into<String>) -> ObjError {
    ObjError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_coord(tok: Option<&str>, line: usize) -> ObjResult<f64> {
    let tok = tok.ok_or_else(|| parse_error(line, "vertex needs 3 coordinates"))?;
    let v: f64 = tok
        .parse()
        .map_err(|_| parse_error(line, format!("bad coordinate `{tok}`")))?;
    if !v.is_finite() {
        return Err(parse_error(line, format!("non-finite coordinate `{tok}`")));
    }
    Ok(v)
}

fn parse_face_index(tok: &str, vertex_count: usize, line: usize) -> ObjResult<usize> {
    let head = tok.split('/').next().unwrap_or(tok);
    let raw: i64 = head
        .parse()
        .map_err(|_| parse_error(line, format!("bad face index `{tok}`")))?;

    let resolved = if raw > 0 {
        Some(raw as usize - 1)
    } else if raw < 0 {
        vertex_count.checked_sub(raw.unsigned_abs() as usize)
    } else {
        None
    };

    match resolved {
        Some(idx) if idx < vertex_count => Ok(idx),
        _ => Err(parse_error(
            line,
            format!("face index {raw} out of range ({vertex_count} vertices)"),
        )),
    }
}
