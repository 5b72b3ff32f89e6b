use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::MeshIoError;
use crate::mesh::TriangleMesh;

/// Write a mesh as Wavefront OBJ.
///
/// Vertex colors, when present, are appended to each `v` line
/// (`v x y z r g b`), the de-facto extension understood by MeshLab,
/// Blender and trimesh. Faces are written 1-based. The file is written to
/// a temporary location and renamed into place on success.
///
/// # Arguments
///
/// * `mesh` - The mesh to serialize.
/// * `file_path` - Destination path, created or overwritten.
pub fn write_obj(mesh: &TriangleMesh, file_path: impl AsRef<Path>) -> Result<(), MeshIoError> {
    let file_path = file_path.as_ref();
    let mut tmp = super::tempfile_beside(file_path)?;

    {
        let mut writer = BufWriter::new(&mut tmp);

        match &mesh.colors {
            Some(colors) => {
                for (v, c) in mesh.vertices.iter().zip(colors.iter()) {
                    writeln!(
                        writer,
                        "v {} {} {} {} {} {}",
                        v[0], v[1], v[2], c[0], c[1], c[2]
                    )?;
                }
            }
            None => {
                for v in &mesh.vertices {
                    writeln!(writer, "v {} {} {}", v[0], v[1], v[2])?;
                }
            }
        }

        for f in &mesh.faces {
            writeln!(writer, "f {} {} {}", f[0] + 1, f[1] + 1, f[2] + 1)?;
        }

        writer.flush()?;
    }

    tmp.persist(file_path)?;

    Ok(())
}

/// Read a mesh from a Wavefront OBJ file.
///
/// Understands `v` lines with or without trailing vertex colors and
/// triangular `f` lines (`v`, `v/vt` and `v/vt/vn` index forms); other
/// statements are ignored. Intended for verifying exports and loading
/// meshes this crate wrote itself, not as a general OBJ importer.
///
/// # Arguments
///
/// * `file_path` - The path to the OBJ file.
pub fn read_obj(file_path: impl AsRef<Path>) -> Result<TriangleMesh, MeshIoError> {
    let file = std::fs::File::open(file_path)?;
    let reader = BufReader::new(file);

    let mut vertices = Vec::new();
    let mut colors = Vec::new();
    let mut faces = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut fields = line.split_whitespace();

        match fields.next() {
            Some("v") => {
                let values = fields
                    .map(|s| s.parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| MeshIoError::Parse {
                        line: line_no,
                        message: e.to_string(),
                    })?;
                match values.len() {
                    3 => vertices.push([values[0], values[1], values[2]]),
                    6 => {
                        vertices.push([values[0], values[1], values[2]]);
                        colors.push([values[3], values[4], values[5]]);
                    }
                    n => {
                        return Err(MeshIoError::Parse {
                            line: line_no,
                            message: format!("expected 3 or 6 vertex components, got {n}"),
                        })
                    }
                }
            }
            Some("f") => {
                let indices = fields
                    .map(|s| parse_face_index(s, line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                if indices.len() != 3 {
                    return Err(MeshIoError::Parse {
                        line: line_no,
                        message: format!("expected a triangular face, got {} indices", indices.len()),
                    });
                }
                faces.push([indices[0], indices[1], indices[2]]);
            }
            _ => {}
        }
    }

    if !colors.is_empty() && colors.len() != vertices.len() {
        return Err(MeshIoError::Parse {
            line: 0,
            message: "some vertices carry colors and some do not".to_string(),
        });
    }

    Ok(TriangleMesh {
        vertices,
        colors: if colors.is_empty() { None } else { Some(colors) },
        faces,
    })
}

// obj face indices are 1-based and may carry /vt/vn suffixes
fn parse_face_index(field: &str, line_no: usize) -> Result<usize, MeshIoError> {
    let index_str = field.split('/').next().unwrap_or(field);
    let index: usize = index_str.parse().map_err(|_| MeshIoError::Parse {
        line: line_no,
        message: format!("invalid face index '{field}'"),
    })?;
    if index == 0 {
        return Err(MeshIoError::Parse {
            line: line_no,
            message: "face indices are 1-based".to_string(),
        });
    }
    Ok(index - 1)
}
