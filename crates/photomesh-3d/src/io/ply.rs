use std::io::{BufWriter, Write};
use std::path::Path;

use super::MeshIoError;
use crate::mesh::TriangleMesh;

/// Write a mesh as ASCII PLY.
///
/// Vertex positions are written as float properties, colors (when present)
/// as uchar red/green/blue, faces as a uchar-counted vertex index list —
/// the property layout standard mesh viewers expect. The file is written
/// to a temporary location and renamed into place on success.
///
/// # Arguments
///
/// * `mesh` - The mesh to serialize.
/// * `file_path` - Destination path, created or overwritten.
pub fn write_ply(mesh: &TriangleMesh, file_path: impl AsRef<Path>) -> Result<(), MeshIoError> {
    let file_path = file_path.as_ref();
    let mut tmp = super::tempfile_beside(file_path)?;

    {
        let mut writer = BufWriter::new(&mut tmp);

        writeln!(writer, "ply")?;
        writeln!(writer, "format ascii 1.0")?;
        writeln!(writer, "element vertex {}", mesh.num_vertices())?;
        writeln!(writer, "property float x")?;
        writeln!(writer, "property float y")?;
        writeln!(writer, "property float z")?;
        if mesh.colors.is_some() {
            writeln!(writer, "property uchar red")?;
            writeln!(writer, "property uchar green")?;
            writeln!(writer, "property uchar blue")?;
        }
        writeln!(writer, "element face {}", mesh.num_faces())?;
        writeln!(writer, "property list uchar int vertex_indices")?;
        writeln!(writer, "end_header")?;

        match &mesh.colors {
            Some(colors) => {
                for (v, c) in mesh.vertices.iter().zip(colors.iter()) {
                    writeln!(
                        writer,
                        "{} {} {} {} {} {}",
                        v[0] as f32,
                        v[1] as f32,
                        v[2] as f32,
                        color_to_u8(c[0]),
                        color_to_u8(c[1]),
                        color_to_u8(c[2])
                    )?;
                }
            }
            None => {
                for v in &mesh.vertices {
                    writeln!(writer, "{} {} {}", v[0] as f32, v[1] as f32, v[2] as f32)?;
                }
            }
        }

        for f in &mesh.faces {
            writeln!(writer, "3 {} {} {}", f[0], f[1], f[2])?;
        }

        writer.flush()?;
    }

    tmp.persist(file_path)?;

    Ok(())
}

fn color_to_u8(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}
