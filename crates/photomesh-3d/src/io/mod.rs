/// Wavefront OBJ writing and reading.
pub mod obj;

/// ASCII PLY writing.
pub mod ply;

use std::path::Path;

use crate::mesh::TriangleMesh;

/// Error types for the mesh io module.
#[derive(Debug, thiserror::Error)]
pub enum MeshIoError {
    /// Failed to read or write the mesh file.
    #[error("Failed to read or write mesh file")]
    Io(#[from] std::io::Error),

    /// Failed to move the finished file into place.
    #[error("Failed to persist mesh file")]
    Persist(#[from] tempfile::PersistError),

    /// Failed to parse the mesh file.
    #[error("Failed to parse mesh file at line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending line.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// The output extension maps to no supported mesh format.
    #[error("Unsupported mesh format: {0}")]
    UnsupportedFormat(std::path::PathBuf),
}

/// Write a mesh to the format implied by the path's extension.
///
/// Supported formats: `.obj` (Wavefront OBJ with the `v x y z r g b`
/// vertex-color extension) and `.ply` (ASCII PLY). The file is created or
/// overwritten; writing goes through a temporary file in the destination
/// directory that is renamed into place on success, so a failed export
/// leaves no half-written file behind.
///
/// # Arguments
///
/// * `mesh` - The mesh to serialize.
/// * `file_path` - Destination path; the extension selects the format.
pub fn export_mesh(mesh: &TriangleMesh, file_path: impl AsRef<Path>) -> Result<(), MeshIoError> {
    let file_path = file_path.as_ref();
    let ext = file_path
        .extension()
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| MeshIoError::UnsupportedFormat(file_path.to_path_buf()))?;

    match ext.to_str() {
        Some("obj") => obj::write_obj(mesh, file_path),
        Some("ply") => ply::write_ply(mesh, file_path),
        _ => Err(MeshIoError::UnsupportedFormat(file_path.to_path_buf())),
    }
}

// temporary file in the destination directory, for rename-on-success
pub(crate) fn tempfile_beside(file_path: &Path) -> Result<tempfile::NamedTempFile, MeshIoError> {
    let parent = match file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Ok(tempfile::NamedTempFile::new_in(parent)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> TriangleMesh {
        TriangleMesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            colors: None,
            faces: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn export_rejects_unknown_extension() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let result = export_mesh(&triangle_mesh(), tmp.path().join("mesh.stl"));
        assert!(matches!(result, Err(MeshIoError::UnsupportedFormat(_))));

        let result = export_mesh(&triangle_mesh(), tmp.path().join("mesh"));
        assert!(matches!(result, Err(MeshIoError::UnsupportedFormat(_))));
    }

    #[test]
    fn export_dispatches_on_extension() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;

        let obj_path = tmp.path().join("mesh.obj");
        export_mesh(&triangle_mesh(), &obj_path)?;
        assert!(obj_path.exists());

        let ply_path = tmp.path().join("mesh.ply");
        export_mesh(&triangle_mesh(), &ply_path)?;
        assert!(ply_path.exists());

        Ok(())
    }

    #[test]
    fn failed_export_leaves_no_file() {
        let result = export_mesh(
            &triangle_mesh(),
            Path::new("definitely/not/a/directory/mesh.obj"),
        );
        assert!(result.is_err());
        assert!(!Path::new("definitely/not/a/directory/mesh.obj").exists());
    }
}
