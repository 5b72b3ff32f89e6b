use crate::{error::Mesh3dError, mesh::TriangleMesh, pointcloud::PointCloud};

// minimum number of points that can form one face
const MIN_SURFACE_POINTS: usize = 3;

/// An algorithm that infers face connectivity for an unordered point set.
///
/// Implementations must keep the input points as the output vertex set,
/// position and color alike, in the same order: topology is invented,
/// geometry is not. [`build_surface`] enforces this hand-off contract.
pub trait SurfaceReconstructor {
    /// Reconstruct a triangle mesh over the given point cloud.
    fn reconstruct(&self, cloud: &PointCloud) -> Result<TriangleMesh, Mesh3dError>;
}

/// Build a surface mesh from a filtered point cloud.
///
/// Delegates topology construction to `reconstructor` and enforces the
/// hand-off contract around it:
///
/// * the cloud must contain at least 3 points;
/// * the reconstructed vertices must be exactly the input points
///   (no interpolation, colors carried through untouched);
/// * every face index must reference a valid vertex;
/// * a reconstruction with zero faces is surfaced as an error, never
///   returned as a silent empty mesh.
///
/// # Arguments
///
/// * `cloud` - The filtered point cloud; every coordinate must be finite.
/// * `reconstructor` - The meshing algorithm to delegate to.
///
/// # Errors
///
/// [`Mesh3dError::DegenerateInput`] for clouds with fewer than 3 points,
/// [`Mesh3dError::EmptyMesh`] when the algorithm yields no faces, and
/// [`Mesh3dError::VertexCountMismatch`] / [`Mesh3dError::FaceIndexOutOfRange`]
/// when the algorithm violates the hand-off contract.
pub fn build_surface(
    cloud: &PointCloud,
    reconstructor: &dyn SurfaceReconstructor,
) -> Result<TriangleMesh, Mesh3dError> {
    if cloud.len() < MIN_SURFACE_POINTS {
        return Err(Mesh3dError::DegenerateInput(cloud.len()));
    }

    let mesh = reconstructor.reconstruct(cloud)?;

    if mesh.num_vertices() != cloud.len() {
        return Err(Mesh3dError::VertexCountMismatch {
            num_vertices: mesh.num_vertices(),
            num_points: cloud.len(),
        });
    }

    if mesh.faces.is_empty() {
        return Err(Mesh3dError::EmptyMesh {
            num_points: cloud.len(),
        });
    }

    for face in &mesh.faces {
        for &index in face {
            if index >= mesh.num_vertices() {
                return Err(Mesh3dError::FaceIndexOutOfRange {
                    index,
                    num_vertices: mesh.num_vertices(),
                });
            }
        }
    }

    Ok(mesh)
}
