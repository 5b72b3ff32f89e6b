/// A triangle mesh with optional per-vertex colors.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// The vertex positions.
    pub vertices: Vec<[f64; 3]>,
    /// Optional per-vertex colors, r/g/b in [0, 1], paired with `vertices`.
    pub colors: Option<Vec<[f64; 3]>>,
    /// The faces, each an ordered triple of indices into `vertices`.
    pub faces: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Get the number of vertices in the mesh.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces in the mesh.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_counts() {
        let mesh = TriangleMesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            colors: None,
            faces: vec![[0, 1, 2]],
        };
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
    }
}
