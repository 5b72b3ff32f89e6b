use std::collections::HashMap;

use crate::{
    error::Mesh3dError, mesh::TriangleMesh, pointcloud::PointCloud, surface::SurfaceReconstructor,
};

// tolerance for coincident points and zero-area faces
const EPS: f64 = 1e-12;

/// Delaunay triangulation over the points' XY coordinates.
///
/// Treats the cloud as a height field: connectivity is computed on the
/// (x, y) positions with the Bowyer-Watson incremental algorithm and the z
/// coordinate rides along. This matches the behavior of meshing a depth
/// projection, where points are well spread in XY.
///
/// Points sharing an XY position within tolerance are kept as vertices but
/// only the first one participates in the triangulation; faces with zero
/// XY area are dropped. The implementation is O(n^2) and intended for the
/// moderate cloud sizes of a single-shot batch run; plug a different
/// [`SurfaceReconstructor`] into the builder for large clouds.
pub struct DelaunayXY;

impl SurfaceReconstructor for DelaunayXY {
    fn reconstruct(&self, cloud: &PointCloud) -> Result<TriangleMesh, Mesh3dError> {
        Ok(TriangleMesh {
            vertices: cloud.points().to_vec(),
            colors: Some(cloud.colors().to_vec()),
            faces: triangulate_xy(cloud.points()),
        })
    }
}

/// Triangulate a point set on its XY coordinates with Bowyer-Watson.
///
/// Returns counter-clockwise faces indexing into `points`. Collinear or
/// coincident input yields no faces.
fn triangulate_xy(points: &[[f64; 3]]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut verts: Vec<[f64; 2]> = points.iter().map(|p| [p[0], p[1]]).collect();

    // super-triangle far outside the bounding box, oriented ccw
    let (min, max) = bounding_box(&verts);
    let span = (max[0] - min[0]).max(max[1] - min[1]).max(1.0);
    let cx = (min[0] + max[0]) / 2.0;
    let cy = (min[1] + max[1]) / 2.0;
    verts.push([cx - 20.0 * span, cy - 10.0 * span]);
    verts.push([cx + 20.0 * span, cy - 10.0 * span]);
    verts.push([cx, cy + 20.0 * span]);

    let mut triangles: Vec<[usize; 3]> = vec![[n, n + 1, n + 2]];
    let mut inserted: Vec<usize> = Vec::new();

    'points: for p in 0..n {
        // coincident points cannot form new faces, leave them out
        for &q in &inserted {
            let dx = verts[p][0] - verts[q][0];
            let dy = verts[p][1] - verts[q][1];
            if dx * dx + dy * dy < EPS {
                continue 'points;
            }
        }

        // cavity: every triangle whose circumcircle contains the new point
        let bad: Vec<bool> = triangles
            .iter()
            .map(|t| in_circumcircle(verts[t[0]], verts[t[1]], verts[t[2]], verts[p]))
            .collect();

        // the cavity boundary is the set of edges owned by exactly one
        // cavity triangle; keep their direction to preserve the winding
        let mut edges: HashMap<(usize, usize), (usize, (usize, usize))> = HashMap::new();
        for (t, tri) in triangles.iter().enumerate() {
            if !bad[t] {
                continue;
            }
            for (u, v) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let entry = edges.entry((u.min(v), u.max(v))).or_insert((0, (u, v)));
                entry.0 += 1;
            }
        }

        let mut t = 0;
        triangles.retain(|_| {
            let keep = !bad[t];
            t += 1;
            keep
        });

        for &(count, (u, v)) in edges.values() {
            if count == 1 {
                triangles.push([u, v, p]);
            }
        }

        inserted.push(p);
    }

    // drop faces touching the super-triangle and degenerate slivers
    triangles.retain(|t| {
        t.iter().all(|&i| i < n) && orient2d(verts[t[0]], verts[t[1]], verts[t[2]]).abs() > EPS
    });

    triangles
}

fn bounding_box(verts: &[[f64; 2]]) -> ([f64; 2], [f64; 2]) {
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    for v in verts {
        for k in 0..2 {
            min[k] = min[k].min(v[k]);
            max[k] = max[k].max(v[k]);
        }
    }
    (min, max)
}

// twice the signed area of the triangle abc; positive when ccw
fn orient2d(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

// whether p lies strictly inside the circumcircle of the triangle abc
fn in_circumcircle(a: [f64; 2], b: [f64; 2], c: [f64; 2], p: [f64; 2]) -> bool {
    let orient = orient2d(a, b, c);
    if orient.abs() <= EPS {
        // degenerate triangle, no valid circumcircle: retriangulate it
        return true;
    }

    let (ax, ay) = (a[0] - p[0], a[1] - p[1]);
    let (bx, by) = (b[0] - p[0], b[1] - p[1]);
    let (cx, cy) = (c[0] - p[0], c[1] - p[1]);
    let aw = ax * ax + ay * ay;
    let bw = bx * bx + by * by;
    let cw = cx * cx + cy * cy;

    let det = ax * (by * cw - cy * bw) - ay * (bx * cw - cx * bw) + aw * (bx * cy - cx * by);

    if orient > 0.0 {
        det > 0.0
    } else {
        det < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::build_surface;

    fn cloud_from(points: Vec<[f64; 3]>) -> PointCloud {
        let colors = vec![[0.5, 0.5, 0.5]; points.len()];
        PointCloud::new(points, colors)
    }

    #[test]
    fn three_points_one_face() {
        let faces = triangulate_xy(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(faces.len(), 1);
        let mut face = faces[0];
        face.sort();
        assert_eq!(face, [0, 1, 2]);
    }

    #[test]
    fn square_two_faces() {
        let faces = triangulate_xy(&[
            [0.0, 0.0, -1.0],
            [1.0, 0.0, -1.0],
            [0.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
        ]);
        assert_eq!(faces.len(), 2);

        // all four corners participate
        let mut used: Vec<usize> = faces.iter().flatten().copied().collect();
        used.sort();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3]);
    }

    #[test]
    fn faces_are_ccw() {
        let points = [
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [2.0, 2.0, 0.0],
            [1.0, 0.9, 0.0],
        ];
        let faces = triangulate_xy(&points);
        assert!(!faces.is_empty());
        for face in &faces {
            let [a, b, c] = face.map(|i| [points[i][0], points[i][1]]);
            assert!(orient2d(a, b, c) > 0.0);
        }
    }

    #[test]
    fn collinear_points_yield_no_faces() {
        let faces = triangulate_xy(&[
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [2.0, 2.0, 0.0],
            [3.0, 3.0, 0.0],
        ]);
        assert!(faces.is_empty());
    }

    #[test]
    fn duplicate_xy_kept_as_vertices_not_faces() -> Result<(), Mesh3dError> {
        let cloud = cloud_from(vec![
            [0.0, 0.0, 0.0],
            [0.0, 0.0, -5.0], // duplicate xy of the first point
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ]);

        let mesh = build_surface(&cloud, &DelaunayXY)?;
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 1);
        for face in &mesh.faces {
            assert!(!face.contains(&1));
        }

        Ok(())
    }

    #[test]
    fn reconstruct_preserves_points_and_colors() -> Result<(), Mesh3dError> {
        let points = vec![[0.0, 0.0, -1.0], [1.0, 0.0, -2.0], [0.0, 1.0, -3.0]];
        let colors = vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let cloud = PointCloud::new(points.clone(), colors.clone());

        let mesh = DelaunayXY.reconstruct(&cloud)?;
        assert_eq!(mesh.vertices, points);
        assert_eq!(mesh.colors, Some(colors));

        Ok(())
    }

    #[test]
    fn grid_cloud_meshes_every_point() -> Result<(), Mesh3dError> {
        // 3x3 grid in xy
        let mut points = Vec::new();
        for j in 0..3 {
            for i in 0..3 {
                points.push([i as f64, j as f64, -1.0]);
            }
        }
        let cloud = cloud_from(points);

        let mesh = build_surface(&cloud, &DelaunayXY)?;
        assert_eq!(mesh.num_vertices(), 9);
        assert_eq!(mesh.num_faces(), 8);

        Ok(())
    }
}
