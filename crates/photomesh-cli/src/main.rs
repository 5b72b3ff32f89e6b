use std::path::PathBuf;

use argh::FromArgs;

use photomesh::depth::{DepthEstimator, DepthMapFile};
use photomesh::k3d::{build_surface, io::export_mesh, project_depth, DelaunayXY};
use photomesh::io::functional::read_image_any_rgb8;

#[derive(FromArgs)]
/// Reconstruct a colored 3D surface mesh from a photograph and a depth map
struct Args {
    /// path to the input image file
    #[argh(positional)]
    image: PathBuf,

    /// path to a pre-computed depth map aligned with the image
    /// (8/16-bit grayscale PNG or 32-bit float TIFF)
    #[argh(option)]
    depth: PathBuf,

    /// divisor applied to integer depth samples on load (default: 1.0)
    #[argh(option, default = "1.0")]
    depth_divisor: f32,

    /// destination mesh file path (default: output_mesh.obj)
    #[argh(option, default = "PathBuf::from(\"output_mesh.obj\")")]
    output: PathBuf,

    /// depth scale factor (default: 1.0)
    #[argh(option, default = "1.0")]
    scale: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let image = read_image_any_rgb8(&args.image)?;
    log::info!("loaded image {} from {}", image.size(), args.image.display());

    let depth_source = DepthMapFile::new(&args.depth, args.depth_divisor)?;
    let depth = depth_source.estimate(&image)?;

    let cloud = project_depth(&depth, &image, args.scale)?;
    let filtered = cloud.filter_finite();
    log::info!(
        "projected {} points, {} valid after filtering",
        cloud.len(),
        filtered.len()
    );

    let mesh = build_surface(&filtered, &DelaunayXY)?;
    log::info!(
        "reconstructed mesh with {} vertices and {} faces",
        mesh.num_vertices(),
        mesh.num_faces()
    );

    export_mesh(&mesh, &args.output)?;
    log::info!("saved mesh to {}", args.output.display());

    Ok(())
}
