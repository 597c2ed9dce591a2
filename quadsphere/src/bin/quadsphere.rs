use clap::{Parser, Subcommand};
use quadsphere::closure::{self, ClosureConfig};
use quadsphere::{CubeFace, FaceCoord, Projection, SphericalCoord};

#[derive(Parser)]
#[command(name = "quadsphere")]
#[command(about = "Project points between the sphere and the faces of a quadrilateralized cube")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a point on the sphere onto a cube face
    Forward {
        /// Longitude φ (radians unless --degrees)
        #[arg(allow_negative_numbers = true)]
        phi: f64,
        /// Latitude θ (radians unless --degrees)
        #[arg(allow_negative_numbers = true)]
        theta: f64,
        /// Read angles in degrees
        #[arg(long)]
        degrees: bool,
        /// Projection: tsc or csc
        #[arg(long, default_value = "csc")]
        projection: String,
    },
    /// Map a point on a cube face back to the sphere
    Inverse {
        /// Face id 0-5 or name (top, front, east, back, west, bottom)
        face: String,
        /// Face x coordinate in [-1, 1]
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Face y coordinate in [-1, 1]
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Print angles in degrees
        #[arg(long)]
        degrees: bool,
        /// Projection: tsc or csc
        #[arg(long, default_value = "csc")]
        projection: String,
    },
    /// Measure the CSC distortion closure error over a lattice
    Closure {
        /// Lattice points per axis
        #[arg(long, default_value_t = ClosureConfig::default().grid)]
        grid: usize,
        /// Half-width of the square lattice on the face plane, in (0, 1]
        #[arg(long, default_value_t = ClosureConfig::default().extent)]
        extent: f64,
    },
}

fn format_face_coord(p: &FaceCoord) -> String {
    format!(
        "face={}({}) x={} y={}",
        p.face().name().to_uppercase(),
        p.face().index(),
        p.x(),
        p.y()
    )
}

fn format_spherical(s: &SphericalCoord, degrees: bool) -> String {
    if degrees {
        format!("phi={} theta={}", s.phi().degrees(), s.theta().degrees())
    } else {
        format!("phi={} theta={}", s.phi().radians(), s.theta().radians())
    }
}

fn run(command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Forward {
            phi,
            theta,
            degrees,
            projection,
        } => {
            let projection: Projection = projection.parse()?;
            let coord = if degrees {
                SphericalCoord::from_degrees(phi, theta)
            } else {
                SphericalCoord::from_radians(phi, theta)
            };

            let p = projection.project(coord)?;
            Ok(format_face_coord(&p))
        }
        Commands::Inverse {
            face,
            x,
            y,
            degrees,
            projection,
        } => {
            let projection: Projection = projection.parse()?;
            let face: CubeFace = face.parse()?;

            let s = projection.deproject(FaceCoord::new(face, x, y))?;
            Ok(format_spherical(&s, degrees))
        }
        Commands::Closure { grid, extent } => {
            let stats = closure::sweep(&ClosureConfig::new(grid, extent))?;
            Ok(stats.to_string())
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("{}", run(cli.command)?);
    Ok(())
}
