#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Procedural Mesh
//!
//! Generates simple primitive meshes (a unit cube and single-quad planes) with
//! positions, normals, tangents, bitangents, texture coordinates and triangle
//! indices, and exports them for other tools.
//!
//! ## Key Modules
//!
//! * `geometry` - Face sides, their tangent frames and texture atlas tiles
//! * `meshing` - The mesh container and the quad, cube and plane builders
//! * `export` - OBJ, JSON and typed model output
//! * `config` - JSON description of what to generate
//!
//! ## Usage
//!
//! ```rust
//! use procedural_mesh::meshing::build_cube;
//!
//! let cube = build_cube();
//! assert_eq!(cube.vertex_count(), 24);
//! assert_eq!(cube.index_count(), 36);
//! ```
//!
//! The `procedural-mesh` binary wraps the same builders:
//!
//! ```bash
//! procedural-mesh cube --segment 2 --index 1 -o cube.obj
//! procedural-mesh plane --side front --corner 0 1 0 --format model
//! procedural-mesh config scene.json -o out.json
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info};

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod meshing;

use cli::Cli;
use config::GeneratorConfig;
use error::GenerateError;

/// Builds the configured primitive and writes it to `output`, or to a file
/// named after the model in the working directory. Returns the written path.
pub fn generate(
    config: &GeneratorConfig,
    output: Option<&Path>,
) -> Result<PathBuf, GenerateError> {
    config.validate()?;

    let name = config.name();
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => cli::default_output(name, config.format),
    };

    let mesh = config.build_mesh();
    info!(
        "generated {name}: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );

    export::export_mesh(&path, name, &mesh, config.format)?;
    Ok(path)
}

fn run_cli(cli: &Cli) -> Result<PathBuf, GenerateError> {
    let config = cli.to_config()?;
    generate(&config, cli.output.as_deref())
}

/// Entry point of the `procedural-mesh` binary.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let cli = Cli::parse();
    match run_cli(&cli) {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
