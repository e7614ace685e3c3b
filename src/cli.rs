//! Command-line front end.
//!
//! Each subcommand resolves to a [`GeneratorConfig`]; generation and export
//! are shared with configuration files.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    config::{GeneratorConfig, Primitive},
    error::ConfigError,
    export::ExportFormat,
    geometry::{FaceSide, UvTile},
};

/// Command-line arguments of the `procedural-mesh` binary.
#[derive(Parser, Debug)]
#[command(name = "procedural-mesh")]
#[command(about = "Generate procedural cube and plane meshes")]
pub struct Cli {
    /// What to generate
    #[command(subcommand)]
    pub command: Command,

    /// Output file; defaults to the model name with an extension for the format
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<FormatArg>,
}

/// Primitive to generate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Unit cube centered on the origin
    Cube {
        /// Model name
        #[arg(long)]
        name: Option<String>,
        /// Texture tile for every face
        #[command(flatten)]
        tile: TileArgs,
    },
    /// Single quad
    Plane {
        /// Model name
        #[arg(long)]
        name: Option<String>,
        /// Top-left corner of the quad
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        corner: Option<Vec<f32>>,
        /// Facing: front, back, left, right, top, bottom (or +z, -x, ...)
        #[arg(long, default_value = "top", allow_hyphen_values = true)]
        side: FaceSide,
        /// Texture tile of the quad
        #[command(flatten)]
        tile: TileArgs,
    },
    /// Everything from a JSON config file
    Config {
        /// Path of the config file
        path: PathBuf,
    },
}

/// Texture tile selection shared by the subcommands.
#[derive(clap::Args, Debug)]
pub struct TileArgs {
    /// Texture grid size per axis; 1 samples the whole texture
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub segment: i32,
    /// Row-major tile index within the grid
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub index: i32,
}

impl From<&TileArgs> for UvTile {
    fn from(args: &TileArgs) -> Self {
        UvTile::new(args.segment, args.index)
    }
}

/// Output format names accepted by `--format`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// Wavefront OBJ
    Obj,
    /// Raw mesh streams as JSON
    Json,
    /// Model description as JSON
    Model,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Obj => ExportFormat::Obj,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Model => ExportFormat::Model,
        }
    }
}

impl Cli {
    /// Resolves the arguments into a validated configuration.
    pub fn to_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.command {
            Command::Cube { name, tile } => GeneratorConfig {
                name: name.clone(),
                primitive: Primitive::Cube,
                uv_tile: tile.into(),
                ..GeneratorConfig::default()
            },
            Command::Plane {
                name,
                corner,
                side,
                tile,
            } => {
                let mut config = GeneratorConfig {
                    name: name.clone(),
                    primitive: Primitive::Plane,
                    side: *side,
                    uv_tile: tile.into(),
                    ..GeneratorConfig::default()
                };
                if let Some(corner) = corner {
                    config.corner = <[f32; 3]>::try_from(corner.as_slice()).map_err(|_| {
                        ConfigError::Invalid(format!("corner needs 3 values, got {}", corner.len()))
                    })?;
                }
                config
            }
            Command::Config { path } => GeneratorConfig::load(path)?,
        };

        if let Some(format) = self.format {
            config.format = format.into();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Default file name for a model exported in `format`.
pub fn default_output(name: &str, format: ExportFormat) -> PathBuf {
    match format {
        ExportFormat::Obj => PathBuf::from(format!("{name}.obj")),
        ExportFormat::Json => PathBuf::from(format!("{name}.json")),
        ExportFormat::Model => PathBuf::from(format!("{name}.model.json")),
    }
}
