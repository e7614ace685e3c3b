//! # Export
//!
//! Converts finished meshes into forms other tools consume.
//!
//! * [`obj`]: Wavefront OBJ text
//! * [`model`]: engine-neutral model with typed GPU buffers
//! * [`vertex`]: interleaved per-vertex structs
//!
//! Every exporter validates the mesh before writing anything.

pub mod model;
pub mod obj;
pub mod vertex;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{error::ExportError, meshing::MeshData};

pub use model::ModelAsset;
pub use vertex::Vertex;

/// On-disk output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Wavefront OBJ
    #[default]
    Obj,
    /// The raw mesh streams as JSON
    Json,
    /// A [`ModelAsset`] as JSON
    Model,
}

/// Writes `mesh` to `path` in `format`.
pub fn export_mesh(
    path: &Path,
    name: &str,
    mesh: &MeshData,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Obj => obj::save_obj(path, name, mesh),
        ExportFormat::Json => {
            mesh.validate()?;
            write_json(path, mesh)
        }
        ExportFormat::Model => {
            let model = ModelAsset::from_mesh(name, mesh)?;
            write_json(path, &model)
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    info!("wrote {}", path.display());
    Ok(())
}
