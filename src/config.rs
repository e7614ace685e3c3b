//! # Generator Configuration
//!
//! Describes one primitive to generate and how to write it out. Configurations
//! are plain JSON; every field is optional and falls back to the defaults of
//! the editor's "Generate" button (a unit cube named `GeneratedCube`, as OBJ).
//!
//! ```json
//! {
//!     "primitive": "plane",
//!     "corner": [0.0, 2.0, 0.0],
//!     "side": "front",
//!     "uv_tile": { "segment": 2, "index": 3 },
//!     "format": "model"
//! }
//! ```

use std::{fs, path::Path};

use cgmath::Point3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    export::ExportFormat,
    geometry::{FaceSide, UvTile},
    meshing::{
        build_cube_with_tiles, build_plane_with, primitives::DEFAULT_PLANE_CORNER, FaceTiles,
        MeshData, Quad,
    },
};

/// Name given to generated cubes when none is configured.
pub const DEFAULT_CUBE_NAME: &str = "GeneratedCube";
/// Name given to generated planes when none is configured.
pub const DEFAULT_PLANE_NAME: &str = "ProceduralPlane";

/// Which primitive to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// Unit cube centered on the origin
    #[default]
    Cube,
    /// Single quad
    Plane,
}

/// Everything needed to generate and export one primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Model name; defaults per primitive
    pub name: Option<String>,
    /// What to build
    pub primitive: Primitive,
    /// Top-left corner of the plane quad (ignored for cubes)
    pub corner: [f32; 3],
    /// Facing of the plane quad (ignored for cubes)
    pub side: FaceSide,
    /// Texture tile of the plane, and of every cube face unless `face_tiles` is set
    pub uv_tile: UvTile,
    /// Per-face cube tiles in [FRONT, BACK, LEFT, RIGHT, TOP, BOTTOM] order
    pub face_tiles: Option<FaceTiles>,
    /// Output format
    pub format: ExportFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            name: None,
            primitive: Primitive::Cube,
            corner: DEFAULT_PLANE_CORNER,
            side: FaceSide::TOP,
            uv_tile: UvTile::FULL,
            face_tiles: None,
            format: ExportFormat::Obj,
        }
    }
}

impl GeneratorConfig {
    /// Reads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parses and validates a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would produce unusable geometry or files.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("name must not be empty".to_string()));
            }
        }
        if self.corner.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "corner {:?} must be finite",
                self.corner
            )));
        }
        Ok(())
    }

    /// The configured name, or the default for the primitive.
    pub fn name(&self) -> &str {
        match (&self.name, self.primitive) {
            (Some(name), _) => name.as_str(),
            (None, Primitive::Cube) => DEFAULT_CUBE_NAME,
            (None, Primitive::Plane) => DEFAULT_PLANE_NAME,
        }
    }

    /// Builds the configured primitive.
    pub fn build_mesh(&self) -> MeshData {
        match self.primitive {
            Primitive::Cube => {
                let tiles = self
                    .face_tiles
                    .unwrap_or_else(|| FaceTiles::uniform(self.uv_tile));
                build_cube_with_tiles(&tiles)
            }
            Primitive::Plane => build_plane_with(Quad::new(
                Point3::from(self.corner),
                self.side,
                self.uv_tile,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meshing::{build_cube, build_plane};

    #[test]
    fn empty_config_is_the_editor_default() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.name(), "GeneratedCube");
        assert_eq!(config.format, ExportFormat::Obj);
        assert_eq!(config.build_mesh(), build_cube());
    }

    #[test]
    fn plane_defaults_match_build_plane() {
        let config = GeneratorConfig::from_json(r#"{"primitive": "plane"}"#).unwrap();
        assert_eq!(config.name(), "ProceduralPlane");
        assert_eq!(config.build_mesh(), build_plane());
    }

    #[test]
    fn full_plane_config() {
        let config = GeneratorConfig::from_json(
            r#"{
                "name": "Wall",
                "primitive": "plane",
                "corner": [0.0, 2.0, 0.0],
                "side": "front",
                "uv_tile": { "segment": 2, "index": 3 },
                "format": "model"
            }"#,
        )
        .unwrap();
        assert_eq!(config.name(), "Wall");
        assert_eq!(config.format, ExportFormat::Model);

        let mesh = config.build_mesh();
        assert_eq!(mesh.position(0), Point3::new(0.0, 2.0, 0.0));
        assert_eq!(&mesh.uvs()[..2], &[0.5, 0.5]);
    }

    #[test]
    fn cube_face_tiles_override_uv_tile() {
        let config = GeneratorConfig::from_json(
            r#"{
                "uv_tile": { "segment": 2, "index": 0 },
                "face_tiles": [
                    { "segment": 2, "index": 1 },
                    { "segment": 2, "index": 1 },
                    { "segment": 2, "index": 1 },
                    { "segment": 2, "index": 1 },
                    { "segment": 2, "index": 3 },
                    { "segment": 2, "index": 2 }
                ]
            }"#,
        )
        .unwrap();
        let mesh = config.build_mesh();
        // first vertex of FRONT samples tile 1 of a 2x2 grid
        assert_eq!(&mesh.uvs()[..2], &[0.5, 0.0]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            GeneratorConfig::from_json(r#"{"side": "sideways"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            GeneratorConfig::from_json(r#"{"name": "  "}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GeneratorConfig::from_json(r#"{"colour": "red"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
