use std::fs;

use clap::Parser;
use procedural_mesh::{
    cli::Cli,
    config::GeneratorConfig,
    error::{ConfigError, GenerateError},
    generate,
    meshing::{build_plane_at, MeshData},
};
use tempfile::tempdir;

#[test]
fn config_file_to_json_mesh() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("plane.json");
    fs::write(
        &config_path,
        r#"{ "primitive": "plane", "corner": [1.0, 2.0, 3.0], "format": "json" }"#,
    )
    .unwrap();

    let out = dir.path().join("out.json");
    let config = GeneratorConfig::load(&config_path).unwrap();
    let written = generate(&config, Some(&out)).unwrap();
    assert_eq!(written, out);

    let mesh = MeshData::from_json(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(mesh, build_plane_at(cgmath::Point3::new(1.0, 2.0, 3.0)));
}

#[test]
fn cli_config_subcommand_with_format_override() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("cube.json");
    fs::write(&config_path, r#"{ "name": "Crate", "format": "json" }"#).unwrap();
    let out = dir.path().join("crate.obj");

    let cli = Cli::try_parse_from([
        "procedural-mesh",
        "config",
        config_path.to_str().unwrap(),
        "--format",
        "obj",
        "-o",
        out.to_str().unwrap(),
    ])
    .unwrap();
    let config = cli.to_config().unwrap();
    generate(&config, cli.output.as_deref()).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("# procedural-mesh\no Crate\n"));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = GeneratorConfig::load(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn invalid_config_is_not_exported() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("bad.obj");
    let config = GeneratorConfig {
        corner: [f32::NAN, 0.0, 0.0],
        ..GeneratorConfig::default()
    };

    let result = generate(&config, Some(&out));
    assert!(matches!(result, Err(GenerateError::Config(_))));
    assert!(!out.exists());
}

#[test]
fn very_large_tile_grids_still_generate() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("big.json");
    let cli = Cli::try_parse_from([
        "procedural-mesh",
        "cube",
        "--segment",
        "50000",
        "--index",
        "2147483647",
        "--format",
        "json",
        "-o",
        out.to_str().unwrap(),
    ])
    .unwrap();
    let config = cli.to_config().unwrap();
    generate(&config, cli.output.as_deref()).unwrap();

    let mesh = MeshData::from_json(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    // clamped to the last tile, so every uv stays inside the texture
    assert!(mesh.uvs().iter().all(|&c| (0.0..=1.0 + 1e-4).contains(&c)));
}
