use std::fs;

use procedural_mesh::{
    export::{export_mesh, ExportFormat},
    meshing::{build_cube, build_plane, MeshData},
};
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn obj_file_for_cube() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.obj");
    export_mesh(&path, "GeneratedCube", &build_cube(), ExportFormat::Obj).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("o GeneratedCube"));
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 24);
    assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 24);
    assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 24);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
}

#[test]
fn json_file_reads_back_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.json");
    let cube = build_cube();
    export_mesh(&path, "GeneratedCube", &cube, ExportFormat::Json).unwrap();

    let loaded = MeshData::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, cube);
}

#[test]
fn model_file_describes_plane_streams() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plane.model.json");
    export_mesh(&path, "ProceduralPlane", &build_plane(), ExportFormat::Model).unwrap();

    let model: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(model["name"], "ProceduralPlane");
    assert_eq!(model["material_slots"][0]["name"], "Default");
    assert_eq!(model["lods"].as_array().unwrap().len(), 1);

    let mesh = &model["lods"][0]["meshes"][0];
    assert_eq!(mesh["index_buffer"]["element_count"], 6);
    assert_eq!(mesh["index_buffer"]["format"], "R32Uint");
    assert_eq!(mesh["streams"].as_array().unwrap().len(), 5);
    assert_eq!(mesh["streams"][0]["semantic"], "Position");
    assert_eq!(mesh["streams"][0]["buffer"]["element_count"], 4);
    assert_eq!(mesh["aabb"]["min"][1], 0.0);
}

#[test]
fn corrupt_json_mesh_is_rejected() {
    let json = r#"{
        "indices": [0, 1, 5],
        "positions": [0, 0, 0, 1, 0, 0, 0, 1, 0],
        "normals": [],
        "tangents": [],
        "bitangents": [],
        "uvs": []
    }"#;
    assert!(MeshData::from_json(json).is_err());
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("cube.obj");
    assert!(export_mesh(&path, "GeneratedCube", &build_cube(), ExportFormat::Obj).is_err());
    assert!(!path.exists());
}
