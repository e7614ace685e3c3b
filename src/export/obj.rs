//! Wavefront OBJ output.
//!
//! Each vertex writes one `v`, `vt` and `vn` record, so a face corner can use
//! the same index for all three (`f i/i/i`). OBJ indices are 1-based.
//!
//! OBJ texture coordinates start at the bottom-left of the image while mesh
//! uvs start at the top-left, so `vt` records are written as `u, 1 - v`.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{error::ExportError, meshing::MeshData};

/// Writes `mesh` as an OBJ object named `name` to `writer`.
pub fn write_obj<W: Write>(writer: &mut W, name: &str, mesh: &MeshData) -> Result<(), ExportError> {
    mesh.validate()?;

    writeln!(writer, "# procedural-mesh")?;
    writeln!(writer, "o {name}")?;

    for p in mesh.positions().chunks_exact(3) {
        writeln!(writer, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for uv in mesh.uvs().chunks_exact(2) {
        writeln!(writer, "vt {} {}", uv[0], 1.0 - uv[1])?;
    }
    for n in mesh.normals().chunks_exact(3) {
        writeln!(writer, "vn {} {} {}", n[0], n[1], n[2])?;
    }

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}

/// Writes `mesh` as an OBJ file at `path`.
pub fn save_obj(path: &Path, name: &str, mesh: &MeshData) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(&mut writer, name, mesh)?;
    writer.flush()?;
    info!(
        "wrote {} ({} vertices, {} triangles)",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meshing::build_plane;

    #[test]
    fn plane_obj_has_one_record_per_vertex_and_triangle() {
        let mut out = Vec::new();
        write_obj(&mut out, "ProceduralPlane", &build_plane()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("o ProceduralPlane\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 4);

        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces, vec!["f 1/1/1 4/4/4 3/3/3", "f 1/1/1 3/3/3 2/2/2"]);
    }

    #[test]
    fn texture_coordinates_use_a_bottom_left_origin() {
        let mut out = Vec::new();
        write_obj(&mut out, "p", &build_plane()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let vts: Vec<&str> = text.lines().filter(|l| l.starts_with("vt ")).collect();
        // TL, TR, BR, BL of the full texture
        assert_eq!(vts, vec!["vt 0 1", "vt 1 1", "vt 1 0", "vt 0 0"]);
    }

    #[test]
    fn first_vertex_is_the_plane_corner() {
        let mut out = Vec::new();
        write_obj(&mut out, "p", &build_plane()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let first = text.lines().find(|l| l.starts_with("v ")).unwrap();
        assert_eq!(first, "v 0.5 0 0.5");
    }
}
