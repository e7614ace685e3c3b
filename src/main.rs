//! # Procedural Mesh Entry Point
//!
//! Calls into the library's `run()` function, which parses the command line,
//! generates the requested primitive and writes it out.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- cube -o cube.obj
//! ```

fn main() {
    procedural_mesh::run();
}
