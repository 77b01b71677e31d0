//! Build script for Devfolio.
//!
//! The stylesheet, page script, and default catalog are compiled into the
//! binary (`include_str!` and rust-embed), so edits to them must trigger a
//! rebuild.

fn main() {
    println!("cargo:rerun-if-changed=assets");
    println!("cargo:rerun-if-changed=src/catalog/portfolio.json");
}
