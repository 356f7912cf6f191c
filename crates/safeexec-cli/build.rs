//! Build script for safeexec-cli.
//!
//! Renders the crate README into rustdoc (see `../build_common.rs`).

use std::env;
use std::fs;
use std::path::Path;

include!("../build_common.rs");

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    process_readme_for_rustdoc(&manifest_dir);
    println!("cargo:rerun-if-changed=build.rs");
}
