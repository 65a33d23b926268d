use std::error::Error;
use std::path::PathBuf;

use schematic_definitions::hcloud::{define_hcloud_api, registry};
use schematic_gen::output::generate_and_write;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../schematic/definitions/src");
    println!("cargo:rerun-if-changed=../schematic/gen/src");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    generate_and_write(&define_hcloud_api(), &registry(), &out_dir, false)?;
    Ok(())
}
