// kernel/build.rs
use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=kernel.ld");

    // Host builds carry the library tests and link normally; only the riscv
    // image gets the boot layout.
    let target = env::var("TARGET").unwrap_or_default();
    if !target.starts_with("riscv") {
        return;
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    let script = PathBuf::from(manifest_dir).join("kernel.ld");

    println!("cargo:rustc-link-arg-bins=-T{}", script.display());
    println!("cargo:rustc-link-arg-bins=-Map=kernel.map");
}
