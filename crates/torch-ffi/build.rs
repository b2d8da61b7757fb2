// rpath for this package's tests and examples; link directives come from
// torch-ffi-sys. Cargo does not forward link args to dependents.
use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=DEP_TORCH_CPU_LIB_DIR");
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "windows" {
        return;
    }
    if let Ok(lib_dir) = env::var("DEP_TORCH_CPU_LIB_DIR") {
        println!("cargo:rustc-link-arg=-Wl,-rpath,{lib_dir}");
    }
}
