// Build script for the libtorch C ABI shim.
use std::env;
use std::path::PathBuf;

use torch_ffi_build::{
    cxx11_abi_enabled, LibtorchLayout, TargetPlatform, CXX11_ABI_ENV, LIBTORCH_ENV,
    REQUIRED_LIBRARIES,
};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=csrc/torch_ffi.h");
    println!("cargo:rerun-if-changed=csrc/torch_ffi.cpp");
    println!("cargo:rerun-if-env-changed={LIBTORCH_ENV}");
    println!("cargo:rerun-if-env-changed={CXX11_ABI_ENV}");

    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"),
    );
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let platform = TargetPlatform::from_target_os(&target_os);

    let override_root = env::var(LIBTORCH_ENV).ok();
    let layout = LibtorchLayout::resolve(&manifest_dir.join("src"), override_root.as_deref());
    if override_root.is_none() {
        println!(
            "cargo:warning={LIBTORCH_ENV} not set, linking libtorch at {}",
            layout.root.display()
        );
    }

    let missing = layout.missing_artifacts(platform);
    if !missing.is_empty() {
        let listed = missing
            .iter()
            .map(|path| format!("  {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n");
        panic!(
            "libtorch artifacts not found under {} (set {LIBTORCH_ENV} to override):\n{listed}",
            layout.root.display()
        );
    }

    let cxx11_abi = cxx11_abi_enabled(env::var(CXX11_ABI_ENV).ok().as_deref());

    let mut build = cc::Build::new();
    build
        .cpp(true)
        .file("csrc/torch_ffi.cpp")
        .include("csrc")
        .warnings(false);
    for dir in layout.include_dirs() {
        build.include(dir);
    }
    if platform == TargetPlatform::Windows {
        build.flag("/std:c++17");
    } else {
        build.flag("-std=c++17");
        build.define("_GLIBCXX_USE_CXX11_ABI", if cxx11_abi { "1" } else { "0" });
    }
    build.compile("torch_ffi");

    println!("cargo:rustc-link-search=native={}", layout.lib_dir.display());
    for name in REQUIRED_LIBRARIES {
        println!("cargo:rustc-link-lib=dylib={name}");
    }
    if platform != TargetPlatform::Windows {
        println!("cargo:rustc-link-arg=-Wl,-rpath,{}", layout.lib_dir.display());
    }
    // Read by dependents as DEP_TORCH_CPU_ROOT / DEP_TORCH_CPU_LIB_DIR.
    println!("cargo:root={}", layout.root.display());
    println!("cargo:lib_dir={}", layout.lib_dir.display());
}
