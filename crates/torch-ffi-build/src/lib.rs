//! libtorch discovery for build scripts: where the shared libraries and
//! headers live and what the library files are called on the target platform.
//!
//! Nothing here touches libtorch itself, so it builds and tests on machines
//! without a libtorch install.

use std::path::{Path, PathBuf};

/// Overrides the libtorch root directory.
pub const LIBTORCH_ENV: &str = "LIBTORCH";
/// Selects `_GLIBCXX_USE_CXX11_ABI` for the shim. Defaults to on.
pub const CXX11_ABI_ENV: &str = "LIBTORCH_CXX11_ABI";

/// libtorch root relative to the binding source directory.
pub const DEFAULT_RELATIVE_ROOT: &str = "../libtorch";

/// Core ABI library followed by the CPU tensor-ops library.
pub const REQUIRED_LIBRARIES: [&str; 2] = ["c10", "torch_cpu"];

/// Public C++ API headers, relative to the include root.
pub const API_INCLUDE_SUBPATH: &str = "torch/csrc/api/include";

const CORE_HEADER: &str = "ATen/ATen.h";
const API_HEADER: &str = "torch/torch.h";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPlatform {
    Windows,
    MacOs,
    Other,
}

impl TargetPlatform {
    /// Maps a `CARGO_CFG_TARGET_OS` value.
    pub fn from_target_os(target_os: &str) -> Self {
        match target_os {
            "windows" => TargetPlatform::Windows,
            "macos" => TargetPlatform::MacOs,
            _ => TargetPlatform::Other,
        }
    }

    pub fn shared_library_suffix(self) -> &'static str {
        match self {
            TargetPlatform::Windows => ".dll",
            TargetPlatform::MacOs => ".dylib",
            TargetPlatform::Other => ".so",
        }
    }

    /// File name of a shared library as libtorch ships it (`c10.dll`,
    /// `libc10.dylib`, `libc10.so`).
    pub fn shared_library_file_name(self, name: &str) -> String {
        let suffix = self.shared_library_suffix();
        match self {
            TargetPlatform::Windows => format!("{name}{suffix}"),
            TargetPlatform::MacOs | TargetPlatform::Other => format!("lib{name}{suffix}"),
        }
    }
}

/// Directory layout of a libtorch distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibtorchLayout {
    pub root: PathBuf,
    pub lib_dir: PathBuf,
    pub include_dir: PathBuf,
    pub api_include_dir: PathBuf,
}

impl LibtorchLayout {
    /// Resolves the layout from the binding source directory, or from an
    /// explicit root when one is configured. An empty override counts as unset.
    pub fn resolve(source_dir: &Path, override_root: Option<&str>) -> Self {
        let root = match override_root.map(str::trim) {
            Some(root) if !root.is_empty() => PathBuf::from(root),
            _ => source_dir.join(DEFAULT_RELATIVE_ROOT),
        };
        Self::from_root(root)
    }

    pub fn from_root(root: PathBuf) -> Self {
        let lib_dir = root.join("lib");
        let include_dir = root.join("include");
        let api_include_dir = include_dir.join(API_INCLUDE_SUBPATH);
        Self {
            root,
            lib_dir,
            include_dir,
            api_include_dir,
        }
    }

    pub fn include_dirs(&self) -> [&Path; 2] {
        [&self.include_dir, &self.api_include_dir]
    }

    pub fn shared_library_paths(&self, platform: TargetPlatform) -> Vec<PathBuf> {
        REQUIRED_LIBRARIES
            .iter()
            .map(|name| self.lib_dir.join(platform.shared_library_file_name(name)))
            .collect()
    }

    /// Every library or header the build needs that is not on disk.
    pub fn missing_artifacts(&self, platform: TargetPlatform) -> Vec<PathBuf> {
        let headers = [
            self.include_dir.join(CORE_HEADER),
            self.api_include_dir.join(API_HEADER),
        ];
        self.shared_library_paths(platform)
            .into_iter()
            .chain(headers)
            .filter(|path| !path.exists())
            .collect()
    }
}

pub fn parse_bool(value: &str) -> bool {
    let normalized = value.trim().to_ascii_lowercase();
    matches!(normalized.as_str(), "1" | "true" | "yes" | "on")
}

pub fn cxx11_abi_enabled(value: Option<&str>) -> bool {
    match value {
        Some(value) if !value.trim().is_empty() => parse_bool(value),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("torch_ffi_link_{tag}_{nanos}"))
    }

    #[test]
    fn suffix_follows_three_way_branch() {
        assert_eq!(TargetPlatform::from_target_os("windows"), TargetPlatform::Windows);
        assert_eq!(TargetPlatform::from_target_os("macos"), TargetPlatform::MacOs);
        assert_eq!(TargetPlatform::from_target_os("linux"), TargetPlatform::Other);
        assert_eq!(TargetPlatform::from_target_os("freebsd"), TargetPlatform::Other);

        assert_eq!(TargetPlatform::Windows.shared_library_suffix(), ".dll");
        assert_eq!(TargetPlatform::MacOs.shared_library_suffix(), ".dylib");
        assert_eq!(TargetPlatform::Other.shared_library_suffix(), ".so");
    }

    #[test]
    fn library_file_names_match_libtorch_distribution() {
        assert_eq!(TargetPlatform::Windows.shared_library_file_name("c10"), "c10.dll");
        assert_eq!(
            TargetPlatform::MacOs.shared_library_file_name("torch_cpu"),
            "libtorch_cpu.dylib"
        );
        assert_eq!(TargetPlatform::Other.shared_library_file_name("c10"), "libc10.so");
    }

    #[test]
    fn default_root_is_relative_to_source_dir() {
        let source = Path::new("/work/torch-ffi-sys/src");
        let layout = LibtorchLayout::resolve(source, None);
        assert_eq!(layout.root, source.join("../libtorch"));
        assert_eq!(layout.lib_dir, source.join("../libtorch/lib"));
        assert_eq!(layout.include_dir, source.join("../libtorch/include"));
        assert_eq!(
            layout.api_include_dir,
            source.join("../libtorch/include/torch/csrc/api/include")
        );

        let blank = LibtorchLayout::resolve(source, Some("   "));
        assert_eq!(blank, layout);
    }

    #[test]
    fn override_root_replaces_default() {
        let layout = LibtorchLayout::resolve(Path::new("/ignored/src"), Some("/opt/libtorch"));
        assert_eq!(layout.root, PathBuf::from("/opt/libtorch"));
        assert_eq!(
            layout.shared_library_paths(TargetPlatform::Other),
            vec![
                PathBuf::from("/opt/libtorch/lib/libc10.so"),
                PathBuf::from("/opt/libtorch/lib/libtorch_cpu.so"),
            ]
        );
    }

    #[test]
    fn missing_artifacts_lists_absent_libraries_and_headers() {
        let root = scratch_dir("missing");
        let layout = LibtorchLayout::from_root(root.clone());
        fs::create_dir_all(&layout.lib_dir).unwrap();
        fs::create_dir_all(layout.include_dir.join("ATen")).unwrap();
        fs::write(layout.lib_dir.join("libc10.so"), b"").unwrap();
        fs::write(layout.include_dir.join("ATen/ATen.h"), b"").unwrap();

        let missing = layout.missing_artifacts(TargetPlatform::Other);
        fs::remove_dir_all(&root).unwrap();

        assert_eq!(
            missing,
            vec![
                layout.lib_dir.join("libtorch_cpu.so"),
                layout.api_include_dir.join("torch/torch.h"),
            ]
        );
    }

    #[test]
    fn cxx11_abi_defaults_on() {
        assert!(cxx11_abi_enabled(None));
        assert!(cxx11_abi_enabled(Some("")));
        assert!(cxx11_abi_enabled(Some(" Yes ")));
        assert!(!cxx11_abi_enabled(Some("0")));
        assert!(!cxx11_abi_enabled(Some("off")));
    }
}
