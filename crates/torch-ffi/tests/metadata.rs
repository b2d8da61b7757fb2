use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{json, Value};
use torch_ffi::{eye, eye_with_options, Kind, Tensor, TensorOptions};

const UNDEFINED_QUERIES: [&str; 17] = [
    "defined",
    "dim",
    "ndimension",
    "numel",
    "nbytes",
    "itemsize",
    "element_size",
    "has_storage",
    "get_device",
    "is_cuda",
    "is_hip",
    "is_sparse",
    "is_mkldnn",
    "is_vulkan",
    "is_quantized",
    "is_meta",
    "item_f64",
];

#[derive(Deserialize)]
struct Golden {
    n: i64,
    default_options: Accessors,
    itemsize_by_kind: Vec<KindItemsize>,
    undefined_tensor: Vec<QueryOutcome>,
}

#[derive(Debug, PartialEq, Deserialize)]
struct Accessors {
    dim: i64,
    ndimension: i64,
    numel: i64,
    nbytes: usize,
    itemsize: usize,
    element_size: i64,
    has_storage: bool,
    get_device: i64,
    is_cuda: bool,
    is_hip: bool,
    is_sparse: bool,
    is_mkldnn: bool,
    is_vulkan: bool,
    is_quantized: bool,
    is_meta: bool,
}

#[derive(Deserialize)]
struct KindItemsize {
    kind: String,
    itemsize: usize,
}

/// What libtorch does for one query on a default-constructed tensor. A missing
/// `value` on a non-raising query means any native value is accepted.
#[derive(Debug, Deserialize)]
struct QueryOutcome {
    query: String,
    #[serde(default)]
    raises: bool,
    #[serde(default)]
    message_contains: Option<String>,
    #[serde(default)]
    value: Option<Value>,
}

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/eye4_accessors.json")
}

fn load_golden() -> Golden {
    let path = fixture_path();
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    serde_json::from_str(&contents)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn kind_from_name(name: &str) -> Kind {
    match name {
        "uint8" => Kind::Uint8,
        "int8" => Kind::Int8,
        "int16" => Kind::Int16,
        "int" => Kind::Int,
        "int64" => Kind::Int64,
        "half" => Kind::Half,
        "float" => Kind::Float,
        "double" => Kind::Double,
        "bool" => Kind::Bool,
        "bfloat16" => Kind::BFloat16,
        other => panic!("unknown kind '{other}' in fixture"),
    }
}

fn read_accessors(tensor: &Tensor) -> anyhow::Result<Accessors> {
    Ok(Accessors {
        dim: tensor.dim()?,
        ndimension: tensor.ndimension()?,
        numel: tensor.numel()?,
        nbytes: tensor.nbytes()?,
        itemsize: tensor.itemsize()?,
        element_size: tensor.element_size()?,
        has_storage: tensor.has_storage()?,
        get_device: tensor.get_device()?,
        is_cuda: tensor.is_cuda()?,
        is_hip: tensor.is_hip()?,
        is_sparse: tensor.is_sparse()?,
        is_mkldnn: tensor.is_mkldnn()?,
        is_vulkan: tensor.is_vulkan()?,
        is_quantized: tensor.is_quantized()?,
        is_meta: tensor.is_meta()?,
    })
}

fn query_as_json(tensor: &Tensor, query: &str) -> torch_ffi::Result<Value> {
    Ok(match query {
        "defined" => json!(tensor.defined()?),
        "dim" => json!(tensor.dim()?),
        "ndimension" => json!(tensor.ndimension()?),
        "numel" => json!(tensor.numel()?),
        "nbytes" => json!(tensor.nbytes()?),
        "itemsize" => json!(tensor.itemsize()?),
        "element_size" => json!(tensor.element_size()?),
        "has_storage" => json!(tensor.has_storage()?),
        "get_device" => json!(tensor.get_device()?),
        "is_cuda" => json!(tensor.is_cuda()?),
        "is_hip" => json!(tensor.is_hip()?),
        "is_sparse" => json!(tensor.is_sparse()?),
        "is_mkldnn" => json!(tensor.is_mkldnn()?),
        "is_vulkan" => json!(tensor.is_vulkan()?),
        "is_quantized" => json!(tensor.is_quantized()?),
        "is_meta" => json!(tensor.is_meta()?),
        "item_f64" => json!(tensor.item_f64()?),
        other => panic!("unknown query '{other}' in fixture"),
    })
}

#[test]
fn eye4_accessors_match_golden_table() -> anyhow::Result<()> {
    let golden = load_golden();
    let tensor = eye(golden.n)?;
    assert_eq!(read_accessors(&tensor)?, golden.default_options);
    Ok(())
}

#[test]
fn itemsize_and_element_size_follow_dtype() -> anyhow::Result<()> {
    let golden = load_golden();
    for entry in &golden.itemsize_by_kind {
        let options = TensorOptions::new().dtype(kind_from_name(&entry.kind));
        let tensor = eye_with_options(golden.n, options)?;
        assert_eq!(tensor.itemsize()?, entry.itemsize, "itemsize for {}", entry.kind);
        assert_eq!(
            tensor.element_size()?,
            entry.itemsize as i64,
            "element_size for {}",
            entry.kind
        );
        assert_eq!(
            tensor.nbytes()?,
            entry.itemsize * (golden.n * golden.n) as usize,
            "nbytes for {}",
            entry.kind
        );
    }
    Ok(())
}

#[test]
fn sizes_report_each_dimension() -> anyhow::Result<()> {
    let tensor = eye(5)?;
    assert_eq!(tensor.sizes()?, vec![5, 5]);
    Ok(())
}

#[test]
fn default_tensor_has_no_storage() -> anyhow::Result<()> {
    let tensor = Tensor::new();
    assert!(!tensor.defined()?);
    assert!(!tensor.has_storage()?);
    Ok(())
}

#[test]
fn undefined_tensor_queries_match_native_outcomes() {
    let golden = load_golden();
    let listed = golden
        .undefined_tensor
        .iter()
        .map(|outcome| outcome.query.as_str())
        .collect::<Vec<_>>();
    assert_eq!(listed, UNDEFINED_QUERIES);

    let tensor = Tensor::new();
    for expected in &golden.undefined_tensor {
        let query = expected.query.as_str();
        match query_as_json(&tensor, query) {
            Ok(value) => {
                assert!(!expected.raises, "{query} returned {value} instead of raising");
                if let Some(native) = &expected.value {
                    assert_eq!(&value, native, "{query}");
                }
            }
            Err(err) => {
                assert!(expected.raises, "{query} raised: {err}");
                assert_eq!(err.op(), query);
                assert!(!err.message().is_empty(), "{query} message is empty");
                assert_eq!(err.to_string(), err.message());
                if let Some(fragment) = &expected.message_contains {
                    assert!(
                        err.message().contains(fragment.as_str()),
                        "{query} message '{}' lacks '{fragment}'",
                        err.message()
                    );
                }
            }
        }
    }
}

#[test]
fn undefined_tensor_dim_aliases_agree() -> anyhow::Result<()> {
    let tensor = Tensor::new();
    assert_eq!(tensor.dim()?, tensor.ndimension()?);
    Ok(())
}

#[test]
fn reset_leaves_handle_undefined() -> anyhow::Result<()> {
    let mut tensor = eye(3)?;
    let alias = tensor.clone();
    tensor.reset();

    assert!(!tensor.defined()?);
    assert!(!tensor.has_storage()?);
    // reset() drops this handle's reference only; the other handle keeps its tensor.
    assert!(alias.defined()?);
    assert_eq!(alias.numel()?, 9);
    Ok(())
}
