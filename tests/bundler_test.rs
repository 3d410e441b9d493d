// tests/bundler_test.rs — Integration test: workspace isolation and hygiene

use frontfusion::bundler::{BundleCompiler, BundleOutcome};
use frontfusion::codegen::FileMap;

fn files_of(entries: &[(&str, &str)]) -> FileMap {
    let mut files = FileMap::new();
    for (k, v) in entries {
        files.insert((*k).into(), (*v).into());
    }
    files
}

fn component_files() -> FileMap {
    files_of(&[
        ("src/main.jsx", "console.log('entry')"),
        ("src/App.jsx", "export default () => null"),
        ("index.html", "<html></html>"),
    ])
}

/// `echo` stands in for the build toolchain: exits zero and writes its
/// arguments to stdout, which the compiler captures as the bundle.
fn echo_compiler(root: &std::path::Path) -> BundleCompiler {
    BundleCompiler::new(root.to_path_buf(), "echo".into(), vec!["bundled:".into()], 2)
}

fn residual_entries(root: &std::path::Path) -> Vec<std::path::PathBuf> {
    match std::fs::read_dir(root) {
        Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

#[tokio::test]
async fn test_success_path_returns_stdout_and_cleans_up() {
    let root = tempfile::tempdir().unwrap();
    let compiler = echo_compiler(root.path());

    let outcome = compiler.compile(&component_files()).await;
    match outcome {
        BundleOutcome::Bundled(code) => assert!(code.contains("bundled:")),
        BundleOutcome::Failed(msg) => panic!("expected success, got: {msg}"),
    }

    // Zero residual files after returning
    assert!(residual_entries(root.path()).is_empty());
}

#[tokio::test]
async fn test_missing_entry_point_fails_and_cleans_up() {
    let root = tempfile::tempdir().unwrap();
    let compiler = echo_compiler(root.path());

    let outcome = compiler
        .compile(&files_of(&[("index.html", "<div/>")]))
        .await;
    match outcome {
        BundleOutcome::Failed(msg) => assert!(msg.contains("src/main.jsx")),
        BundleOutcome::Bundled(_) => panic!("expected failure"),
    }
    assert!(residual_entries(root.path()).is_empty());
}

#[tokio::test]
async fn test_absent_toolchain_fails_and_cleans_up() {
    let root = tempfile::tempdir().unwrap();
    let compiler = BundleCompiler::new(
        root.path().to_path_buf(),
        "definitely-not-a-real-bundler".into(),
        vec![],
        1,
    );

    let outcome = compiler.compile(&component_files()).await;
    match outcome {
        BundleOutcome::Failed(msg) => assert!(msg.contains("failed to start")),
        BundleOutcome::Bundled(_) => panic!("expected failure"),
    }
    assert!(residual_entries(root.path()).is_empty());
}

#[tokio::test]
async fn test_nonzero_exit_fails_and_cleans_up() {
    let root = tempfile::tempdir().unwrap();
    let compiler = BundleCompiler::new(root.path().to_path_buf(), "false".into(), vec![], 1);

    let outcome = compiler.compile(&component_files()).await;
    assert!(!outcome.is_bundled());
    assert!(residual_entries(root.path()).is_empty());
}

#[tokio::test]
async fn test_non_string_content_fails_and_cleans_up() {
    let root = tempfile::tempdir().unwrap();
    let compiler = echo_compiler(root.path());

    let mut files = component_files();
    files.insert("bad.json".into(), serde_json::json!({"not": "a string"}));

    let outcome = compiler.compile(&files).await;
    match outcome {
        BundleOutcome::Failed(msg) => assert!(msg.contains("bad.json")),
        BundleOutcome::Bundled(_) => panic!("expected failure"),
    }
    assert!(residual_entries(root.path()).is_empty());
}

#[tokio::test]
async fn test_traversal_path_fails_and_cleans_up() {
    let root = tempfile::tempdir().unwrap();
    let compiler = echo_compiler(root.path());

    let mut files = component_files();
    files.insert("../outside.js".into(), "nope".into());

    let outcome = compiler.compile(&files).await;
    assert!(!outcome.is_bundled());
    assert!(residual_entries(root.path()).is_empty());
}

#[tokio::test]
async fn test_nested_paths_are_staged() {
    // Deeply nested generated files get their parent directories created
    let root = tempfile::tempdir().unwrap();
    let compiler = echo_compiler(root.path());

    let mut files = component_files();
    files.insert("src/components/deep/Button.jsx".into(), "export {}".into());

    let outcome = compiler.compile(&files).await;
    assert!(outcome.is_bundled());
    assert!(residual_entries(root.path()).is_empty());
}

#[tokio::test]
async fn test_concurrent_compiles_are_isolated() {
    let root = tempfile::tempdir().unwrap();
    let compiler = std::sync::Arc::new(echo_compiler(root.path()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let compiler = compiler.clone();
        let mut files = component_files();
        files.insert(format!("src/page{i}.jsx"), "export {}".into());
        handles.push(tokio::spawn(async move { compiler.compile(&files).await }));
    }

    for handle in handles {
        let outcome = handle.await.unwrap();
        assert!(outcome.is_bundled());
    }

    // No workspace survives any of the invocations
    assert!(residual_entries(root.path()).is_empty());
}
