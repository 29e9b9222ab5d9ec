use std::path::Path;

use frontend::{load, Phase, TargetArch, UsageErrorKind};

#[test]
fn full_invocation() {
    let config = load([
        "frontend",
        "--shake_tree",
        "--emit_ir",
        "--stdlib",
        "../Lib",
        "--arch",
        "a64",
        "--dump_ast",
        "after_symbolizing",
        "--files",
        "tests/hello.cw",
    ])
    .unwrap();
    assert!(config.shake_tree());
    assert!(config.emit_ir());
    assert_eq!(config.stdlib_path(), Path::new("../Lib"));
    assert_eq!(config.target_arch(), Some(TargetArch::A64));
    assert_eq!(config.source_files(), Path::new("tests/hello.cw"));
    assert_eq!(config.phases().dump_ast, Some(Phase::AfterSymbolizing));
    assert_eq!(config.phases().stop, None);
}

#[test]
fn flag_order_does_not_matter() {
    let a = load(["frontend", "-F", "main.cw", "--arch", "a32", "--shake_tree"]).unwrap();
    let b = load(["frontend", "--shake_tree", "--arch", "a32", "-F", "main.cw"]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn loading_does_not_touch_the_filesystem() {
    let config = load([
        "frontend",
        "--stdlib",
        "/definitely/not/here",
        "-F",
        "/nor/this.cw",
    ])
    .unwrap();
    assert_eq!(config.stdlib_path(), Path::new("/definitely/not/here"));
    assert_eq!(config.source_files(), Path::new("/nor/this.cw"));
}

#[test]
fn stray_positional_is_rejected() {
    let err = load(["frontend", "-F", "main.cw", "extra.cw"]).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn unknown_flag_is_not_ignored() {
    let err = load(["frontend", "-F", "main.cw", "--bogus"]).unwrap_err();
    assert_eq!(err.kind(), UsageErrorKind::UnknownFlag);
    assert!(err.to_string().contains("Usage"));
}
