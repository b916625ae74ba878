use gittomd_core::classify::{
    is_text_file, is_trash_file_or_dir, language_tag, KNOWN_TRASH_NAMES,
};

struct TestCase {
    name: &'static str,
    input: &'static str,
    expected: bool,
}

#[test]
fn test_is_text_file_table_driven() {
    let cases = vec![
        TestCase { name: "markdown extension", input: "notes.md", expected: true },
        TestCase { name: "rust source", input: "main.rs", expected: true },
        TestCase { name: "go module file", input: "go.mod", expected: true },
        TestCase { name: "uppercase extension", input: "SCRIPT.SH", expected: true },
        TestCase { name: "bare readme", input: "README", expected: true },
        TestCase { name: "bare license lowercase", input: "license", expected: true },
        TestCase { name: "Makefile", input: "Makefile", expected: true },
        TestCase { name: "Dockerfile", input: "Dockerfile", expected: true },
        TestCase { name: "dotenv", input: ".env", expected: true },
        TestCase { name: "png image", input: "logo.png", expected: false },
        TestCase { name: "binary without extension", input: "a.out", expected: false },
        TestCase { name: "trailing dot", input: "notes.", expected: false },
        TestCase { name: "unknown bare name", input: "somefile", expected: false },
        TestCase { name: "empty name", input: "", expected: false },
    ];

    for case in cases {
        assert_eq!(
            is_text_file(case.input),
            case.expected,
            "case '{}' ({:?})",
            case.name,
            case.input
        );
    }
}

#[test]
fn test_is_text_file_ignores_case() {
    for name in ["ReadMe", "LICENSE", "App.TSX", "Cargo.TOML", "photo.JPG", "CHANGELOG", "x."] {
        assert_eq!(
            is_text_file(name),
            is_text_file(&name.to_lowercase()),
            "case-insensitivity broken for {name:?}"
        );
    }
}

#[test]
fn test_trash_segment_matches_at_any_depth() {
    for trash in KNOWN_TRASH_NAMES.iter() {
        let paths = [
            trash.to_string(),
            format!("{trash}/inner/file.txt"),
            format!("a/{trash}"),
            format!("a/b/c/{trash}/d.js"),
        ];
        for path in paths {
            assert!(is_trash_file_or_dir(&path), "expected trash: {path}");
        }
    }
}

#[test]
fn test_trash_normalises_backslashes() {
    assert!(is_trash_file_or_dir(r"packages\web\node_modules\react\index.js"));
    assert!(is_trash_file_or_dir(r"src\.git"));
}

#[test]
fn test_non_trash_paths() {
    for path in [
        "src/main.rs",
        "docs/distribution.md",
        "node_modules_backup/readme",
        "my.git/config",
        "Dist/output.js",
        "",
    ] {
        assert!(!is_trash_file_or_dir(path), "unexpected trash: {path}");
    }
}

#[test]
fn test_gitignore_is_trash_even_though_text() {
    assert!(is_text_file(".gitignore"));
    assert!(is_trash_file_or_dir(".gitignore"));
}

#[test]
fn test_language_tag() {
    assert_eq!(language_tag("src/main.go"), "go");
    assert_eq!(language_tag("README.md"), "md");
    assert_eq!(language_tag("archive.tar.gz"), "gz");
    assert_eq!(language_tag("Makefile"), "text");
    assert_eq!(language_tag("pkg.v2/LICENSE"), "v2/LICENSE");
    assert_eq!(language_tag("notes."), "text");
    assert_eq!(language_tag("config/.env"), "env");
}
