//! Name-only classification of repository entries.
//!
//! Two questions are answered here, without touching the filesystem:
//! - is an entry *trash* (pruned before traversal ever looks inside it)?
//! - is a file *text* (its content gets embedded in the document)?
//!
//! Both sets are built once and never mutated.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Extensions (with leading dot) and bare lowercase filenames whose content is embedded.
pub static KNOWN_TEXT_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".md", ".markdown", ".txt", ".log", ".json", ".yaml", ".yml", ".xml", ".html", ".htm",
        ".css", ".js", ".jsx", ".ts", ".tsx", ".py", ".rb", ".php", ".java", ".c", ".h", ".cpp",
        ".hpp", ".cs", ".go", ".rs", ".swift", ".kt", ".kts", ".pl", ".sh", ".bash", ".zsh",
        ".fish", ".ps1", ".bat", ".cmd", ".r", ".sql", ".ini", ".cfg", ".conf", ".toml",
        ".editorconfig", ".gitignore", ".gitattributes", ".gitmodules", ".csv", ".tsv", ".rst",
        ".adoc", ".asciidoc", ".tex", ".makefile", ".dockerfile", ".env", ".properties",
        ".graphql", ".gql", ".tf", ".tfvars", ".hcl", ".vue", ".svelte", ".sum", ".mod",
        "readme", "license", "contributing", "code_of_conduct", "changelog", "makefile",
        "dockerfile", "jenkinsfile", "gemfile", "pipfile", "requirements", "procfile", "version",
        "authors", "copying", "notice", "patents", "todo",
    ]
    .into_iter()
    .collect()
});

/// Exact names (matched case-sensitively against every path segment) that are never traversed.
pub static KNOWN_TRASH_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".DS_Store",
        "Thumbs.db",
        ".git",
        ".gitignore",
        ".gitattributes",
        ".gitmodules",
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        "node_modules",
        "dist",
        ".next",
        ".nuxt",
        ".cache",
        ".vscode",
        ".idea",
        ".history",
        ".github",
    ]
    .into_iter()
    .collect()
});

/// Returns true when the file's extension, or its whole name, is a known text key.
///
/// Matching is case-insensitive, so `README`, `Makefile` and `LICENSE` count as
/// text even without an extension.
pub fn is_text_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    let ext = lower.rsplit('.').next().unwrap_or("");
    // A dotless name yields itself as "extension"; the whole-name lookup covers that case.
    let dotted = format!(".{ext}");
    KNOWN_TEXT_SUFFIXES.contains(dotted.as_str()) || KNOWN_TEXT_SUFFIXES.contains(lower.as_str())
}

/// Returns true when the relative path, or any one of its segments, is a trash name.
pub fn is_trash_file_or_dir(relative_path: &str) -> bool {
    let normalized = relative_path.replace('\\', "/");
    if KNOWN_TRASH_NAMES.contains(normalized.as_str()) {
        return true;
    }
    normalized
        .split('/')
        .any(|segment| KNOWN_TRASH_NAMES.contains(segment))
}

/// Fence language for a file block: whatever follows the last `.` of the
/// relative path, or `text` when nothing does.
///
/// The dot may sit in a directory name, so `pkg.v2/LICENSE` yields `v2/LICENSE`.
pub fn language_tag(relative_path: &str) -> &str {
    match relative_path.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => "text",
    }
}
