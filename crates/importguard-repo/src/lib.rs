//! Repository adapters: discover Go source files, read them and scan their imports.
//!
//! This crate is allowed to do filesystem IO. It should not spawn external processes.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use importguard_domain::model::{SourceFile, SourceModel, SourceRoot};
use importguard_types::RepoPath;
use rayon::prelude::*;

pub use discover::discover_sources;
pub use parse::{GoSource, parse_go_source};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Scan arbitrary text as a Go source file.
    ///
    /// Returns the number of imports found, or `Err(...)` when the text is not a
    /// well-formed package clause plus import block. **Never panics** on any input.
    pub fn scan_imports(text: &str) -> anyhow::Result<usize> {
        let path = RepoPath::new("fuzz.go");
        Ok(parse::parse_go_source(&path, text)?.imports.len())
    }

    /// Normalize an arbitrary path against arbitrary `(marker, prefix)` roots.
    /// **Never panics** on any input.
    pub fn logical_path(path: &str, source_roots: &[(String, String)]) -> String {
        let roots: Vec<SourceRoot> = source_roots
            .iter()
            .map(|(marker, prefix)| SourceRoot::mapped(marker.as_str(), prefix.as_str()))
            .collect();
        normalize_logical_path(&RepoPath::new(path), &roots)
    }
}

/// Which files to scan and how to name them for rule matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub source_roots: Vec<SourceRoot>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include: vec!["**/*.go".to_string()],
            exclude: Vec::new(),
            source_roots: SourceRoot::defaults(),
        }
    }
}

/// The path rules are matched against.
///
/// The first root, in list order, whose marker occurs in the repo-relative path
/// decides the logical path; with no such root it is the repo-relative path itself.
pub fn normalize_logical_path(path: &RepoPath, source_roots: &[SourceRoot]) -> String {
    let p = path.as_str();
    source_roots
        .iter()
        .find_map(|root| root.apply(p))
        .unwrap_or_else(|| p.to_string())
}

/// Build the in-memory source model used by the policy engine.
///
/// Files are scanned in parallel; the model keeps the sorted discovery order.
pub fn build_source_model(
    repo_root: &Utf8Path,
    options: &ScanOptions,
) -> anyhow::Result<SourceModel> {
    let paths = discover::discover_sources(repo_root, &options.include, &options.exclude)
        .context("discover source files")?;
    tracing::debug!(files = paths.len(), "discovered source files");

    let files = paths
        .par_iter()
        .map(|path| scan_file(repo_root, path, &options.source_roots))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let model = SourceModel {
        repo_root: RepoPath::from(repo_root),
        files,
    };
    tracing::debug!(imports = model.import_count(), "scanned imports");
    Ok(model)
}

fn scan_file(
    repo_root: &Utf8Path,
    path: &RepoPath,
    source_roots: &[SourceRoot],
) -> anyhow::Result<SourceFile> {
    let abs = repo_root.join(path.as_str());
    let text = std::fs::read_to_string(&abs).with_context(|| format!("read {}", abs))?;
    let source =
        parse::parse_go_source(path, &text).with_context(|| format!("scan {}", path.as_str()))?;

    Ok(SourceFile {
        path: path.clone(),
        logical_path: normalize_logical_path(path, source_roots),
        imports: source.imports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    fn roots(v: &[&str]) -> Vec<SourceRoot> {
        v.iter().map(|s| SourceRoot::strip(*s)).collect()
    }

    #[test]
    fn logical_path_strips_source_root_marker() {
        let default_roots = ScanOptions::default().source_roots;
        assert_eq!(
            normalize_logical_path(
                &RepoPath::new("pkg/testdata/src/example/forbidden.go"),
                &default_roots
            ),
            "example/forbidden.go"
        );
        assert_eq!(
            normalize_logical_path(&RepoPath::new("cmd/main.go"), &default_roots),
            "cmd/main.go"
        );
    }

    #[test]
    fn logical_path_uses_first_marker_in_list_order() {
        let markers = roots(&["vendor/", "src/"]);
        assert_eq!(
            normalize_logical_path(&RepoPath::new("src/a/vendor/b.go"), &markers),
            "b.go"
        );
        assert_eq!(
            normalize_logical_path(&RepoPath::new("src/a/src/b.go"), &markers),
            "a/src/b.go"
        );
    }

    #[test]
    fn default_roots_keep_gopath_src_prefix() {
        let default_roots = ScanOptions::default().source_roots;
        assert_eq!(
            normalize_logical_path(
                &RepoPath::new("go/src/github.com/acme/app/main.go"),
                &default_roots
            ),
            "src/github.com/acme/app/main.go"
        );
        assert_eq!(
            normalize_logical_path(
                &RepoPath::new("go/src/acme/testdata/src/example/a.go"),
                &default_roots
            ),
            "example/a.go"
        );
    }

    #[test]
    fn logical_path_ignores_empty_markers() {
        assert_eq!(
            normalize_logical_path(&RepoPath::new("a/b.go"), &roots(&[""])),
            "a/b.go"
        );
    }

    #[test]
    fn build_source_model_scans_imports() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(
            &root.join("testdata/src/example/forbidden.go"),
            "package example\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n",
        );
        write_file(&root.join("main.go"), "package main\n\nimport \"net/http\"\n");
        write_file(&root.join("notes.txt"), "import \"ignored\"\n");

        let model = build_source_model(&root, &ScanOptions::default()).expect("build model");
        let files: Vec<(&str, &str, usize)> = model
            .files
            .iter()
            .map(|f| (f.path.as_str(), f.logical_path.as_str(), f.imports.len()))
            .collect();
        assert_eq!(
            files,
            vec![
                ("main.go", "main.go", 1),
                (
                    "testdata/src/example/forbidden.go",
                    "example/forbidden.go",
                    2
                ),
            ]
        );
        assert_eq!(model.import_count(), 3);

        let fmt = &model.files[1].imports[0];
        let loc = fmt.location.as_ref().expect("location");
        assert_eq!(loc.path.as_str(), "testdata/src/example/forbidden.go");
        assert_eq!((loc.line, loc.col), (Some(4), Some(2)));
    }

    #[test]
    fn build_source_model_reports_unparsable_file() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("broken.go"), "this is not go\n");

        let err = build_source_model(&root, &ScanOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("scan broken.go"));
    }

    #[test]
    fn build_source_model_empty_repo() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        let model = build_source_model(&root, &ScanOptions::default()).expect("build model");
        assert!(model.files.is_empty());
        assert_eq!(model.import_count(), 0);
    }

    proptest! {
        #[test]
        fn fuzz_scanner_never_panics(input in ".*") {
            let _ = fuzz::scan_imports(&input);
        }

        #[test]
        fn fuzz_scanner_never_panics_on_import_shaped_input(
            body in "[a-z\"`()./_; \n\\\\]{0,64}",
        ) {
            let _ = fuzz::scan_imports(&format!("package p\nimport {body}"));
        }

        #[test]
        fn stripped_logical_path_is_suffix_of_repo_path(
            path in "[a-z/]{0,32}",
            marker in "[a-z/]{0,8}",
        ) {
            let repo_path = RepoPath::new(&path);
            let logical = fuzz::logical_path(&path, &[(marker, String::new())]);
            prop_assert!(repo_path.as_str().ends_with(&logical), "{} is not a suffix", logical);
        }
    }
}
