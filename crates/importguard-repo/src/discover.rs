use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use importguard_types::RepoPath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Discover source files under `repo_root`.
///
/// Behavior:
/// - `.git` directories are never entered.
/// - A file is kept when its repo-relative path matches `include` and does not match `exclude`.
/// - Output is sorted, so the model is identical across runs and platforms.
pub fn discover_sources(
    repo_root: &Utf8Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<RepoPath>> {
    let include_set = build_globset(include).context("compile include globset")?;
    let exclude_set = build_globset(exclude).context("compile exclude globset")?;

    let mut out: Vec<RepoPath> = Vec::new();

    let walker = WalkDir::new(repo_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == ".git"));

    for entry in walker {
        let entry = entry.with_context(|| format!("walk {repo_root}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 path");
            continue;
        };

        let rel = RepoPath::relative_to(repo_root, &abs);
        if include_set.is_match(rel.as_str()) && !exclude_set.is_match(rel.as_str()) {
            out.push(rel);
        }
    }

    // Stable order.
    out.sort();
    out.dedup();

    Ok(out)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).with_context(|| format!("invalid glob: {p}"))?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
