use crate::config::ResolveOptions;
use crate::error::{EngineError, Result};
use glob::MatchOptions;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{is_separator, Path, PathBuf};
use walkdir::WalkDir;

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Expand path and glob arguments into a sorted, deduplicated file list.
///
/// Paths are compared as spelled, so `a.txt` and `./a.txt` are two entries.
///
/// # Errors
/// Returns [`EngineError::NoMatchingFiles`] when nothing matched.
pub fn resolve_files(options: &ResolveOptions) -> Result<Vec<PathBuf>> {
    let ext = options.ext.as_deref();
    let mut found: BTreeSet<OsString> = BTreeSet::new();

    for pattern in &options.patterns {
        let path = Path::new(pattern);
        let matches = if options.recursive && path.is_dir() {
            walk_directory(path, ext)
        } else {
            expand_pattern(pattern, options.recursive)
                .into_iter()
                .filter(|p| matches_suffix(&p.to_string_lossy(), ext))
                .collect()
        };
        found.extend(matches.into_iter().map(PathBuf::into_os_string));
    }

    log::debug!(
        "resolved {} file(s) from {} pattern(s)",
        found.len(),
        options.patterns.len()
    );

    if found.is_empty() {
        return Err(EngineError::NoMatchingFiles);
    }
    Ok(found.into_iter().map(PathBuf::from).collect())
}

/// Every non-directory entry below `root` whose file name ends with `ext`.
fn walk_directory(root: &Path, ext: Option<&str>) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| !is_directory(entry))
        .filter(|entry| matches_suffix(&entry.file_name().to_string_lossy(), ext))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Symlinks to directories are not descended into, but they are not files
/// either.
fn is_directory(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn expand_pattern(pattern: &str, recursive: bool) -> Vec<PathBuf> {
    if !has_wildcard(pattern) {
        return literal(pattern);
    }

    let normalized = normalize_double_star(pattern, recursive);
    match glob::glob_with(&normalized, GLOB_OPTIONS) {
        Ok(paths) => paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(restore_dot_prefix(pattern, path)),
                Err(e) => {
                    log::warn!("skipping unreadable path: {e}");
                    None
                }
            })
            .collect(),
        Err(e) => {
            log::warn!("invalid glob pattern '{normalized}' ({e}), treating it as a literal path");
            literal(pattern)
        }
    }
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// A pattern without wildcards names itself, spelled as given, if it exists.
fn literal(pattern: &str) -> Vec<PathBuf> {
    let path = PathBuf::from(pattern);
    if path.symlink_metadata().is_ok() {
        vec![path]
    } else {
        Vec::new()
    }
}

/// `**` descends directories only when recursive and when it is a whole path
/// component; anywhere else a run of stars is a single `*`.
fn normalize_double_star(pattern: &str, recursive: bool) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut component = String::new();
    for ch in pattern.chars() {
        if is_separator(ch) {
            push_component(&mut out, &component, recursive);
            component.clear();
            out.push(ch);
        } else {
            component.push(ch);
        }
    }
    push_component(&mut out, &component, recursive);
    out
}

fn push_component(out: &mut String, component: &str, recursive: bool) {
    if recursive && component == "**" {
        out.push_str(component);
        return;
    }
    let mut previous_star = false;
    for ch in component.chars() {
        if !(ch == '*' && previous_star) {
            out.push(ch);
        }
        previous_star = ch == '*';
    }
}

/// The glob crate drops leading `./` components from its matches; put them
/// back so results are spelled like the pattern.
fn restore_dot_prefix(pattern: &str, path: PathBuf) -> PathBuf {
    let mut rest = pattern;
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    let prefix = &pattern[..pattern.len() - rest.len()];
    if prefix.is_empty() || path.to_string_lossy().starts_with(prefix) {
        return path;
    }
    Path::new(prefix).join(path)
}

fn matches_suffix(name: &str, ext: Option<&str>) -> bool {
    ext.is_none_or(|suffix| name.ends_with(suffix))
}
