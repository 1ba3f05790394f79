//! File operations for installation
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir)
//! - Pruning files owned by previous installs (remove_owned_files)
//! - Converting a single document (install_document)
//! - Recursive copy with content rewriting (copy_dir_with_rewrite)

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::OWNED_PREFIX;
use crate::error::fs::{read_failed, remove_failed, write_failed};
use crate::error::Result;
use crate::ui::Reporter;

use super::formats::DocumentFormat;
use super::rewrite::{is_text_file, rewrite_content};

const MARKDOWN_EXT: &str = ".md";

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_failed(parent, &e))?;
    }
    Ok(())
}

/// True for `gsd-*.md` file names
pub fn is_owned_file_name(name: &str) -> bool {
    name.starts_with(OWNED_PREFIX) && name.ends_with(MARKDOWN_EXT)
}

/// Delete owned files directly inside `dir`. A missing `dir` is not an error.
///
/// Returns the number of files removed.
pub fn remove_owned_files(dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir).map_err(|e| read_failed(dir, &e))? {
        let entry = entry.map_err(|e| read_failed(dir, &e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !is_owned_file_name(name) || entry.file_type()?.is_dir() {
            continue;
        }
        let path = entry.path();
        fs::remove_file(&path).map_err(|e| remove_failed(&path, &e))?;
        removed += 1;
    }

    Ok(removed)
}

/// Remove `path` and everything below it if present.
///
/// Returns whether anything was removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(|e| remove_failed(path, &e))?;
    } else {
        fs::remove_file(path).map_err(|e| remove_failed(path, &e))?;
    }
    Ok(true)
}

/// `*.md` files directly inside `dir`, sorted by name
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| read_failed(dir, &e))? {
        let entry = entry.map_err(|e| read_failed(dir, &e))?;
        let path = entry.path();
        let is_markdown = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(MARKDOWN_EXT));
        if is_markdown && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read `source` leniently, convert it to `format`, rewrite it for OpenCode and write
/// it to `target`.
pub fn install_document(
    source: &Path,
    target: &Path,
    format: DocumentFormat,
    path_prefix: &str,
) -> Result<()> {
    let bytes = fs::read(source).map_err(|e| read_failed(source, &e))?;
    let content = String::from_utf8_lossy(&bytes);
    let converted = format.convert(&content);
    let rewritten = rewrite_content(&converted, path_prefix);

    ensure_parent_dir(target)?;
    fs::write(target, rewritten).map_err(|e| write_failed(target, &e))?;
    Ok(())
}

/// Copy `src` into `dst` recursively. Text files are rewritten for OpenCode, other files
/// are copied byte for byte, symlinks are skipped. Written files are reported relative
/// to `report_root`.
///
/// Returns the number of files written.
pub fn copy_dir_with_rewrite(
    src: &Path,
    dst: &Path,
    path_prefix: &str,
    report_root: &Path,
    reporter: &mut dyn Reporter,
) -> Result<usize> {
    fs::create_dir_all(dst).map_err(|e| write_failed(dst, &e))?;

    let entries = WalkDir::new(src)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let total = entries.iter().filter(|e| e.file_type().is_file()).count();
    reporter.begin_files(total as u64);

    let mut written = 0;
    for entry in &entries {
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| write_failed(&target, &e))?;
        } else if file_type.is_file() {
            if is_text_file(entry.path()) {
                install_document(
                    entry.path(),
                    &target,
                    DocumentFormat::Passthrough,
                    path_prefix,
                )?;
            } else {
                ensure_parent_dir(&target)?;
                fs::copy(entry.path(), &target).map_err(|e| write_failed(&target, &e))?;
            }
            written += 1;
            reporter.file_written(target.strip_prefix(report_root).unwrap_or(&target));
        }
    }

    reporter.finish_files();
    Ok(written)
}
