//! Capability-based filesystem helpers on UTF-8 paths.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing catalog file for reading.
pub(crate) fn open_catalog_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create `path` for writing, failing with [`io::ErrorKind::AlreadyExists`]
/// when something is already there.
pub(crate) fn create_new_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("catalog path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    let mut options = fs_utf8::OpenOptions::new();
    options.write(true).create_new(true);
    dir.open_with(file_name, &options)
}

/// Create the parent directories of `path` if they are missing.
pub(crate) fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base_dir, relative) = split_ambient_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative)
}

/// Split `parent` into an ambient base directory and the path below it.
fn split_ambient_base(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let (base, relative) = ambient_base(parent);
    let dir = fs_utf8::Dir::open_ambient_dir(base, ambient_authority())?;
    Ok((dir, relative.to_path_buf()))
}

/// Absolute paths hang off their filesystem root; relative ones off `.`.
fn ambient_base(parent: &Utf8Path) -> (&Utf8Path, &Utf8Path) {
    if !parent.is_absolute() {
        return (Utf8Path::new("."), parent);
    }
    let root = parent.ancestors().last().unwrap_or(parent);
    (root, parent.strip_prefix(root).unwrap_or(parent))
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "tests should fail fast")]

    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir")
    }

    #[rstest]
    fn ensure_parent_dir_creates_nested_directories() {
        let tmp = TempDir::new().expect("tempdir");
        let target = utf8_root(&tmp).join("data/nested/catalog.json");

        ensure_parent_dir(&target).expect("create parents");

        assert!(target.parent().is_some_and(Utf8Path::is_dir));
    }

    #[rstest]
    fn ensure_parent_dir_accepts_bare_file_names() {
        ensure_parent_dir(Utf8Path::new("catalog.json")).expect("no parent to create");
    }

    #[rstest]
    fn create_new_file_refuses_existing_targets() {
        let tmp = TempDir::new().expect("tempdir");
        let target = utf8_root(&tmp).join("catalog.json");
        std::fs::write(&target, b"[]").expect("seed file");

        let err = create_new_file(&target).expect_err("existing file");

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[rstest]
    fn absolute_parents_split_at_the_root() {
        let tmp = TempDir::new().expect("tempdir");
        let parent = utf8_root(&tmp).join("data");

        let (base, relative) = ambient_base(&parent);

        assert!(base.is_absolute());
        assert_eq!(base.parent(), None);
        assert!(!relative.is_absolute());
        assert_eq!(base.join(relative), parent);
    }

    #[rstest]
    fn relative_parents_resolve_from_the_working_directory() {
        let (base, relative) = ambient_base(Utf8Path::new("data/nested"));

        assert_eq!(base, Utf8Path::new("."));
        assert_eq!(relative, Utf8Path::new("data/nested"));
    }
}
