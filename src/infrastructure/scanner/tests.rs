use super::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, rel).unwrap();
}

fn tree(files: &[&str]) -> TempDir {
    let dir = tempdir().unwrap();
    for f in files {
        touch(dir.path(), f);
    }
    dir
}

fn asset_paths(group: &AssetGroup) -> Vec<&str> {
    group.files.iter().map(|f| f.asset_path()).collect()
}

fn spec(path: &str) -> GroupSpec {
    GroupSpec::new("images", path)
}

#[test]
fn top_level_only_by_default() {
    let dir = tree(&[
        "assets/images/b.png",
        "assets/images/a.png",
        "assets/images/nested/c.png",
    ]);

    let group = scan(dir.path(), &spec("assets/images"), false).unwrap();
    assert_eq!(
        asset_paths(&group),
        vec!["assets/images/a.png", "assets/images/b.png"]
    );
    assert_eq!(group.files[0].relative_path(), Path::new("a.png"));
}

#[test]
fn recursive_order_is_by_path_component() {
    let dir = tree(&[
        "assets/a.png",
        "assets/a/z.png",
        "assets/b/c/d.png",
        "assets/B.png",
    ]);

    let mut group_spec = spec("assets");
    group_spec.recursive = true;
    let group = scan(dir.path(), &group_spec, false).unwrap();
    assert_eq!(
        asset_paths(&group),
        vec![
            "assets/B.png",
            "assets/a/z.png",
            "assets/a.png",
            "assets/b/c/d.png",
        ]
    );
}

#[test]
fn hidden_entries_skipped_unless_requested() {
    let dir = tree(&[
        "assets/.DS_Store",
        "assets/.cache/x.png",
        "assets/logo.png",
    ]);

    let mut group_spec = spec("assets");
    group_spec.recursive = true;

    let group = scan(dir.path(), &group_spec, false).unwrap();
    assert_eq!(asset_paths(&group), vec!["assets/logo.png"]);

    let group = scan(dir.path(), &group_spec, true).unwrap();
    assert_eq!(
        asset_paths(&group),
        vec!["assets/.DS_Store", "assets/.cache/x.png", "assets/logo.png"]
    );
}

#[test]
fn exclude_wins_over_include() {
    let dir = tree(&["assets/logo.png", "assets/logo_old.png", "assets/notes.txt"]);

    let mut group_spec = spec("assets");
    group_spec.includes = vec!["*.png".to_string()];
    group_spec.excludes = vec!["*_old.png".to_string()];

    let group = scan(dir.path(), &group_spec, false).unwrap();
    assert_eq!(asset_paths(&group), vec!["assets/logo.png"]);
}

#[test]
fn excluded_directory_is_pruned() {
    let dir = tree(&["assets/drafts/wip.png", "assets/final/done.png"]);

    let mut group_spec = spec("assets");
    group_spec.recursive = true;
    group_spec.excludes = vec!["drafts/".to_string()];

    let group = scan(dir.path(), &group_spec, false).unwrap();
    assert_eq!(asset_paths(&group), vec!["assets/final/done.png"]);
}

#[test]
fn include_directory_pattern_keeps_children() {
    let dir = tree(&["assets/icons/home.svg", "assets/photos/cat.jpg"]);

    let mut group_spec = spec("assets");
    group_spec.recursive = true;
    group_spec.includes = vec!["icons/".to_string()];

    let group = scan(dir.path(), &group_spec, false).unwrap();
    assert_eq!(asset_paths(&group), vec!["assets/icons/home.svg"]);
}

#[test]
fn types_filter_extensions_case_insensitively() {
    let dir = tree(&["assets/a.PNG", "assets/b.svg", "assets/c.jpg", "assets/LICENSE"]);

    let mut group_spec = spec("assets");
    group_spec.types = vec![".png".to_string(), "jpg".to_string()];

    let group = scan(dir.path(), &group_spec, false).unwrap();
    assert_eq!(asset_paths(&group), vec!["assets/a.PNG", "assets/c.jpg"]);
}

#[test]
fn empty_directory_yields_empty_group() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("assets")).unwrap();

    let group = scan(dir.path(), &spec("assets"), false).unwrap();
    assert!(group.is_empty());
    assert!(group.skipped.is_empty());
}

#[test]
fn missing_source_directory() {
    let dir = tempdir().unwrap();
    let err = scan(dir.path(), &spec("assets/gone"), false).unwrap_err();
    assert!(matches!(err, ScanError::MissingPath { .. }));
}

#[test]
fn group_at_project_root() {
    let dir = tree(&["logo.png"]);
    let group = scan(dir.path(), &spec("."), false).unwrap();
    assert_eq!(asset_paths(&group), vec!["logo.png"]);
}

#[test]
fn parent_components_are_resolved_in_asset_paths() {
    let dir = tree(&["assets/images/logo.png"]);
    let group = scan(dir.path(), &spec("assets/../assets/images"), false).unwrap();
    assert_eq!(asset_paths(&group), vec!["assets/images/logo.png"]);
}

#[test]
fn trait_delegates_to_scan() {
    let dir = tree(&["assets/logo.png"]);
    let scanner: &dyn AssetSource = &FsScanner::new();
    let group = scanner.scan(dir.path(), &spec("assets"), false).unwrap();
    assert_eq!(group.len(), 1);
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::symlink;

    #[test]
    fn symlink_to_ancestor_is_cyclic() {
        let dir = tree(&["assets/images/logo.png"]);
        symlink(dir.path().join("assets"), dir.path().join("assets/images/loop")).unwrap();

        let mut group_spec = spec("assets");
        group_spec.recursive = true;

        let err = scan(dir.path(), &group_spec, false).unwrap_err();
        match err {
            ScanError::CyclicPath { link, .. } => {
                assert!(link.ends_with("assets/images/loop"), "{}", link.display());
            }
            other => panic!("expected CyclicPath, got {other:?}"),
        }
    }

    #[test]
    fn symlinked_directory_is_followed_once() {
        let dir = tree(&["shared/star.png", "assets/readme.txt"]);
        symlink(dir.path().join("shared"), dir.path().join("assets/a")).unwrap();
        symlink(dir.path().join("shared"), dir.path().join("assets/b")).unwrap();

        let mut group_spec = spec("assets");
        group_spec.recursive = true;

        let group = scan(dir.path(), &group_spec, false).unwrap();
        assert_eq!(
            asset_paths(&group),
            vec!["assets/a/star.png", "assets/readme.txt"]
        );
    }

    #[test]
    fn link_into_group_does_not_shadow_real_directory() {
        let dir = tree(&["assets/z/star.png"]);
        symlink(dir.path().join("assets/z"), dir.path().join("assets/a_link")).unwrap();

        let mut group_spec = spec("assets");
        group_spec.recursive = true;

        let group = scan(dir.path(), &group_spec, false).unwrap();
        assert_eq!(asset_paths(&group), vec!["assets/z/star.png"]);
    }

    #[test]
    fn symlinked_file_is_included() {
        let dir = tree(&["shared/star.png"]);
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        symlink(dir.path().join("shared/star.png"), dir.path().join("assets/star.png")).unwrap();

        let group = scan(dir.path(), &spec("assets"), false).unwrap();
        assert_eq!(asset_paths(&group), vec!["assets/star.png"]);
    }

    #[test]
    fn dangling_symlink_is_skipped() {
        let dir = tree(&["assets/logo.png"]);
        symlink(dir.path().join("nowhere"), dir.path().join("assets/broken.png")).unwrap();

        let group = scan(dir.path(), &spec("assets"), false).unwrap();
        assert_eq!(asset_paths(&group), vec!["assets/logo.png"]);
        assert_eq!(group.skipped, vec![PathBuf::from("broken.png")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_recorded() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tree(&["assets/logo.png"]);
        let raw = OsStr::from_bytes(b"bad\xffname.png");
        fs::write(dir.path().join("assets").join(raw), "x").unwrap();

        let group = scan(dir.path(), &spec("assets"), false).unwrap();
        assert_eq!(asset_paths(&group), vec!["assets/logo.png"]);
        assert_eq!(group.skipped, vec![PathBuf::from(raw)]);
    }
}
