//! Test fixtures - reusable `spider.yaml` contents.

/// One non-recursive `images` group.
#[allow(dead_code)]
pub const IMAGES_CONFIG: &str = r#"groups:
  - name: images
    path: assets/images
"#;

/// `images` group with an include and an overlapping exclude.
#[allow(dead_code)]
pub const FILTERED_CONFIG: &str = r#"groups:
  - name: images
    path: assets/images
    includes: ["*.png"]
    excludes: ["*_old.png"]
"#;

/// Recursive group, used for symlink tests.
#[allow(dead_code)]
pub const RECURSIVE_CONFIG: &str = r#"groups:
  - name: images
    path: assets/images
    recursive: true
"#;
