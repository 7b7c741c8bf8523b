//! Dart source rendering
//!
//! Turns resolved groups into `GeneratedFile`s. Rendering is pure: the
//! same groups and options always produce byte-identical text, so callers
//! can diff against what is on disk.

use std::fmt::Write as _;

use crate::domain::entities::{GeneratedFile, ResolvedGroup};
use crate::domain::value_objects::Template;

use super::dart;

const HEADER: &str = "// GENERATED CODE - DO NOT MODIFY BY HAND\n";
const IGNORE_LINTS: &str = "// ignore_for_file: type=lint\n";

/// Options controlling what gets rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Output directory relative to the project root, `/`-separated
    pub output_dir: String,
    /// Name of the barrel file (without `.dart`)
    pub package: String,
    pub template: Template,
    pub export: bool,
    pub generate_tests: bool,
    pub no_comments: bool,
    pub use_references_list: bool,
    /// `name` from `pubspec.yaml`, used for `package:` imports in tests
    pub project_package: Option<String>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            output_dir: "lib/resources".to_string(),
            package: "resources".to_string(),
            template: Template::Plain,
            export: true,
            generate_tests: false,
            no_comments: false,
            use_references_list: false,
            project_package: None,
        }
    }
}

/// Render every generated file for `groups`, in a stable order:
/// group files, then the barrel file, then test files.
pub fn render(groups: &[ResolvedGroup], ctx: &RenderContext) -> Vec<GeneratedFile> {
    let mut files: Vec<GeneratedFile> = groups
        .iter()
        .map(|group| {
            GeneratedFile::new(
                join_rel(&ctx.output_dir, &group_file_name(group)),
                render_group(group, ctx),
            )
            .for_group(&group.name)
        })
        .collect();

    if ctx.export {
        files.push(GeneratedFile::new(
            join_rel(&ctx.output_dir, &format!("{}.dart", ctx.package)),
            render_barrel(groups),
        ));
    }

    if ctx.generate_tests {
        files.extend(groups.iter().map(|group| {
            GeneratedFile::new(
                format!("test/{}_test.dart", group.file_stem),
                render_test(group, ctx),
            )
            .for_group(&group.name)
        }));
    }

    files
}

fn group_file_name(group: &ResolvedGroup) -> String {
    format!("{}.dart", group.file_stem)
}

/// Render the Dart class for one group.
pub fn render_group(group: &ResolvedGroup, ctx: &RenderContext) -> String {
    let ty = ctx.template.constant_type();
    let mut out = String::new();

    out.push_str(HEADER);
    let _ = writeln!(out, "// Generated by spider from group '{}'.", dart::comment_text(&group.name));
    out.push_str(IGNORE_LINTS);
    out.push('\n');

    if ctx.template == Template::Typed {
        out.push_str("import 'package:flutter/widgets.dart';\n\n");
    }

    let _ = writeln!(out, "class {} {{", group.class_name);
    let _ = writeln!(out, "  {}._();", group.class_name);

    for (i, entry) in group.entries.iter().enumerate() {
        if i == 0 || !ctx.no_comments {
            out.push('\n');
        }
        let path = entry.file.asset_path();
        if !ctx.no_comments {
            let _ = writeln!(out, "  /// {}", dart::comment_text(path));
        }
        let value = match ctx.template {
            Template::Plain => dart::string_literal(path),
            Template::Typed => format!("AssetImage({})", dart::string_literal(path)),
        };
        let _ = writeln!(out, "  static const {} {} = {};", ty, entry.identifier, value);
    }

    if ctx.use_references_list {
        out.push('\n');
        if !ctx.no_comments {
            out.push_str("  /// Every asset in this group, in scan order.\n");
        }
        if group.entries.is_empty() {
            let _ = writeln!(out, "  static const List<{ty}> values = [];");
        } else {
            let _ = writeln!(out, "  static const List<{ty}> values = [");
            for ident in group.identifiers() {
                let _ = writeln!(out, "    {ident},");
            }
            out.push_str("  ];\n");
        }
    }

    out.push_str("}\n");
    out
}

/// Render the barrel file exporting every group file.
pub fn render_barrel(groups: &[ResolvedGroup]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("// Generated by spider.\n\n");
    for group in groups {
        let _ = writeln!(out, "export '{}';", group_file_name(group));
    }
    out
}

/// Render a test that checks every referenced file exists.
pub fn render_test(group: &ResolvedGroup, ctx: &RenderContext) -> String {
    let file_name = group_file_name(group);
    let test_package = match ctx.template {
        Template::Plain => "package:test/test.dart",
        Template::Typed => "package:flutter_test/flutter_test.dart",
    };

    let mut package_imports = vec![test_package.to_string()];
    let mut relative_import = None;
    match (package_import_path(&ctx.output_dir), &ctx.project_package) {
        (Some(lib_rel), Some(pkg)) => {
            package_imports.push(format!("package:{}/{}", pkg, join_rel(&lib_rel, &file_name)));
        }
        _ => relative_import = Some(format!("../{}", join_rel(&ctx.output_dir, &file_name))),
    }
    package_imports.sort();

    let mut out = String::new();
    out.push_str(HEADER);
    let _ = writeln!(out, "// Generated by spider from group '{}'.", dart::comment_text(&group.name));
    out.push_str(IGNORE_LINTS);
    out.push('\n');
    out.push_str("import 'dart:io';\n\n");
    for import in &package_imports {
        let _ = writeln!(out, "import '{import}';");
    }
    if let Some(rel) = relative_import {
        let _ = writeln!(out, "\nimport '{rel}';");
    }
    out.push('\n');
    out.push_str("void main() {\n");
    let _ = writeln!(
        out,
        "  test({}, () {{",
        dart::string_literal(&format!("{} assets exist", group.name))
    );
    let accessor = match ctx.template {
        Template::Plain => "",
        Template::Typed => ".assetName",
    };
    for ident in group.identifiers() {
        let _ = writeln!(
            out,
            "    expect(File({}.{}{}).existsSync(), isTrue);",
            group.class_name, ident, accessor
        );
    }
    out.push_str("  });\n");
    out.push_str("}\n");
    out
}

/// Path below `lib/` when `output_dir` lives inside it.
fn package_import_path(output_dir: &str) -> Option<String> {
    if output_dir == "lib" {
        return Some(String::new());
    }
    output_dir.strip_prefix("lib/").map(str::to_string)
}

/// Join two `/`-separated relative paths, treating `""` and `"."` as empty.
fn join_rel(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
