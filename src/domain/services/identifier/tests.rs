use super::*;
use crate::domain::entities::AssetFile;
use std::path::PathBuf;

fn idents(names: &[(&str, &str)], options: &ResolveOptions) -> Vec<String> {
    resolve_names(names, options)
        .unwrap()
        .into_iter()
        .map(|r| r.identifier)
        .collect()
}

fn camel() -> ResolveOptions {
    ResolveOptions::new(NamingConvention::Camel)
}

#[test]
fn split_words_on_separators() {
    assert_eq!(split_words("logo-dark_mode icon"), vec!["logo", "dark", "mode", "icon"]);
    assert_eq!(split_words("--a--"), vec!["a"]);
    assert!(split_words("---").is_empty());
}

#[test]
fn split_words_on_case_boundaries() {
    assert_eq!(split_words("logoDark"), vec!["logo", "Dark"]);
    assert_eq!(split_words("HTMLParser"), vec!["HTML", "Parser"]);
    assert_eq!(split_words("icon2X"), vec!["icon2", "X"]);
    assert_eq!(split_words("icon2x"), vec!["icon2x"]);
}

#[test]
fn split_words_drops_non_ascii() {
    assert_eq!(split_words("café au lait"), vec!["caf", "au", "lait"]);
    assert!(split_words("日本").is_empty());
}

#[test]
fn conventions_are_applied_uniformly() {
    let names = [("app-logo_dark", "png")];
    assert_eq!(idents(&names, &camel()), vec!["appLogoDark"]);
    assert_eq!(
        idents(&names, &ResolveOptions::new(NamingConvention::Snake)),
        vec!["app_logo_dark"]
    );
    assert_eq!(
        idents(&names, &ResolveOptions::new(NamingConvention::Pascal)),
        vec!["AppLogoDark"]
    );
}

#[test]
fn leading_digit_gets_word_prefix() {
    let names = [("2x", "png"), ("3d model", "obj")];
    assert_eq!(idents(&names, &camel()), vec!["asset2x", "asset3dModel"]);

    let snake = ResolveOptions::new(NamingConvention::Snake).with_digit_prefix("img");
    assert_eq!(idents(&names, &snake), vec!["img_2x", "img_3d_model"]);
}

#[test]
fn reserved_words_get_suffix() {
    let names = [("class", "png"), ("new", "svg"), ("classic", "png")];
    assert_eq!(idents(&names, &camel()), vec!["class_", "new_", "classic"]);

    let custom = camel().with_keyword_suffix("Asset");
    assert_eq!(idents(&[("switch", "png")], &custom), vec!["switchAsset"]);
}

#[test]
fn object_members_get_suffix() {
    let names = [
        ("hashCode", "png"),
        ("to_string", "png"),
        ("runtime-type", "svg"),
        ("noSuchMethod", "png"),
    ];
    assert_eq!(
        idents(&names, &camel()),
        vec!["hashCode_", "toString_", "runtimeType_", "noSuchMethod_"]
    );

    let snake = ResolveOptions::new(NamingConvention::Snake);
    assert_eq!(idents(&[("toString", "png")], &snake), vec!["to_string"]);
}

#[test]
fn extra_reserved_names_are_respected() {
    let options = ResolveOptions::new(NamingConvention::Pascal).with_reserved("Images");
    assert_eq!(idents(&[("images", "png")], &options), vec!["Images_"]);
}

#[test]
fn extension_qualifies_collisions() {
    let names = [("logo", "png"), ("logo", "svg"), ("banner", "png")];
    assert_eq!(idents(&names, &camel()), vec!["logoPng", "logoSvg", "banner"]);
}

#[test]
fn case_folding_collisions_are_detected() {
    let names = [("Logo", "png"), ("logo", "svg")];
    assert_eq!(idents(&names, &camel()), vec!["logoPng", "logoSvg"]);
}

#[test]
fn numeric_suffix_after_extension_in_scan_order() {
    // Same stem and extension in two subdirectories.
    let names = [("home", "png"), ("home", "png"), ("home", "png")];
    let resolved = resolve_names(&names, &camel()).unwrap();
    let ids: Vec<_> = resolved.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(ids, vec!["homePng", "homePng_2", "homePng_3"]);
    let seqs: Vec<_> = resolved.iter().map(|r| r.sequence).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
}

#[test]
fn numeric_suffix_skips_names_taken_by_other_files() {
    let snake = ResolveOptions::new(NamingConvention::Snake);
    let names = [("a", "png"), ("a", "png"), ("a_png_2", "txt")];
    assert_eq!(idents(&names, &snake), vec!["a_png", "a_png_3", "a_png_2"]);
}

#[test]
fn qualified_name_colliding_with_existing_base_gets_suffix() {
    let names = [("logo", "png"), ("logo", "svg"), ("logo-png", "txt")];
    assert_eq!(idents(&names, &camel()), vec!["logoPng", "logoSvg", "logoPng_2"]);
}

#[test]
fn extensionless_collisions_fall_back_to_numbers() {
    let names = [("LICENSE", ""), ("license", "")];
    assert_eq!(idents(&names, &camel()), vec!["license", "license_2"]);
}

#[test]
fn empty_stem_uses_extension() {
    let names = [("---", "png")];
    assert_eq!(idents(&names, &camel()), vec!["png"]);
}

#[test]
fn nothing_usable_is_unresolvable() {
    let names = [("logo", "png"), ("---", "")];
    assert_eq!(
        resolve_names(&names, &camel()),
        Err(Unresolvable { index: 1 })
    );
}

#[test]
fn resolution_is_deterministic() {
    let names = [
        ("logo", "png"),
        ("logo", "svg"),
        ("Logo", "png"),
        ("2x", "png"),
        ("class", "png"),
    ];
    let first = resolve_names(&names, &camel()).unwrap();
    let second = resolve_names(&names, &camel()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn resolve_maps_group_files() {
    let group = AssetGroup::new("images", "assets/images").with_files(vec![
        AssetFile::new("/p/assets/images/logo.png", "logo.png", "assets/images/logo.png"),
        AssetFile::new("/p/assets/images/logo.svg", "logo.svg", "assets/images/logo.svg"),
    ]);

    let resolved = resolve(&group, &camel()).unwrap();
    assert_eq!(resolved[0].identifier, "logoPng");
    assert_eq!(resolved[0].file.asset_path(), "assets/images/logo.png");
    assert_eq!(resolved[1].identifier, "logoSvg");
}

#[test]
fn resolve_reports_offending_path() {
    let group = AssetGroup::new("misc", "assets").with_files(vec![AssetFile::new(
        "/p/assets/---",
        "---",
        "assets/---",
    )]);

    let err = resolve(&group, &camel()).unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnresolvableIdentifier {
            path: PathBuf::from("/p/assets/---")
        }
    );
}

#[test]
fn class_and_file_names_from_group_name() {
    assert_eq!(class_name_for("images", "", "", "asset").as_deref(), Some("Images"));
    assert_eq!(
        class_name_for("app-icons", "", "Assets", "asset").as_deref(),
        Some("AppIconsAssets")
    );
    assert_eq!(class_name_for("3d", "", "", "asset").as_deref(), Some("Asset3d"));
    assert_eq!(class_name_for("---", "", "", "asset"), None);

    assert_eq!(file_stem_for("App Icons").as_deref(), Some("app_icons"));
    assert_eq!(file_stem_for("---"), None);
}
