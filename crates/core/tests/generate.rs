//! End-to-end rendering and generation over small catalogs.

use std::fs::{create_dir_all, read_to_string, write};

use fontlist_core::{
    AssetSet, Catalog, FontRecord, GenerateConfig, config::SECTIONS, generate, render_catalog,
};
use tempfile::tempdir;

const TS: &str = "18 Oct 26 09:30 +0000";

fn font(index: i64, name: &str, base: &str, origin: &str) -> FontRecord {
    FontRecord {
        index,
        web_safe_name: name.to_string(),
        has_plus: false,
        base_name: base.to_string(),
        has_aspect: false,
        sq_aspect: String::new(),
        ac_aspect: String::new(),
        orig_w: 8,
        orig_h: 16,
        pixel_size: 16,
        ttf_sz_px: 16,
        ttf_sz_pt: 12,
        origin_text: origin.to_string(),
        usage_text: String::new(),
    }
}

fn two_fonts() -> Catalog {
    Catalog::new(vec![
        font(0, "Web_A", "Alpha Font", "Origin One"),
        font(1, "Web_B", "Beta Font", "Origin One"),
    ])
    .unwrap()
}

fn all_assets(catalog: &Catalog) -> AssetSet {
    catalog.records().iter().map(FontRecord::family).collect()
}

#[test]
fn shared_origin_gets_one_sub_header() {
    let catalog = two_fonts();
    let out = render_catalog(&catalog, SECTIONS, &all_assets(&catalog), TS).unwrap();

    assert_eq!(out.html.matches("Origin One").count(), 1);
    assert_eq!(out.html.matches(r#"type="radio""#).count(), 2);
    assert_eq!(out.css.matches("@font-face").count(), 2);
    assert_eq!(out.report.html_controls, 2);
    assert_eq!(out.report.css_rules, 2);

    let header = out.html.find("Origin One").unwrap();
    let first_control = out.html.find(r#"value="Web_A""#).unwrap();
    assert!(header < first_control);
}

#[test]
fn renders_exact_markup() {
    let catalog = Catalog::new(vec![FontRecord {
        has_plus: true,
        usage_text: "8x16 chars w/box drawing[?]".to_string(),
        ..font(0, "ibm-vga", "IBM VGA 8x16", "IBM VGA incl. on-board video")
    }])
    .unwrap();
    let out = render_catalog(&catalog, SECTIONS, &all_assets(&catalog), TS).unwrap();

    let expected_html = r#"<!-- automatic generation begin (18 Oct 26 09:30 +0000) -->
<div>
<hr><div class="box mt-4"><h1 class="title is-size-3 has-text-dark mb-2">IBM PC &amp; family</h1></div>
<p class="is-size-7">Fonts support the original IBM PC, 256 character encoding (codepage 437); <u>marked</u> fonts expands support to some 780 characters</p>
<h2 class="title has-text-dark is-size-6 mt-4">IBM VGA includes <span class="has-text-weight-normal">on-board video</span></h2>
<h3 class="subtitle has-text-dark is-size-7 mb-2">8x16 characters with box drawing</h3>
<a href="https://int10h.org/oldschool-pc-fonts/fontlist/font?ibm-vga" target="_blank">
  <svg role="img" class="material-icons has-text-dark"><use xlink:href="../assets/svg/material-icons.svg#info"></use></svg>
</a>
<label for="web_ibm_vga_8x16">
  <input type="radio" name="font" id="web_ibm_vga_8x16" value="ibm-vga"> <u>IBM VGA 8x16</u>
</label>
</div>
<!-- automatic generation end (18 Oct 26 09:30 +0000) -->
"#;
    assert_eq!(out.html, expected_html);

    let expected_css = r#"@font-face {
  font-family: "ibm-vga";
  src: url("../fonts/Web_IBM_VGA_8x16.woff") format("woff");
  font-display: swap;
}
.font-ibm-vga {
  font-family: ibm-vga;
  font-size: 16px;
  line-height: 16px;
}
"#;
    assert_eq!(out.css, expected_css);
}

#[test]
fn variants_are_invisible() {
    let catalog = Catalog::new(vec![
        font(0, "ibm-vga", "IBM VGA", "IBM VGA"),
        font(1, "ibm-vga-2y", "IBM VGA-2y", "IBM VGA"),
        font(2, "ibm-vga-2x", "IBM VGA-2x", "IBM VGA"),
    ])
    .unwrap();
    let out = render_catalog(&catalog, SECTIONS, &all_assets(&catalog), TS).unwrap();

    for name in ["ibm-vga-2y", "ibm-vga-2x", "IBM VGA-2"] {
        assert!(!out.html.contains(name), "{name} in HTML");
        assert!(!out.css.contains(name), "{name} in CSS");
    }
    assert_eq!(out.report.records, 3);
    assert_eq!(out.report.variants, 2);
    assert_eq!(out.report.html_controls, 1);
    assert_eq!(out.report.css_rules, 1);
}

#[test]
fn missing_asset_skips_control_but_keeps_css() {
    let catalog = two_fonts();
    let assets: AssetSet = ["Web_Alpha_Font"].into_iter().collect();
    let out = render_catalog(&catalog, SECTIONS, &assets, TS).unwrap();

    assert!(out.html.contains(r#"value="Web_A""#));
    assert!(!out.html.contains(r#"value="Web_B""#));
    assert!(!out.html.contains("Beta Font"));
    assert_eq!(out.report.html_controls, 1);
    assert_eq!(out.report.missing_assets, ["Web_B"]);
    assert!(!out.report.is_complete());

    assert!(out.css.contains(".font-Web_B {"));
    assert!(out.css.contains("../fonts/Web_Beta_Font.woff"));
    assert_eq!(out.report.css_rules, 2);
}

#[test]
fn missing_asset_still_opens_sub_header() {
    let catalog = Catalog::new(vec![
        font(0, "Web_A", "Alpha Font", "Origin One"),
        font(1, "Web_B", "Beta Font", "Origin Two"),
    ])
    .unwrap();
    let out = render_catalog(&catalog, SECTIONS, &AssetSet::default(), TS).unwrap();

    assert!(out.html.contains(">Origin One</h2>"));
    assert!(out.html.contains(">Origin Two</h2>"));
    assert_eq!(out.report.html_controls, 0);
    assert_eq!(out.report.missing_assets.len(), 2);
}

#[test]
fn sections_open_at_boundaries() {
    let fonts = (0..190)
        .map(|i| font(i, &format!("font-{i}"), &format!("Font {i}"), &format!("Origin {}", i / 10)))
        .collect();
    let catalog = Catalog::new(fonts).unwrap();
    let out = render_catalog(&catalog, SECTIONS, &all_assets(&catalog), TS).unwrap();

    assert_eq!(out.html.matches("<h1 ").count(), SECTIONS.len());
    let positions: Vec<_> = SECTIONS
        .iter()
        .map(|s| {
            let title = s.title.replace('&', "&amp;");
            let heading = out.html.find(&format!(">{title}</h1>")).unwrap();
            let control = out.html.find(&format!(r#"value="font-{}""#, s.index)).unwrap();
            assert!(heading < control, "{title} after its first font");
            heading
        })
        .collect();
    assert!(positions.is_sorted());
    assert_eq!(out.html.matches("<h2 ").count(), 19);
}

#[test]
fn output_is_stable() {
    let catalog = two_fonts();
    let assets = all_assets(&catalog);
    let first = render_catalog(&catalog, SECTIONS, &assets, TS).unwrap();
    let second = render_catalog(&catalog, SECTIONS, &assets, TS).unwrap();
    assert_eq!(first, second);

    let later = render_catalog(&catalog, SECTIONS, &assets, "19 Oct 26 10:00 +0000").unwrap();
    assert_eq!(later.css, first.css);
    assert_eq!(later.html.replace("19 Oct 26 10:00", "18 Oct 26 09:30"), first.html);
}

#[test]
fn generate_writes_both_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let config = GenerateConfig {
        data: root.join("font_info.json"),
        fonts_dir: root.join("fonts"),
        html_out: root.join("out/fonts.html"),
        css_out: root.join("out/fonts.css"),
    };
    write(&config.data, serde_json::to_vec(&two_fonts()).unwrap()).unwrap();
    create_dir_all(&config.fonts_dir).unwrap();
    write(config.fonts_dir.join("Web_Alpha_Font.woff"), b"wOFF").unwrap();

    let report = generate(&config).unwrap();
    assert_eq!(report.html_controls, 1);
    assert_eq!(report.css_rules, 2);
    assert_eq!(report.missing_assets, ["Web_B"]);

    let html = read_to_string(&config.html_out).unwrap();
    assert!(html.starts_with("<!-- automatic generation begin ("));
    assert!(html.ends_with(") -->\n"));
    assert_eq!(html.matches(r#"type="radio""#).count(), 1);
    let css = read_to_string(&config.css_out).unwrap();
    assert_eq!(css.matches("@font-face").count(), 2);
}

#[test]
fn generate_malformed_catalog_writes_nothing() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let mut config = GenerateConfig::from_root(root);
    config.html_out = root.join("fonts.html");
    config.css_out = root.join("fonts.css");
    create_dir_all(config.data.parent().unwrap()).unwrap();
    write(&config.data, r#"{"font_info": [{"index": "zero"}]}"#).unwrap();

    assert!(generate(&config).is_err());
    assert!(!config.html_out.exists());
    assert!(!config.css_out.exists());
}

#[test]
fn generate_missing_catalog_fails() {
    let dir = tempdir().unwrap();
    let config = GenerateConfig::from_root(dir.path());
    let err = generate(&config).unwrap_err();
    assert!(format!("{err:#}").contains("font_info.json"));
}
