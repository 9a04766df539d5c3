mod common;

use zimbeat_whitepaper::whitepaper::HEADER_TEXT;

#[test]
fn generation_is_byte_identical() {
    let first = common::generated();
    let second = common::generated();
    assert!(first == second, "two generations produced different bytes");
}

#[test]
fn parts_in_fixed_order() {
    let bytes = common::generated();
    assert_eq!(
        common::part_names(&bytes),
        [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/styles.xml",
            "word/numbering.xml",
            "word/settings.xml",
            "word/header1.xml",
            "word/footer1.xml",
            "word/_rels/document.xml.rels",
            "docProps/core.xml",
            "docProps/app.xml",
        ]
    );
}

#[test]
fn content_types_cover_every_part() {
    let bytes = common::generated();
    let xml = common::read_part(&bytes, "[Content_Types].xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let overrides: Vec<&str> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "Override")
        .filter_map(|n| n.attribute("PartName"))
        .collect();

    for name in common::part_names(&bytes) {
        if name.ends_with(".rels") || name == "[Content_Types].xml" {
            continue;
        }
        assert!(
            overrides.contains(&format!("/{name}").as_str()),
            "no content type override for {name}"
        );
    }
}

#[test]
fn document_relationships_resolve() {
    let bytes = common::generated();
    let names = common::part_names(&bytes);
    let xml = common::read_part(&bytes, "word/_rels/document.xml.rels");
    let rels = roxmltree::Document::parse(&xml).unwrap();
    for rel in rels
        .descendants()
        .filter(|n| n.tag_name().name() == "Relationship")
    {
        let target = rel.attribute("Target").unwrap();
        assert!(
            names.contains(&format!("word/{target}")),
            "relationship target {target} is not in the package"
        );
    }
}

#[test]
fn styles_follow_heading_scale() {
    let bytes = common::generated();
    let xml = common::read_part(&bytes, "word/styles.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let style_size = |id: &str| -> Option<u32> {
        let style = common::wml_descendants(&doc, "style")
            .find(|s| common::wml_val(*s, "styleId") == Some(id))?;
        let sz = style.descendants().find(|n| common::is_wml(n, "sz"))?;
        common::wml_val(sz, "val")?.parse().ok()
    };
    let sizes: Vec<u32> = ["Title", "Heading1", "Heading2", "Heading3"]
        .iter()
        .map(|id| style_size(id).unwrap_or_else(|| panic!("no size for {id}")))
        .collect();
    assert_eq!(sizes, [56, 32, 28, 26]);
    assert!(sizes.windows(2).all(|w| w[0] > w[1]));

    let defaults = common::wml_descendants(&doc, "rPrDefault").next().unwrap();
    let fonts = defaults
        .descendants()
        .find(|n| common::is_wml(n, "rFonts"))
        .unwrap();
    assert_eq!(common::wml_val(fonts, "ascii"), Some("Arial"));
    let sz = defaults
        .descendants()
        .find(|n| common::is_wml(n, "sz"))
        .unwrap();
    assert_eq!(common::wml_val(sz, "val"), Some("24"));
}

#[test]
fn numbering_defines_bullet_and_decimal() {
    let bytes = common::generated();
    let xml = common::read_part(&bytes, "word/numbering.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let formats: Vec<&str> = common::wml_descendants(&doc, "numFmt")
        .filter_map(|n| common::wml_val(n, "val"))
        .collect();
    assert_eq!(formats, ["bullet", "decimal"]);

    let texts: Vec<&str> = common::wml_descendants(&doc, "lvlText")
        .filter_map(|n| common::wml_val(n, "val"))
        .collect();
    assert_eq!(texts, ["•", "%1."]);

    for ind in common::wml_descendants(&doc, "ind") {
        assert_eq!(common::wml_val(ind, "left"), Some("720"));
        assert_eq!(common::wml_val(ind, "hanging"), Some("360"));
    }
    assert_eq!(common::wml_descendants(&doc, "num").count(), 2);
}

#[test]
fn section_is_a4_with_inch_margins() {
    let bytes = common::generated();
    let xml = common::read_part(&bytes, "word/document.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();

    assert_eq!(common::wml_descendants(&doc, "sectPr").count(), 1);
    let pg_sz = common::wml_descendants(&doc, "pgSz").next().unwrap();
    assert_eq!(common::wml_val(pg_sz, "w"), Some("11906"));
    assert_eq!(common::wml_val(pg_sz, "h"), Some("16838"));
    let pg_mar = common::wml_descendants(&doc, "pgMar").next().unwrap();
    for side in ["top", "right", "bottom", "left"] {
        assert_eq!(common::wml_val(pg_mar, side), Some("1440"), "{side} margin");
    }
}

#[test]
fn header_is_constant_title() {
    let bytes = common::generated();
    let xml = common::read_part(&bytes, "word/header1.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    assert_eq!(common::part_text(&doc), HEADER_TEXT);
    assert_eq!(common::wml_descendants(&doc, "fldChar").count(), 0);
    let jc = common::wml_descendants(&doc, "jc").next().unwrap();
    assert_eq!(common::wml_val(jc, "val"), Some("right"));
}

#[test]
fn footer_uses_live_page_fields() {
    let bytes = common::generated();
    let xml = common::read_part(&bytes, "word/footer1.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let instructions: Vec<&str> = common::wml_descendants(&doc, "instrText")
        .filter_map(|n| n.text())
        .map(str::trim)
        .collect();
    assert_eq!(instructions, ["PAGE", "NUMPAGES"]);

    let literal = common::part_text(&doc);
    assert_eq!(literal, "Page  of ");
    assert!(!literal.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn core_properties_are_fixed() {
    let bytes = common::generated();
    let xml = common::read_part(&bytes, "docProps/core.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let created = doc
        .descendants()
        .find(|n| n.tag_name().name() == "created")
        .and_then(|n| n.text());
    assert_eq!(created, Some("2025-01-01T00:00:00Z"));
    let title = doc
        .descendants()
        .find(|n| n.tag_name().name() == "title")
        .and_then(|n| n.text());
    assert_eq!(title, Some(HEADER_TEXT));
}
