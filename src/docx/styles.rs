use crate::model::{NumberingDef, ParagraphStyle, StyleSheet};

use super::{escape_xml, hex_color, wml_root};

/// Style id Word treats as the default paragraph style.
const DEFAULT_PARAGRAPH_STYLE: &str = "Normal";

fn write_style(xml: &mut String, style: &ParagraphStyle) {
    let default_attr = if style.id == DEFAULT_PARAGRAPH_STYLE {
        r#" w:default="1""#
    } else {
        ""
    };
    xml.push_str(&format!(
        r#"<w:style w:type="paragraph"{default_attr} w:styleId="{}">"#,
        escape_xml(&style.id)
    ));
    xml.push_str(&format!(r#"<w:name w:val="{}"/>"#, escape_xml(&style.name)));
    if let Some(based_on) = &style.based_on {
        xml.push_str(&format!(r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on)));
    }
    if let Some(next) = &style.next {
        xml.push_str(&format!(r#"<w:next w:val="{}"/>"#, escape_xml(next)));
    }
    if style.quick_format {
        xml.push_str("<w:qFormat/>");
    }

    let has_ppr = style.space_before.is_some()
        || style.space_after.is_some()
        || style.indent_left.is_some()
        || style.alignment.is_some()
        || style.outline_level.is_some();
    if has_ppr {
        xml.push_str("<w:pPr>");
        if style.space_before.is_some() || style.space_after.is_some() {
            xml.push_str("<w:spacing");
            if let Some(before) = style.space_before {
                xml.push_str(&format!(r#" w:before="{before}""#));
            }
            if let Some(after) = style.space_after {
                xml.push_str(&format!(r#" w:after="{after}""#));
            }
            xml.push_str("/>");
        }
        if let Some(left) = style.indent_left {
            xml.push_str(&format!(r#"<w:ind w:left="{left}"/>"#));
        }
        if let Some(alignment) = style.alignment {
            xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment.as_str()));
        }
        if let Some(level) = style.outline_level {
            xml.push_str(&format!(r#"<w:outlineLvl w:val="{level}"/>"#));
        }
        xml.push_str("</w:pPr>");
    }

    let has_rpr = style.font_name.is_some()
        || style.bold
        || style.color.is_some()
        || style.font_size.is_some();
    if has_rpr {
        xml.push_str("<w:rPr>");
        if let Some(font) = &style.font_name {
            let font = escape_xml(font);
            xml.push_str(&format!(
                r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}" w:eastAsia="{font}"/>"#
            ));
        }
        if style.bold {
            xml.push_str("<w:b/><w:bCs/>");
        }
        if let Some(color) = style.color {
            xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, hex_color(color)));
        }
        if let Some(size) = style.font_size {
            xml.push_str(&format!(
                r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#
            ));
        }
        xml.push_str("</w:rPr>");
    }

    xml.push_str("</w:style>");
}

pub(super) fn styles_xml(styles: &StyleSheet) -> String {
    let mut xml = wml_root("styles");

    let font = escape_xml(&styles.default_font);
    let size = styles.default_size;
    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    xml.push_str(&format!(
        r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}" w:eastAsia="{font}"/>"#
    ));
    xml.push_str(&format!(
        r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#
    ));
    xml.push_str("</w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>");

    for style in &styles.paragraph_styles {
        write_style(&mut xml, style);
    }

    xml.push_str("</w:styles>");
    xml
}

/// All `w:abstractNum` entries must precede the `w:num` entries.
pub(super) fn numbering_xml(defs: &[NumberingDef]) -> String {
    let mut xml = wml_root("numbering");

    for (i, def) in defs.iter().enumerate() {
        xml.push_str(&format!(r#"<w:abstractNum w:abstractNumId="{i}">"#));
        xml.push_str(r#"<w:multiLevelType w:val="hybridMultilevel"/>"#);
        for lvl in &def.levels {
            xml.push_str(&format!(r#"<w:lvl w:ilvl="{}">"#, lvl.level));
            xml.push_str(&format!(r#"<w:start w:val="{}"/>"#, lvl.start));
            xml.push_str(&format!(r#"<w:numFmt w:val="{}"/>"#, lvl.format.as_str()));
            xml.push_str(&format!(r#"<w:lvlText w:val="{}"/>"#, escape_xml(&lvl.text)));
            xml.push_str(&format!(r#"<w:lvlJc w:val="{}"/>"#, lvl.alignment.as_str()));
            xml.push_str(&format!(
                r#"<w:pPr><w:ind w:left="{}" w:hanging="{}"/></w:pPr>"#,
                lvl.indent_left, lvl.indent_hanging
            ));
            xml.push_str("</w:lvl>");
        }
        xml.push_str("</w:abstractNum>");
    }

    for i in 0..defs.len() {
        xml.push_str(&format!(
            r#"<w:num w:numId="{}"><w:abstractNumId w:val="{i}"/></w:num>"#,
            i + 1
        ));
    }

    xml.push_str("</w:numbering>");
    xml
}

pub(super) fn settings_xml() -> String {
    let mut xml = wml_root("settings");
    xml.push_str(r#"<w:defaultTabStop w:val="708"/>"#);
    xml.push_str(r#"<w:characterSpacingControl w:val="doNotCompress"/>"#);
    xml.push_str(concat!(
        "<w:compat>",
        r#"<w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/>"#,
        "</w:compat>"
    ));
    xml.push_str("</w:settings>");
    xml
}
