use crate::model::{
    Block, CellBorder, CellBorders, HeaderFooter, Paragraph, Run, RunContent, Section, Table,
    TableCell,
};

use super::{NumIds, escape_xml, hex_color, wml_root};

fn write_run_properties(xml: &mut String, run: &Run) {
    if !run.bold && run.color.is_none() && run.font_size.is_none() {
        return;
    }
    xml.push_str("<w:rPr>");
    if run.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    if let Some(color) = run.color {
        xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, hex_color(color)));
    }
    if let Some(size) = run.font_size {
        xml.push_str(&format!(
            r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#
        ));
    }
    xml.push_str("</w:rPr>");
}

fn write_run(xml: &mut String, run: &Run) {
    let mut rpr = String::new();
    write_run_properties(&mut rpr, run);

    match &run.content {
        RunContent::Text(text) => {
            xml.push_str("<w:r>");
            xml.push_str(&rpr);
            xml.push_str(&format!(
                r#"<w:t xml:space="preserve">{}</w:t>"#,
                escape_xml(text)
            ));
            xml.push_str("</w:r>");
        }
        RunContent::Field(code) => {
            // Complex field with no cached result.
            let pieces = [
                r#"<w:fldChar w:fldCharType="begin"/>"#.to_string(),
                format!(
                    r#"<w:instrText xml:space="preserve"> {} </w:instrText>"#,
                    code.instruction()
                ),
                r#"<w:fldChar w:fldCharType="separate"/>"#.to_string(),
                r#"<w:fldChar w:fldCharType="end"/>"#.to_string(),
            ];
            for piece in pieces {
                xml.push_str("<w:r>");
                xml.push_str(&rpr);
                xml.push_str(&piece);
                xml.push_str("</w:r>");
            }
        }
    }
}

pub(super) fn write_paragraph(xml: &mut String, para: &Paragraph, num_ids: &NumIds) {
    xml.push_str("<w:p>");

    let num_id = para
        .list
        .as_ref()
        .and_then(|l| num_ids.get(&l.reference).map(|id| (id, l.level)));
    if para.style.is_some() || para.alignment.is_some() || num_id.is_some() {
        xml.push_str("<w:pPr>");
        if let Some(style) = &para.style {
            xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, escape_xml(style)));
        }
        if let Some((id, level)) = num_id {
            xml.push_str(&format!(
                r#"<w:numPr><w:ilvl w:val="{level}"/><w:numId w:val="{id}"/></w:numPr>"#
            ));
        }
        if let Some(alignment) = para.alignment {
            xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment.as_str()));
        }
        xml.push_str("</w:pPr>");
    }

    for run in &para.runs {
        write_run(xml, run);
    }

    xml.push_str("</w:p>");
}

fn write_page_break(xml: &mut String) {
    xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
}

fn write_border(xml: &mut String, side: &str, border: &CellBorder) {
    xml.push_str(&format!(
        r#"<w:{side} w:val="{}" w:sz="{}" w:space="0" w:color="{}"/>"#,
        border.style.as_str(),
        border.size,
        hex_color(border.color)
    ));
}

fn write_cell_borders(xml: &mut String, borders: &CellBorders) {
    if borders.is_empty() {
        return;
    }
    xml.push_str("<w:tcBorders>");
    let sides = [
        ("top", &borders.top),
        ("left", &borders.left),
        ("bottom", &borders.bottom),
        ("right", &borders.right),
    ];
    for (side, border) in sides {
        if let Some(b) = border {
            write_border(xml, side, b);
        }
    }
    xml.push_str("</w:tcBorders>");
}

fn write_cell(xml: &mut String, cell: &TableCell, num_ids: &NumIds) {
    xml.push_str("<w:tc><w:tcPr>");
    xml.push_str(&format!(r#"<w:tcW w:w="{}" w:type="dxa"/>"#, cell.width));
    write_cell_borders(xml, &cell.borders);
    if let Some(fill) = cell.shading {
        xml.push_str(&format!(
            r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
            hex_color(fill)
        ));
    }
    if let Some(v_align) = cell.v_align {
        xml.push_str(&format!(r#"<w:vAlign w:val="{}"/>"#, v_align.as_str()));
    }
    xml.push_str("</w:tcPr>");

    // A cell must end with a paragraph.
    if cell.paragraphs.is_empty() {
        xml.push_str("<w:p/>");
    }
    for para in &cell.paragraphs {
        write_paragraph(xml, para, num_ids);
    }
    xml.push_str("</w:tc>");
}

pub(super) fn write_table(xml: &mut String, table: &Table, num_ids: &NumIds) {
    let total: u32 = table.col_widths.iter().sum();
    let mar = &table.cell_margins;

    xml.push_str("<w:tbl><w:tblPr>");
    xml.push_str(&format!(r#"<w:tblW w:w="{total}" w:type="dxa"/>"#));
    xml.push_str(r#"<w:tblLayout w:type="fixed"/>"#);
    xml.push_str(&format!(
        concat!(
            "<w:tblCellMar>",
            r#"<w:top w:w="{}" w:type="dxa"/>"#,
            r#"<w:left w:w="{}" w:type="dxa"/>"#,
            r#"<w:bottom w:w="{}" w:type="dxa"/>"#,
            r#"<w:right w:w="{}" w:type="dxa"/>"#,
            "</w:tblCellMar>"
        ),
        mar.top, mar.left, mar.bottom, mar.right
    ));
    xml.push_str("</w:tblPr>");

    xml.push_str("<w:tblGrid>");
    for w in &table.col_widths {
        xml.push_str(&format!(r#"<w:gridCol w:w="{w}"/>"#));
    }
    xml.push_str("</w:tblGrid>");

    for row in &table.rows {
        xml.push_str("<w:tr>");
        if row.is_header {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }
        for cell in &row.cells {
            write_cell(xml, cell, num_ids);
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
}

pub(super) fn document_xml(
    section: &Section,
    num_ids: &NumIds,
    header_rid: Option<&str>,
    footer_rid: Option<&str>,
) -> String {
    let mut xml = String::with_capacity(64 * 1024);
    xml.push_str(&wml_root("document"));
    xml.push_str("<w:body>");

    for block in &section.blocks {
        match block {
            Block::Paragraph(p) => write_paragraph(&mut xml, p, num_ids),
            Block::Table(t) => write_table(&mut xml, t, num_ids),
            Block::PageBreak => write_page_break(&mut xml),
        }
    }

    // The body must not end on a table.
    if matches!(section.blocks.last(), Some(Block::Table(_))) {
        xml.push_str("<w:p/>");
    }

    let props = &section.properties;
    xml.push_str("<w:sectPr>");
    if let Some(rid) = header_rid {
        xml.push_str(&format!(
            r#"<w:headerReference w:type="default" r:id="{rid}"/>"#
        ));
    }
    if let Some(rid) = footer_rid {
        xml.push_str(&format!(
            r#"<w:footerReference w:type="default" r:id="{rid}"/>"#
        ));
    }
    xml.push_str(&format!(
        r#"<w:pgSz w:w="{}" w:h="{}" w:orient="portrait"/>"#,
        props.page_width, props.page_height
    ));
    xml.push_str(&format!(
        r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
        props.margin_top,
        props.margin_right,
        props.margin_bottom,
        props.margin_left,
        props.header_margin,
        props.footer_margin
    ));
    xml.push_str(r#"<w:cols w:space="708"/><w:docGrid w:linePitch="360"/>"#);
    xml.push_str("</w:sectPr>");

    xml.push_str("</w:body></w:document>");
    xml
}

/// `tag` is `hdr` or `ftr`.
pub(super) fn header_footer_xml(tag: &str, hf: &HeaderFooter, num_ids: &NumIds) -> String {
    let mut xml = wml_root(tag);
    for para in &hf.paragraphs {
        write_paragraph(&mut xml, para, num_ids);
    }
    if hf.paragraphs.is_empty() {
        xml.push_str("<w:p/>");
    }
    xml.push_str(&format!("</w:{tag}>"));
    xml
}
