//! Reads a DOCX package back into flattened visible text.
//!
//! Only what the writer emits is understood: paragraphs, tables, page breaks,
//! PAGE/NUMPAGES fields and the default header/footer.

use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};

use crate::error::Error;
use crate::model::FieldCode;

use super::{REL_NS, WML_NS};

#[derive(Clone, Debug, PartialEq)]
pub struct TextTable {
    /// Widths declared in `w:tblGrid`, in twips.
    pub grid: Vec<u32>,
    pub header_rows: usize,
    /// Cell text per row; multiple paragraphs in a cell are joined with a space.
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TextBlock {
    Paragraph(String),
    Table(TextTable),
    PageBreak,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextDump {
    pub header: Vec<String>,
    pub body: Vec<TextBlock>,
    pub footer: Vec<String>,
    /// Field instructions found anywhere in the header/footer, trimmed.
    pub header_footer_fields: Vec<String>,
}

impl TextDump {
    pub fn tables(&self) -> impl Iterator<Item = &TextTable> {
        self.body.iter().filter_map(|b| match b {
            TextBlock::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Same layout as `Document::visible_text`, so the two can be compared directly.
    pub fn to_plain_text(&self) -> String {
        let mut lines: Vec<String> = self.header.clone();
        for block in &self.body {
            match block {
                TextBlock::Paragraph(p) => lines.push(p.clone()),
                TextBlock::Table(t) => lines.extend(t.rows.iter().map(|r| r.join("\t"))),
                TextBlock::PageBreak => lines.push("\u{c}".to_string()),
            }
        }
        lines.extend(self.footer.iter().cloned());
        lines.join("\n")
    }
}

fn wml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

fn wml_children<'a>(
    node: roxmltree::Node<'a, 'a>,
    name: &'a str,
) -> impl Iterator<Item = roxmltree::Node<'a, 'a>> {
    node.children()
        .filter(move |n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

fn read_zip_text<R: Read + Seek>(zip: &mut zip::ZipArchive<R>, name: &str) -> Option<String> {
    let mut content = String::new();
    zip.by_name(name).ok()?.read_to_string(&mut content).ok()?;
    Some(content)
}

fn parse_rels_xml(xml_content: &str) -> HashMap<String, String> {
    let mut rels = HashMap::new();
    let Ok(xml) = roxmltree::Document::parse(xml_content) else {
        return rels;
    };
    for node in xml.root_element().children() {
        if node.tag_name().name() == "Relationship"
            && let (Some(id), Some(target)) = (node.attribute("Id"), node.attribute("Target"))
        {
            rels.insert(id.to_string(), target.to_string());
        }
    }
    rels
}

struct ParagraphText {
    text: String,
    /// No `w:pPr` and no runs: the bare `<w:p/>` closing a body that ends on a table.
    is_bare: bool,
    has_page_break: bool,
    fields: Vec<String>,
}

/// Walk the runs in document order, tracking complex fields the way Word
/// does: text between `separate` and `end` is the cached result and is skipped.
fn paragraph_text(para: roxmltree::Node) -> ParagraphText {
    let mut text = String::new();
    let mut has_page_break = false;
    let mut fields = Vec::new();
    let mut in_field = false;
    let mut field_instr = String::new();

    for run in wml_children(para, "r") {
        for child in run.children() {
            if child.tag_name().namespace() != Some(WML_NS) {
                continue;
            }
            match child.tag_name().name() {
                "fldChar" => match child.attribute((WML_NS, "fldCharType")) {
                    Some("begin") => {
                        in_field = true;
                        field_instr.clear();
                    }
                    Some("end") if in_field => {
                        let trimmed = field_instr.trim();
                        let code = if trimmed.eq_ignore_ascii_case("PAGE") {
                            Some(FieldCode::Page)
                        } else if trimmed.eq_ignore_ascii_case("NUMPAGES") {
                            Some(FieldCode::NumPages)
                        } else {
                            None
                        };
                        if let Some(code) = code {
                            text.push_str(code.placeholder());
                        }
                        fields.push(trimmed.to_string());
                        in_field = false;
                    }
                    _ => {}
                },
                "instrText" if in_field => {
                    if let Some(t) = child.text() {
                        field_instr.push_str(t);
                    }
                }
                "t" if !in_field => {
                    if let Some(t) = child.text() {
                        text.push_str(t);
                    }
                }
                "tab" if !in_field => text.push('\t'),
                "br" => {
                    if child.attribute((WML_NS, "type")) == Some("page") {
                        has_page_break = true;
                    } else {
                        text.push('\n');
                    }
                }
                _ => {}
            }
        }
    }

    ParagraphText {
        text,
        is_bare: para.children().all(|n| !n.is_element()),
        has_page_break,
        fields,
    }
}

fn parse_table(tbl: roxmltree::Node) -> TextTable {
    let grid = wml(tbl, "tblGrid")
        .into_iter()
        .flat_map(|g| wml_children(g, "gridCol"))
        .filter_map(|c| c.attribute((WML_NS, "w")).and_then(|v| v.parse().ok()))
        .collect();

    let mut header_rows = 0;
    let mut rows = Vec::new();
    for tr in wml_children(tbl, "tr") {
        if wml(tr, "trPr").and_then(|pr| wml(pr, "tblHeader")).is_some() {
            header_rows += 1;
        }
        let cells: Vec<String> = wml_children(tr, "tc")
            .map(|tc| {
                wml_children(tc, "p")
                    .map(|p| paragraph_text(p).text)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        rows.push(cells);
    }

    TextTable {
        grid,
        header_rows,
        rows,
    }
}

struct HeaderFooterText {
    lines: Vec<String>,
    fields: Vec<String>,
}

fn parse_header_footer<R: Read + Seek>(
    zip: &mut zip::ZipArchive<R>,
    rels: &HashMap<String, String>,
    rid: Option<&str>,
) -> Result<HeaderFooterText, Error> {
    let mut out = HeaderFooterText {
        lines: Vec::new(),
        fields: Vec::new(),
    };
    let Some(target) = rid.and_then(|rid| rels.get(rid)) else {
        return Ok(out);
    };
    let zip_path = target
        .strip_prefix('/')
        .map(String::from)
        .unwrap_or_else(|| format!("word/{target}"));
    let xml_content = read_zip_text(zip, &zip_path)
        .ok_or_else(|| Error::InvalidDocx(format!("missing {zip_path}")))?;
    let xml = roxmltree::Document::parse(&xml_content)?;
    for p in wml_children(xml.root_element(), "p") {
        let parsed = paragraph_text(p);
        out.lines.push(parsed.text);
        out.fields.extend(parsed.fields);
    }
    Ok(out)
}

fn default_reference<'a>(sect_pr: Option<roxmltree::Node<'a, 'a>>, name: &'a str) -> Option<&'a str> {
    sect_pr?
        .children()
        .filter(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
        .find(|n| n.attribute((WML_NS, "type")).unwrap_or("default") == "default")
        .and_then(|n| n.attribute((REL_NS, "id")))
}

pub fn extract_text(bytes: &[u8]) -> Result<TextDump, Error> {
    let mut zip = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|_| Error::InvalidDocx("data is not a ZIP archive".into()))?;

    let xml_content = read_zip_text(&mut zip, "word/document.xml")
        .ok_or_else(|| Error::InvalidDocx("missing word/document.xml".into()))?;
    let rels = read_zip_text(&mut zip, "word/_rels/document.xml.rels")
        .map(|x| parse_rels_xml(&x))
        .unwrap_or_default();

    let xml = roxmltree::Document::parse(&xml_content)?;
    let body = wml(xml.root_element(), "body")
        .ok_or_else(|| Error::InvalidDocx("missing w:body".into()))?;

    let mut dump = TextDump::default();
    let mut trailing_bare = false;
    for node in body.children() {
        if node.tag_name().namespace() != Some(WML_NS) {
            continue;
        }
        match node.tag_name().name() {
            "p" => {
                let parsed = paragraph_text(node);
                trailing_bare = parsed.is_bare;
                if parsed.has_page_break && parsed.text.is_empty() {
                    dump.body.push(TextBlock::PageBreak);
                } else {
                    dump.body.push(TextBlock::Paragraph(parsed.text));
                }
            }
            "tbl" => {
                trailing_bare = false;
                dump.body.push(TextBlock::Table(parse_table(node)));
            }
            _ => {}
        }
    }

    if trailing_bare
        && matches!(dump.body.iter().rev().nth(1), Some(TextBlock::Table(_)))
    {
        dump.body.pop();
    }

    let sect_pr = wml(body, "sectPr");
    let header = parse_header_footer(&mut zip, &rels, default_reference(sect_pr, "headerReference"))?;
    let footer = parse_header_footer(&mut zip, &rels, default_reference(sect_pr, "footerReference"))?;
    dump.header = header.lines;
    dump.footer = footer.lines;
    dump.header_footer_fields = header.fields.into_iter().chain(footer.fields).collect();

    Ok(dump)
}
