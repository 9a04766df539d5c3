mod common;

use std::io::{Cursor, Write};

use zimbeat_whitepaper::docx::read::{TextBlock, extract_text};
use zimbeat_whitepaper::model::{Block, Paragraph};
use zimbeat_whitepaper::{Error, docx};
use zimbeat_whitepaper::whitepaper::{HEADER_TEXT, whitepaper};

#[test]
fn extraction_matches_model_text() {
    let bytes = common::generated();
    let dump = extract_text(&bytes).expect("extract text");
    assert_eq!(dump.to_plain_text(), whitepaper().visible_text());
}

#[test]
fn extraction_is_stable_across_runs() {
    let first = extract_text(&common::generated()).unwrap();
    let second = extract_text(&common::generated()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn header_and_footer_read_back() {
    let dump = extract_text(&common::generated()).unwrap();
    assert_eq!(dump.header, [HEADER_TEXT]);
    assert_eq!(dump.footer, ["Page {PAGE} of {NUMPAGES}"]);
    assert_eq!(dump.header_footer_fields, ["PAGE", "NUMPAGES"]);
}

#[test]
fn body_starts_with_title_page() {
    let dump = extract_text(&common::generated()).unwrap();
    let leading: Vec<&TextBlock> = dump.body.iter().take(7).collect();
    let expected = [
        TextBlock::Paragraph("ZIMBEAT".into()),
        TextBlock::Paragraph("Token Whitepaper".into()),
        TextBlock::Paragraph("$ZBT - TON Blockchain".into()),
        TextBlock::Paragraph("A Usage-Driven Utility Token for Music Engagement".into()),
        TextBlock::Paragraph("Version 1.0".into()),
        TextBlock::Paragraph("January 2025".into()),
        TextBlock::PageBreak,
    ];
    assert_eq!(leading, expected.iter().collect::<Vec<_>>());

    let page_breaks = dump
        .body
        .iter()
        .filter(|b| matches!(b, TextBlock::PageBreak))
        .count();
    assert_eq!(page_breaks, 14);
}

#[test]
fn ampersands_survive_escaping() {
    let text = extract_text(&common::generated()).unwrap().to_plain_text();
    assert!(text.contains("8. Revenue Loop & Sustainability"));
    assert!(text.contains("4. Demand > Supply"));
}

#[test]
fn rejects_non_zip_input() {
    let result = extract_text(b"definitely not a zip archive");
    assert!(matches!(result, Err(Error::InvalidDocx(_))), "{result:?}");
}

#[test]
fn rejects_package_without_document_part() {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("word/styles.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"<w:styles/>").unwrap();
    let bytes = zip.finish().unwrap().into_inner();

    let result = extract_text(&bytes);
    assert!(matches!(result, Err(Error::InvalidDocx(_))), "{result:?}");
}

#[test]
fn empty_paragraph_after_table_is_kept() {
    let mut doc = whitepaper();
    let table = doc.tables().next().unwrap().clone();
    doc.section.blocks.push(Block::Table(table));
    doc.section.blocks.push(Block::Paragraph(Paragraph::plain("")));

    let dump = extract_text(&docx::write(&doc).unwrap()).unwrap();
    assert_eq!(dump.body.last(), Some(&TextBlock::Paragraph(String::new())));
    assert!(matches!(dump.body.iter().rev().nth(1), Some(TextBlock::Table(_))));
    assert_eq!(dump.to_plain_text(), doc.visible_text());
}

#[test]
fn body_ending_on_table_reads_back_without_filler() {
    let mut doc = whitepaper();
    let table = doc.tables().next().unwrap().clone();
    doc.section.blocks.push(Block::Table(table));

    let dump = extract_text(&docx::write(&doc).unwrap()).unwrap();
    assert!(matches!(dump.body.last(), Some(TextBlock::Table(_))));
    assert_eq!(dump.to_plain_text(), doc.visible_text());
}
