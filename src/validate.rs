//! Structural checks run before serialization.
//!
//! The writer trusts the tree; anything it would silently emit as a broken
//! package (ragged tables, dangling style or list references) is rejected here.

use std::collections::HashSet;

use crate::error::Error;
use crate::model::{Block, Document, HeaderFooter, Paragraph, Table};

struct Refs<'a> {
    styles: HashSet<&'a str>,
    lists: Vec<(&'a str, HashSet<u8>)>,
}

impl Refs<'_> {
    fn check_paragraph(&self, para: &Paragraph, at: &str) -> Result<(), Error> {
        if let Some(style) = para.style.as_deref()
            && !self.styles.contains(style)
        {
            return Err(Error::InvalidDocument(format!(
                "{at}: unknown paragraph style '{style}'"
            )));
        }
        if let Some(list) = &para.list {
            let Some((_, levels)) = self.lists.iter().find(|(r, _)| *r == list.reference) else {
                return Err(Error::InvalidDocument(format!(
                    "{at}: unknown list reference '{}'",
                    list.reference
                )));
            };
            if !levels.contains(&list.level) {
                return Err(Error::InvalidDocument(format!(
                    "{at}: list '{}' has no level {}",
                    list.reference, list.level
                )));
            }
        }
        Ok(())
    }

    fn check_table(&self, table: &Table, at: &str) -> Result<(), Error> {
        if table.col_widths.is_empty() {
            return Err(Error::InvalidDocument(format!(
                "{at}: table declares no columns"
            )));
        }
        for (ri, row) in table.rows.iter().enumerate() {
            if row.cells.len() != table.col_widths.len() {
                return Err(Error::InvalidDocument(format!(
                    "{at}, row {ri}: {} cells but {} column widths",
                    row.cells.len(),
                    table.col_widths.len()
                )));
            }
            for (ci, cell) in row.cells.iter().enumerate() {
                for para in &cell.paragraphs {
                    self.check_paragraph(para, &format!("{at}, row {ri}, cell {ci}"))?;
                }
            }
        }
        Ok(())
    }

    fn check_header_footer(&self, hf: Option<&HeaderFooter>, at: &str) -> Result<(), Error> {
        for para in hf.into_iter().flat_map(|hf| &hf.paragraphs) {
            self.check_paragraph(para, at)?;
        }
        Ok(())
    }
}

pub fn validate(doc: &Document) -> Result<(), Error> {
    let mut styles = HashSet::new();
    for style in &doc.styles.paragraph_styles {
        if !styles.insert(style.id.as_str()) {
            return Err(Error::InvalidDocument(format!(
                "duplicate paragraph style '{}'",
                style.id
            )));
        }
    }
    for style in &doc.styles.paragraph_styles {
        for linked in [&style.based_on, &style.next].into_iter().flatten() {
            if !styles.contains(linked.as_str()) {
                return Err(Error::InvalidDocument(format!(
                    "style '{}' links to unknown style '{linked}'",
                    style.id
                )));
            }
        }
    }

    let mut lists: Vec<(&str, HashSet<u8>)> = Vec::with_capacity(doc.numbering.len());
    for def in &doc.numbering {
        if lists.iter().any(|(r, _)| *r == def.reference.as_str()) {
            return Err(Error::InvalidDocument(format!(
                "duplicate list definition '{}'",
                def.reference
            )));
        }
        let levels: HashSet<u8> = def.levels.iter().map(|l| l.level).collect();
        lists.push((def.reference.as_str(), levels));
    }

    let refs = Refs { styles, lists };

    let props = &doc.section.properties;
    refs.check_header_footer(props.header_default.as_ref(), "header")?;
    refs.check_header_footer(props.footer_default.as_ref(), "footer")?;

    for (i, block) in doc.section.blocks.iter().enumerate() {
        let at = format!("block {i}");
        match block {
            Block::Paragraph(p) => refs.check_paragraph(p, &at)?,
            Block::Table(t) => refs.check_table(t, &at)?,
            Block::PageBreak => {}
        }
    }
    Ok(())
}
