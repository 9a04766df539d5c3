mod body;
mod package;
pub mod read;
mod styles;

use std::collections::HashMap;

use crate::error::Error;
use crate::model::{Document, Rgb};
use crate::validate::validate;

use package::{Part, Relationship};

pub(super) const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(super) const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub(super) const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub(super) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub(super) fn hex_color(rgb: Rgb) -> String {
    format!("{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Opening tag of a WordprocessingML part root with the namespaces every part uses.
pub(super) fn wml_root(tag: &str) -> String {
    format!(r#"{XML_DECL}<w:{tag} xmlns:w="{WML_NS}" xmlns:r="{REL_NS}">"#)
}

/// Maps list references to the `w:numId` assigned in numbering.xml.
pub(super) struct NumIds(HashMap<String, u32>);

impl NumIds {
    fn new(doc: &Document) -> Self {
        Self(
            doc.numbering
                .iter()
                .enumerate()
                .map(|(i, def)| (def.reference.clone(), i as u32 + 1))
                .collect(),
        )
    }

    pub(super) fn get(&self, reference: &str) -> Option<u32> {
        self.0.get(reference).copied()
    }
}

/// Validate the tree and serialize it into DOCX package bytes.
pub fn write(doc: &Document) -> Result<Vec<u8>, Error> {
    validate(doc)?;

    let num_ids = NumIds::new(doc);
    let props = &doc.section.properties;

    let mut doc_rels = vec![
        Relationship::new("rId1", "styles", "styles.xml"),
        Relationship::new("rId2", "numbering", "numbering.xml"),
        Relationship::new("rId3", "settings", "settings.xml"),
    ];
    let mut parts = vec![
        Part::new(
            "word/styles.xml",
            package::CT_STYLES,
            styles::styles_xml(&doc.styles),
        ),
        Part::new(
            "word/numbering.xml",
            package::CT_NUMBERING,
            styles::numbering_xml(&doc.numbering),
        ),
        Part::new("word/settings.xml", package::CT_SETTINGS, styles::settings_xml()),
    ];

    let header_rid = props.header_default.as_ref().map(|header| {
        doc_rels.push(Relationship::new("rId4", "header", "header1.xml"));
        parts.push(Part::new(
            "word/header1.xml",
            package::CT_HEADER,
            body::header_footer_xml("hdr", header, &num_ids),
        ));
        "rId4"
    });
    let footer_rid = props.footer_default.as_ref().map(|footer| {
        doc_rels.push(Relationship::new("rId5", "footer", "footer1.xml"));
        parts.push(Part::new(
            "word/footer1.xml",
            package::CT_FOOTER,
            body::header_footer_xml("ftr", footer, &num_ids),
        ));
        "rId5"
    });

    parts.insert(
        0,
        Part::new(
            "word/document.xml",
            package::CT_DOCUMENT,
            body::document_xml(&doc.section, &num_ids, header_rid, footer_rid),
        ),
    );
    parts.push(Part::new(
        "word/_rels/document.xml.rels",
        package::CT_RELS,
        package::rels_xml(&doc_rels),
    ));
    parts.push(Part::new(
        "docProps/core.xml",
        package::CT_CORE,
        package::core_xml(&doc.properties),
    ));
    parts.push(Part::new("docProps/app.xml", package::CT_APP, package::app_xml()));

    package::assemble(parts)
}
