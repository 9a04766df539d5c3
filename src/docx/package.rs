//! OPC container: content types, relationships, document properties and the
//! ZIP archive that holds them.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::Error;
use crate::model::DocumentProperties;

use super::{REL_NS, XML_DECL, escape_xml};

const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CT_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

pub(super) const CT_RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const CT_XML: &str = "application/xml";
pub(super) const CT_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
pub(super) const CT_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
pub(super) const CT_NUMBERING: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
pub(super) const CT_SETTINGS: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
pub(super) const CT_HEADER: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
pub(super) const CT_FOOTER: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
pub(super) const CT_CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
pub(super) const CT_APP: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

pub(super) struct Part {
    pub(super) name: &'static str,
    pub(super) content_type: &'static str,
    pub(super) data: String,
}

impl Part {
    pub(super) fn new(name: &'static str, content_type: &'static str, data: String) -> Self {
        Self {
            name,
            content_type,
            data,
        }
    }
}

pub(super) struct Relationship {
    id: &'static str,
    rel_type: String,
    target: &'static str,
}

impl Relationship {
    /// An officeDocument relationship such as `styles` or `header`.
    pub(super) fn new(id: &'static str, kind: &str, target: &'static str) -> Self {
        Self {
            id,
            rel_type: format!("{REL_NS}/{kind}"),
            target,
        }
    }

    fn with_type(id: &'static str, rel_type: String, target: &'static str) -> Self {
        Self {
            id,
            rel_type,
            target,
        }
    }
}

pub(super) fn rels_xml(rels: &[Relationship]) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(r#"<Relationships xmlns="{PKG_REL_NS}">"#));
    for rel in rels {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id,
            escape_xml(&rel.rel_type),
            escape_xml(rel.target)
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

fn package_rels_xml() -> String {
    rels_xml(&[
        Relationship::new("rId1", "officeDocument", "word/document.xml"),
        Relationship::with_type(
            "rId2",
            format!("{PKG_REL_NS}/metadata/core-properties"),
            "docProps/core.xml",
        ),
        Relationship::new("rId3", "extended-properties", "docProps/app.xml"),
    ])
}

/// `rels` and `xml` parts are covered by defaults; every other part gets an override.
fn content_types_xml(parts: &[Part]) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(r#"<Types xmlns="{CT_NS}">"#));
    xml.push_str(&format!(
        r#"<Default Extension="rels" ContentType="{CT_RELS}"/>"#
    ));
    xml.push_str(&format!(r#"<Default Extension="xml" ContentType="{CT_XML}"/>"#));
    for part in parts.iter().filter(|p| p.content_type != CT_RELS) {
        xml.push_str(&format!(
            r#"<Override PartName="/{}" ContentType="{}"/>"#,
            part.name, part.content_type
        ));
    }
    xml.push_str("</Types>");
    xml
}

pub(super) fn core_xml(props: &DocumentProperties) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(&props.title)));
    xml.push_str(&format!(
        "<dc:subject>{}</dc:subject>",
        escape_xml(&props.subject)
    ));
    xml.push_str(&format!(
        "<dc:creator>{}</dc:creator>",
        escape_xml(&props.creator)
    ));
    xml.push_str(&format!(
        "<cp:keywords>{}</cp:keywords>",
        escape_xml(&props.keywords)
    ));
    xml.push_str(&format!(
        "<dc:description>{}</dc:description>",
        escape_xml(&props.description)
    ));
    xml.push_str(&format!(
        "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
        escape_xml(&props.creator)
    ));
    xml.push_str("<cp:revision>1</cp:revision>");
    for tag in ["created", "modified"] {
        xml.push_str(&format!(
            r#"<dcterms:{tag} xsi:type="dcterms:W3CDTF">{}</dcterms:{tag}>"#,
            escape_xml(&props.timestamp)
        ));
    }
    xml.push_str("</cp:coreProperties>");
    xml
}

pub(super) fn app_xml() -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    ));
    xml.push_str(&format!(
        "<Application>{} {}</Application>",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    xml.push_str("<DocSecurity>0</DocSecurity>");
    xml.push_str("</Properties>");
    xml
}

/// Zip the parts in a fixed order with a fixed timestamp so identical trees
/// produce identical bytes.
pub(super) fn assemble(parts: Vec<Part>) -> Result<Vec<u8>, Error> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let content_types = content_types_xml(&parts);
    let package_rels = package_rels_xml();
    let leading = [
        ("[Content_Types].xml", content_types.as_bytes()),
        ("_rels/.rels", package_rels.as_bytes()),
    ];
    let entries = leading
        .into_iter()
        .chain(parts.iter().map(|p| (p.name, p.data.as_bytes())));

    for (name, data) in entries {
        zip.start_file(name, options)?;
        zip.write_all(data)?;
        log::debug!("Wrote part {name} ({} bytes)", data.len());
    }

    Ok(zip.finish()?.into_inner())
}
