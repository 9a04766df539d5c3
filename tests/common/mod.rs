#![allow(dead_code)]

use std::io::{Cursor, Read};

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Generated package bytes, with logging set up for the test binary.
pub fn generated() -> Vec<u8> {
    let _ = env_logger::try_init();
    zimbeat_whitepaper::generate_whitepaper().expect("generate whitepaper")
}

/// Entry names in archive order.
pub fn part_names(bytes: &[u8]) -> Vec<String> {
    let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).expect("open zip");
    (0..zip.len())
        .map(|i| zip.by_index(i).expect("zip entry").name().to_string())
        .collect()
}

pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).expect("open zip");
    let mut content = String::new();
    zip.by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"))
        .read_to_string(&mut content)
        .expect("read part");
    content
}

pub fn is_wml(node: &roxmltree::Node, name: &str) -> bool {
    node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

/// Every `w:<name>` element below the root, in document order.
pub fn wml_descendants<'a>(
    xml: &'a roxmltree::Document<'a>,
    name: &'a str,
) -> impl Iterator<Item = roxmltree::Node<'a, 'a>> {
    xml.descendants().filter(move |n| is_wml(n, name))
}

pub fn wml_val<'a>(node: roxmltree::Node<'a, 'a>, attr: &str) -> Option<&'a str> {
    node.attribute((WML_NS, attr))
}

/// Concatenated `w:t` text of a part.
pub fn part_text(xml: &roxmltree::Document) -> String {
    xml.descendants()
        .filter(|n| is_wml(n, "t"))
        .filter_map(|n| n.text())
        .collect()
}
