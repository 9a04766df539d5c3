//! In-memory document tree handed to the DOCX writer.
//!
//! Units follow WordprocessingML directly: lengths are twips (1/20 pt, also
//! called DXA), font sizes are half-points, border sizes are eighths of a point.

pub type Rgb = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellVAlign {
    Top,
    Center,
    Bottom,
}

impl CellVAlign {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            CellVAlign::Top => "top",
            CellVAlign::Center => "center",
            CellVAlign::Bottom => "bottom",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldCode {
    Page,
    NumPages,
}

impl FieldCode {
    pub(crate) fn instruction(&self) -> &'static str {
        match self {
            FieldCode::Page => "PAGE",
            FieldCode::NumPages => "NUMPAGES",
        }
    }

    /// Placeholder used when flattening text; the real value only exists at render time.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldCode::Page => "{PAGE}",
            FieldCode::NumPages => "{NUMPAGES}",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RunContent {
    Text(String),
    Field(FieldCode),
}

/// A span of text sharing one formatting override. `None` inherits from the
/// paragraph style and document defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    pub content: RunContent,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub font_size: Option<u32>,
}

impl Run {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            bold: false,
            color: None,
            font_size: None,
        }
    }

    pub fn field(code: FieldCode) -> Self {
        Self {
            content: RunContent::Field(code),
            bold: false,
            color: None,
            font_size: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.font_size = Some(half_points);
        self
    }

    pub fn visible_text(&self) -> &str {
        match &self.content {
            RunContent::Text(t) => t,
            RunContent::Field(code) => code.placeholder(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListRef {
    pub reference: String,
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub style: Option<String>,
    pub alignment: Option<Alignment>,
    pub list: Option<ListRef>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            style: None,
            alignment: None,
            list: None,
            runs,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Run::text(text)])
    }

    pub fn styled(style: &str, text: impl Into<String>) -> Self {
        Self::plain(text).with_style(style)
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn in_list(mut self, reference: &str, level: u8) -> Self {
        self.list = Some(ListRef {
            reference: reference.to_string(),
            level,
        });
        self
    }

    pub fn visible_text(&self) -> String {
        self.runs.iter().map(Run::visible_text).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderStyle {
    Single,
    Double,
    Dotted,
    Dashed,
}

impl BorderStyle {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Dashed => "dashed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBorder {
    pub style: BorderStyle,
    /// Eighths of a point.
    pub size: u32,
    pub color: Rgb,
}

impl CellBorder {
    pub fn single(size: u32, color: Rgb) -> Self {
        Self {
            style: BorderStyle::Single,
            size,
            color,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellBorders {
    pub top: Option<CellBorder>,
    pub bottom: Option<CellBorder>,
    pub left: Option<CellBorder>,
    pub right: Option<CellBorder>,
}

impl CellBorders {
    pub fn all(border: CellBorder) -> Self {
        Self {
            top: Some(border),
            bottom: Some(border),
            left: Some(border),
            right: Some(border),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMargins {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl Default for CellMargins {
    fn default() -> Self {
        // Word's built-in 0.08" side padding.
        Self {
            top: 0,
            left: 108,
            bottom: 0,
            right: 108,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableCell {
    /// Twips.
    pub width: u32,
    pub paragraphs: Vec<Paragraph>,
    pub borders: CellBorders,
    pub shading: Option<Rgb>,
    pub v_align: Option<CellVAlign>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// Repeat this row at the top of each page the table spans.
    pub is_header: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub col_widths: Vec<u32>, // twips
    pub rows: Vec<TableRow>,
    pub cell_margins: CellMargins,
}

impl Table {
    pub fn header_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.is_header).count()
    }

    pub fn data_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|r| !r.is_header)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    PageBreak,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderFooter {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionProperties {
    pub page_width: u32,
    pub page_height: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub header_margin: u32,
    pub footer_margin: u32,
    pub header_default: Option<HeaderFooter>,
    pub footer_default: Option<HeaderFooter>,
}

impl Default for SectionProperties {
    fn default() -> Self {
        // A4 portrait, one-inch margins.
        Self {
            page_width: 11906,
            page_height: 16838,
            margin_top: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            margin_right: 1440,
            header_margin: 708,
            footer_margin: 708,
            header_default: None,
            footer_default: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub properties: SectionProperties,
    pub blocks: Vec<Block>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    pub id: String,
    pub name: String,
    pub based_on: Option<String>,
    pub next: Option<String>,
    pub quick_format: bool,
    pub font_name: Option<String>,
    pub font_size: Option<u32>,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub space_before: Option<u32>,
    pub space_after: Option<u32>,
    pub alignment: Option<Alignment>,
    pub outline_level: Option<u8>,
    pub indent_left: Option<u32>,
}

impl ParagraphStyle {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            based_on: None,
            next: None,
            quick_format: false,
            font_name: None,
            font_size: None,
            bold: false,
            color: None,
            space_before: None,
            space_after: None,
            alignment: None,
            outline_level: None,
            indent_left: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    pub default_font: String,
    pub default_size: u32,
    pub paragraph_styles: Vec<ParagraphStyle>,
}

impl StyleSheet {
    pub fn get(&self, id: &str) -> Option<&ParagraphStyle> {
        self.paragraph_styles.iter().find(|s| s.id == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberFormat {
    Bullet,
    Decimal,
}

impl NumberFormat {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            NumberFormat::Bullet => "bullet",
            NumberFormat::Decimal => "decimal",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelDef {
    pub level: u8,
    pub format: NumberFormat,
    pub text: String,
    pub alignment: Alignment,
    pub start: u32,
    pub indent_left: u32,
    pub indent_hanging: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberingDef {
    /// Name paragraphs use to join the list.
    pub reference: String,
    pub levels: Vec<LevelDef>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentProperties {
    pub title: String,
    pub subject: String,
    pub creator: String,
    pub keywords: String,
    pub description: String,
    /// W3CDTF timestamp written as both created and modified.
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub properties: DocumentProperties,
    pub styles: StyleSheet,
    pub numbering: Vec<NumberingDef>,
    pub section: Section,
}

impl Document {
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.section.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.section.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Flattened visible text: header, body, footer. Table cells are joined
    /// with tabs, one line per row; page breaks become form feeds.
    pub fn visible_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let props = &self.section.properties;
        if let Some(header) = &props.header_default {
            lines.extend(header.paragraphs.iter().map(Paragraph::visible_text));
        }
        for block in &self.section.blocks {
            match block {
                Block::Paragraph(p) => lines.push(p.visible_text()),
                Block::Table(t) => {
                    for row in &t.rows {
                        let cells: Vec<String> = row
                            .cells
                            .iter()
                            .map(|c| {
                                c.paragraphs
                                    .iter()
                                    .map(Paragraph::visible_text)
                                    .collect::<Vec<_>>()
                                    .join(" ")
                            })
                            .collect();
                        lines.push(cells.join("\t"));
                    }
                }
                Block::PageBreak => lines.push("\u{c}".to_string()),
            }
        }
        if let Some(footer) = &props.footer_default {
            lines.extend(footer.paragraphs.iter().map(Paragraph::visible_text));
        }
        lines.join("\n")
    }
}
