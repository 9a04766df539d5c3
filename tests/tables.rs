mod common;

use zimbeat_whitepaper::docx::read::{TextTable, extract_text};
use zimbeat_whitepaper::docx;
use zimbeat_whitepaper::model::{
    Alignment, Block, BorderStyle, CellBorder, CellBorders, CellVAlign,
};
use zimbeat_whitepaper::whitepaper::whitepaper;

fn extracted_tables() -> Vec<TextTable> {
    let bytes = common::generated();
    extract_text(&bytes)
        .expect("extract text")
        .tables()
        .cloned()
        .collect()
}

fn cell_prop<'a>(cell: roxmltree::Node<'a, 'a>, name: &str) -> Option<&'a str> {
    cell.descendants()
        .find(|n| common::is_wml(n, name))
        .and_then(|n| common::wml_val(n, "val"))
}

fn percent(cell: &str) -> u32 {
    cell.trim_end_matches('%')
        .parse()
        .unwrap_or_else(|_| panic!("not a percentage: {cell}"))
}

#[test]
fn allocation_sums_to_one_hundred() {
    let tables = extracted_tables();
    assert_eq!(tables.len(), 2);
    let allocation = &tables[0];

    assert_eq!(allocation.header_rows, 1);
    assert_eq!(allocation.rows.len(), 7);
    assert_eq!(allocation.rows[0], ["Allocation", "Percentage", "Purpose"]);

    let shares: Vec<u32> = allocation.rows[1..].iter().map(|r| percent(&r[1])).collect();
    assert_eq!(shares, [40, 25, 15, 10, 5, 5]);
    assert_eq!(shares.iter().sum::<u32>(), 100);
}

#[test]
fn vesting_has_four_schedules() {
    let tables = extracted_tables();
    let vesting = &tables[1];

    assert_eq!(vesting.header_rows, 1);
    assert_eq!(
        vesting.rows[0],
        ["Allocation", "Vesting Period", "Release Schedule"]
    );
    let allocations: Vec<&str> = vesting.rows[1..].iter().map(|r| r[0].as_str()).collect();
    assert_eq!(
        allocations,
        [
            "Team & Development",
            "Artist Incentives",
            "Ecosystem & Growth",
            "Liquidity"
        ]
    );
}

#[test]
fn rows_match_column_widths_in_model() {
    let doc = whitepaper();
    let widths: Vec<Vec<u32>> = doc.tables().map(|t| t.col_widths.clone()).collect();
    assert_eq!(widths, [vec![2000, 2000, 5360], vec![3120, 3120, 3120]]);

    for table in doc.tables() {
        for row in &table.rows {
            assert_eq!(row.cells.len(), table.col_widths.len());
            let cell_widths: Vec<u32> = row.cells.iter().map(|c| c.width).collect();
            assert_eq!(cell_widths, table.col_widths);
        }
    }
}

#[test]
fn rows_match_serialized_grid() {
    for table in extracted_tables() {
        assert!(!table.grid.is_empty());
        for row in &table.rows {
            assert_eq!(row.len(), table.grid.len(), "row {row:?}");
        }
    }
}

#[test]
fn header_cells_are_shaded_and_centred() {
    let doc = whitepaper();
    for table in doc.tables() {
        assert_eq!(table.header_rows(), 1);
        let header = &table.rows[0];
        for cell in &header.cells {
            assert_eq!(cell.shading, Some([0xD5, 0xE8, 0xF0]));
            assert_eq!(cell.v_align, Some(CellVAlign::Center));
            let para = &cell.paragraphs[0];
            assert_eq!(para.alignment, Some(Alignment::Center));
            assert!(para.runs.iter().all(|r| r.bold && r.font_size == Some(22)));
        }
        for row in table.data_rows() {
            assert_eq!(row.cells[1].paragraphs[0].alignment, Some(Alignment::Center));
            assert_eq!(row.cells[0].paragraphs[0].alignment, None);
            assert!(row.cells.iter().all(|c| c.shading.is_none()));
        }
    }
}

#[test]
fn serialized_cells_carry_borders_and_margins() {
    let bytes = common::generated();
    let xml = common::read_part(&bytes, "word/document.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let cells = common::wml_descendants(&doc, "tc").count();
    assert_eq!(cells, 3 * 7 + 3 * 5);
    for borders in common::wml_descendants(&doc, "tcBorders") {
        let sides: Vec<_> = borders.children().filter(|n| n.is_element()).collect();
        assert_eq!(sides.len(), 4);
        for side in sides {
            assert_eq!(common::wml_val(side, "val"), Some("single"));
            assert_eq!(common::wml_val(side, "sz"), Some("1"));
            assert_eq!(common::wml_val(side, "color"), Some("CCCCCC"));
        }
    }

    for mar in common::wml_descendants(&doc, "tblCellMar") {
        let value = |side: &str| {
            mar.children()
                .find(|n| common::is_wml(n, side))
                .and_then(|n| common::wml_val(n, "w"))
        };
        assert_eq!(value("top"), Some("100"));
        assert_eq!(value("bottom"), Some("100"));
        assert_eq!(value("left"), Some("180"));
        assert_eq!(value("right"), Some("180"));
    }
}

#[test]
fn restyled_cells_serialize_their_formatting() {
    let mut doc = whitepaper();
    let Some(Block::Table(table)) = doc
        .section
        .blocks
        .iter_mut()
        .find(|b| matches!(b, Block::Table(_)))
    else {
        panic!("whitepaper has no table");
    };
    let row = &mut table.rows[1];
    row.cells[0].borders = CellBorders {
        top: Some(CellBorder {
            style: BorderStyle::Double,
            size: 4,
            color: [0x00, 0x00, 0x00],
        }),
        bottom: Some(CellBorder {
            style: BorderStyle::Dotted,
            size: 2,
            color: [0x11, 0x22, 0x33],
        }),
        left: Some(CellBorder {
            style: BorderStyle::Dashed,
            size: 6,
            color: [0xAA, 0xBB, 0xCC],
        }),
        right: None,
    };
    row.cells[0].v_align = Some(CellVAlign::Top);
    row.cells[2].v_align = Some(CellVAlign::Bottom);
    row.cells[2].paragraphs[0].alignment = Some(Alignment::Justify);

    let bytes = docx::write(&doc).unwrap();
    let xml = common::read_part(&bytes, "word/document.xml");
    let parsed = roxmltree::Document::parse(&xml).unwrap();
    let tr = common::wml_descendants(&parsed, "tr").nth(1).unwrap();
    let cells: Vec<_> = tr.children().filter(|n| common::is_wml(n, "tc")).collect();
    assert_eq!(cells.len(), 3);

    let first_cell = cells[0];
    let borders = first_cell
        .descendants()
        .find(|n| common::is_wml(n, "tcBorders"))
        .unwrap();
    let sides: Vec<_> = borders
        .children()
        .filter(|n| n.is_element())
        .map(|n| {
            (
                n.tag_name().name(),
                common::wml_val(n, "val").unwrap(),
                common::wml_val(n, "sz").unwrap(),
                common::wml_val(n, "color").unwrap(),
            )
        })
        .collect();
    assert_eq!(
        sides,
        [
            ("top", "double", "4", "000000"),
            ("left", "dashed", "6", "AABBCC"),
            ("bottom", "dotted", "2", "112233"),
        ]
    );

    assert_eq!(cell_prop(cells[0], "vAlign"), Some("top"));
    assert_eq!(cell_prop(cells[1], "vAlign"), None);
    assert_eq!(cell_prop(cells[2], "vAlign"), Some("bottom"));

    assert_eq!(cell_prop(cells[2], "jc"), Some("both"));
}
