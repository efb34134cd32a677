use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use portal_cli::commands::{ExportResult, ImportRow, PreviewContent, PreviewResult};
use portal_ingest::Detection;
use portal_model::{Section, SectionColor, TableRecords, TabularRecord};

pub fn print_sections(sections: &[Section]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Section"),
        header_cell("Description"),
        header_cell("Shape"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for section in sections {
        let title = match section.color {
            SectionColor::Primary => Cell::new(section.title).fg(Color::Blue),
            SectionColor::Accent => Cell::new(section.title).fg(Color::Magenta),
        };
        let shape = match section.id.table_kind() {
            Some(kind) => Cell::new(kind).add_attribute(Attribute::Bold),
            None => dim_cell("text"),
        };
        table.add_row(vec![
            Cell::new(section.id),
            title,
            Cell::new(section.description),
            shape,
        ]);
    }
    println!("{table}");
}

pub fn print_preview(result: &PreviewResult) {
    let detection = match result.detection {
        Detection::Extension => "by extension",
        Detection::Content => "by content",
    };
    println!(
        "File: {} ({} bytes, {})",
        result.file.name, result.file.size, result.file.media_type
    );
    println!("Format: {} ({detection}), {} row(s)", result.format, result.rows);
    println!("Section: {}", Section::get(result.section).title);
    match &result.content {
        PreviewContent::Records(records) => print_records(records),
        PreviewContent::Fields(fields) => {
            let mut table = Table::new();
            table.set_header(vec![header_cell("Field"), header_cell("Value")]);
            apply_table_style(&mut table);
            for (key, value) in fields.iter() {
                let value = if value.is_blank() {
                    dim_cell("-")
                } else {
                    Cell::new(value)
                };
                table.add_row(vec![Cell::new(key), value]);
            }
            println!("{table}");
        }
    }
}

fn print_records(records: &TableRecords) {
    match records {
        TableRecords::Faculty(rows) => print_record_table(rows),
        TableRecords::Student(rows) => print_record_table(rows),
        TableRecords::Placement(rows) => print_record_table(rows),
    }
}

fn print_record_table<R: TabularRecord>(rows: &[R]) {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(R::FIELDS.iter().map(|field| header_cell(field)));
    table.set_header(header);
    apply_table_style(&mut table);
    for (idx, row) in rows.iter().enumerate() {
        let mut cells = vec![dim_cell(idx + 1)];
        cells.extend(row.values().iter().map(Cell::new));
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn print_export(result: &ExportResult) {
    println!("Academic year: {}", result.year);
    if !result.imports.is_empty() {
        print_imports(&result.imports);
    }
    println!(
        "Totals: {} faculty, {} students, {} placed",
        result.totals.faculty, result.totals.students, result.totals.placed
    );
    for path in &result.written {
        println!("Wrote: {}", path.display());
    }
    if let Some(text) = &result.printed {
        println!();
        println!("{text}");
    }
}

fn print_imports(imports: &[ImportRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("File"),
        header_cell("Format"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in imports {
        let format = match row.format {
            Some(format) => Cell::new(format),
            None => dim_cell("-"),
        };
        let status = match &row.status {
            Ok(summary) => Cell::new(summary).fg(Color::Green),
            Err(reason) => Cell::new(reason).fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(row.section),
            Cell::new(&row.file),
            format,
            status,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
