//! Terminal rendering of a [`TableView`].

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use artic_model::ArtworkRecord;
use artic_state::{AppState, RowView, TableView};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// The artwork table for the visible rows.
pub fn artwork_table(view: &TableView<'_>, width: u16) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(marker(view.all_selected)),
        header_cell("#"),
        header_cell("Title"),
        header_cell("Origin"),
        header_cell("Artist"),
        header_cell("Inscriptions"),
        header_cell("Start"),
        header_cell("End"),
    ]);
    apply_table_style(&mut table, width);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);

    for row in &view.rows {
        table.add_row(row_cells(row));
    }
    table
}

/// Lines printed under the table: pager report, banner, filter, bulk target,
/// loading and error notices.
pub fn status_lines(view: &TableView<'_>) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  (page {} of {}, {} rows per page)",
        view.report(),
        view.page,
        view.total_pages.max(1),
        view.page_size
    )];
    if let Some(banner) = view.banner() {
        lines.push(format!("{banner}  (`clear` to clear)"));
    }
    if !view.search.is_empty() {
        lines.push(format!(
            "Filter \"{}\": {} of the loaded rows match",
            view.search,
            view.rows.len()
        ));
    }
    if let Some(target) = view.bulk_target {
        lines.push(format!("Selecting the first {target} artworks"));
    }
    if view.loading {
        lines.push("Loading...".to_string());
    }
    if let Some(error) = view.last_error {
        lines.push(format!("Error: {error}  (`dismiss` to hide)"));
    }
    lines
}

/// Table followed by the status lines.
pub fn render(view: &TableView<'_>, width: u16) -> String {
    let mut out = artwork_table(view, width).to_string();
    for line in status_lines(view) {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

/// What the interactive browser shows for `state`: a one-line notice while a
/// page is on its way, otherwise the full table.
pub fn frame(state: &AppState, width: u16) -> String {
    if state.is_loading() {
        let requested = state.requested_page();
        return format!("Loading page {}...", requested.page);
    }
    render(&TableView::from_state(state), width)
}

fn row_cells(row: &RowView<'_>) -> Vec<Cell> {
    let record: &ArtworkRecord = row.record;
    let marker_cell = if row.selected {
        Cell::new(CHECKED).fg(Color::Green)
    } else {
        dim_cell(UNCHECKED)
    };
    vec![
        marker_cell,
        dim_cell(row.position),
        Cell::new(&record.title).add_attribute(Attribute::Bold),
        Cell::new(&record.place_of_origin),
        Cell::new(&record.artist_display),
        Cell::new(&record.inscriptions),
        year_cell(record.date_start),
        year_cell(record.date_end),
    ]
}

fn marker(selected: bool) -> &'static str {
    if selected { CHECKED } else { UNCHECKED }
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
    table.set_constraints(vec![
        ColumnConstraint::Absolute(Width::Fixed(5)),
        ColumnConstraint::LowerBoundary(Width::Fixed(4)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::UpperBoundary(Width::Percentage(15)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ColumnConstraint::LowerBoundary(Width::Fixed(7)),
    ]);
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

/// Years of 0 mean the API had no date.
fn year_cell(year: i32) -> Cell {
    if year == 0 {
        dim_cell("-")
    } else {
        Cell::new(year)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
