use budget_tracker::cli::output::{set_preferences, OutputPreferences};
use budget_tracker::cli::table::{
    horizontal_rule, render_cell, truncate, visible_width, Alignment, Column, Table,
};

fn plain() {
    set_preferences(OutputPreferences { color: false });
}

#[test]
fn widths_respect_column_limits() {
    plain();
    let mut table = Table::new(vec![
        Column::left("Title").max_width(8),
        Column::right("Amount").min_width(10),
    ]);
    table.push_row(vec!["Quarterly insurance".into(), "$1.00".into()]);
    table.push_row(vec!["Gas".into(), "$12,000.00".into()]);

    assert_eq!(table.widths(), vec![8, 10]);
}

#[test]
fn cells_align_within_padding() {
    plain();
    assert_eq!(render_cell("AB", 4, Alignment::Left, 1), " AB   ");
    assert_eq!(render_cell("AB", 4, Alignment::Right, 1), "   AB ");
}

#[test]
fn truncation_counts_visible_characters_only() {
    plain();
    let styled = "\u{1b}[31mExtremelyLongValue\u{1b}[0m";
    assert_eq!(visible_width(styled), 18);

    let cut = truncate(styled, 5);
    assert_eq!(visible_width(&cut), 5);
    assert!(cut.starts_with("\u{1b}[31mExtr"));
    assert!(cut.ends_with("…\u{1b}[0m"));

    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("Café au lait", 5), "Café…");
}

#[test]
fn rendered_table_has_header_rule_and_rows() {
    plain();
    let mut table = Table::new(vec![Column::right("ID"), Column::left("Title")]);
    table.push_row(vec!["#1".into(), "Rent".into()]);
    table.push_row(vec!["#12".into(), "Groceries".into()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "  ID   Title");
    assert_eq!(lines[1], horizontal_rule(&table.widths(), 1));
    assert!(lines[1].chars().all(|ch| ch == '-'));
    assert_eq!(lines[2], "  #1   Rent");
    assert_eq!(lines[3], " #12   Groceries");
}
