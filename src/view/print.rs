use std::fmt::Write;
use crate::models::employee::Employee;
use crate::view::{RosterView, Summary};

const HEADERS: [&str; 5] = ["Name", "Gender", "Date of Birth", "State", "Status"];

fn row(employee: &Employee) -> [String; 5] {
    [
        employee.full_name.trim().to_string(),
        employee.gender.as_str().to_string(),
        employee.date_of_birth.format("%d %b %Y").to_string(),
        employee.state.clone(),
        if employee.is_active { "Active" } else { "Inactive" }.to_string(),
    ]
}

/// Renders the visible rows as a plain-text table for printing.
pub fn render_roster(view: &RosterView) -> String {
    let rows: Vec<[String; 5]> = view.visible().iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "Employee List");
    let _ = writeln!(out);
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    if rows.is_empty() {
        let _ = writeln!(out, "No employees found");
    }
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }

    let Summary { total, active, inactive } = view.summary();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Showing {} of {} employees ({} active, {} inactive)",
        rows.len(),
        total,
        active,
        inactive
    );
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}
