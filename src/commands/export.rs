//! Assembles every report as a table of display strings, one section per
//! page, for whatever renders the final document.

use crate::app::AppState;
use crate::commands::reports;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Free-form summary lines appended after the table.
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub sections: Vec<ReportSection>,
}

impl ReportSection {
    fn new(title: &str, columns: &[&str]) -> Self {
        ReportSection {
            title: title.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            notes: Vec::new(),
        }
    }
}

pub fn build_report_document(state: &AppState, today: NaiveDate) -> ReportDocument {
    let mut sections = Vec::new();

    // Sales
    let sales = reports::sales_by_day(&state.orders);
    let mut section = ReportSection::new("Sales Report", &["Date", "Sales"]);
    let total: f64 = sales.iter().map(|(_, s)| s).sum();
    for (day, sum) in &sales {
        section.rows.push(vec![day.clone(), format!("{:.2}", sum)]);
    }
    section.notes.push(format!("Total Sales: {:.2}", total));
    sections.push(section);

    // Top-selling items
    let mut section = ReportSection::new("Top-Selling Items", &["Item", "Quantity Sold"]);
    for (name, qty) in reports::top_selling(&state.orders) {
        section.rows.push(vec![name, qty.to_string()]);
    }
    sections.push(section);

    // Inventory usage
    let mut section = ReportSection::new("Inventory Usage Report", &["Item", "Available", "Used"]);
    for row in reports::inventory_usage(&state.orders, &state.inventory) {
        section.rows.push(vec![
            row.name,
            format!("{}", row.available),
            format!("{}", row.used),
        ]);
    }
    sections.push(section);

    // Low stock
    let mut section = ReportSection::new(
        "Low Stock Report",
        &["ID", "Name", "Category", "Quantity", "Threshold"],
    );
    for item in reports::low_stock(&state.inventory) {
        section.rows.push(vec![
            item.id.to_string(),
            item.name.clone(),
            item.category.clone(),
            format!("{}", item.quantity),
            format!("{}", item.threshold),
        ]);
    }
    sections.push(section);

    // Wastage & expiry
    let expiry = reports::expired_items(&state.inventory, today);
    let mut section = ReportSection::new("Wastage & Expiry Report", &["ID", "Name", "Expiry Date"]);
    for item in &expiry.expired {
        section.rows.push(vec![
            item.id.to_string(),
            item.name.clone(),
            item.expiry_date.clone(),
        ]);
    }
    for (month, count) in &expiry.trend {
        section.notes.push(format!("{}: {} expired", month, count));
    }
    sections.push(section);

    // Profit/loss
    let pl = reports::profit_loss(&state.orders, &state.inventory);
    let mut section = ReportSection::new("Profit/Loss Report", &["Metric", "Amount"]);
    section.rows.push(vec![
        "Total Revenue".to_string(),
        format!("{:.2}", pl.total_revenue),
    ]);
    section.rows.push(vec![
        "Total Cost".to_string(),
        format!("{:.2}", pl.total_cost),
    ]);
    section.rows.push(vec![
        "Net Profit".to_string(),
        format!("{:.2}", pl.net_profit),
    ]);
    sections.push(section);

    // Peak hours
    let peak = reports::peak_hours(&state.orders);
    let mut section = ReportSection::new("Peak Hour Report", &["Hour", "Orders"]);
    for (hour, count) in &peak.hours {
        section.rows.push(vec![hour.clone(), count.to_string()]);
    }
    if peak.skipped > 0 {
        section
            .notes
            .push(format!("{} orders skipped (bad timestamp)", peak.skipped));
    }
    sections.push(section);

    ReportDocument { sections }
}
