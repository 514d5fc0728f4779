use collatz::config::DisplayParams;
use collatz::format::group_thousands;
use collatz::result::SequenceResult;
use collatz::verify::VerifyReport;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const MAX_FAILURE_ROWS: usize = 20;

fn num(n: u64, display: &DisplayParams) -> String {
    group_thousands(n as u128, &display.thousands_separator)
}

pub fn print_summary(result: &SequenceResult, display: &DisplayParams) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Results").add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    for (label, value) in result.summary() {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(num(value, display)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_steps(result: &SequenceResult, display: &DisplayParams) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Iter").add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
        Cell::new("Previous"),
        Cell::new("Parity"),
        Cell::new("Transition"),
    ]);

    for i in 0..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for step in &result.steps {
        let previous = step
            .previous_value
            .map(|p| num(p, display))
            .unwrap_or_else(|| "N/A".to_string());
        let parity = Cell::new(step.parity().to_string());
        let parity = if step.is_even {
            parity.fg(Color::Green)
        } else {
            parity.fg(Color::Red)
        };
        let value = if step.value == result.max {
            Cell::new(num(step.value, display))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(num(step.value, display))
        };

        table.add_row(vec![
            Cell::new(step.iteration),
            value,
            Cell::new(previous),
            parity,
            Cell::new(&step.transition_description),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_verify_report(report: &VerifyReport, display: &DisplayParams) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let failed = report.failures.len() as u64;
    let failed_cell = Cell::new(num(failed, display)).set_alignment(CellAlignment::Right);
    let failed_cell = if failed == 0 {
        failed_cell.fg(Color::Green)
    } else {
        failed_cell.fg(Color::Red)
    };

    table.set_header(vec![
        Cell::new("Verification").add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Range"),
        Cell::new(format!(
            "{}..={}",
            num(report.from, display),
            num(report.to, display)
        ))
        .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Checked"),
        Cell::new(num(report.checked(), display)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Reached 1"),
        Cell::new(num(report.reached_one, display)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![Cell::new("Failed"), failed_cell]);
    println!("{}", table);

    if report.failures.is_empty() {
        return;
    }

    let mut failures = Table::new();
    failures
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    failures.set_header(vec![
        Cell::new("Start").add_attribute(Attribute::Bold),
        Cell::new("Reason").fg(Color::Red),
    ]);
    for f in report.failures.iter().take(MAX_FAILURE_ROWS) {
        failures.add_row(vec![Cell::new(num(f.start, display)), Cell::new(&f.reason)]);
    }
    if report.failures.len() > MAX_FAILURE_ROWS {
        failures.add_row(vec![
            Cell::new("..."),
            Cell::new(format!(
                "{} more not shown",
                report.failures.len() - MAX_FAILURE_ROWS
            )),
        ]);
    }
    println!("\n{}", failures);
}
