use anstyle::AnsiColor;
use anyhow::Result;
use clap::crate_name;
use clap::crate_version;
use sweep_lib::constants::style_from_fg;
use sweep_lib::constants::ERROR_STYLE;
use sweep_lib::constants::HELP_STYLE;
use sweep_lib::constants::PRIMARY_STYLE;
use sweep_lib::constants::SECONDARY_STYLE;

/// Util function for getting the style for the CLI
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// Pretty print sweep's version.
pub fn print_version(script: bool) {
    if script {
        println!("{} {}", crate_name!(), crate_version!());

        return;
    }

    println!(
        "{}{}{:#} at version {}{}{:#}",
        PRIMARY_STYLE,
        crate_name!(),
        PRIMARY_STYLE,
        SECONDARY_STYLE,
        crate_version!(),
        SECONDARY_STYLE,
    );
}

/// Util function: formatting a table for printing
///
/// input: Vec of rows, each row is a Vec of strings (columns)
///
/// output: String
pub fn format_table(rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut widths = vec![0; rows[0].len()];
    for row in &rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.len());
        }
    }

    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .map(|(col, cell)| format!("{cell:<width$}", width = widths[col]))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ask the user a yes/no question
pub fn query_yes_no(question: &str) -> Result<bool> {
    let response = inquire::Confirm::new(&format!("{question} [y/n]: ")).prompt()?;
    Ok(response)
}

#[cfg(test)]
#[path = "tests/printing.rs"]
mod tests;
