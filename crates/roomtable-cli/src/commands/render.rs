//! CSV rendering command implementation.

use crate::cli::CsvArgs;
use crate::error::Result;
use crate::output;

/// Execute the csv command: render a stored room-table JSON file as CSV.
pub fn execute_render_csv(args: CsvArgs) -> Result<()> {
    let table = output::read_json(&args.input)?;

    let out = args.out.unwrap_or_else(|| args.input.with_extension("csv"));
    output::write_csv(&table, &out)?;

    println!("Wrote {} row(s) to {}", table.len(), out.display());
    Ok(())
}
