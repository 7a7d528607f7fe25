//! Subcommand implementations.

use anyhow::{Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use tracing::debug;

use roman_model::symbol::SUBTRACTIVE_GROUPS;
use roman_model::{Numeral, is_canonical};

use crate::cli::{CheckArgs, DecodeArgs, EncodeArgs};

pub fn run_encode(args: &EncodeArgs) -> Result<()> {
    let numeral = Numeral::from_int(args.value)?;
    debug!(value = args.value, numeral = %numeral, "encoded");
    println!("{numeral}");
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let numeral = Numeral::from_text(&args.numeral)?;
    if args.strict && !is_canonical(&args.numeral) {
        bail!(
            "'{}' is not in canonical form (canonical spelling of {} is {})",
            args.numeral,
            numeral.to_int(),
            numeral
        );
    }
    debug!(numeral = %args.numeral, value = numeral.to_int(), "decoded");
    println!("{}", numeral.to_int());
    Ok(())
}

/// Reports whether the input is canonical. The caller turns `false` into a
/// nonzero exit code.
pub fn run_check(args: &CheckArgs) -> bool {
    match Numeral::from_text(&args.numeral) {
        Ok(numeral) => {
            let canonical = numeral.to_roman() == args.numeral.to_uppercase();
            if canonical {
                println!("{} is canonical ({})", args.numeral, numeral.to_int());
            } else {
                println!(
                    "{} is not canonical (decodes to {}, canonical spelling {})",
                    args.numeral,
                    numeral.to_int(),
                    numeral
                );
            }
            canonical
        }
        Err(error) => {
            println!("{} is not a valid numeral: {}", args.numeral, error);
            false
        }
    }
}

pub fn run_table() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Symbol"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (symbol, value) in SUBTRACTIVE_GROUPS {
        table.add_row(vec![
            Cell::new(symbol),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
