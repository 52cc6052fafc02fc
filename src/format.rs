//! Output rendering for the three supported layouts.
//!
//! These writers are thin consumers of the lookup result: they take the
//! resolved boundary indices `(ibeg, iend)` and re-emit the input line in
//! the requested shape. `n/a` marks a query whose boundaries matched no
//! locus at all.

use crate::locus::LocusTable;
use std::io::{self, Write};

/// Plain layout: leading input field, then the joined symbol cell. All
/// remaining input columns are dropped.
pub fn write_plain<W: Write>(
    writer: &mut W,
    table: &LocusTable,
    fields: &[&str],
    ibeg: Option<usize>,
    iend: Option<usize>,
) -> io::Result<()> {
    writeln!(writer, "{}\t{}", fields[0], symbol_cell(table, ibeg, iend))
}

/// GCT layout: leading field, the joined symbol cell in place of the
/// original description column, then every column from index 2 on verbatim.
pub fn write_gct<W: Write>(
    writer: &mut W,
    table: &LocusTable,
    fields: &[&str],
    ibeg: Option<usize>,
    iend: Option<usize>,
) -> io::Result<()> {
    write!(writer, "{}\t{}", fields[0], symbol_cell(table, ibeg, iend))?;
    for field in fields.iter().skip(2) {
        write!(writer, "\t{}", field)?;
    }
    writeln!(writer)
}

/// topTable layout: the original line with gene id, symbol and description
/// appended. Boundaries resolving to two different loci join the values with
/// `|`; a single resolved boundary (or both on the same locus) appends plain
/// values; no resolution appends `n/a` in all three columns.
pub fn write_top_table<W: Write>(
    writer: &mut W,
    table: &LocusTable,
    line: &str,
    ibeg: Option<usize>,
    iend: Option<usize>,
) -> io::Result<()> {
    match (ibeg, iend) {
        (None, None) => writeln!(writer, "{}\tn/a\tn/a\tn/a", line),
        (Some(i), Some(j)) if i != j => {
            let a = table.get(i);
            let b = table.get(j);
            writeln!(
                writer,
                "{}\t{}|{}\t{}|{}\t{}|{}",
                line, a.gene_id, b.gene_id, a.symbol, b.symbol, a.description, b.description
            )
        }
        (Some(i), _) | (None, Some(i)) => {
            let locus = table.get(i);
            writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                line, locus.gene_id, locus.symbol, locus.description
            )
        }
    }
}

/// Header line for topTable output: fixed annotation column names appended
/// to the original header.
pub fn write_top_table_header<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writeln!(writer, "{}\tGENE\tSYMBOL\tDESCRIPTION", line)
}

/// Joins the boundary symbols into one cell: `SYM`, `SYM|SYM` when the
/// boundaries hit two different loci, or `n/a` when neither resolved.
fn symbol_cell(table: &LocusTable, ibeg: Option<usize>, iend: Option<usize>) -> String {
    let mut cell = String::new();

    if let Some(i) = ibeg {
        cell.push_str(&table.get(i).symbol);
    }
    if let Some(j) = iend {
        if ibeg != Some(j) {
            if ibeg.is_some() {
                cell.push('|');
            }
            cell.push_str(&table.get(j).symbol);
        }
    }
    if ibeg.is_none() && iend.is_none() {
        cell.push_str("n/a");
    }

    cell
}
