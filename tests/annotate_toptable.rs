use indoc::indoc;
use loc2gene::cli::InputFormat;
use loc2gene::{annotate, LocusTable};

const LOCI: &str = "chr1\t100\t200\t+\t11\tA\talpha gene\n\
                    chr1\t500\t600\t-\t22\tB\tbeta gene\n";

fn annotate_top_table(input: &str) -> String {
    let table = LocusTable::from_reader(LOCI.as_bytes()).unwrap();
    let mut out = Vec::new();
    annotate(input.as_bytes(), &table, InputFormat::TopTable, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// The topTable header gains the three fixed annotation column names; data
/// lines read their coordinate from the second column and append gene id,
/// symbol and description.
#[test]
fn top_table_header_and_single_locus() {
    let input = indoc! {"
        ID\tcoord\tlogFC\tP.Value
        probe1\tchr1:150-180\t1.3\t0.001
    "};

    let output = annotate_top_table(input);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "ID\tcoord\tlogFC\tP.Value\tGENE\tSYMBOL\tDESCRIPTION");
    assert_eq!(
        lines[1],
        "probe1\tchr1:150-180\t1.3\t0.001\t11\tA\talpha gene"
    );
}

/// Boundaries landing on two different loci join all three appended columns
/// with a pipe.
#[test]
fn top_table_straddling_range_joins_columns() {
    let input = indoc! {"
        ID\tcoord\tlogFC
        probe1\tchr1:150-550\t2.0
    "};

    let output = annotate_top_table(input);
    let last = output.lines().last().unwrap();
    assert_eq!(
        last,
        "probe1\tchr1:150-550\t2.0\t11|22\tA|B\talpha gene|beta gene"
    );
}

/// Only one boundary resolving appends the single matching triple.
#[test]
fn top_table_one_sided_resolution() {
    let input = indoc! {"
        ID\tcoord\tlogFC
        probe1\tchr1:50-150\t0.5
        probe2\tchr1:550-900\t0.7
    "};

    let output = annotate_top_table(input);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "probe1\tchr1:50-150\t0.5\t11\tA\talpha gene");
    assert_eq!(lines[2], "probe2\tchr1:550-900\t0.7\t22\tB\tbeta gene");
}

/// No resolution on either boundary appends n/a in all three columns.
#[test]
fn top_table_unresolved_is_na_triple() {
    let input = indoc! {"
        ID\tcoord\tlogFC
        probe1\tchrX:10-20\t0.0
    "};

    let output = annotate_top_table(input);
    let last = output.lines().last().unwrap();
    assert_eq!(last, "probe1\tchrX:10-20\t0.0\tn/a\tn/a\tn/a");
}

/// A data line without a second column cannot carry a coordinate and is
/// skipped.
#[test]
fn top_table_line_without_coordinate_column_is_skipped() {
    let input = indoc! {"
        ID\tcoord\tlogFC
        loneprobe
        probe2\tchr1:150-150\t0.9
    "};

    let table = LocusTable::from_reader(LOCI.as_bytes()).unwrap();
    let mut out = Vec::new();
    let counts = annotate(input.as_bytes(), &table, InputFormat::TopTable, &mut out).unwrap();

    assert_eq!(counts.annotated, 1);
    assert_eq!(counts.skipped, 1);
    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output.lines().last().unwrap(),
        "probe2\tchr1:150-150\t0.9\t11\tA\talpha gene"
    );
}
