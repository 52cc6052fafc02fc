use indoc::indoc;
use loc2gene::cli::InputFormat;
use loc2gene::{annotate, LocusTable};

const LOCI: &str = "chr1\t100\t200\t+\t1\tA\talpha\n\
                    chr1\t500\t600\t-\t2\tB\tbeta\n";

fn annotate_gct(input: &str) -> String {
    let table = LocusTable::from_reader(LOCI.as_bytes()).unwrap();
    let mut out = Vec::new();
    annotate(input.as_bytes(), &table, InputFormat::Gct, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// The three GCT header lines pass through untouched; data lines get the
/// symbol cell in place of the description column and keep every expression
/// value verbatim.
#[test]
fn gct_headers_pass_through_and_values_survive() {
    let input = indoc! {"
        #1.2
        2\t3
        NAME\tDescription\ts1\ts2\ts3
        chr1:150-150\told desc\t1.5\t2.5\t3.5
        chr1:150-550\told desc\t4.0\t5.0\t6.0
    "};

    let output = annotate_gct(input);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "#1.2");
    assert_eq!(lines[1], "2\t3");
    assert_eq!(lines[2], "NAME\tDescription\ts1\ts2\ts3");
    assert_eq!(lines[3], "chr1:150-150\tA\t1.5\t2.5\t3.5");
    assert_eq!(lines[4], "chr1:150-550\tA|B\t4.0\t5.0\t6.0");
}

/// A data line whose range matches nothing carries n/a in the symbol cell.
#[test]
fn gct_unresolved_range_is_na() {
    let input = indoc! {"
        #1.2
        1\t2
        NAME\tDescription\ts1\ts2
        chrX:10-20\told desc\t0.1\t0.2
    "};

    let output = annotate_gct(input);
    let last = output.lines().last().unwrap();
    assert_eq!(last, "chrX:10-20\tn/a\t0.1\t0.2");
}

/// Only the end boundary resolving still yields a single symbol, no pipe.
#[test]
fn gct_end_only_resolution_has_no_pipe() {
    let input = indoc! {"
        #1.2
        1\t1
        NAME\tDescription\ts1
        chr1:50-150\told desc\t9.9
    "};

    let output = annotate_gct(input);
    let last = output.lines().last().unwrap();
    assert_eq!(last, "chr1:50-150\tA\t9.9");
}
