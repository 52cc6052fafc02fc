use loc2gene::{Loc2GeneError, LocusTable};
use std::cmp::Ordering;

/// Builds a table from unsorted input and checks the (chr, beg, end)
/// ordering holds over the whole sequence.
#[test]
fn table_is_sorted_by_coordinate() {
    let text = "chr2\t500\t600\t+\t4\tD\tdelta\n\
                chr1\t300\t400\t-\t2\tB\tbeta\n\
                chr1\t100\t200\t+\t1\tA\talpha\n\
                chr10\t50\t80\t+\t3\tC\tgamma\n";
    let table = LocusTable::from_reader(text.as_bytes()).unwrap();

    assert_eq!(table.len(), 4);
    for pair in table.loci().windows(2) {
        assert_ne!(pair[0].cmp_by_coord(&pair[1]), Ordering::Greater);
    }

    // lexical chromosome order puts chr10 between chr1 and chr2
    let chrs: Vec<&str> = table.loci().iter().map(|l| l.chr.as_str()).collect();
    assert_eq!(chrs, vec!["chr1", "chr1", "chr10", "chr2"]);
}

/// Loci with an identical sort key keep their input order (stable sort).
#[test]
fn equal_keys_keep_insertion_order() {
    let text = "chr1\t100\t200\t+\t1\tFIRST\tfirst copy\n\
                chr1\t100\t200\t-\t2\tSECOND\tsecond copy\n";
    let table = LocusTable::from_reader(text.as_bytes()).unwrap();

    assert_eq!(table.get(0).symbol, "FIRST");
    assert_eq!(table.get(1).symbol, "SECOND");
}

/// A reference line with fewer than 7 fields aborts table construction.
#[test]
fn short_line_is_fatal() {
    let text = "chr1\t100\t200\t+\t1\tA\talpha\n\
                chr1\t300\t400\t+\t2\n";
    let err = LocusTable::from_reader(text.as_bytes()).unwrap_err();

    match err {
        Loc2GeneError::MalformedLocus { found, .. } => assert_eq!(found, 5),
        other => panic!("unexpected error: {other}"),
    }
}

/// Non-numeric BEGIN/END/GENE_ID fields silently parse to 0.
#[test]
fn non_numeric_fields_become_zero() {
    let text = "chr1\tstart\tstop\t+\tid\tA\talpha\n";
    let table = LocusTable::from_reader(text.as_bytes()).unwrap();

    let locus = table.get(0);
    assert_eq!(locus.beg, 0);
    assert_eq!(locus.end, 0);
    assert_eq!(locus.gene_id, 0);
}

/// Columns past the seventh are ignored, an empty strand degrades to '.'.
#[test]
fn extra_columns_and_empty_strand() {
    let text = "chr1\t100\t200\t\t7\tA\talpha\textra\tcolumns\n";
    let table = LocusTable::from_reader(text.as_bytes()).unwrap();

    let locus = table.get(0);
    assert_eq!(locus.strand, '.');
    assert_eq!(locus.gene_id, 7);
    assert_eq!(locus.description, "alpha");
}
