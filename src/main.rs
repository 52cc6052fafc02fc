//! # loc2gene
//!
//! Annotates genomic coordinate ranges with overlapping gene loci.
//!
//! ## Features
//!
//! - Resolves `CHR:BEGIN-END` ranges against a sorted reference locus table
//! - Binary-search lookup with an exhaustive-scan fallback for overlapping
//!   loci
//! - Plain, GCT and topTable input/output layouts with format-aware header
//!   handling
//! - Malformed query lines are skipped and reported, malformed reference
//!   lines abort the run
//!
//! ## Usage
//!
//! ```bash
//! loc2gene -i <INPUT> -l <LOCI> [OPTIONS]
//!
//! Required arguments:
//!   -i, --input <INPUT>    Path to query file with CHR:BEGIN-END coordinates
//!   -l, --loci <LOCI>      Path to reference locus table (7 tab-delimited
//!                          columns: CHR BEGIN END STRAND GENE_ID SYMBOL
//!                          DESCRIPTION)
//!
//! Optional arguments:
//!   -f, --format <FORMAT>  Input format (plain, gct, top-table) [default: plain]
//!   -o, --output <OUTPUT>  Path to output file [default: stdout]
//!   -v, --verbose          Show more information
//!   -h, --help             Print help
//!   -V, --version          Print version
//! ```
//!
//! ## Examples
//!
//! ### Annotate a plain coordinate list
//!
//! ```bash
//! loc2gene -i regions.txt -l loci.tsv
//! ```
//!
//! ### Annotate a GCT expression matrix in place of its description column
//!
//! ```bash
//! loc2gene -i matrix.gct -l loci.tsv -f gct -o matrix.annotated.gct
//! ```
//!
//! ### Append gene annotation columns to a limma topTable
//!
//! ```bash
//! loc2gene -i toptable.txt -l loci.tsv -f top-table -v
//! ```
use clap::Parser;
use log::Level;
use loc2gene::{run, Args, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { Level::Debug } else { Level::Info };
    simple_logger::init_with_level(level)?;
    log::debug!("{:?}", args);

    args.check()?;
    let config = Config::from_args(&args);

    let stats = run(&config)?;
    log::info!(
        "annotated {} lines ({} skipped, {} scan fallbacks)",
        stats.annotated,
        stats.skipped,
        stats.fallbacks
    );
    log::info!("Elapsed: {:.4?} secs", stats.elapsed.as_secs_f32());
    log::info!("Memory: {:.2} MB", stats.mem_delta_mb);

    Ok(())
}
