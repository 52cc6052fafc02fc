//! # loc2gene
//!
//! Annotates genomic coordinate ranges with overlapping gene loci.
//!
//! This library loads a reference table of gene loci (chromosome, begin,
//! end, strand, gene id, symbol, description), sorts it by coordinate, and
//! resolves query ranges against it: each boundary of a `CHR:BEGIN-END`
//! range is mapped to the locus whose interval contains it, if any.
//!
//! Resolution is two-tiered. A binary search over the sorted table answers
//! most queries in logarithmic time, but its ordering is only reliable when
//! loci on a chromosome do not overlap; a miss therefore retries with an
//! exhaustive linear scan, so overlapping and nested loci are still found.
//! Whichever path hits first picks the answer (first match, never all
//! matches).
//!
//! ## Usage
//!
//! ```rust, ignore
//! use loc2gene::{run, Config};
//! use loc2gene::cli::InputFormat;
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     input: PathBuf::from("regions.txt"),
//!     loci: PathBuf::from("loci.tsv"),
//!     format: InputFormat::Plain,
//!     output: Some(PathBuf::from("annotated.txt")),
//!     verbose: false,
//! };
//!
//! let stats = run(&config)?;
//! println!(
//!     "annotated {} lines ({} scan fallbacks) in {:?}",
//!     stats.annotated, stats.fallbacks, stats.elapsed
//! );
//! ```
//!
//! Lower-level pieces are public as well:
//!
//! ```rust, ignore
//! use loc2gene::{Lookup, LocusTable};
//!
//! let table = LocusTable::from_path("loci.tsv")?;
//! let lookup = Lookup::new(&table);
//! let hit = lookup.find(58_350_000, "chr19");
//! ```

pub mod annotate;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod locus;
pub mod lookup;
pub mod memory;
pub mod query;

pub use annotate::{annotate, run, Counts, RunStats};
pub use cli::{Args, InputFormat};
pub use config::Config;
pub use error::{Loc2GeneError, Result};
pub use locus::{Locus, LocusTable};
pub use lookup::Lookup;
pub use memory::peak_rss_mb;
pub use query::QuerySpan;
