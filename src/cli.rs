//! annotates genomic coordinate ranges with overlapping gene loci
//! Alejandro Gonzales-Irribarren, 2025

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(
    name = "loc2gene",
    version = env!("CARGO_PKG_VERSION"),
    author = "Alejandro Gonzales-Irribarren <alejandrxgzi@gmail.com>",
    about = "annotates genomic coordinate ranges with overlapping gene loci"
)]
pub struct Args {
    /// Query file with one coordinate string per data line.
    ///
    /// The coordinate string is CHR:BEGIN-END, separated by colon and dash.
    /// It sits in the first column for plain and gct input, in the second
    /// column for topTable input.
    #[clap(
        short = 'i',
        long = "input",
        help = "Path to query file with CHR:BEGIN-END coordinates",
        value_name = "INPUT",
        required = true
    )]
    pub input: PathBuf,

    /// Reference locus table, tab-delimited:
    /// CHR BEGIN END STRAND GENE_ID SYMBOL DESCRIPTION.
    #[clap(
        short = 'l',
        long = "loci",
        help = "Path to reference locus table (7 tab-delimited columns)",
        value_name = "LOCI",
        required = true
    )]
    pub loci: PathBuf,

    /// Input layout; decides header handling and the coordinate column.
    #[clap(
        short = 'f',
        long = "format",
        help = "Input format",
        value_name = "FORMAT",
        value_enum,
        default_value = "plain"
    )]
    pub format: InputFormat,

    /// Output filepath; annotated lines go to stdout when absent.
    #[clap(
        short = 'o',
        long = "output",
        help = "Path to output file [default: stdout]",
        value_name = "OUTPUT"
    )]
    pub output: Option<PathBuf>,

    /// Enables debug-level logging, including scan-fallback notices.
    #[clap(short = 'v', long = "verbose", help = "Show more information")]
    pub verbose: bool,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// Checks the query input file for validity. The file must exist and be
    /// non-empty.
    fn check_input(&self) -> Result<(), ArgError> {
        check_readable_file(&self.input).map_err(ArgError::InvalidInput)
    }

    /// Checks the reference locus file for validity. The file must exist and
    /// be non-empty.
    fn check_loci(&self) -> Result<(), ArgError> {
        check_readable_file(&self.loci).map_err(ArgError::InvalidLoci)
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_input()?;
        self.check_loci()?;
        Ok(())
    }
}

/// Ensures `path` names an existing, non-empty file.
fn check_readable_file(path: &PathBuf) -> Result<(), String> {
    let metadata =
        std::fs::metadata(path).map_err(|_| format!("file {:?} does not exist", path))?;
    if metadata.len() == 0 {
        return Err(format!("file {:?} is empty", path));
    }
    Ok(())
}

/// Supported input layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Coordinate string in column 1; only that column is echoed back.
    Plain,
    /// GCT matrix: 3 header lines, coordinate string in column 1, trailing
    /// columns reproduced verbatim.
    Gct,
    /// limma topTable: 1 header line, coordinate string in column 2, the
    /// whole line reproduced verbatim.
    TopTable,
}

impl InputFormat {
    /// Number of leading header lines passed through before annotation.
    pub fn header_lines(self) -> usize {
        match self {
            InputFormat::Plain => 0,
            InputFormat::Gct => 3,
            InputFormat::TopTable => 1,
        }
    }

    /// Zero-based column holding the coordinate string.
    pub fn coord_column(self) -> usize {
        match self {
            InputFormat::Plain | InputFormat::Gct => 0,
            InputFormat::TopTable => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// The query input file does not exist or is empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The reference locus file does not exist or is empty.
    #[error("Invalid loci: {0}")]
    InvalidLoci(String),
}
