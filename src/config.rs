use crate::cli::{Args, InputFormat};
use std::path::PathBuf;

/// Normalized configuration for an annotation run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Query input path.
    pub input: PathBuf,
    /// Reference locus table path.
    pub loci: PathBuf,
    /// Input layout.
    pub format: InputFormat,
    /// Output path; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Emit debug-level diagnostics.
    pub verbose: bool,
}

impl Config {
    /// Builds an annotation config from CLI arguments.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use clap::Parser;
    /// use loc2gene::{Args, Config};
    ///
    /// let args = Args::parse();
    /// let config = Config::from_args(&args);
    /// ```
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.input.clone(),
            loci: args.loci.clone(),
            format: args.format,
            output: args.output.clone(),
            verbose: args.verbose,
        }
    }
}
