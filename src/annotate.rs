use crate::cli::InputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::format;
use crate::locus::LocusTable;
use crate::lookup::Lookup;
use crate::memory::peak_rss_mb;
use crate::query::QuerySpan;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::time::{Duration, Instant};

/// Summary statistics for an annotation run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Wall clock time spent in the run.
    pub elapsed: Duration,
    /// Delta in maximum RSS memory usage, in MB.
    pub mem_delta_mb: f64,
    /// Data lines annotated and written.
    pub annotated: usize,
    /// Lines skipped because no coordinate token could be parsed.
    pub skipped: usize,
    /// Boundary resolutions recovered by the linear-scan fallback.
    pub fallbacks: usize,
}

/// Line counters accumulated while annotating one input stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counts {
    /// Data lines annotated and written.
    pub annotated: usize,
    /// Lines skipped because no coordinate token could be parsed.
    pub skipped: usize,
    /// Boundary resolutions recovered by the linear-scan fallback.
    pub fallbacks: usize,
}

/// Runs an annotation with the provided configuration.
///
/// Loads and sorts the reference table, then streams the query file line by
/// line: header lines pass through according to the input format, each data
/// line has both range boundaries resolved against the table, and the
/// annotated line is written to the configured output (stdout by default).
///
/// # Arguments
///
/// * `config` - Configuration containing all annotation parameters
///
/// # Returns
///
/// Returns RunStats containing timing, memory and line-count information.
///
/// # Errors
///
/// Returns an error when the reference table is malformed (any line with
/// fewer than 7 fields) or on I/O failure. A table error aborts the run
/// before any output is written.
///
/// # Example
///
/// ```rust, ignore
/// use loc2gene::{run, Config};
/// use loc2gene::cli::InputFormat;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("regions.txt"),
///     loci: PathBuf::from("loci.tsv"),
///     format: InputFormat::Plain,
///     output: None,
///     verbose: false,
/// };
/// let stats = run(&config)?;
/// println!("annotated {} lines", stats.annotated);
/// ```
pub fn run(config: &Config) -> Result<RunStats> {
    let start = Instant::now();
    let start_mem = peak_rss_mb();

    let table = LocusTable::from_path(&config.loci)?;
    log::info!("loaded {} loci from {}", table.len(), config.loci.display());

    let reader = BufReader::new(File::open(&config.input)?);
    let counts = match &config.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            let counts = annotate(reader, &table, config.format, &mut writer)?;
            writer.flush()?;
            counts
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let counts = annotate(reader, &table, config.format, &mut writer)?;
            writer.flush()?;
            counts
        }
    };

    let elapsed = start.elapsed();
    let mem_delta = (peak_rss_mb() - start_mem).max(0.0);

    Ok(RunStats {
        elapsed,
        mem_delta_mb: mem_delta,
        annotated: counts.annotated,
        skipped: counts.skipped,
        fallbacks: counts.fallbacks,
    })
}

/// Annotates one input stream against a loaded reference table.
///
/// Exposed separately from [`run`] so callers can annotate in-memory data or
/// capture output without touching the filesystem.
///
/// # Errors
///
/// Returns an error on I/O failure; malformed data lines are skipped with a
/// warning instead of failing the stream.
pub fn annotate<R: BufRead, W: Write>(
    reader: R,
    table: &LocusTable,
    format: InputFormat,
    writer: &mut W,
) -> Result<Counts> {
    let lookup = Lookup::new(table);
    let mut counts = Counts::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;

        if lineno < format.header_lines() {
            match format {
                InputFormat::TopTable => format::write_top_table_header(writer, &line)?,
                _ => writeln!(writer, "{}", line)?,
            }
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let span = fields
            .get(format.coord_column())
            .and_then(|token| QuerySpan::parse(token));
        let span = match span {
            Some(span) => span,
            None => {
                log::warn!("skip line: {}", line);
                counts.skipped += 1;
                continue;
            }
        };

        let (ibeg, iend) = resolve(&lookup, &span);
        match format {
            InputFormat::Plain => format::write_plain(writer, table, &fields, ibeg, iend)?,
            InputFormat::Gct => format::write_gct(writer, table, &fields, ibeg, iend)?,
            InputFormat::TopTable => format::write_top_table(writer, table, &line, ibeg, iend)?,
        }
        counts.annotated += 1;
    }

    counts.fallbacks = lookup.fallbacks();
    Ok(counts)
}

/// Resolves both boundaries of a query range, logging every resolution the
/// linear scan had to recover after a binary-probe miss.
fn resolve(lookup: &Lookup<'_>, span: &QuerySpan) -> (Option<usize>, Option<usize>) {
    let ibeg = find_logged(lookup, span, span.beg, "ibeg");
    let iend = find_logged(lookup, span, span.end, "iend");
    (ibeg, iend)
}

/// Single-boundary resolution with the scan-recovery notice.
fn find_logged(
    lookup: &Lookup<'_>,
    span: &QuerySpan,
    pos: i64,
    label: &str,
) -> Option<usize> {
    let before = lookup.fallbacks();
    let index = lookup.find(pos, &span.chr);

    if let Some(index) = index {
        if lookup.fallbacks() > before {
            log::debug!(
                "applied scan to find locus: chr={}\tbeg={}\tend={}\t-->\t{}={}",
                span.chr,
                span.beg,
                span.end,
                label,
                index
            );
        }
    }

    index
}
