use crate::error::{Loc2GeneError, Result};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A reference gene locus: a closed genomic interval plus annotation.
///
/// Coordinates are inclusive on both ends; `beg <= end` is assumed but not
/// validated. Non-numeric coordinate or gene-id fields silently parse to 0,
/// matching the lossy behavior downstream pipelines depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locus {
    pub chr: String,
    pub beg: i64,
    pub end: i64,
    pub strand: char,
    pub gene_id: i64,
    pub symbol: String,
    pub description: String,
}

impl Locus {
    /// Parses one tab-delimited reference line:
    /// `CHR  BEGIN  END  STRAND  GENE_ID  SYMBOL  DESCRIPTION`.
    ///
    /// Fewer than 7 fields is a fatal input error; extra fields are ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() < 7 {
            return Err(Loc2GeneError::MalformedLocus {
                line: line.to_string(),
                found: fields.len(),
            });
        }

        Ok(Self {
            chr: fields[0].to_string(),
            beg: fields[1].parse().unwrap_or(0),
            end: fields[2].parse().unwrap_or(0),
            strand: fields[3].chars().next().unwrap_or('.'),
            gene_id: fields[4].parse().unwrap_or(0),
            symbol: fields[5].to_string(),
            description: fields[6].to_string(),
        })
    }

    /// True when `pos` falls inside the closed interval `[beg, end]`.
    pub fn contains(&self, pos: i64) -> bool {
        pos >= self.beg && pos <= self.end
    }

    /// Three-part coordinate ordering: chromosome lexically, then begin,
    /// then end, all ascending.
    pub fn cmp_by_coord(&self, other: &Self) -> Ordering {
        self.chr
            .cmp(&other.chr)
            .then(self.beg.cmp(&other.beg))
            .then(self.end.cmp(&other.end))
    }
}

/// The in-memory reference table: all loci, sorted by `(chr, beg, end)`.
///
/// Built once at startup and never mutated afterwards. The sort key does not
/// make intervals disjoint; overlapping and nested loci on one chromosome are
/// kept as separate entries, which is exactly the case the lookup engine's
/// fallback path exists for.
///
/// # Example
///
/// ```rust, ignore
/// use loc2gene::LocusTable;
///
/// let table = LocusTable::from_path("loci.tsv")?;
/// assert!(!table.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct LocusTable {
    loci: Vec<Locus>,
}

impl LocusTable {
    /// Reads the reference table from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be opened or any line is
    /// malformed (fewer than 7 fields).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Self::from_reader(reader)
    }

    /// Reads the reference table from any buffered reader and sorts it.
    ///
    /// The sort is stable, so loci with an identical `(chr, beg, end)` key
    /// keep their input order. Empty lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or on the first malformed line; no
    /// partially built table is exposed.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut loci = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            loci.push(Locus::parse(&line)?);
        }

        loci.sort_by(Locus::cmp_by_coord);
        Ok(Self { loci })
    }

    /// Returns the locus at `index`.
    ///
    /// Indices handed out by the lookup engine are always in range.
    pub fn get(&self, index: usize) -> &Locus {
        &self.loci[index]
    }

    /// All loci in sorted order.
    pub fn loci(&self) -> &[Locus] {
        &self.loci
    }

    /// Number of loci in the table.
    pub fn len(&self) -> usize {
        self.loci.len()
    }

    /// True when the table holds no loci.
    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }
}
