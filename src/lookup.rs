use crate::locus::LocusTable;
use std::cell::Cell;
use std::cmp::Ordering;

/// Point-containment lookup over a sorted [`LocusTable`].
///
/// Resolution is two-tiered. The primary path is a binary search over the
/// `(chr, beg, end)` ordering; it is fast but only guaranteed correct when
/// intervals on a chromosome do not overlap. When intervals overlap, the
/// midpoint walk can step past the only containing locus and report a miss.
/// Every binary-search miss therefore retries with an exhaustive linear scan,
/// which is complete. The number of scans that recovered a match after a
/// probe miss is tracked and can be read back with [`Lookup::fallbacks`];
/// a growing count is the signal that the reference set is overlap-heavy.
///
/// Whichever path succeeds first decides the answer: the engine returns the
/// first containing locus it happens to meet, never the innermost one and
/// never all of them. Downstream format consumers rely on that selection, so
/// it is kept as is.
///
/// # Example
///
/// ```rust, ignore
/// use loc2gene::{Lookup, LocusTable};
///
/// let table = LocusTable::from_path("loci.tsv")?;
/// let lookup = Lookup::new(&table);
///
/// if let Some(i) = lookup.find(58_350_000, "chr19") {
///     println!("{}", table.get(i).symbol);
/// }
/// ```
#[derive(Debug)]
pub struct Lookup<'a> {
    table: &'a LocusTable,
    fallbacks: Cell<usize>,
}

impl<'a> Lookup<'a> {
    /// Creates a lookup engine borrowing `table`.
    pub fn new(table: &'a LocusTable) -> Self {
        Self {
            table,
            fallbacks: Cell::new(0),
        }
    }

    /// Resolves `pos` on `chr` to the index of a containing locus.
    ///
    /// Tries the binary probe first and falls back to a single linear scan
    /// on a miss. Returns `None` only when no locus in the table contains
    /// the position.
    ///
    /// # Arguments
    ///
    /// * `pos` - Query position, compared inclusively against `[beg, end]`
    /// * `chr` - Chromosome name, matched by exact string equality
    ///
    /// # Returns
    ///
    /// Index of the first containing locus found, or `None`.
    pub fn find(&self, pos: i64, chr: &str) -> Option<usize> {
        if let Some(index) = self.probe(pos, chr) {
            return Some(index);
        }

        let index = self.scan(pos, chr)?;
        self.fallbacks.set(self.fallbacks.get() + 1);
        Some(index)
    }

    /// Binary search for a locus containing `pos` on `chr`.
    ///
    /// At each midpoint the query chromosome is compared lexically against
    /// the midpoint locus; on a chromosome match, containment in the closed
    /// interval returns immediately, otherwise the walk is steered by `pos`
    /// against the locus begin (ties go right).
    ///
    /// Known limitation: the table is sorted by `(chr, beg, end)`, which
    /// does not make same-chromosome intervals disjoint. A long interval
    /// sorted early can contain `pos` while the
    /// midpoint walk steers into later, shorter intervals and exhausts the
    /// range, so a `None` here does NOT prove absence. [`Lookup::find`]
    /// layers the exhaustive scan on top for exactly this case.
    pub fn probe(&self, pos: i64, chr: &str) -> Option<usize> {
        let mut lo: isize = 0;
        let mut hi: isize = self.table.len() as isize - 1;

        while lo <= hi {
            let mid = ((lo + hi) / 2) as usize;
            let locus = self.table.get(mid);

            let mut ord = chr.cmp(&locus.chr);
            if ord == Ordering::Equal {
                if locus.contains(pos) {
                    return Some(mid);
                }
                ord = pos.cmp(&locus.beg);
            }

            if ord == Ordering::Less {
                hi = mid as isize - 1;
            } else {
                lo = mid as isize + 1;
            }
        }

        None
    }

    /// Exhaustive front-to-back scan for a locus containing `pos` on `chr`.
    ///
    /// Complete but O(n): returns the first containing locus in sorted
    /// order, or `None` when the table truly holds no match.
    pub fn scan(&self, pos: i64, chr: &str) -> Option<usize> {
        self.table
            .loci()
            .iter()
            .position(|locus| locus.chr == chr && locus.contains(pos))
    }

    /// Number of resolutions where the linear scan recovered a match after
    /// the binary probe missed.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks.get()
    }
}
