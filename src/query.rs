/// One query coordinate range parsed from an input line.
///
/// Both boundaries live on the same chromosome and are resolved
/// independently against the reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpan {
    pub chr: String,
    pub beg: i64,
    pub end: i64,
}

impl QuerySpan {
    /// Parses a coordinate token of the form `CHR:BEGIN-END`.
    ///
    /// The token is split on `:` and `-` with empty pieces discarded, so
    /// `chr1:100-200` and `chr1::100--200` read the same. Fewer than three
    /// pieces yields `None`; the caller skips such lines. Non-numeric
    /// BEGIN/END values silently become 0 rather than failing, a
    /// compatibility behavior that must not be tightened.
    pub fn parse(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token
            .split([':', '-'])
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() < 3 {
            return None;
        }

        Some(Self {
            chr: parts[0].to_string(),
            beg: parts[1].parse().unwrap_or(0),
            end: parts[2].parse().unwrap_or(0),
        })
    }
}
