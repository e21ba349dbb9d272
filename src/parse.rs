use memsim_error::{errinput, Result};
use simulator::PageId;

/// Splits every argument on whitespace, so `1 2 3` and `"1 2 3"` read the same.
pub(crate) fn parse_pages(args: &[String]) -> Result<Vec<PageId>> {
    args.iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::parse)
        .collect()
}

/// Parses whitespace- or comma-separated sizes, each a positive integer.
pub(crate) fn parse_sizes(raw: &str) -> Result<Vec<u64>> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_positive)
        .collect()
}

pub(crate) fn parse_positive(token: &str) -> Result<u64> {
    match token.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as u64),
        Ok(n) => errinput!("{} is not a positive number", n),
        Err(_) => errinput!("{:?} is not a number", token),
    }
}
