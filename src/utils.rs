/// Number of injective maps from a k-set into an n-set, n!/(n-k)!, saturating
/// at `usize::MAX`. This is the unpruned size of the search space.
pub fn num_permutations(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    (n - k + 1..=n).fold(1usize, |acc, factor| acc.saturating_mul(factor))
}

/// clap value parser for edge probabilities in `[0, 1]`
pub fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !(0.0..=1.0).contains(&p) {
        return Err(format!("probability must be in [0,1], got {}", p));
    }
    Ok(p)
}

/// clap value parser for sweep cases written as `HOST:PATTERN`, e.g. `10:5`
pub fn parse_case(s: &str) -> Result<(usize, usize), String> {
    let (host, pattern) = s
        .split_once(':')
        .ok_or_else(|| format!("expected HOST:PATTERN, got '{}'", s))?;
    let host = host
        .trim()
        .parse()
        .map_err(|_| format!("invalid host vertex count '{}'", host))?;
    let pattern = pattern
        .trim()
        .parse()
        .map_err(|_| format!("invalid pattern vertex count '{}'", pattern))?;
    Ok((host, pattern))
}

/// Render a mapping as `0 -> 2, 1 -> 3, ...`
pub fn format_mapping(mapping: &[usize]) -> String {
    mapping
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{} -> {}", i, v))
        .collect::<Vec<_>>()
        .join(", ")
}
