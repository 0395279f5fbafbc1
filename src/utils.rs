use {super::*, anyhow::Context};

pub(crate) fn collapse_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses a score label such as `150 points` or `1 point`.
pub(crate) fn parse_points(text: &str) -> Result<u64> {
  let trimmed = text.trim();

  let number = trimmed
    .strip_suffix("points")
    .or_else(|| trimmed.strip_suffix("point"))
    .unwrap_or(trimmed)
    .trim_end();

  number
    .parse::<u64>()
    .with_context(|| format!("invalid vote count `{trimmed}`"))
}
