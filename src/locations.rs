use super::*;

/// Loads `lat,lng,name,description` records. Blank lines and lines starting
/// with `#` are skipped.
pub(crate) fn load(path: &Utf8Path) -> Result<Vec<Location>> {
  let csv = fs::read_to_string(path).context(error::Io { path })?;

  csv
    .lines()
    .enumerate()
    .filter(|(_i, line)| !line.trim().is_empty() && !line.starts_with('#'))
    .map(|(i, line)| {
      line
        .parse::<Location>()
        .context(error::Location { line: i + 1, path })
    })
    .collect()
}
