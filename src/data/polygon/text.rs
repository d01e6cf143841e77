// Point-list text format: one `x,y` pair per line.
use std::fmt;
use std::str::FromStr;

use super::Polygon;
use crate::data::point::parse_line;
use crate::Error;

/// Writes one `x,y` line per vertex, without a trailing newline.
impl fmt::Display for Polygon {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (idx, pt) in self.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{}", pt)?;
    }
    Ok(())
  }
}

/// Parses a point list. Blank lines are skipped; any other line that is not
/// two comma-separated integers fails with [`Error::MalformedPoint`].
///
/// The result is not validated, see [`Polygon::new_unchecked`].
impl FromStr for Polygon {
  type Err = Error;
  fn from_str(s: &str) -> Result<Polygon, Error> {
    let vertices = s
      .lines()
      .enumerate()
      .filter(|(_, line)| !line.trim().is_empty())
      .map(|(idx, line)| parse_line(line).ok_or(Error::MalformedPoint { line: idx + 1 }))
      .collect::<Result<Vec<_>, Error>>()?;
    Ok(Polygon::new_unchecked(vertices))
  }
}
