//! CSV export of paths and surface grids for external renderers.

use std::io::{self, Write};

use crate::types::Sample;

/// Writes `samples` as CSV with an `x,y,z` header, one sample per line.
pub fn write_csv<W: Write>(samples: &[Sample], mut writer: W) -> io::Result<()> {
    writeln!(writer, "x,y,z")?;
    for s in samples {
        writeln!(writer, "{},{},{}", s.x, s.y, s.z)?;
    }
    writer.flush()
}
