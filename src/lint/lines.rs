//! Process output decoding.

use super::source::ProcessSource;
use crate::error::Result;

/// Drain a process source's standard output into ordered text lines.
///
/// All-or-nothing: any fault from the source propagates unchanged and no
/// partial result is returned. The lines keep emission order and carry no
/// trailing-newline artifacts. Ownership of the buffered output gives
/// deterministic release of the stream on both paths.
pub fn lines_from<S: ProcessSource>(source: &S) -> Result<Vec<String>> {
    let output = source.output()?;
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect())
}
