//! Final bin contents as CSV.

use std::io::Write;

use bb_engine::Registry;
use csv::Writer;

use crate::OutputResult;

/// Write `bin,position,chip` rows for every bin in `registry`.
///
/// Bins appear in ascending id order; within a bin, chips keep the order in
/// which they arrived (`position` counts from 0).
pub fn write_bins_csv<W: Write>(registry: &Registry, inner: W) -> OutputResult<()> {
    let mut writer = Writer::from_writer(inner);
    writer.write_record(["bin", "position", "chip"])?;
    for bin in registry.bin_ids() {
        for (position, chip) in registry.bin(bin).iter().enumerate() {
            writer.write_record(&[
                bin.0.to_string(),
                position.to_string(),
                chip.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}
