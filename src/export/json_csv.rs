// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::flatten;
use crate::models::GroupStandings;
use std::io::Write;

/// Pretty JSON, one object per group.
pub(crate) fn export_json<W: Write>(groups: &[GroupStandings], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, groups)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// CSV with a header row (from serde field names).
pub(crate) fn export_csv<W: Write>(groups: &[GroupStandings], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for item in flatten(groups) {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}
