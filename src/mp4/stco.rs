use super::r#box::find_box;
use crate::bits::reader::SliceReader;
use crate::errors::{Mp4Error, Mp4Result};

/// Parse stco (chunk offset) or co64 box from an stbl payload
pub fn parse_stco_or_co64(stbl: &[u8]) -> Mp4Result<Vec<u64>> {
    // Try stco first (32-bit offsets)
    if let Some(stco) = find_box(stbl, "stco") {
        let mut r = SliceReader::new(stco);
        let entry_count = read_entry_count(&mut r, "stco")?;
        check_entries(stco, entry_count, 4, "stco")?;
        return Ok((0..entry_count)
            .map_while(|_| r.read_u32().map(u64::from))
            .collect());
    }

    // Try co64 (64-bit offsets)
    if let Some(co64) = find_box(stbl, "co64") {
        let mut r = SliceReader::new(co64);
        let entry_count = read_entry_count(&mut r, "co64")?;
        check_entries(co64, entry_count, 8, "co64")?;
        return Ok((0..entry_count).map_while(|_| r.read_u64()).collect());
    }

    Err(Mp4Error::new(
        "No chunk offset box found: missing both stco and co64",
    ))
}

fn read_entry_count(r: &mut SliceReader<'_>, name: &str) -> Mp4Result<u32> {
    r.skip(4)
        .and_then(|_| r.read_u32())
        .ok_or_else(|| Mp4Error::new(format!("{} box too small: expected at least 8 bytes", name)))
}

fn check_entries(data: &[u8], entry_count: u32, width: usize, name: &str) -> Mp4Result<()> {
    let required_size = 8 + (entry_count as usize).saturating_mul(width);
    if required_size > data.len() {
        return Err(Mp4Error::new(format!(
            "{} box too small for {} entries: expected {} bytes, got {}",
            name,
            entry_count,
            required_size,
            data.len()
        )));
    }
    Ok(())
}
