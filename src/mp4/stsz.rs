use super::r#box::find_box;
use crate::bits::reader::SliceReader;
use crate::errors::{Mp4Error, Mp4Result};

/// Parse stsz (sample size) box from an stbl payload.
///
/// A constant sample size is expanded per sample, so the declared total is
/// first checked against `data_len`, the size of the file.
pub fn parse_stsz(stbl: &[u8], data_len: u64) -> Mp4Result<Vec<u32>> {
    let stsz = find_box(stbl, "stsz")
        .ok_or_else(|| Mp4Error::new("stsz box not found in stbl box"))?;

    let mut r = SliceReader::new(stsz);
    let (sample_size, sample_count) = r
        .skip(4)
        .and_then(|_| Some((r.read_u32()?, r.read_u32()?)))
        .ok_or_else(|| Mp4Error::new("stsz box too small: expected at least 12 bytes"))?;

    if sample_size != 0 {
        let total = sample_size as u64 * sample_count as u64;
        if total > data_len {
            return Err(Mp4Error::new(format!(
                "stsz declares {} samples of {} bytes, more than the {} byte file",
                sample_count, sample_size, data_len
            )));
        }
        // All samples have the same size
        return Ok(vec![sample_size; sample_count as usize]);
    }

    let required_size = 12 + (sample_count as usize).saturating_mul(4);
    if required_size > stsz.len() {
        return Err(Mp4Error::new(format!(
            "stsz box too small for {} samples: expected {} bytes, got {}",
            sample_count,
            required_size,
            stsz.len()
        )));
    }

    Ok((0..sample_count).map_while(|_| r.read_u32()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mp4::r#box::write_box_header;

    fn stsz_box(payload: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        write_box_header(&mut buf, "stsz", (payload.len() + 8) as u32);
        buf.extend_from_slice(payload);
        buf
    }

    #[test]
    fn test_constant_sample_size() {
        let stbl = stsz_box(&[0, 0, 0, 0, 0, 0, 0, 12, 0, 0, 0, 3]);
        assert_eq!(parse_stsz(&stbl, 1024).unwrap(), vec![12, 12, 12]);
    }

    #[test]
    fn test_individual_sample_sizes() {
        let stbl = stsz_box(&[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, // version, size 0, count 2
            0, 0, 0, 35, 0, 0, 0, 0,
        ]);
        assert_eq!(parse_stsz(&stbl, 1024).unwrap(), vec![35, 0]);
    }

    #[test]
    fn test_constant_size_larger_than_file() {
        let stbl = stsz_box(&[0, 0, 0, 0, 0, 0, 0, 1, 0xff, 0xff, 0xff, 0xff]);
        let err = parse_stsz(&stbl, 4096).unwrap_err();
        assert!(err.to_string().contains("4294967295 samples"), "{}", err);

        let stbl = stsz_box(&[0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 16]);
        assert!(parse_stsz(&stbl, 4096).is_ok());
        assert!(parse_stsz(&stbl, 4095).is_err());
    }

    #[test]
    fn test_missing_stsz() {
        assert!(parse_stsz(&[], 1024).is_err());
    }
}
