// src/vfs/archive.rs
//
// ZIP container parsing and building. Only the subset needed for a read-only
// entry list is implemented: stored (method 0) and deflate (method 8) entries,
// no zip64, no encryption.

use flate2::read::DeflateDecoder;
use flate2::Crc;
use std::io::Read;

use crate::vfs::types::{ArchiveEntry, VfsError};

const LOCAL_SIG: u32 = 0x0403_4b50; // PK\x03\x04
const CENTRAL_SIG: u32 = 0x0201_4b50; // PK\x01\x02
const EOCD_SIG: u32 = 0x0605_4b50; // PK\x05\x06

const EOCD_MIN_LEN: usize = 22;
const CENTRAL_HEADER_LEN: usize = 46;
const LOCAL_HEADER_LEN: usize = 30;

fn invalid(reason: impl Into<String>) -> VfsError {
    VfsError::ArchiveInvalid {
        reason: reason.into(),
    }
}

fn slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8], VfsError> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or_else(|| invalid("unexpected end of archive"))
}

fn read_u16(data: &[u8], offset: usize) -> Result<u16, VfsError> {
    let b = slice(data, offset, 2)?;
    Ok(u16::from_le_bytes([b[0], b[1]]))
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, VfsError> {
    let b = slice(data, offset, 4)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// Parse a ZIP archive into its flat entry list.
///
/// Walks the central directory (located via the end-of-central-directory
/// record, which may be followed by a comment) and reads each entry's data
/// through its local header. The CRC32 of every file entry is verified.
pub fn parse_archive(data: &[u8]) -> Result<Vec<ArchiveEntry>, VfsError> {
    let eocd = find_eocd(data)?;
    let total = read_u16(data, eocd + 10)? as usize;
    let cd_offset = read_u32(data, eocd + 16)? as usize;

    let mut entries = Vec::with_capacity(total);
    let mut pos = cd_offset;

    for _ in 0..total {
        if read_u32(data, pos)? != CENTRAL_SIG {
            return Err(invalid("bad central directory signature"));
        }
        let method = read_u16(data, pos + 10)?;
        let crc = read_u32(data, pos + 16)?;
        let comp_size = read_u32(data, pos + 20)? as usize;
        let name_len = read_u16(data, pos + 28)? as usize;
        let extra_len = read_u16(data, pos + 30)? as usize;
        let comment_len = read_u16(data, pos + 32)? as usize;
        let local_offset = read_u32(data, pos + 42)? as usize;

        let name_bytes = slice(data, pos + CENTRAL_HEADER_LEN, name_len)?;
        let path = String::from_utf8(name_bytes.to_vec())
            .map_err(|_| invalid("entry name is not valid UTF-8"))?;

        let content = read_entry_data(data, local_offset, method, comp_size)?;

        if !path.ends_with('/') {
            let mut check = Crc::new();
            check.update(&content);
            if check.sum() != crc {
                return Err(invalid(format!("CRC mismatch for '{}'", path)));
            }
        }

        entries.push(ArchiveEntry { path, content });
        pos += CENTRAL_HEADER_LEN + name_len + extra_len + comment_len;
    }

    Ok(entries)
}

/// Locate the end-of-central-directory record by scanning backwards over a
/// possible trailing comment (at most 64K per the format).
fn find_eocd(data: &[u8]) -> Result<usize, VfsError> {
    if data.len() < EOCD_MIN_LEN {
        return Err(invalid("too small to be a zip archive"));
    }
    let floor = data.len().saturating_sub(EOCD_MIN_LEN + u16::MAX as usize);
    let mut pos = data.len() - EOCD_MIN_LEN;
    loop {
        if read_u32(data, pos)? == EOCD_SIG {
            return Ok(pos);
        }
        if pos == floor {
            return Err(invalid("end of central directory not found"));
        }
        pos -= 1;
    }
}

/// Read and decompress one entry's bytes, starting from its local header.
/// The local header's own name/extra lengths are used to find the data start;
/// they may differ from the central directory's.
fn read_entry_data(
    data: &[u8],
    local_offset: usize,
    method: u16,
    comp_size: usize,
) -> Result<Vec<u8>, VfsError> {
    if read_u32(data, local_offset)? != LOCAL_SIG {
        return Err(invalid("bad local header signature"));
    }
    let name_len = read_u16(data, local_offset + 26)? as usize;
    let extra_len = read_u16(data, local_offset + 28)? as usize;
    let start = local_offset + LOCAL_HEADER_LEN + name_len + extra_len;
    let raw = slice(data, start, comp_size)?;

    match method {
        0 => Ok(raw.to_vec()),
        8 => {
            let mut decoder = DeflateDecoder::new(raw);
            let mut out = Vec::new();
            decoder
                .read_to_end(&mut out)
                .map_err(|e| invalid(format!("deflate error: {}", e)))?;
            Ok(out)
        }
        other => Err(invalid(format!("unsupported compression method {}", other))),
    }
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Build a stored-only ZIP archive from an entry list.
///
/// Used by the demo asset generator and by tests. All entries use method 0;
/// directory markers get the DOS directory attribute.
pub fn build_archive(entries: &[ArchiveEntry]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut central = Vec::new();

    for entry in entries {
        let offset = out.len() as u32;
        let mut crc = Crc::new();
        crc.update(&entry.content);
        let checksum = crc.sum();
        let name = entry.path.as_bytes();
        let size = entry.content.len() as u32;

        push_u32(&mut out, LOCAL_SIG);
        push_u16(&mut out, 20); // version needed
        push_u16(&mut out, 0); // flags
        push_u16(&mut out, 0); // method: stored
        push_u16(&mut out, 0); // mod time
        push_u16(&mut out, 0); // mod date
        push_u32(&mut out, checksum);
        push_u32(&mut out, size); // compressed
        push_u32(&mut out, size); // uncompressed
        push_u16(&mut out, name.len() as u16);
        push_u16(&mut out, 0); // extra
        out.extend_from_slice(name);
        out.extend_from_slice(&entry.content);

        push_u32(&mut central, CENTRAL_SIG);
        push_u16(&mut central, 20); // version made by
        push_u16(&mut central, 20); // version needed
        push_u16(&mut central, 0); // flags
        push_u16(&mut central, 0); // method
        push_u16(&mut central, 0); // mod time
        push_u16(&mut central, 0); // mod date
        push_u32(&mut central, checksum);
        push_u32(&mut central, size);
        push_u32(&mut central, size);
        push_u16(&mut central, name.len() as u16);
        push_u16(&mut central, 0); // extra
        push_u16(&mut central, 0); // comment
        push_u16(&mut central, 0); // disk
        push_u16(&mut central, 0); // internal attrs
        push_u32(&mut central, if entry.is_dir_marker() { 0x10 } else { 0 });
        push_u32(&mut central, offset);
        central.extend_from_slice(name);
    }

    let cd_offset = out.len() as u32;
    out.extend_from_slice(&central);

    push_u32(&mut out, EOCD_SIG);
    push_u16(&mut out, 0); // disk number
    push_u16(&mut out, 0); // central directory disk
    push_u16(&mut out, entries.len() as u16);
    push_u16(&mut out, entries.len() as u16);
    push_u32(&mut out, central.len() as u32);
    push_u32(&mut out, cd_offset);
    push_u16(&mut out, 0); // comment length
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::DeflateEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_parse_built_archive() {
        let entries = vec![
            ArchiveEntry::new("readme.txt", b"hello\n".to_vec()),
            ArchiveEntry::new("docs/", Vec::new()),
            ArchiveEntry::new("docs/a.txt", b"A\nB\nC".to_vec()),
        ];
        let bytes = build_archive(&entries);
        let parsed = parse_archive(&bytes).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].path, "readme.txt");
        assert_eq!(parsed[0].content, b"hello\n");
        assert!(parsed[1].is_dir_marker());
        assert_eq!(parsed[2].content, b"A\nB\nC");
    }

    #[test]
    fn test_parse_empty_archive() {
        let bytes = build_archive(&[]);
        let parsed = parse_archive(&bytes).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_deflate_entry() {
        // Hand-build an archive with one deflated entry.
        let content = b"the quick brown fox jumps over the lazy dog\n".repeat(10);
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content).unwrap();
        let compressed = encoder.finish().unwrap();
        let mut crc = Crc::new();
        crc.update(&content);
        let checksum = crc.sum();
        let name = b"fox.txt";

        let mut data = Vec::new();
        push_u32(&mut data, LOCAL_SIG);
        push_u16(&mut data, 20);
        push_u16(&mut data, 0);
        push_u16(&mut data, 8); // deflate
        push_u16(&mut data, 0);
        push_u16(&mut data, 0);
        push_u32(&mut data, checksum);
        push_u32(&mut data, compressed.len() as u32);
        push_u32(&mut data, content.len() as u32);
        push_u16(&mut data, name.len() as u16);
        push_u16(&mut data, 0);
        data.extend_from_slice(name);
        data.extend_from_slice(&compressed);

        let cd_offset = data.len() as u32;
        let mut central = Vec::new();
        push_u32(&mut central, CENTRAL_SIG);
        push_u16(&mut central, 20);
        push_u16(&mut central, 20);
        push_u16(&mut central, 0);
        push_u16(&mut central, 8);
        push_u16(&mut central, 0);
        push_u16(&mut central, 0);
        push_u32(&mut central, checksum);
        push_u32(&mut central, compressed.len() as u32);
        push_u32(&mut central, content.len() as u32);
        push_u16(&mut central, name.len() as u16);
        push_u16(&mut central, 0);
        push_u16(&mut central, 0);
        push_u16(&mut central, 0);
        push_u16(&mut central, 0);
        push_u32(&mut central, 0);
        push_u32(&mut central, 0); // local offset
        central.extend_from_slice(name);
        let central_len = central.len() as u32;
        data.extend_from_slice(&central);

        push_u32(&mut data, EOCD_SIG);
        push_u16(&mut data, 0);
        push_u16(&mut data, 0);
        push_u16(&mut data, 1);
        push_u16(&mut data, 1);
        push_u32(&mut data, central_len);
        push_u32(&mut data, cd_offset);
        push_u16(&mut data, 0);

        let parsed = parse_archive(&data).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].path, "fox.txt");
        assert_eq!(parsed[0].content, content);
    }

    #[test]
    fn test_parse_garbage() {
        let err = parse_archive(b"this is not a zip archive at all").unwrap_err();
        assert!(matches!(err, VfsError::ArchiveInvalid { .. }));
    }

    #[test]
    fn test_parse_too_small() {
        let err = parse_archive(b"PK").unwrap_err();
        assert!(matches!(err, VfsError::ArchiveInvalid { .. }));
    }

    #[test]
    fn test_parse_truncated_central_directory() {
        let entries = vec![ArchiveEntry::new("a.txt", b"a".to_vec())];
        let mut bytes = build_archive(&entries);
        // Corrupt the central directory offset in the EOCD.
        let eocd = bytes.len() - EOCD_MIN_LEN;
        bytes[eocd + 16..eocd + 20].copy_from_slice(&u32::MAX.to_le_bytes());
        let err = parse_archive(&bytes).unwrap_err();
        assert!(matches!(err, VfsError::ArchiveInvalid { .. }));
    }

    #[test]
    fn test_crc_mismatch_detected() {
        let entries = vec![ArchiveEntry::new("a.txt", b"payload".to_vec())];
        let mut bytes = build_archive(&entries);
        // Flip a content byte; the stored data starts right after the local
        // header and name.
        let data_start = LOCAL_HEADER_LEN + "a.txt".len();
        bytes[data_start] ^= 0xff;
        let err = parse_archive(&bytes).unwrap_err();
        assert!(err.to_string().contains("CRC mismatch"));
    }
}
