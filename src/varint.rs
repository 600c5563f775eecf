//! LEB128 variable-length encoding/decoding.
//!
//! Every field of the deckstring payload is one of these: 7 data bits per
//! byte, least significant group first, with the high bit flagging a
//! continuation. The reader and writer are independent of the base64 framing
//! and work against any byte source or sink.
//!
//! See also: <https://en.wikipedia.org/wiki/LEB128>

use std::io;

use crate::error::{Error, Result};

/// The most bytes one encoded [`u64`] can occupy.
const MAX_LEN: usize = (u64::BITS as usize + 7) / 7;

/// Reads one varint from `reader`, advancing it past the encoded bytes.
pub(crate) fn read<R: io::Read>(reader: &mut R) -> Result<u64> {
    let mut value = 0u64;
    let mut shift = 0usize;
    loop {
        let byte = read_byte(reader)?;
        // ensure the shift isn't greater than the bit-count of `u64`
        if shift >= u64::BITS as usize {
            return Err(Error::IntegerOverflow);
        }

        // ensure that all bits fit into the result
        let bits = u64::from(byte & 0x7F);
        let shifted = bits << shift;
        if shifted >> shift != bits {
            return Err(Error::IntegerOverflow);
        }

        value |= shifted;
        shift += 7;

        if byte < 0x80 {
            // No continuation bit is set
            return Ok(value);
        }
    }
}

/// Reads `N` varints in sequence into a fixed-size array.
///
/// The first failing read aborts; partial output is discarded.
pub(crate) fn read_array<const N: usize, R: io::Read>(reader: &mut R) -> Result<[u64; N]> {
    let mut values = [0u64; N];
    for value in &mut values {
        *value = read(reader)?;
    }
    Ok(values)
}

/// Reads `len` varints in sequence into a vector.
///
/// The reserved capacity is capped so a hostile length prefix can't force a
/// huge allocation.
pub(crate) fn read_vec<R: io::Read>(reader: &mut R, len: u64) -> Result<Vec<u64>> {
    let capacity = usize::try_from(len).map_or(0x1000, |len| len.min(0x1000));
    let mut values = Vec::with_capacity(capacity);
    for _ in 0..len {
        values.push(read(reader)?);
    }
    Ok(values)
}

/// Writes `value` to `writer` as one varint.
pub(crate) fn write<W: io::Write>(writer: &mut W, mut value: u64) -> Result<()> {
    let mut buf = [0u8; MAX_LEN];
    let mut i = 0usize;
    while value >= 0x80 {
        buf[i] = low_byte(value) | 0x80;
        value >>= 7;
        i += 1;
    }

    buf[i] = low_byte(value);
    i += 1;

    Ok(writer.write_all(&buf[..i])?)
}

/// Writes each value in `values` as one contiguous run of varints.
pub(crate) fn write_many<W: io::Write>(writer: &mut W, values: &[u64]) -> Result<()> {
    for &value in values {
        write(writer, value)?;
    }
    Ok(())
}

fn read_byte<R: io::Read>(reader: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(buf[0]),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Err(Error::UnexpectedEof),
        Err(err) => Err(Error::Io(err)),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn low_byte(value: u64) -> u8 {
    value as u8
}
