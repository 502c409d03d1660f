use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Length prefix size: a single u64, 8 bytes.
pub const LEN_PREFIX_SIZE: usize = 8;

/// Default maximum payload size: 64 MiB.
///
/// The wire format itself allows any length a u64 can represent; this cap
/// only bounds what the decoder is willing to buffer for a single message.
pub const DEFAULT_MAX_PAYLOAD: usize = 64 * 1024 * 1024;

/// Encode one frame into the wire format.
///
/// Wire format:
/// ```text
/// +---------------------+------------------------+
/// | Length (8B, u64 LE) | Payload (Length bytes) |
/// +---------------------+------------------------+
/// ```
///
/// The payload is opaque: no type tag, no checksum, no version. Both ends
/// agree on little-endian out of band.
pub fn encode_frame(payload: &[u8], dst: &mut BytesMut) {
    dst.reserve(LEN_PREFIX_SIZE + payload.len());
    dst.put_u64_le(payload.len() as u64);
    dst.put_slice(payload);
}

/// Decode one frame from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete frame yet.
/// On success, consumes the frame bytes from the buffer and returns the
/// payload.
pub fn decode_frame(src: &mut BytesMut, max_payload: usize) -> Result<Option<Bytes>> {
    if src.len() < LEN_PREFIX_SIZE {
        return Ok(None); // Need more data
    }

    let declared = u64::from_le_bytes(src[..LEN_PREFIX_SIZE].try_into().unwrap());
    let payload_len = usize::try_from(declared).map_err(|_| FrameError::PayloadTooLarge {
        size: usize::MAX,
        max: max_payload,
    })?;

    if payload_len > max_payload {
        return Err(FrameError::PayloadTooLarge {
            size: payload_len,
            max: max_payload,
        });
    }

    let total = LEN_PREFIX_SIZE + payload_len;
    if src.len() < total {
        return Ok(None); // Need more data
    }

    src.advance(LEN_PREFIX_SIZE);
    Ok(Some(src.split_to(payload_len).freeze()))
}

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Maximum payload size in bytes. Default: 64 MiB.
    pub max_payload_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let mut buf = BytesMut::new();
        let payload = b"hello, pipeframe!";

        encode_frame(payload, &mut buf);
        assert_eq!(buf.len(), LEN_PREFIX_SIZE + payload.len());

        let message = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .unwrap();

        assert_eq!(message.as_ref(), payload);
        assert!(buf.is_empty());
    }

    #[test]
    fn length_prefix_is_little_endian() {
        let mut buf = BytesMut::new();
        encode_frame(&[0xAA; 3], &mut buf);
        assert_eq!(&buf[..LEN_PREFIX_SIZE], &[3, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn decode_incomplete_prefix() {
        let mut buf = BytesMut::from(&[0x05, 0x00, 0x00][..]);
        let result = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD).unwrap();
        assert!(result.is_none());
        assert_eq!(buf.len(), 3); // Nothing consumed
    }

    #[test]
    fn decode_incomplete_payload() {
        let mut buf = BytesMut::new();
        encode_frame(b"hello", &mut buf);
        buf.truncate(LEN_PREFIX_SIZE + 2); // Truncate payload

        let result = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn decode_payload_over_cap() {
        let mut buf = BytesMut::new();
        buf.put_u64_le(1024 * 1024 * 128); // 128 MiB declared

        let result = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD);
        assert!(matches!(result, Err(FrameError::PayloadTooLarge { .. })));
    }

    #[test]
    fn decode_multiple_frames() {
        let mut buf = BytesMut::new();
        encode_frame(b"first", &mut buf);
        encode_frame(b"second", &mut buf);

        let m1 = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .unwrap();
        assert_eq!(m1.as_ref(), b"first");

        let m2 = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .unwrap();
        assert_eq!(m2.as_ref(), b"second");

        assert!(buf.is_empty());
    }

    #[test]
    fn empty_payload() {
        let mut buf = BytesMut::new();
        encode_frame(b"", &mut buf);
        assert_eq!(buf.len(), LEN_PREFIX_SIZE);

        let message = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .unwrap();
        assert!(message.is_empty());
    }
}
