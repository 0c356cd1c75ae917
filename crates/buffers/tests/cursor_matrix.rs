//! Writer/Reader round-trip matrix and cursor edge cases for the buffers
//! crate.

use geopack_buffers::{BufferError, Reader, Writer};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.u8(0x7F);
    w.u8(0xFF);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8().unwrap(), 0x00);
    assert_eq!(r.u8().unwrap(), 0x7F);
    assert_eq!(r.u8().unwrap(), 0xFF);
}

#[test]
fn roundtrip_i8() {
    let mut w = Writer::new();
    w.i8(i8::MIN);
    w.i8(-1);
    w.i8(0);
    w.i8(i8::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.i8().unwrap(), i8::MIN);
    assert_eq!(r.i8().unwrap(), -1);
    assert_eq!(r.i8().unwrap(), 0);
    assert_eq!(r.i8().unwrap(), i8::MAX);
}

#[test]
fn roundtrip_u16() {
    let mut w = Writer::new();
    w.u16(0);
    w.u16(0x0102);
    w.u16(u16::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u16().unwrap(), 0);
    assert_eq!(r.u16().unwrap(), 0x0102);
    assert_eq!(r.u16().unwrap(), u16::MAX);
}

#[test]
fn roundtrip_i16() {
    let mut w = Writer::new();
    w.i16(i16::MIN);
    w.i16(-1000);
    w.i16(0);
    w.i16(i16::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.i16().unwrap(), i16::MIN);
    assert_eq!(r.i16().unwrap(), -1000);
    assert_eq!(r.i16().unwrap(), 0);
    assert_eq!(r.i16().unwrap(), i16::MAX);
}

#[test]
fn roundtrip_u32_i32() {
    let mut w = Writer::new();
    w.u32(0xDEADBEEF);
    w.i32(i32::MIN);
    w.i32(-1);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u32().unwrap(), 0xDEADBEEF);
    assert_eq!(r.i32().unwrap(), i32::MIN);
    assert_eq!(r.i32().unwrap(), -1);
}

#[test]
fn roundtrip_u64_i64() {
    let mut w = Writer::new();
    w.u64(u64::MAX);
    w.i64(i64::MIN);
    w.i64(1_234_567_890_123);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u64().unwrap(), u64::MAX);
    assert_eq!(r.i64().unwrap(), i64::MIN);
    assert_eq!(r.i64().unwrap(), 1_234_567_890_123);
}

#[test]
fn roundtrip_floats() {
    let mut w = Writer::new();
    w.f32(1.5);
    w.f32(-0.0);
    w.f64(std::f64::consts::PI);
    w.f64(f64::NEG_INFINITY);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.f32().unwrap(), 1.5);
    assert_eq!(r.f32().unwrap().to_bits(), (-0.0f32).to_bits());
    assert_eq!(r.f64().unwrap(), std::f64::consts::PI);
    assert_eq!(r.f64().unwrap(), f64::NEG_INFINITY);
}

#[test]
fn float_nan_bit_pattern_survives() {
    let nan = f64::from_bits(0x7FF8_0000_0000_1234);
    let mut w = Writer::new();
    w.f64(nan);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.f64().unwrap().to_bits(), nan.to_bits());
}

#[test]
fn big_endian_byte_order_on_wire() {
    let mut w = Writer::new();
    w.u32(0x01020304);
    let data = w.flush();
    assert_eq!(data, vec![0x01, 0x02, 0x03, 0x04]);
}

// ---------------------------------------------------------------------------
// Cursor edge cases
// ---------------------------------------------------------------------------

#[test]
fn every_read_is_bounds_checked() {
    let data = [0u8; 3];
    assert_eq!(Reader::new(&data).u32(), Err(BufferError::OutOfBounds));
    assert_eq!(Reader::new(&data).i64(), Err(BufferError::OutOfBounds));
    assert_eq!(Reader::new(&data).f64(), Err(BufferError::OutOfBounds));
    assert_eq!(Reader::new(&data).buf(4), Err(BufferError::OutOfBounds));
    assert_eq!(Reader::new(&data).utf8(4), Err(BufferError::OutOfBounds));
    let mut r = Reader::new(&data);
    assert_eq!(r.skip(4), Err(BufferError::OutOfBounds));
    // A huge requested length must not wrap the bounds check.
    assert_eq!(r.buf(usize::MAX), Err(BufferError::OutOfBounds));
}

#[test]
fn failed_read_leaves_cursor_in_place() {
    let data = [0x01, 0x02, 0x03];
    let mut r = Reader::new(&data);
    assert!(r.u32().is_err());
    assert_eq!(r.u16().unwrap(), 0x0102);
}

#[test]
fn writer_backpatch_length_prefix() {
    let mut w = Writer::new();
    let patch_at = w.position();
    w.u32(0);
    w.buf(b"variable length content");
    let body_len = (w.len() - 4) as u32;
    w.store_position();
    w.move_to(patch_at);
    w.u32(body_len);
    w.restore_position();
    let data = w.flush();

    let mut r = Reader::new(&data);
    let len = r.u32().unwrap() as usize;
    assert_eq!(len, data.len() - 4);
    assert_eq!(r.utf8(len).unwrap(), "variable length content");
}

#[test]
fn writer_growth_is_transparent() {
    let mut w = Writer::with_capacity(1);
    let chunk = [0xA5u8; 97];
    for _ in 0..11 {
        w.buf(&chunk);
    }
    let data = w.flush();
    assert_eq!(data.len(), 97 * 11);
    assert!(data.iter().all(|&b| b == 0xA5));
}

#[test]
fn flush_excludes_capacity_slack() {
    let mut w = Writer::new();
    w.u8(1);
    w.u8(2);
    assert_eq!(w.flush(), vec![1, 2]);
}
