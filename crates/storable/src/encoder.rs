//! Wire-level encoder for storable objects.

use geopack_buffers::Writer;

use crate::Storable;

/// Wire-level encoder for storable objects.
///
/// Wraps a [`Writer`] and exposes the composite operations of the wire
/// format: length-prefixed strings and blobs, presence-flagged optional
/// objects, envelopes with length backpatch, and lists. All multi-byte
/// quantities are big-endian. Write operations do not fail.
pub struct StorableEncoder {
    pub writer: Writer,
}

impl Default for StorableEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StorableEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Returns the encoded bytes and resets the encoder.
    pub fn flush(&mut self) -> Vec<u8> {
        self.writer.flush()
    }

    // ---------------------------------------------------------------- primitives

    /// Writes a boolean as one byte (`0x00` = false, `0x01` = true).
    pub fn write_bool(&mut self, val: bool) {
        self.writer.u8(if val { 1 } else { 0 });
    }

    /// Writes a single raw byte.
    pub fn write_byte(&mut self, val: u8) {
        self.writer.u8(val);
    }

    /// Writes a big-endian signed 16-bit integer.
    pub fn write_i16(&mut self, val: i16) {
        self.writer.i16(val);
    }

    /// Writes a big-endian signed 32-bit integer.
    pub fn write_i32(&mut self, val: i32) {
        self.writer.i32(val);
    }

    /// Writes a big-endian signed 64-bit integer.
    pub fn write_i64(&mut self, val: i64) {
        self.writer.i64(val);
    }

    /// Writes a 32-bit float as its IEEE-754 bit pattern.
    pub fn write_f32(&mut self, val: f32) {
        self.writer.f32(val);
    }

    /// Writes a 64-bit float as its IEEE-754 bit pattern.
    pub fn write_f64(&mut self, val: f64) {
        self.writer.f64(val);
    }

    // ---------------------------------------------------------------- strings and blobs

    /// Writes a string as `byte_len:i32` followed by UTF-8 bytes.
    ///
    /// An empty string writes just the zero length.
    pub fn write_string(&mut self, val: &str) {
        let bytes = val.as_bytes();
        self.writer.i32(bytes.len() as i32);
        self.writer.buf(bytes);
    }

    /// Writes a string with the legacy `byte_len:u16` prefix.
    ///
    /// Retained for historical payloads; current composites use
    /// [`StorableEncoder::write_string`].
    pub fn write_string16(&mut self, val: &str) {
        let bytes = val.as_bytes();
        self.writer.u16(bytes.len() as u16);
        self.writer.buf(bytes);
    }

    /// Writes a byte array as `byte_len:i32` followed by the raw bytes.
    ///
    /// A zero length stands for "absent"; an empty array and an absent one
    /// are indistinguishable on the wire.
    pub fn write_blob(&mut self, data: &[u8]) {
        self.writer.i32(data.len() as i32);
        self.writer.buf(data);
    }

    // ---------------------------------------------------------------- envelopes

    /// Writes one storable as a full envelope:
    /// `version:i32 | body_size:i32 | body`.
    ///
    /// The body length is not known up front, so a placeholder size is
    /// written first and patched in place after the body: store the end
    /// cursor, move back to the placeholder, write the real size, restore.
    /// Nested envelopes inside the body run their own store/restore pair
    /// strictly before this one, so the writer's single saved slot
    /// suffices.
    pub fn write_storable<S: Storable + ?Sized>(&mut self, obj: &S) {
        self.writer.i32(obj.version());
        let size_at = self.writer.position();
        self.writer.i32(0);
        let body_start = self.writer.len();
        obj.write_body(self);
        let body_size = (self.writer.len() - body_start) as i32;
        self.writer.store_position();
        self.writer.move_to(size_at);
        self.writer.i32(body_size);
        self.writer.restore_position();
    }

    /// Writes an optional storable as a presence flag, followed by the
    /// envelope when present.
    pub fn write_opt_storable<S: Storable>(&mut self, obj: Option<&S>) {
        match obj {
            Some(obj) => {
                self.write_bool(true);
                self.write_storable(obj);
            }
            None => self.write_bool(false),
        }
    }

    // ---------------------------------------------------------------- lists

    /// Writes a list as `count:i32` followed by each element's envelope.
    pub fn write_list<S: Storable>(&mut self, items: &[S]) {
        self.writer.i32(items.len() as i32);
        for item in items {
            self.write_storable(item);
        }
    }

    /// Writes a list of strings as `count:i32` followed by each string.
    pub fn write_string_list(&mut self, items: &[String]) {
        self.writer.i32(items.len() as i32);
        for item in items {
            self.write_string(item);
        }
    }
}
