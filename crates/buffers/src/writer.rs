//! Binary buffer writer with a movable cursor and auto-growing storage.

/// Initial storage capacity, sized for typical small records.
const INITIAL_CAPACITY: usize = 256;

/// A binary buffer writer that appends big-endian data to an auto-growing
/// buffer.
///
/// The writer keeps the logical content size separate from the write cursor:
/// writing at the end appends and grows the logical size, while writing at
/// an earlier position (after [`Writer::move_to`]) overwrites in place. A
/// single saved-cursor slot ([`Writer::store_position`] /
/// [`Writer::restore_position`]) supports the length-backpatch pattern used
/// for length-prefixed envelopes: reserve a placeholder, write the body,
/// jump back, patch the real length, jump forward again.
///
/// Storage grows geometrically (doubling) and never shrinks. Write
/// operations do not fail; there is no I/O underneath.
///
/// # Example
///
/// ```
/// use geopack_buffers::Writer;
///
/// let mut writer = Writer::new();
/// let patch_at = writer.position();
/// writer.u32(0); // placeholder
/// writer.buf(b"body");
/// writer.store_position();
/// writer.move_to(patch_at);
/// writer.u32(4); // real length
/// writer.restore_position();
/// assert_eq!(writer.flush(), vec![0, 0, 0, 4, b'b', b'o', b'd', b'y']);
/// ```
pub struct Writer {
    /// Backing storage; its length is the allocated capacity in use.
    uint8: Vec<u8>,
    /// Current write cursor.
    x: usize,
    /// Logical end of written content.
    size: usize,
    /// Single-slot saved cursor.
    saved: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a writer with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: vec![0; capacity],
            x: 0,
            size: 0,
            saved: 0,
        }
    }

    /// Returns the logical content size in bytes.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the current write cursor position.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Saves the current cursor position into the single saved slot.
    pub fn store_position(&mut self) {
        self.saved = self.x;
    }

    /// Restores the cursor to the previously saved position.
    pub fn restore_position(&mut self) {
        self.x = self.saved;
    }

    /// Relocates the cursor to an absolute position within the logical
    /// content, for in-place patching of previously written bytes.
    pub fn move_to(&mut self, position: usize) {
        debug_assert!(position <= self.size);
        self.x = position;
    }

    /// Clears the content and cursor, keeping the allocated storage.
    pub fn reset(&mut self) {
        self.x = 0;
        self.size = 0;
        self.saved = 0;
    }

    /// Returns an exact-length copy of the logical content (capacity slack
    /// excluded) and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8[..self.size].to_vec();
        self.reset();
        out
    }

    /// Grows the storage (doubling) until `length` more bytes fit at the
    /// cursor.
    fn ensure(&mut self, length: usize) {
        let needed = self.x + length;
        if needed <= self.uint8.len() {
            return;
        }
        let mut capacity = self.uint8.len().max(INITIAL_CAPACITY);
        while capacity < needed {
            capacity *= 2;
        }
        self.uint8.resize(capacity, 0);
    }

    #[inline]
    fn advance(&mut self, length: usize) {
        self.x += length;
        if self.x > self.size {
            self.size = self.x;
        }
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure(1);
        self.uint8[self.x] = val;
        self.advance(1);
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.u8(val as u8);
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.ensure(2);
        self.uint8[self.x..self.x + 2].copy_from_slice(&val.to_be_bytes());
        self.advance(2);
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.u16(val as u16);
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.ensure(4);
        self.uint8[self.x..self.x + 4].copy_from_slice(&val.to_be_bytes());
        self.advance(4);
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.u32(val as u32);
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.ensure(8);
        self.uint8[self.x..self.x + 8].copy_from_slice(&val.to_be_bytes());
        self.advance(8);
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.u64(val as u64);
    }

    /// Writes a 32-bit floating point number (big-endian IEEE-754 bits).
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.u32(val.to_bits());
    }

    /// Writes a 64-bit floating point number (big-endian IEEE-754 bits).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.u64(val.to_bits());
    }

    /// Writes a byte slice at the cursor.
    pub fn buf(&mut self, data: &[u8]) {
        self.ensure(data.len());
        self.uint8[self.x..self.x + data.len()].copy_from_slice(data);
        self.advance(data.len());
    }
}
