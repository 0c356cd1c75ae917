//! Wire-level decoder for storable objects.

use geopack_buffers::{BufferError, Reader};
use tracing::warn;

use crate::constants::MAX_BODY_SIZE;
use crate::{Storable, StorableError};

/// Wire-level decoder for storable objects.
///
/// Wraps a [`Reader`] and exposes the composite operations of the wire
/// format. Every read is bounds-checked; a primitive or envelope-level
/// failure aborts the current decode, while a malformed *list element* is
/// skipped so one bad record cannot take down its siblings.
pub struct StorableDecoder<'a> {
    pub reader: Reader<'a>,
}

impl<'a> StorableDecoder<'a> {
    /// Creates a decoder over the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
        }
    }

    fn from_reader(reader: Reader<'a>) -> Self {
        Self { reader }
    }

    // ---------------------------------------------------------------- primitives

    /// Reads a boolean from one byte (nonzero = true).
    pub fn read_bool(&mut self) -> Result<bool, StorableError> {
        Ok(self.reader.u8()? != 0)
    }

    /// Reads a single raw byte.
    pub fn read_byte(&mut self) -> Result<u8, StorableError> {
        Ok(self.reader.u8()?)
    }

    /// Reads a big-endian signed 16-bit integer.
    pub fn read_i16(&mut self) -> Result<i16, StorableError> {
        Ok(self.reader.i16()?)
    }

    /// Reads a big-endian signed 32-bit integer.
    pub fn read_i32(&mut self) -> Result<i32, StorableError> {
        Ok(self.reader.i32()?)
    }

    /// Reads a big-endian signed 64-bit integer.
    pub fn read_i64(&mut self) -> Result<i64, StorableError> {
        Ok(self.reader.i64()?)
    }

    /// Reads a 32-bit float from its IEEE-754 bit pattern.
    pub fn read_f32(&mut self) -> Result<f32, StorableError> {
        Ok(self.reader.f32()?)
    }

    /// Reads a 64-bit float from its IEEE-754 bit pattern.
    pub fn read_f64(&mut self) -> Result<f64, StorableError> {
        Ok(self.reader.f64()?)
    }

    // ---------------------------------------------------------------- strings and blobs

    /// Reads a string: `byte_len:i32` then UTF-8 bytes.
    ///
    /// A zero or negative length yields the empty string.
    pub fn read_string(&mut self) -> Result<String, StorableError> {
        let length = self.reader.i32()?;
        if length <= 0 {
            return Ok(String::new());
        }
        Ok(self.reader.utf8(length as usize)?.to_string())
    }

    /// Reads a string with the legacy `byte_len:u16` prefix.
    pub fn read_string16(&mut self) -> Result<String, StorableError> {
        let length = self.reader.u16()?;
        if length == 0 {
            return Ok(String::new());
        }
        Ok(self.reader.utf8(length as usize)?.to_string())
    }

    /// Reads a byte array: `byte_len:i32` then raw bytes.
    ///
    /// A zero or negative length yields an empty vector ("absent").
    pub fn read_blob(&mut self) -> Result<Vec<u8>, StorableError> {
        let length = self.reader.i32()?;
        if length <= 0 {
            return Ok(Vec::new());
        }
        Ok(self.reader.buf(length as usize)?.to_vec())
    }

    // ---------------------------------------------------------------- envelopes

    /// Reads an envelope header and validates the declared body size
    /// against [`MAX_BODY_SIZE`] before any body bytes are touched.
    fn read_header(&mut self) -> Result<(i32, usize), StorableError> {
        let version = self.reader.i32()?;
        let size = self.reader.i32()?;
        if !(0..=MAX_BODY_SIZE).contains(&size) {
            return Err(StorableError::OversizedBody(size));
        }
        Ok((version, size as usize))
    }

    /// Reads one full envelope into an existing object.
    ///
    /// The body is decoded through a sub-reader scoped to exactly the
    /// declared size, so a reader built against an older schema consumes
    /// only the fields it knows and still leaves the cursor at the next
    /// sibling. On failure the object is reset before the error
    /// propagates.
    pub fn read_into<S: Storable>(&mut self, obj: &mut S) -> Result<(), StorableError> {
        let (version, size) = self.read_header()?;
        let body = self.reader.cut(size)?;
        let mut sub = StorableDecoder::from_reader(body);
        obj.reset();
        if let Err(error) = obj.read_body(version, &mut sub) {
            obj.reset();
            return Err(error);
        }
        Ok(())
    }

    /// Reads one full envelope into a freshly constructed object.
    pub fn read_storable<S: Storable + Default>(&mut self) -> Result<S, StorableError> {
        let mut obj = S::default();
        self.read_into(&mut obj)?;
        Ok(obj)
    }

    /// Consumes one envelope without interpreting its body.
    pub fn skip_storable(&mut self) -> Result<(), StorableError> {
        let (_version, size) = self.read_header()?;
        self.reader.skip(size)?;
        Ok(())
    }

    /// Reads an optional storable: a presence flag, followed by the
    /// envelope when present.
    pub fn read_opt_storable<S: Storable + Default>(&mut self) -> Result<Option<S>, StorableError> {
        if self.read_bool()? {
            Ok(Some(self.read_storable()?))
        } else {
            Ok(None)
        }
    }

    // ---------------------------------------------------------------- lists

    /// Reads a list of storables: `count:i32` then `count` envelopes.
    ///
    /// A malformed element body is logged and skipped rather than failing
    /// the whole list; payload producers may send record sets that are
    /// partially unknown to this reader. Envelope header corruption is
    /// still fatal, since there is no way to resynchronize past it.
    pub fn read_list<S: Storable + Default>(&mut self) -> Result<Vec<S>, StorableError> {
        let count = self.reader.i32()?;
        if count <= 0 {
            return Ok(Vec::new());
        }
        let mut items = Vec::new();
        for index in 0..count {
            let (version, size) = self.read_header()?;
            let body = self.reader.cut(size)?;
            let mut sub = StorableDecoder::from_reader(body);
            let mut item = S::default();
            item.reset();
            match item.read_body(version, &mut sub) {
                Ok(()) => items.push(item),
                Err(error) => {
                    warn!(index, %error, "skipping malformed list element");
                }
            }
        }
        Ok(items)
    }

    /// Reads a list of strings: `count:i32` then `count` strings.
    ///
    /// An element with invalid UTF-8 is logged and skipped (its bytes are
    /// already consumed); a truncated element is fatal.
    pub fn read_string_list(&mut self) -> Result<Vec<String>, StorableError> {
        let count = self.reader.i32()?;
        if count <= 0 {
            return Ok(Vec::new());
        }
        let mut items = Vec::new();
        for index in 0..count {
            match self.read_string() {
                Ok(item) => items.push(item),
                Err(StorableError::Buffer(BufferError::InvalidUtf8)) => {
                    warn!(index, "skipping malformed string list element");
                }
                Err(error) => return Err(error),
            }
        }
        Ok(items)
    }
}
