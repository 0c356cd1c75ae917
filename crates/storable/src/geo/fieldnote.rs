//! Field notes: draft geocache logs composed offline, with attached images.

use super::LogType;
use crate::{Storable, StorableDecoder, StorableEncoder, StorableError};

/// An image attached to a field note.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldNoteImage {
    pub caption: String,
    /// Encoded image bytes; empty when absent.
    pub data: Vec<u8>,
}

impl Storable for FieldNoteImage {
    fn version(&self) -> i32 {
        0
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn read_body(
        &mut self,
        _version: i32,
        dec: &mut StorableDecoder<'_>,
    ) -> Result<(), StorableError> {
        self.caption = dec.read_string()?;
        self.data = dec.read_blob()?;
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_string(&self.caption);
        enc.write_blob(&self.data);
    }
}

/// A draft log for a geocache, composed in the field for later upload.
///
/// Versions: 0 carries the note itself; 1 adds attached images.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldNote {
    /// Listing code of the cache the note belongs to.
    pub cache_code: String,
    pub log_type: LogType,
    /// Composition time in milliseconds since the Unix epoch.
    pub time: i64,
    pub note: String,
    pub favorite: bool,
    /// Whether the note has already been uploaded as a log.
    pub logged: bool,
    pub images: Vec<FieldNoteImage>,
}

impl Storable for FieldNote {
    fn version(&self) -> i32 {
        1
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn read_body(
        &mut self,
        version: i32,
        dec: &mut StorableDecoder<'_>,
    ) -> Result<(), StorableError> {
        self.cache_code = dec.read_string()?;
        self.log_type = LogType::from_ordinal(dec.read_i32()?);
        self.time = dec.read_i64()?;
        self.note = dec.read_string()?;
        self.favorite = dec.read_bool()?;
        self.logged = dec.read_bool()?;
        if version >= 1 {
            self.images = dec.read_list()?;
        }
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_string(&self.cache_code);
        enc.write_i32(self.log_type as i32);
        enc.write_i64(self.time);
        enc.write_string(&self.note);
        enc.write_bool(self.favorite);
        enc.write_bool(self.logged);
        enc.write_list(&self.images);
    }
}
