//! Map tile request/response pair.

use crate::{Storable, StorableDecoder, StorableEncoder, StorableError};

/// Outcome of a tile request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileResult {
    #[default]
    Unknown = 0,
    Ok = 1,
    NotFound = 2,
    NotSupported = 3,
    InternalError = 4,
}

impl TileResult {
    pub fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => Self::Unknown,
            1 => Self::Ok,
            2 => Self::NotFound,
            3 => Self::NotSupported,
            4 => Self::InternalError,
            _ => Self::default(),
        }
    }
}

/// Request for one map tile in the usual z/x/y addressing scheme.
///
/// Versions: 0 carries the tile address; 1 adds the requested locale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TileRequest {
    /// Identifier of the map the tile belongs to.
    pub map_id: String,
    pub zoom: i32,
    pub x: i32,
    pub y: i32,
    /// BCP-47 tag for localized tile content; empty for the map default.
    pub locale: String,
}

impl Storable for TileRequest {
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
        self.map_id = dec.read_string()?;
        self.zoom = dec.read_i32()?;
        self.x = dec.read_i32()?;
        self.y = dec.read_i32()?;
        if version >= 1 {
            self.locale = dec.read_string()?;
        }
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_string(&self.map_id);
        enc.write_i32(self.zoom);
        enc.write_i32(self.x);
        enc.write_i32(self.y);
        enc.write_string(&self.locale);
    }
}

/// Response carrying one encoded tile image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TileResponse {
    pub result: TileResult,
    /// Encoded image bytes; empty when absent (e.g. on a non-ok result).
    pub image: Vec<u8>,
}

impl Storable for TileResponse {
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
        self.result = TileResult::from_ordinal(dec.read_i32()?);
        self.image = dec.read_blob()?;
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_i32(self.result as i32);
        enc.write_blob(&self.image);
    }
}
