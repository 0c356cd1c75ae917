//! Recorded track: an ordered sequence of positions with metadata.

use super::{GeoStyle, Location};
use crate::{Storable, StorableDecoder, StorableEncoder, StorableError};

/// A recorded track.
///
/// Versions: 0 carries identity and the position list; 1 adds the optional
/// style and free-form tags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Track {
    pub id: i64,
    pub name: String,
    pub locations: Vec<Location>,
    pub style: Option<GeoStyle>,
    pub tags: Vec<String>,
}

impl Track {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Storable for Track {
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
        self.id = dec.read_i64()?;
        self.name = dec.read_string()?;
        self.locations = dec.read_list()?;
        if version >= 1 {
            self.style = dec.read_opt_storable()?;
            self.tags = dec.read_string_list()?;
        }
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_i64(self.id);
        enc.write_string(&self.name);
        enc.write_list(&self.locations);
        enc.write_opt_storable(self.style.as_ref());
        enc.write_string_list(&self.tags);
    }
}
