//! Waypoint record and its free-form keyed parameters.

use super::{Geocache, GeoStyle, Location};
use crate::{Storable, StorableDecoder, StorableEncoder, StorableError};

/// A free-form keyed parameter attached to a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parameter {
    pub id: i32,
    pub value: String,
}

impl Parameter {
    pub fn new(id: i32, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

impl Storable for Parameter {
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
        self.id = dec.read_i32()?;
        self.value = dec.read_string()?;
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_i32(self.id);
        enc.write_string(&self.value);
    }
}

/// A waypoint: identity, coordinates, keyed parameters, and optional style
/// and geocaching sub-records.
///
/// Versions: 0 carries id, name, location and parameters; 1 adds the
/// optional style and geocache records; 2 adds the description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    pub id: i64,
    pub name: String,
    pub location: Location,
    pub params: Vec<Parameter>,
    pub style: Option<GeoStyle>,
    pub geocache: Option<Geocache>,
    pub description: String,
}

impl Point {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            ..Self::default()
        }
    }

    /// Returns the value of the parameter with the given id, if present.
    pub fn param(&self, id: i32) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.value.as_str())
    }
}

impl Storable for Point {
    fn version(&self) -> i32 {
        2
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
        dec.read_into(&mut self.location)?;
        self.params = dec.read_list()?;
        if version >= 1 {
            self.style = dec.read_opt_storable()?;
            self.geocache = dec.read_opt_storable()?;
        }
        if version >= 2 {
            self.description = dec.read_string()?;
        }
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_i64(self.id);
        enc.write_string(&self.name);
        enc.write_storable(&self.location);
        enc.write_list(&self.params);
        enc.write_opt_storable(self.style.as_ref());
        enc.write_opt_storable(self.geocache.as_ref());
        enc.write_string(&self.description);
    }
}
