//! Geographic position record.

use crate::{Storable, StorableDecoder, StorableEncoder, StorableError};

/// A single geographic position with optional sensor readings.
///
/// Versions: 0 carries time and coordinates; 1 adds altitude; 2 adds
/// accuracy, bearing and speed. Each optional scalar travels as a presence
/// flag followed by the value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    /// Timestamp in milliseconds since the Unix epoch.
    pub time: i64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude above sea level, in meters.
    pub altitude: Option<f64>,
    /// Horizontal accuracy, in meters.
    pub accuracy: Option<f32>,
    /// Bearing, in degrees.
    pub bearing: Option<f32>,
    /// Ground speed, in meters per second.
    pub speed: Option<f32>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Self::default()
        }
    }
}

impl Storable for Location {
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
        self.time = dec.read_i64()?;
        self.latitude = dec.read_f64()?;
        self.longitude = dec.read_f64()?;
        if version >= 1 {
            self.altitude = if dec.read_bool()? {
                Some(dec.read_f64()?)
            } else {
                None
            };
        }
        if version >= 2 {
            self.accuracy = if dec.read_bool()? {
                Some(dec.read_f32()?)
            } else {
                None
            };
            self.bearing = if dec.read_bool()? {
                Some(dec.read_f32()?)
            } else {
                None
            };
            self.speed = if dec.read_bool()? {
                Some(dec.read_f32()?)
            } else {
                None
            };
        }
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_i64(self.time);
        enc.write_f64(self.latitude);
        enc.write_f64(self.longitude);
        enc.write_bool(self.altitude.is_some());
        if let Some(altitude) = self.altitude {
            enc.write_f64(altitude);
        }
        enc.write_bool(self.accuracy.is_some());
        if let Some(accuracy) = self.accuracy {
            enc.write_f32(accuracy);
        }
        enc.write_bool(self.bearing.is_some());
        if let Some(bearing) = self.bearing {
            enc.write_f32(bearing);
        }
        enc.write_bool(self.speed.is_some());
        if let Some(speed) = self.speed {
            enc.write_f32(speed);
        }
    }
}
