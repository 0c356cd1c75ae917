//! Styling records: a bundle of optional icon, line, polygon and label
//! sub-styles, each its own storable.

use crate::{Storable, StorableDecoder, StorableEncoder, StorableError};

/// Default style color: opaque white, ARGB.
const COLOR_DEFAULT: i32 = 0xFFFF_FFFFu32 as i32;

/// Icon presentation for a point.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub icon_url: String,
    /// ARGB color applied to the icon.
    pub color: i32,
    pub scale: f32,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            icon_url: String::new(),
            color: COLOR_DEFAULT,
            scale: 1.0,
        }
    }
}

impl Storable for IconStyle {
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
        self.icon_url = dec.read_string()?;
        self.color = dec.read_i32()?;
        self.scale = dec.read_f32()?;
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_string(&self.icon_url);
        enc.write_i32(self.color);
        enc.write_f32(self.scale);
    }
}

/// Line presentation for a track or border.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: i32,
    /// Line width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: COLOR_DEFAULT,
            width: 1.0,
        }
    }
}

impl Storable for LineStyle {
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
        self.color = dec.read_i32()?;
        self.width = dec.read_f32()?;
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_i32(self.color);
        enc.write_f32(self.width);
    }
}

/// Polygon presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyStyle {
    pub color: i32,
    pub fill: bool,
    pub outline: bool,
}

impl Default for PolyStyle {
    fn default() -> Self {
        Self {
            color: COLOR_DEFAULT,
            fill: true,
            outline: true,
        }
    }
}

impl Storable for PolyStyle {
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
        self.color = dec.read_i32()?;
        self.fill = dec.read_bool()?;
        self.outline = dec.read_bool()?;
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_i32(self.color);
        enc.write_bool(self.fill);
        enc.write_bool(self.outline);
    }
}

/// Label presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub color: i32,
    pub scale: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: COLOR_DEFAULT,
            scale: 1.0,
        }
    }
}

impl Storable for LabelStyle {
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
        self.color = dec.read_i32()?;
        self.scale = dec.read_f32()?;
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_i32(self.color);
        enc.write_f32(self.scale);
    }
}

/// A styling bundle attached to a point or track.
///
/// Each sub-style is optional and travels as its own nested envelope, so a
/// reader that predates one of them still skips it cleanly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoStyle {
    pub name: String,
    pub icon: Option<IconStyle>,
    pub line: Option<LineStyle>,
    pub polygon: Option<PolyStyle>,
    pub label: Option<LabelStyle>,
}

impl Storable for GeoStyle {
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
        self.name = dec.read_string()?;
        self.icon = dec.read_opt_storable()?;
        self.line = dec.read_opt_storable()?;
        self.polygon = dec.read_opt_storable()?;
        self.label = dec.read_opt_storable()?;
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_string(&self.name);
        enc.write_opt_storable(self.icon.as_ref());
        enc.write_opt_storable(self.line.as_ref());
        enc.write_opt_storable(self.polygon.as_ref());
        enc.write_opt_storable(self.label.as_ref());
    }
}
