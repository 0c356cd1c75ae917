//! Geocaching metadata records.

use crate::{Storable, StorableDecoder, StorableEncoder, StorableError};

/// Kind of a geocache. Encoded as its ordinal; an unknown ordinal keeps the
/// default, so payloads from producers with newer cache kinds still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheType {
    #[default]
    Traditional = 0,
    Multi = 1,
    Mystery = 2,
    Earth = 3,
    Letterbox = 4,
    Event = 5,
    Virtual = 6,
    Webcam = 7,
    Lab = 8,
}

impl CacheType {
    pub fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => Self::Traditional,
            1 => Self::Multi,
            2 => Self::Mystery,
            3 => Self::Earth,
            4 => Self::Letterbox,
            5 => Self::Event,
            6 => Self::Virtual,
            7 => Self::Webcam,
            8 => Self::Lab,
            _ => Self::default(),
        }
    }
}

/// Physical container size of a geocache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheContainer {
    #[default]
    Unknown = 0,
    Micro = 1,
    Small = 2,
    Regular = 3,
    Large = 4,
    Other = 5,
}

impl CacheContainer {
    pub fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => Self::Unknown,
            1 => Self::Micro,
            2 => Self::Small,
            3 => Self::Regular,
            4 => Self::Large,
            5 => Self::Other,
            _ => Self::default(),
        }
    }
}

/// Kind of a geocache log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogType {
    #[default]
    WriteNote = 0,
    Found = 1,
    NotFound = 2,
    NeedsMaintenance = 3,
    OwnerMaintenance = 4,
    Published = 5,
    Archived = 6,
}

impl LogType {
    pub fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => Self::WriteNote,
            1 => Self::Found,
            2 => Self::NotFound,
            3 => Self::NeedsMaintenance,
            4 => Self::OwnerMaintenance,
            5 => Self::Published,
            6 => Self::Archived,
            _ => Self::default(),
        }
    }
}

/// One log entry on a geocache.
///
/// Versions: 0 carries the entry itself; 1 adds the author's find count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeocacheLog {
    pub id: i64,
    pub log_type: LogType,
    pub author: String,
    /// Log date in milliseconds since the Unix epoch.
    pub date: i64,
    pub text: String,
    pub finds_count: i32,
}

impl Storable for GeocacheLog {
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
        self.log_type = LogType::from_ordinal(dec.read_i32()?);
        self.author = dec.read_string()?;
        self.date = dec.read_i64()?;
        self.text = dec.read_string()?;
        if version >= 1 {
            self.finds_count = dec.read_i32()?;
        }
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_i64(self.id);
        enc.write_i32(self.log_type as i32);
        enc.write_string(&self.author);
        enc.write_i64(self.date);
        enc.write_string(&self.text);
        enc.write_i32(self.finds_count);
    }
}

/// Geocaching metadata attached to a point.
///
/// Versions: 0 carries the listing data and logs; 1 adds the hint.
#[derive(Debug, Clone, PartialEq)]
pub struct Geocache {
    /// Listing code, e.g. `GC2Y0RK`.
    pub code: String,
    pub name: String,
    pub owner: String,
    pub cache_type: CacheType,
    pub container: CacheContainer,
    /// Difficulty rating, 1.0 to 5.0 in half steps.
    pub difficulty: f32,
    /// Terrain rating, 1.0 to 5.0 in half steps.
    pub terrain: f32,
    pub found: bool,
    /// Hidden date in milliseconds since the Unix epoch.
    pub hidden_time: i64,
    pub logs: Vec<GeocacheLog>,
    pub hint: String,
}

impl Default for Geocache {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            owner: String::new(),
            cache_type: CacheType::default(),
            container: CacheContainer::default(),
            difficulty: 1.0,
            terrain: 1.0,
            found: false,
            hidden_time: 0,
            logs: Vec::new(),
            hint: String::new(),
        }
    }
}

impl Storable for Geocache {
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
        self.code = dec.read_string()?;
        self.name = dec.read_string()?;
        self.owner = dec.read_string()?;
        self.cache_type = CacheType::from_ordinal(dec.read_i32()?);
        self.container = CacheContainer::from_ordinal(dec.read_i32()?);
        self.difficulty = dec.read_f32()?;
        self.terrain = dec.read_f32()?;
        self.found = dec.read_bool()?;
        self.hidden_time = dec.read_i64()?;
        self.logs = dec.read_list()?;
        if version >= 1 {
            self.hint = dec.read_string()?;
        }
        Ok(())
    }

    fn write_body(&self, enc: &mut StorableEncoder) {
        enc.write_string(&self.code);
        enc.write_string(&self.name);
        enc.write_string(&self.owner);
        enc.write_i32(self.cache_type as i32);
        enc.write_i32(self.container as i32);
        enc.write_f32(self.difficulty);
        enc.write_f32(self.terrain);
        enc.write_bool(self.found);
        enc.write_i64(self.hidden_time);
        enc.write_list(&self.logs);
        enc.write_string(&self.hint);
    }
}
