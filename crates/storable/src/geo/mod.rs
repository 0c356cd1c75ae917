//! Geographic data objects carried by the wire format.

mod fieldnote;
mod geocache;
mod location;
mod point;
mod style;
mod tile;
mod track;

pub use fieldnote::{FieldNote, FieldNoteImage};
pub use geocache::{CacheContainer, CacheType, Geocache, GeocacheLog, LogType};
pub use location::Location;
pub use point::{Parameter, Point};
pub use style::{GeoStyle, IconStyle, LabelStyle, LineStyle, PolyStyle};
pub use tile::{TileRequest, TileResponse, TileResult};
pub use track::Track;
