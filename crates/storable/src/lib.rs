//! Versioned, length-prefixed binary encoding for geographic data objects.
//!
//! Every object crossing the process boundary travels inside a
//! self-describing envelope (`version:i32 | body_size:i32 | body`, all
//! big-endian), which is what makes the format evolvable in both
//! directions: old readers skip fields they don't know, new readers leave
//! defaults for fields an old writer never wrote.
//!
//! # Overview
//!
//! - [`Storable`] - the contract every wire type implements
//!   (version / reset / read_body / write_body, with derived
//!   encode / decode envelope operations)
//! - [`StorableEncoder`] / [`StorableDecoder`] - wire-level codec over the
//!   buffer cursor layer: strings, blobs, optional nested objects,
//!   envelopes with length backpatch, lists
//! - [`geo`] - the geographic data objects: points, tracks, styles,
//!   geocaching records, map tiles, field notes
//!
//! Decoding is defensive: every read is bounds-checked, a declared body
//! size past [`MAX_BODY_SIZE`] fails before any allocation, and a
//! malformed element inside a list is skipped (with a `tracing` warning)
//! instead of poisoning its siblings.
//!
//! # Example
//!
//! ```
//! use geopack_storable::geo::{Location, Parameter, Point};
//! use geopack_storable::Storable;
//!
//! let mut point = Point::new("Lookout", Location::new(50.1, 15.2));
//! point.params.push(Parameter::new(1, "hello"));
//!
//! let bytes = point.encode();
//! let back = Point::decode(&bytes).unwrap();
//! assert_eq!(back, point);
//! ```

mod constants;
mod decoder;
mod encoder;
mod error;
mod storable;

pub mod geo;

pub use constants::MAX_BODY_SIZE;
pub use decoder::StorableDecoder;
pub use encoder::StorableEncoder;
pub use error::StorableError;
pub use storable::Storable;
