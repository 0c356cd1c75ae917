//! The storable contract implemented by every wire type.

use crate::{StorableDecoder, StorableEncoder, StorableError};

/// The capability implemented by every type that participates in the wire
/// format.
///
/// Each storable travels inside a self-describing envelope:
/// `version:i32 | body_size:i32 | body`. The version is what the *writer's*
/// code believes; the body layout is whatever that version wrote. A single
/// type supports several schema generations at once by gating
/// version-introduced fields inside [`Storable::read_body`] while
/// [`Storable::write_body`] always emits the current version's full field
/// set in the same stable order.
///
/// Implementations provide the four schema methods; the envelope operations
/// ([`Storable::encode`], [`Storable::decode`], [`Storable::decode_into`])
/// are derived and not meant to be overridden.
pub trait Storable {
    /// The schema version this type's current code writes.
    fn version(&self) -> i32;

    /// Establishes the fully-defined default state for every field.
    ///
    /// Called before any read, so fields absent from an older payload keep
    /// a well-defined default instead of stale or uninitialized values.
    fn reset(&mut self);

    /// Populates fields from the decoder, which is scoped to exactly the
    /// envelope's declared body. Fields introduced in schema version `N`
    /// must be read only when `version >= N`.
    fn read_body(
        &mut self,
        version: i32,
        dec: &mut StorableDecoder<'_>,
    ) -> Result<(), StorableError>;

    /// Writes every current field unconditionally, in the stable field
    /// order matching [`Storable::read_body`].
    fn write_body(&self, enc: &mut StorableEncoder);

    /// Encodes this object into a standalone envelope.
    fn encode(&self) -> Vec<u8> {
        let mut enc = StorableEncoder::new();
        enc.write_storable(self);
        enc.flush()
    }

    /// Decodes a new object from a standalone envelope.
    fn decode(bytes: &[u8]) -> Result<Self, StorableError>
    where
        Self: Default + Sized,
    {
        let mut dec = StorableDecoder::new(bytes);
        dec.read_storable()
    }

    /// Decodes a standalone envelope into this object.
    ///
    /// On failure the object is left in its [`Storable::reset`] state, so a
    /// caller never observes a mix of defaulted and hydrated fields for a
    /// record that failed to decode.
    fn decode_into(&mut self, bytes: &[u8]) -> Result<(), StorableError>
    where
        Self: Sized,
    {
        let mut dec = StorableDecoder::new(bytes);
        dec.read_into(self)
    }
}
