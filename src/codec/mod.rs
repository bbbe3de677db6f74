//! Codecs between domain entities and storage rows.

/// Contact codec: core columns plus extension payload.
pub mod contact;
/// Logbook and user codecs.
pub mod entities;
/// Extension payload wire format.
pub mod payload;
/// Per-backend warm-up gate.
pub mod registry;

pub use contact::ContactCodec;
pub use entities::{LogbookCodec, UserCodec};
pub use registry::{CodecRegistry, DialectCodecs};
