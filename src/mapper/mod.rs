//! Declarative struct-to-struct field mapper.
//!
//! A [`Mapper`] is an immutable table of field rules built once by a
//! [`MapperBuilder`]. Each rule either copies a same-typed field directly or
//! passes the source value through a registered [`Converter`]. Destination
//! fields without a rule keep whatever value they had.
//!
//! A mapper may also own one extension payload column:
//! - [`MapperBuilder::extension_into`] serializes every source attribute that
//!   has no rule into the payload after the rules run.
//! - [`MapperBuilder::extension_from`] seeds the whole destination from the
//!   payload before the rules run, so mapped columns always win. Payload
//!   keys that have a rule are skipped, whatever their type.

use hashbrown::HashSet;

use crate::{
    convert::ConvertError,
    error::{CodecError, CodecResult},
};

/// Builder for [`Mapper`].
pub mod builder;

pub use builder::MapperBuilder;

/// Plain conversion function registered against one field.
pub type Converter<A, B> = fn(&A) -> Result<B, ConvertError>;

pub(crate) type ApplyFn<S, D> = Box<dyn Fn(&S, &mut D) -> Result<(), ConvertError> + Send + Sync>;
pub(crate) type WriteExtensionFn<S, D> =
    Box<dyn Fn(&S, &mut D, &HashSet<&'static str>) -> Result<(), serde_json::Error> + Send + Sync>;
pub(crate) type ReadExtensionFn<S, D> =
    Box<dyn Fn(&S, &HashSet<&'static str>) -> Result<D, serde_json::Error> + Send + Sync>;

pub(crate) struct FieldRule<S, D> {
    pub(crate) field: &'static str,
    pub(crate) converted: bool,
    pub(crate) apply: ApplyFn<S, D>,
}

pub(crate) enum Extension<S, D> {
    Into {
        field: &'static str,
        write: WriteExtensionFn<S, D>,
    },
    From {
        field: &'static str,
        read: ReadExtensionFn<S, D>,
    },
}

/// Immutable field mapping from `S` to `D`.
///
/// Safe to share across threads: calls only touch the caller's records.
pub struct Mapper<S, D> {
    name: &'static str,
    rules: Vec<FieldRule<S, D>>,
    mapped: HashSet<&'static str>,
    extension: Option<Extension<S, D>>,
}

impl<S, D> Mapper<S, D> {
    pub(crate) fn from_parts(
        name: &'static str,
        rules: Vec<FieldRule<S, D>>,
        extension: Option<Extension<S, D>>,
    ) -> Self {
        let mapped = rules.iter().map(|rule| rule.field).collect();
        Self {
            name,
            rules,
            mapped,
            extension,
        }
    }

    /// Operation name used to tag errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Mapped field names in rule order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.field).collect()
    }

    /// True when `field` has a rule.
    pub fn maps(&self, field: &str) -> bool {
        self.mapped.contains(field)
    }

    /// True when `field` is routed through a converter rather than copied.
    pub fn is_converted(&self, field: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.field == field && rule.converted)
    }

    /// Payload column this mapper reads or writes, if any.
    pub fn extension_field(&self) -> Option<&'static str> {
        match &self.extension {
            Some(Extension::Into { field, .. } | Extension::From { field, .. }) => Some(*field),
            None => None,
        }
    }

    /// Maps `src` onto `dst`. On error `dst` is left unchanged.
    pub fn adapt(&self, src: &S, dst: &mut D) -> CodecResult<()>
    where
        D: Clone,
    {
        let mut staged = dst.clone();
        self.apply(src, &mut staged)?;
        *dst = staged;
        Ok(())
    }

    /// Builds a fresh `D` from `src`.
    pub fn make(&self, src: &S) -> CodecResult<D>
    where
        D: Default,
    {
        let mut dst = D::default();
        self.apply(src, &mut dst)?;
        Ok(dst)
    }

    fn apply(&self, src: &S, dst: &mut D) -> CodecResult<()> {
        if let Some(Extension::From { field, read }) = &self.extension {
            *dst = read(src, &self.mapped).map_err(|source| CodecError::Serialization {
                op: self.name,
                field: *field,
                source,
            })?;
        }

        for rule in &self.rules {
            (rule.apply)(src, dst).map_err(|source| CodecError::Validation {
                op: self.name,
                field: rule.field,
                source,
            })?;
        }

        if let Some(Extension::Into { field, write }) = &self.extension {
            write(src, dst, &self.mapped).map_err(|source| CodecError::Serialization {
                op: self.name,
                field: *field,
                source,
            })?;
        }
        Ok(())
    }
}

impl<S, D> std::fmt::Debug for Mapper<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("name", &self.name)
            .field("fields", &self.field_names())
            .field("extension", &self.extension_field())
            .finish()
    }
}
