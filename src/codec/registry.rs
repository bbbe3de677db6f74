//! Warm-up gate for per-backend codec sets.
//!
//! A [`CodecRegistry`] is an owned value held by a long-lived service. Each
//! backend's codecs are built at most once, by whichever caller reaches the
//! gate first; every later caller gets the same immutable instance.

use std::sync::OnceLock;

use crate::{
    config::CodecConfig,
    dialect::{Dialect, Postgres, Sqlite},
    error::{CodecError, CodecResult},
    types::Backend,
};

use super::{ContactCodec, LogbookCodec, UserCodec};

/// Every codec for one backend.
#[derive(Debug)]
pub struct DialectCodecs<D: Dialect> {
    /// Contacts (columns + extension payload).
    pub contacts: ContactCodec<D>,
    /// Logbooks.
    pub logbooks: LogbookCodec<D>,
    /// Users.
    pub users: UserCodec<D>,
}

impl<D: Dialect> DialectCodecs<D> {
    /// Builds all codecs for `D`.
    pub fn build() -> CodecResult<Self> {
        Ok(Self {
            contacts: ContactCodec::new()?,
            logbooks: LogbookCodec::new()?,
            users: UserCodec::new()?,
        })
    }
}

/// One-time initialization cell for a backend's codecs.
pub type Slot<D> = OnceLock<Result<DialectCodecs<D>, String>>;

/// Lazily initialized codec sets, one per backend.
#[derive(Debug, Default)]
pub struct CodecRegistry {
    sqlite: Slot<Sqlite>,
    postgres: Slot<Postgres>,
}

/// Dialects with a slot in [`CodecRegistry`].
pub trait Registered: Dialect {
    /// The registry slot holding this dialect's codecs.
    fn slot(registry: &CodecRegistry) -> &Slot<Self>;
}

impl Registered for Sqlite {
    fn slot(registry: &CodecRegistry) -> &Slot<Self> {
        &registry.sqlite
    }
}

impl Registered for Postgres {
    fn slot(registry: &CodecRegistry) -> &Slot<Self> {
        &registry.postgres
    }
}

impl CodecRegistry {
    /// Empty registry; nothing is built until first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the configured backend already warmed up.
    pub fn from_config(config: &CodecConfig) -> CodecResult<Self> {
        let registry = Self::new();
        registry.warm_up(config.backend)?;
        Ok(registry)
    }

    /// Builds the codecs for `backend` if no caller has yet.
    pub fn warm_up(&self, backend: Backend) -> CodecResult<()> {
        match backend {
            Backend::Sqlite => self.codecs::<Sqlite>().map(|_| ()),
            Backend::Postgres => self.codecs::<Postgres>().map(|_| ()),
        }
    }

    /// True once `backend` has passed the gate.
    pub fn is_warm(&self, backend: Backend) -> bool {
        match backend {
            Backend::Sqlite => self.sqlite.get().is_some(),
            Backend::Postgres => self.postgres.get().is_some(),
        }
    }

    /// Codecs for `D`, built on first call.
    pub fn codecs<D: Registered>(&self) -> CodecResult<&DialectCodecs<D>> {
        let built = D::slot(self).get_or_init(|| {
            let built = DialectCodecs::<D>::build().map_err(|err| err.to_string());
            match &built {
                Ok(_) => tracing::debug!(backend = %D::BACKEND, "codecs initialised"),
                Err(err) => tracing::error!(backend = %D::BACKEND, error = %err, "codec initialisation failed"),
            }
            built
        });
        built.as_ref().map_err(|reason| CodecError::Mapping {
            op: "warm up codecs",
            reason: reason.clone(),
        })
    }

    /// SQLite codecs.
    pub fn sqlite(&self) -> CodecResult<&DialectCodecs<Sqlite>> {
        self.codecs::<Sqlite>()
    }

    /// PostgreSQL codecs.
    pub fn postgres(&self) -> CodecResult<&DialectCodecs<Postgres>> {
        self.codecs::<Postgres>()
    }
}
