use hashbrown::HashMap;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    codec::payload,
    error::{CodecError, CodecResult},
};

use super::{ApplyFn, Converter, Extension, FieldRule, Mapper};

/// Collects field rules for a [`Mapper`].
///
/// Field names are the domain attribute names (the payload keys), which
/// lets the extension payload leave out every attribute that has a rule.
pub struct MapperBuilder<S, D> {
    name: &'static str,
    rules: Vec<FieldRule<S, D>>,
    index: HashMap<&'static str, usize>,
    extension: Option<Extension<S, D>>,
    problems: Vec<String>,
}

impl<S: 'static, D: 'static> MapperBuilder<S, D> {
    /// Starts an empty table; `name` tags every error the mapper returns.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
            index: HashMap::new(),
            extension: None,
            problems: Vec::new(),
        }
    }

    /// Copies a same-typed field.
    pub fn copy<V>(self, field: &'static str, get: fn(&S) -> &V, set: fn(&mut D) -> &mut V) -> Self
    where
        V: Clone + 'static,
    {
        let apply: ApplyFn<S, D> = Box::new(move |src, dst| {
            set(dst).clone_from(get(src));
            Ok(())
        });
        self.push(field, false, apply)
    }

    /// Maps a field through `convert`.
    pub fn convert<A, B>(
        self,
        field: &'static str,
        get: fn(&S) -> &A,
        set: fn(&mut D) -> &mut B,
        convert: Converter<A, B>,
    ) -> Self
    where
        A: 'static,
        B: 'static,
    {
        self.push(field, true, converting(get, set, convert))
    }

    /// Replaces the rule already declared for `field` with a converter.
    ///
    /// Fails when no rule named `field` exists.
    pub fn register_converter<A, B>(
        &mut self,
        field: &'static str,
        get: fn(&S) -> &A,
        set: fn(&mut D) -> &mut B,
        convert: Converter<A, B>,
    ) -> CodecResult<&mut Self>
    where
        A: 'static,
        B: 'static,
    {
        let Some(&slot) = self.index.get(field) else {
            return Err(CodecError::Mapping {
                op: self.name,
                reason: format!("no field {field:?} to register a converter on"),
            });
        };
        self.rules[slot] = FieldRule {
            field,
            converted: true,
            apply: converting(get, set, convert),
        };
        Ok(self)
    }

    /// Routes every unmapped source attribute into the `field` payload column.
    pub fn extension_into(mut self, field: &'static str, set: fn(&mut D) -> &mut String) -> Self
    where
        S: Serialize,
    {
        self.set_extension(Extension::Into {
            field,
            write: Box::new(move |src, dst, mapped| {
                *set(dst) = payload::encode(src, mapped)?;
                Ok(())
            }),
        });
        self
    }

    /// Seeds the destination from the `field` payload column before rules run.
    pub fn extension_from(mut self, field: &'static str, get: fn(&S) -> &String) -> Self
    where
        D: DeserializeOwned + Default,
    {
        self.set_extension(Extension::From {
            field,
            read: Box::new(move |src, mapped| payload::decode(get(src), mapped)),
        });
        self
    }

    /// Freezes the table.
    pub fn build(self) -> CodecResult<Mapper<S, D>> {
        if !self.problems.is_empty() {
            return Err(CodecError::Mapping {
                op: self.name,
                reason: self.problems.join("; "),
            });
        }
        tracing::debug!(
            mapper = self.name,
            fields = self.rules.len(),
            extension = self.extension.is_some(),
            "mapper built"
        );
        Ok(Mapper::from_parts(self.name, self.rules, self.extension))
    }

    fn push(mut self, field: &'static str, converted: bool, apply: ApplyFn<S, D>) -> Self {
        if self.index.contains_key(field) {
            self.problems.push(format!("field {field:?} mapped twice"));
            return self;
        }
        self.index.insert(field, self.rules.len());
        self.rules.push(FieldRule {
            field,
            converted,
            apply,
        });
        self
    }

    fn set_extension(&mut self, extension: Extension<S, D>) {
        if self.extension.is_some() {
            self.problems.push("extension column declared twice".to_string());
            return;
        }
        self.extension = Some(extension);
    }
}

fn converting<S, D, A, B>(get: fn(&S) -> &A, set: fn(&mut D) -> &mut B, convert: Converter<A, B>) -> ApplyFn<S, D>
where
    S: 'static,
    D: 'static,
    A: 'static,
    B: 'static,
{
    Box::new(move |src, dst| {
        *set(dst) = convert(get(src))?;
        Ok(())
    })
}
