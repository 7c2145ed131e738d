use std::collections::BTreeMap;
use std::io::Read;

use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::error::{PolicyError, Result};
use crate::model::{ItemKind, MacroDefinition, RuleDefinition};

/// One classified document item with its body mapped onto the typed
/// definition.
#[derive(Debug)]
pub(crate) enum Item {
    Rule(RuleDefinition),
    Macro(MacroDefinition),
}

/// Decode the raw document into its ordered entry sequence.
///
/// The top level must be a YAML sequence of string-keyed mappings; anything
/// else fails the decode. The reader is consumed to completion and nothing
/// is retained on failure.
pub(crate) fn decode_entries<R: Read>(reader: R) -> Result<Vec<BTreeMap<String, Value>>> {
    serde_yaml::from_reader(reader).map_err(PolicyError::Decode)
}

/// Classify one entry by its declared kind and map the body onto the
/// corresponding definition.
///
/// Every entry declares exactly one item: a mapping with a single key
/// naming the kind, bound to the definition body.
pub(crate) fn decode_item(entry: &BTreeMap<String, Value>) -> Result<Item> {
    let (key, body) = match entry.iter().next() {
        Some(pair) if entry.len() == 1 => pair,
        _ => return Err(PolicyError::MalformedItem { found: entry.len() }),
    };

    let kind = ItemKind::parse(key).ok_or_else(|| PolicyError::UnknownItemKind(key.clone()))?;

    match kind {
        ItemKind::Rule => Ok(Item::Rule(decode_body(kind, body)?)),
        ItemKind::Macro => Ok(Item::Macro(decode_body(kind, body)?)),
    }
}

/// Map an untyped item body onto a definition, field by field. A null body
/// (`- rule:` with nothing under it) decodes to an all-default definition;
/// the validation step then reports the missing name.
fn decode_body<T>(kind: ItemKind, body: &Value) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.is_null() {
        return Ok(T::default());
    }
    serde_yaml::from_value(body.clone()).map_err(|source| PolicyError::FieldMapping { kind, source })
}
