use std::collections::HashSet;
use std::io::Read;

use crate::error::{Result, ValidationError};
use crate::model::{ItemKind, Policy};
use crate::parser::{decode_entries, decode_item, Item};
use crate::validate::{check_macro, check_rule};

/// Knobs controlling how strictly a policy document is loaded.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Reject documents that declare the same rule ID (or the same macro
    /// ID) more than once. Off by default: duplicates load in document
    /// order and the downstream engine decides precedence. Rule and macro
    /// IDs live in independent namespaces either way.
    pub require_unique_ids: bool,
}

/// Load a policy document from a reader, validating every definition.
pub fn load_policy<R: Read>(reader: R) -> Result<Policy> {
    load_policy_with(reader, &LoadOptions::default())
}

/// Load a policy document with explicit options.
///
/// The load is all-or-nothing: the first decode, classification, or
/// validation failure aborts the call and no partial policy is returned.
pub fn load_policy_with<R: Read>(reader: R, options: &LoadOptions) -> Result<Policy> {
    let entries = decode_entries(reader)?;

    let mut policy = Policy::default();
    let mut seen_rules: HashSet<String> = HashSet::new();
    let mut seen_macros: HashSet<String> = HashSet::new();

    for entry in &entries {
        match decode_item(entry)? {
            Item::Rule(rule) => {
                check_rule(&rule)?;
                if options.require_unique_ids && !seen_rules.insert(rule.id.clone()) {
                    return Err(ValidationError::DuplicateId {
                        kind: ItemKind::Rule,
                        id: rule.id,
                    }
                    .into());
                }
                log::trace!("loaded rule '{}'", rule.id);
                policy.rules.push(rule);
            }
            Item::Macro(def) => {
                check_macro(&def)?;
                if options.require_unique_ids && !seen_macros.insert(def.id.clone()) {
                    return Err(ValidationError::DuplicateId {
                        kind: ItemKind::Macro,
                        id: def.id,
                    }
                    .into());
                }
                log::trace!("loaded macro '{}'", def.id);
                policy.macros.push(def);
            }
        }
    }

    log::debug!(
        "loaded policy: {} rules, {} macros",
        policy.rules.len(),
        policy.macros.len()
    );
    Ok(policy)
}
