use crate::error::ValidationError;
use crate::ident::is_valid_id;
use crate::model::{ItemKind, MacroDefinition, RuleDefinition};

/// Validate a rule definition. Checks run in a fixed order so the first
/// failure on a multiply-invalid definition is deterministic: missing name,
/// then ID grammar, then missing expression.
pub(crate) fn check_rule(rule: &RuleDefinition) -> Result<(), ValidationError> {
    check_id(ItemKind::Rule, &rule.id)?;
    if rule.expression.is_empty() {
        return Err(ValidationError::MissingExpression {
            kind: ItemKind::Rule,
        });
    }
    Ok(())
}

/// Validate a macro definition, same order as [`check_rule`].
pub(crate) fn check_macro(def: &MacroDefinition) -> Result<(), ValidationError> {
    check_id(ItemKind::Macro, &def.id)?;
    if def.expression.is_empty() {
        return Err(ValidationError::MissingExpression {
            kind: ItemKind::Macro,
        });
    }
    Ok(())
}

/// The emptiness check precedes the grammar check: the grammar alone would
/// accept the empty string.
fn check_id(kind: ItemKind, id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::MissingId { kind });
    }
    if !is_valid_id(id) {
        return Err(ValidationError::InvalidIdFormat { kind });
    }
    Ok(())
}
