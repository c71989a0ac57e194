//! # Association Resolver
//!
//! Relational descriptors (`model: "user"`, `collection: "pet"`) do not
//! describe a scalar. The referenced record may arrive as a string id, a
//! numeric id, or a populated object whose shape is not known here, so the
//! rule accepts any of the three. Collections wrap the same alternative in
//! an array.
//!
//! Only presence handling applies to associations; every other descriptor
//! flag is ignored.

use attrschema_core::{is_truthy, ConvertError, Descriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compose::apply_presence;
use crate::rule::Rule;

/// What to do with a descriptor that sets both `model` and `collection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationConflict {
    /// Treat it as a `model` reference and record a diagnostic.
    #[default]
    ModelWins,
    /// Fail with `ConvertError::ConflictingAssociation`.
    Reject,
}

/// A relational reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Association<'a> {
    /// Single reference.
    Model(&'a Value),
    /// List of references.
    Collection(&'a Value),
}

/// Result of association detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detected<'a> {
    /// The association the field resolves to.
    pub association: Association<'a>,
    /// Both keys were set and `model` was chosen.
    pub conflicting: bool,
}

impl<'a> Association<'a> {
    /// Recognise an association descriptor. `None` for scalars.
    ///
    /// # Errors
    ///
    /// `ConflictingAssociation` when both keys are truthy and the policy is
    /// [`AssociationConflict::Reject`].
    pub fn detect(
        field: &str,
        descriptor: &Descriptor<'a>,
        policy: AssociationConflict,
    ) -> Result<Option<Detected<'a>>, ConvertError> {
        let model = descriptor.get("model").filter(|v| is_truthy(v));
        let collection = descriptor.get("collection").filter(|v| is_truthy(v));

        let detected = match (model, collection) {
            (Some(_), Some(_)) if policy == AssociationConflict::Reject => {
                return Err(ConvertError::ConflictingAssociation {
                    field: field.to_string(),
                })
            }
            (Some(target), conflict) => Detected {
                association: Association::Model(target),
                conflicting: conflict.is_some(),
            },
            (None, Some(target)) => Detected {
                association: Association::Collection(target),
                conflicting: false,
            },
            (None, None) => return Ok(None),
        };
        Ok(Some(detected))
    }

    /// The referenced model identity.
    pub fn target(&self) -> &'a Value {
        match self {
            Association::Model(t) | Association::Collection(t) => t,
        }
    }
}

/// String id, numeric id, or populated record.
pub fn reference_rule() -> Rule {
    Rule::alternatives(vec![
        Rule::string(),
        Rule::number(),
        Rule::object().unknown(true),
    ])
}

/// Build the rule for an association field.
pub fn association_rule(association: &Association<'_>, descriptor: &Descriptor<'_>) -> Rule {
    let base = match association {
        Association::Model(_) => reference_rule(),
        Association::Collection(_) => Rule::array().items(reference_rule()),
    };
    apply_presence(descriptor, base)
}
