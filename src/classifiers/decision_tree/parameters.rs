use crate::error::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// What the builder does with a branch whose partition has no rows.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumMessage,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EmptyBranchPolicy {
    #[default]
    #[strum(
        message = "Most common parent class",
        detailed_message = "Predict the majority class of the parent partition."
    )]
    MostCommonParent,
    #[strum(
        message = "Fail",
        detailed_message = "Reject training data that leaves a branch without examples."
    )]
    Fail,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DecisionTreeParams {
    #[serde(default)]
    #[schemars(
        title = "Class attribute",
        description = "Name of the target attribute. Defaults to the last attribute of the table."
    )]
    pub class_attribute: Option<String>,

    #[serde(default)]
    #[schemars(
        title = "Excluded attributes",
        description = "Attributes never used for splitting, e.g. row identifiers."
    )]
    pub excluded_attributes: Vec<String>,

    #[serde(default)]
    #[schemars(
        title = "Empty branch policy",
        description = "Behaviour when a split value has no training rows."
    )]
    pub empty_branch_policy: EmptyBranchPolicy,
}

impl DecisionTreeParams {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn schema() -> Schema {
        schema_for!(DecisionTreeParams)
    }
}
