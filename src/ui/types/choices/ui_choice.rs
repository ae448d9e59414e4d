use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// A set of runnable configurations the wizard can offer, such as
/// [`TaskChoice`](super::TaskChoice).
///
/// Implementors are tagged as `{"type": <kind>, "params": {...}}`, which is
/// also the layout of a saved task file. `Kind` lists the variants; its strum
/// messages become the menu entries and its kebab-case name is the tag.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// Schema of the tagged enum; the wizard prompts for the `params`
    /// properties of the picked variant.
    fn schema() -> Schema;

    fn prompt_label() -> &'static str;

    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to move, ↵ to pick")
    }

    /// Pre-filled answers for fields whose schema carries no `default`.
    fn default_params(kind: Self::Kind) -> Value;

    /// Reassembles the tagged JSON from the picked kind and the answers,
    /// then deserialises it, so serde defaults and type checks still apply.
    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let tag: &'static str = kind.into();
        Ok(serde_json::from_value(json!({ "type": tag, "params": params }))?)
    }
}
