use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A top-level metalake as returned by the catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metalake {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
}

/// Audit trail attached to catalog resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<DateTime<Utc>>,
}

/// Body of a metalake creation call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetalakeCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

/// One change applied by an alter-metalake call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "@type")]
pub enum MetalakeUpdate {
    #[serde(rename = "rename")]
    Rename { #[serde(rename = "newName")] new_name: String },

    #[serde(rename = "updateComment")]
    UpdateComment { #[serde(rename = "newComment")] new_comment: String },

    #[serde(rename = "setProperty")]
    SetProperty { property: String, value: String },

    #[serde(rename = "removeProperty")]
    RemoveProperty { property: String },
}

/// Body of an alter-metalake call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetalakeUpdatesRequest {
    pub updates: Vec<MetalakeUpdate>,
}

/// Body of an enable/disable call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetalakeSetRequest {
    pub in_use: bool,
}

/// Envelope shared by all successful responses; `code` is 0 on success
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaseResponse {
    pub code: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetalakeResponse {
    pub code: u32,
    pub metalake: Metalake,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetalakeListResponse {
    pub code: u32,
    #[serde(default)]
    pub metalakes: Vec<Metalake>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropResponse {
    pub code: u32,
    pub dropped: bool,
}
