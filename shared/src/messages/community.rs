//! Community types

use serde::{Deserialize, Serialize};
use crate::CommunityId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actor_id: String,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub nsfw: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubscribedType {
    Subscribed,
    #[default]
    NotSubscribed,
    Pending,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CommunityView {
    pub community: Community,
    #[serde(default)]
    pub subscribed: SubscribedType,
    #[serde(default)]
    pub blocked: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CommunityResponse {
    pub community_view: CommunityView,
    #[serde(default)]
    pub discussion_languages: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateCommunity {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_restricted_to_mods: Option<bool>,
    pub auth: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FollowCommunity {
    pub community_id: CommunityId,
    pub follow: bool,
    pub auth: String,
}
