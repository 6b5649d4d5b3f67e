//! Federated object resolution

use serde::{Deserialize, Serialize};
use crate::{CommentView, CommunityView, PostView};

/// Lookup by URL or `!name@host` handle, sent as URL query parameters
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResolveObject {
    pub q: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

/// At most one of the fields is populated, matching the kind of object found
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ResolveObjectResponse {
    #[serde(default)]
    pub comment: Option<CommentView>,
    #[serde(default)]
    pub post: Option<PostView>,
    #[serde(default)]
    pub community: Option<CommunityView>,
}
