//! Post types

use serde::{Deserialize, Serialize};
use crate::{Community, CommunityId, ListingType, Person, PersonId, PostId, SortType};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub creator_id: PersonId,
    pub community_id: CommunityId,
    #[serde(default)]
    pub ap_id: String,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub published: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PostAggregates {
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PostView {
    pub post: Post,
    pub creator: Person,
    pub community: Community,
    #[serde(default)]
    pub counts: PostAggregates,
    #[serde(default)]
    pub my_vote: Option<i16>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PostResponse {
    pub post_view: PostView,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreatePost {
    pub name: String,
    pub community_id: CommunityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i32>,
    pub auth: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreatePostLike {
    pub post_id: PostId,
    pub score: i16,
    pub auth: String,
}

/// Listing query, sent as URL query parameters
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct GetPosts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_: Option<ListingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<CommunityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator_view: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GetPostsResponse {
    pub posts: Vec<PostView>,
}
