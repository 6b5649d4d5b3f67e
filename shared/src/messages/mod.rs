//! Request and response schemas of the Lemmy HTTP API
//!
//! Only the calls exercised by the benchmark are modelled:
//! - `person`: login and registration
//! - `community`: community creation and follows
//! - `post`: post creation, votes and listings
//! - `comment`: comment creation and votes
//! - `search`: federated object resolution
//!
//! Response structs keep the fields the harness reads; unknown fields sent by
//! the server are ignored on deserialization.

pub mod person;
pub mod community;
pub mod post;
pub mod comment;
pub mod search;

use serde::{Deserialize, Serialize};

pub use person::{Login, LoginResponse, Person, Register};

pub use community::{
    Community, CommunityResponse, CommunityView, CreateCommunity, FollowCommunity,
    SubscribedType,
};

pub use post::{
    CreatePost, CreatePostLike, GetPosts, GetPostsResponse, Post, PostAggregates,
    PostResponse, PostView,
};

pub use comment::{
    Comment, CommentAggregates, CommentResponse, CommentView, CreateComment, CreateCommentLike,
};

pub use search::{ResolveObject, ResolveObjectResponse};

/// Body returned by the server alongside a non-success status
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiErrorResponse {
    pub error: String,
}
