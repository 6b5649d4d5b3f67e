//! Shared types for the Lemmy load benchmark
//!
//! Contains the request and response schemas of the remote API, id newtypes,
//! the shared error type and tracing setup used by every workspace member.

pub mod types;
pub mod errors;
pub mod logging;
pub mod messages;

pub use types::*;
pub use errors::*;

pub use messages::{
    // Accounts
    Login, LoginResponse, Register, Person,

    // Communities
    Community, CommunityResponse, CommunityView, CreateCommunity, FollowCommunity,
    SubscribedType,

    // Posts
    CreatePost, CreatePostLike, GetPosts, GetPostsResponse, Post, PostAggregates,
    PostResponse, PostView,

    // Comments
    Comment, CommentAggregates, CommentResponse, CommentView, CreateComment, CreateCommentLike,

    // Federation lookups
    ResolveObject, ResolveObjectResponse,

    // Error body
    ApiErrorResponse,
};
