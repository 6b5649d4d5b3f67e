//! Content creation helpers
//!
//! Each helper builds one request payload and submits it. Responses are
//! returned untouched; callers decide what to check.

use rand::Rng;
use rand::distributions::Alphanumeric;

use shared::{
    Comment, CommentId, CommentResponse, CommunityId, CommunityResponse, CreateComment,
    CreateCommentLike, CreateCommunity, CreatePost, CreatePostLike, FollowCommunity, GetPosts,
    GetPostsResponse, ListingType, Post, PostId, PostResponse, ResolveObject,
    ResolveObjectResponse, SortType,
};

use super::session::Api;
use crate::error::BenchResult;

pub const DEFAULT_COMMENT: &str = "a jest test comment";
pub const COMMUNITY_DESCRIPTION: &str = "a sample description";

/// Page size of the newest-posts listing
pub const NEWEST_POSTS_LIMIT: i64 = 50;

pub fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

pub async fn create_community(api: &Api, name: &str) -> BenchResult<CommunityResponse> {
    let form = CreateCommunity {
        name: name.to_string(),
        title: name.to_string(),
        description: Some(COMMUNITY_DESCRIPTION.to_string()),
        icon: None,
        banner: None,
        nsfw: None,
        posting_restricted_to_mods: None,
        auth: api.auth.clone(),
    };
    api.client.create_community(form).await
}

/// Text post with no URL. URL posts make the server fetch the link, which
/// dominates the timing.
pub async fn create_no_link_post(api: &Api, community_id: CommunityId) -> BenchResult<PostResponse> {
    let form = CreatePost {
        name: format!("Post without link {}", random_string(5)),
        community_id,
        url: None,
        body: Some(format!("Body of post without link {}", random_string(10))),
        nsfw: None,
        language_id: None,
        auth: api.auth.clone(),
    };
    api.client.create_post(form).await
}

/// Text post tagged with the workload round
pub async fn create_benchmark_post(
    api: &Api,
    community_id: CommunityId,
    round: usize,
    tag: &str,
) -> BenchResult<PostResponse> {
    let form = CreatePost {
        name: format!("benchmark post {} {}", round, tag),
        community_id,
        url: None,
        body: Some(format!("Body of post without link {} {}", random_string(10), tag)),
        nsfw: None,
        language_id: None,
        auth: api.auth.clone(),
    };
    api.client.create_post(form).await
}

pub async fn create_comment(
    api: &Api,
    post_id: PostId,
    parent_id: Option<CommentId>,
    content: Option<&str>,
) -> BenchResult<CommentResponse> {
    let form = CreateComment {
        content: content.unwrap_or(DEFAULT_COMMENT).to_string(),
        post_id,
        parent_id,
        language_id: None,
        auth: api.auth.clone(),
    };
    api.client.create_comment(form).await
}

pub async fn like_post(api: &Api, score: i16, post: &Post) -> BenchResult<PostResponse> {
    let form = CreatePostLike { post_id: post.id, score, auth: api.auth.clone() };
    api.client.like_post(form).await
}

pub async fn like_comment(api: &Api, score: i16, comment: &Comment) -> BenchResult<CommentResponse> {
    let form = CreateCommentLike { comment_id: comment.id, score, auth: api.auth.clone() };
    api.client.like_comment(form).await
}

/// Look up a community by `!name@host` on the instance behind `api`
pub async fn resolve_community(api: &Api, query: &str) -> BenchResult<ResolveObjectResponse> {
    let form = ResolveObject { q: query.to_string(), auth: Some(api.auth.clone()) };
    api.client.resolve_object(form).await
}

pub async fn follow_community(
    api: &Api,
    follow: bool,
    community_id: CommunityId,
) -> BenchResult<CommunityResponse> {
    let form = FollowCommunity { community_id, follow, auth: api.auth.clone() };
    api.client.follow_community(form).await
}

/// Largest page of the newest posts across all communities
pub async fn get_posts_new_max(api: &Api, moderator_view: bool) -> BenchResult<GetPostsResponse> {
    let form = GetPosts {
        type_: Some(ListingType::All),
        sort: Some(SortType::New),
        limit: Some(NEWEST_POSTS_LIMIT),
        moderator_view: Some(moderator_view),
        auth: Some(api.auth.clone()),
        ..Default::default()
    };
    api.client.get_posts(form).await
}
