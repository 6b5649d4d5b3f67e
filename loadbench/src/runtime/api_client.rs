//! REST API Client for a Lemmy instance
//!
//! Provides the handful of `/api/v3` calls the benchmark drives. Every call is
//! a single request with no retry; non-success statuses surface as
//! [`BenchError::Api`].

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::error::{BenchError, BenchResult};
use shared::SharedError;
use shared::{
    ApiErrorResponse, CommentResponse, CommunityResponse, CreateComment, CreateCommentLike,
    CreateCommunity, CreatePost, CreatePostLike, FollowCommunity, GetPosts, GetPostsResponse,
    Login, LoginResponse, PostResponse, Register, ResolveObject, ResolveObjectResponse,
};

const API_PREFIX: &str = "api/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The remote calls used by the workloads
#[mockall::automock]
#[async_trait]
pub trait LemmyApi: Send + Sync {
    /// Base URL of the instance this client talks to
    fn base_url(&self) -> String;

    async fn login(&self, form: Login) -> BenchResult<LoginResponse>;

    async fn register(&self, form: Register) -> BenchResult<LoginResponse>;

    async fn create_community(&self, form: CreateCommunity) -> BenchResult<CommunityResponse>;

    async fn create_post(&self, form: CreatePost) -> BenchResult<PostResponse>;

    async fn create_comment(&self, form: CreateComment) -> BenchResult<CommentResponse>;

    async fn like_post(&self, form: CreatePostLike) -> BenchResult<PostResponse>;

    async fn like_comment(&self, form: CreateCommentLike) -> BenchResult<CommentResponse>;

    async fn resolve_object(&self, form: ResolveObject) -> BenchResult<ResolveObjectResponse>;

    async fn follow_community(&self, form: FollowCommunity) -> BenchResult<CommunityResponse>;

    async fn get_posts(&self, form: GetPosts) -> BenchResult<GetPostsResponse>;
}

/// reqwest-backed client for one instance
#[derive(Clone, Debug)]
pub struct LemmyClient {
    base_url: Url,
    client: reqwest::Client,
}

impl LemmyClient {
    /// Create a new API client.
    ///
    /// Accepts `host:port` as well as a full URL.
    pub fn new(instance_addr: &str) -> BenchResult<Self> {
        let base = if instance_addr.starts_with("http") {
            instance_addr.to_string()
        } else {
            format!("http://{}", instance_addr)
        };
        let mut base_url = Url::parse(&base)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> BenchResult<Url> {
        Ok(self.base_url.join(&format!("{}/{}", API_PREFIX, path))?)
    }

    async fn post_json<T, R>(&self, path: &str, form: &T) -> BenchResult<R>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(form).send().await?;
        Self::decode(path, response).await
    }

    async fn get_query<T, R>(&self, path: &str, query: &T) -> BenchResult<R>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).query(query).send().await?;
        Self::decode(path, response).await
    }

    async fn decode<R: DeserializeOwned>(path: &str, response: reqwest::Response) -> BenchResult<R> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|err| err.error)
                .unwrap_or(body);
            return Err(BenchError::Api {
                endpoint: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let decoded = serde_json::from_str::<R>(&body).map_err(SharedError::from)?;
        Ok(decoded)
    }
}

#[async_trait]
impl LemmyApi for LemmyClient {
    fn base_url(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }

    async fn login(&self, form: Login) -> BenchResult<LoginResponse> {
        self.post_json("user/login", &form).await
    }

    async fn register(&self, form: Register) -> BenchResult<LoginResponse> {
        self.post_json("user/register", &form).await
    }

    async fn create_community(&self, form: CreateCommunity) -> BenchResult<CommunityResponse> {
        self.post_json("community", &form).await
    }

    async fn create_post(&self, form: CreatePost) -> BenchResult<PostResponse> {
        self.post_json("post", &form).await
    }

    async fn create_comment(&self, form: CreateComment) -> BenchResult<CommentResponse> {
        self.post_json("comment", &form).await
    }

    async fn like_post(&self, form: CreatePostLike) -> BenchResult<PostResponse> {
        self.post_json("post/like", &form).await
    }

    async fn like_comment(&self, form: CreateCommentLike) -> BenchResult<CommentResponse> {
        self.post_json("comment/like", &form).await
    }

    async fn resolve_object(&self, form: ResolveObject) -> BenchResult<ResolveObjectResponse> {
        self.get_query("resolve_object", &form).await
    }

    async fn follow_community(&self, form: FollowCommunity) -> BenchResult<CommunityResponse> {
        self.post_json("community/follow", &form).await
    }

    async fn get_posts(&self, form: GetPosts) -> BenchResult<GetPostsResponse> {
        self.get_query("post/list", &form).await
    }
}
