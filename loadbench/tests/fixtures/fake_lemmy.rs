//! In-memory Lemmy instance for exercising the workloads without a server

#![allow(dead_code)] // Not every inspector is used by every test binary

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use loadbench::{BenchError, BenchResult, LemmyApi};
use shared::{
    Comment, CommentAggregates, CommentId, CommentResponse, CommentView, Community, CommunityId,
    CommunityResponse, CommunityView, CreateComment, CreateCommentLike, CreateCommunity,
    CreatePost, CreatePostLike, FollowCommunity, GetPosts, GetPostsResponse, Login, LoginResponse,
    Person, PersonId, Post, PostAggregates, PostId, PostResponse, PostView, Register,
    ResolveObject, ResolveObjectResponse, SubscribedType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote<T> {
    pub voter: PersonId,
    pub target: T,
    pub score: i16,
}

#[derive(Default)]
struct State {
    next_id: i32,
    people: Vec<(Person, String)>,
    tokens: HashMap<String, PersonId>,
    communities: Vec<Community>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    post_votes: Vec<Vote<PostId>>,
    comment_votes: Vec<Vote<CommentId>>,
    follows: Vec<(PersonId, CommunityId)>,
    login_calls: usize,
    register_calls: usize,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn person(&self, id: PersonId) -> Person {
        self.people
            .iter()
            .find(|(p, _)| p.id == id)
            .map(|(p, _)| p.clone())
            .expect("person exists")
    }

    fn community(&self, id: CommunityId) -> Option<&Community> {
        self.communities.iter().find(|c| c.id == id)
    }

    fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn post_view(&self, post: &Post) -> PostView {
        let votes: Vec<_> = self.post_votes.iter().filter(|v| v.target == post.id).collect();
        PostView {
            post: post.clone(),
            creator: self.person(post.creator_id),
            community: self.community(post.community_id).cloned().expect("community exists"),
            counts: PostAggregates {
                comments: self.comments.iter().filter(|c| c.post_id == post.id).count() as i64,
                score: votes.iter().map(|v| v.score as i64).sum(),
                upvotes: votes.iter().filter(|v| v.score > 0).count() as i64,
                downvotes: votes.iter().filter(|v| v.score < 0).count() as i64,
            },
            my_vote: None,
        }
    }

    fn comment_view(&self, comment: &Comment) -> CommentView {
        let post = self.post(comment.post_id).cloned().expect("post exists");
        let votes: Vec<_> = self.comment_votes.iter().filter(|v| v.target == comment.id).collect();
        CommentView {
            community: self.community(post.community_id).cloned().expect("community exists"),
            creator: self.person(comment.creator_id),
            comment: comment.clone(),
            post,
            counts: CommentAggregates {
                score: votes.iter().map(|v| v.score as i64).sum(),
                upvotes: votes.iter().filter(|v| v.score > 0).count() as i64,
                downvotes: votes.iter().filter(|v| v.score < 0).count() as i64,
                child_count: 0,
            },
            my_vote: None,
        }
    }

    fn community_response(&self, community: Community, subscribed: SubscribedType) -> CommunityResponse {
        CommunityResponse {
            community_view: CommunityView { community, subscribed, blocked: false },
            discussion_languages: Vec::new(),
        }
    }
}

/// One fake instance. A beta fake can be linked to an alpha fake so that
/// `resolve_object` copies alpha's communities the way federation would.
pub struct FakeLemmy {
    base_url: String,
    host: String,
    state: Mutex<State>,
    peer: Option<Arc<FakeLemmy>>,
    require_approval: bool,
}

fn api_error(endpoint: &str, status: u16, message: &str) -> BenchError {
    BenchError::Api {
        endpoint: endpoint.to_string(),
        status,
        message: message.to_string(),
    }
}

impl FakeLemmy {
    pub fn new(base_url: &str, host: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            host: host.to_string(),
            state: Mutex::new(State::default()),
            peer: None,
            require_approval: false,
        }
    }

    pub fn federated_with(mut self, peer: Arc<FakeLemmy>) -> Self {
        self.peer = Some(peer);
        self
    }

    /// Registrations succeed but never return a token
    pub fn requiring_approval(mut self) -> Self {
        self.require_approval = true;
        self
    }

    pub fn seed_user(&self, name: &str, password: &str) -> PersonId {
        let mut state = self.state.lock().unwrap();
        Self::insert_person(&mut state, &self.host, name, password)
    }

    /// Create `count` posts in a fresh community, as `author`
    pub fn seed_posts(&self, author: &str, count: usize) -> Vec<PostId> {
        let mut state = self.state.lock().unwrap();
        let creator_id = state
            .people
            .iter()
            .find(|(p, _)| p.name == author)
            .map(|(p, _)| p.id)
            .expect("seeded author exists");
        let community_id = CommunityId(state.next_id());
        state.communities.push(Community {
            id: community_id,
            name: format!("seed_{}", community_id),
            title: "seed".to_string(),
            description: None,
            actor_id: format!("http://{}/c/seed_{}", self.host, community_id),
            local: true,
            removed: false,
            deleted: false,
            nsfw: false,
        });

        (0..count)
            .map(|n| {
                let id = PostId(state.next_id());
                state.posts.push(Post {
                    id,
                    name: format!("seed post {}", n),
                    url: None,
                    body: None,
                    creator_id,
                    community_id,
                    ap_id: format!("http://{}/post/{}", self.host, id),
                    local: true,
                    published: String::new(),
                });
                id
            })
            .collect()
    }

    fn insert_person(state: &mut State, host: &str, name: &str, password: &str) -> PersonId {
        let id = PersonId(state.next_id());
        state.people.push((
            Person {
                id,
                name: name.to_string(),
                display_name: None,
                actor_id: format!("http://{}/u/{}", host, name),
                local: true,
            },
            password.to_string(),
        ));
        id
    }

    fn authenticate(state: &State, endpoint: &str, auth: &str) -> BenchResult<PersonId> {
        state
            .tokens
            .get(auth)
            .copied()
            .ok_or_else(|| api_error(endpoint, 400, "not_logged_in"))
    }

    fn issue_token(state: &mut State, person_id: PersonId, name: &str) -> String {
        let jwt = format!("jwt-{}-{}", name, person_id);
        state.tokens.insert(jwt.clone(), person_id);
        jwt
    }

    fn find_community_by_name(&self, name: &str) -> Option<Community> {
        let state = self.state.lock().unwrap();
        state.communities.iter().find(|c| c.name == name).cloned()
    }

    // Inspectors

    pub fn communities(&self) -> Vec<Community> {
        self.state.lock().unwrap().communities.clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.state.lock().unwrap().posts.clone()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.state.lock().unwrap().comments.clone()
    }

    pub fn post_votes(&self) -> Vec<Vote<PostId>> {
        self.state.lock().unwrap().post_votes.clone()
    }

    pub fn comment_votes(&self) -> Vec<Vote<CommentId>> {
        self.state.lock().unwrap().comment_votes.clone()
    }

    pub fn follows(&self) -> Vec<(PersonId, CommunityId)> {
        self.state.lock().unwrap().follows.clone()
    }

    pub fn person_id(&self, name: &str) -> Option<PersonId> {
        let state = self.state.lock().unwrap();
        state.people.iter().find(|(p, _)| p.name == name).map(|(p, _)| p.id)
    }

    pub fn login_calls(&self) -> usize {
        self.state.lock().unwrap().login_calls
    }

    pub fn register_calls(&self) -> usize {
        self.state.lock().unwrap().register_calls
    }
}

#[async_trait]
impl LemmyApi for FakeLemmy {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    async fn login(&self, form: Login) -> BenchResult<LoginResponse> {
        let mut state = self.state.lock().unwrap();
        state.login_calls += 1;
        let found = state
            .people
            .iter()
            .find(|(p, password)| p.name == form.username_or_email && *password == form.password)
            .map(|(p, _)| p.id);

        match found {
            Some(id) => {
                let jwt = Self::issue_token(&mut state, id, &form.username_or_email);
                Ok(LoginResponse { jwt: Some(jwt), ..Default::default() })
            }
            None => Err(api_error("user/login", 400, "incorrect_login")),
        }
    }

    async fn register(&self, form: Register) -> BenchResult<LoginResponse> {
        let mut state = self.state.lock().unwrap();
        state.register_calls += 1;
        if state.people.iter().any(|(p, _)| p.name == form.username) {
            return Err(api_error("user/register", 400, "user_already_exists"));
        }
        if form.password != form.password_verify {
            return Err(api_error("user/register", 400, "passwords_dont_match"));
        }

        let id = Self::insert_person(&mut state, &self.host, &form.username, &form.password);
        if self.require_approval {
            return Ok(LoginResponse { jwt: None, registration_created: true, verify_email_sent: false });
        }
        let jwt = Self::issue_token(&mut state, id, &form.username);
        Ok(LoginResponse { jwt: Some(jwt), registration_created: false, verify_email_sent: false })
    }

    async fn create_community(&self, form: CreateCommunity) -> BenchResult<CommunityResponse> {
        let mut state = self.state.lock().unwrap();
        Self::authenticate(&state, "community", &form.auth)?;
        if state.communities.iter().any(|c| c.name == form.name) {
            return Err(api_error("community", 400, "community_already_exists"));
        }

        let community = Community {
            id: CommunityId(state.next_id()),
            actor_id: format!("http://{}/c/{}", self.host, form.name),
            name: form.name,
            title: form.title,
            description: form.description,
            local: true,
            removed: false,
            deleted: false,
            nsfw: form.nsfw.unwrap_or(false),
        };
        state.communities.push(community.clone());
        Ok(state.community_response(community, SubscribedType::Subscribed))
    }

    async fn create_post(&self, form: CreatePost) -> BenchResult<PostResponse> {
        let mut state = self.state.lock().unwrap();
        let creator_id = Self::authenticate(&state, "post", &form.auth)?;
        if state.community(form.community_id).is_none() {
            return Err(api_error("post", 404, "couldnt_find_community"));
        }

        let id = PostId(state.next_id());
        let post = Post {
            id,
            name: form.name,
            url: form.url,
            body: form.body,
            creator_id,
            community_id: form.community_id,
            ap_id: format!("http://{}/post/{}", self.host, id),
            local: true,
            published: String::new(),
        };
        state.posts.push(post.clone());
        Ok(PostResponse { post_view: state.post_view(&post) })
    }

    async fn create_comment(&self, form: CreateComment) -> BenchResult<CommentResponse> {
        let mut state = self.state.lock().unwrap();
        let creator_id = Self::authenticate(&state, "comment", &form.auth)?;
        if state.post(form.post_id).is_none() {
            return Err(api_error("comment", 404, "couldnt_find_post"));
        }

        let parent_path = match form.parent_id {
            Some(parent_id) => {
                let parent = state
                    .comments
                    .iter()
                    .find(|c| c.id == parent_id && c.post_id == form.post_id)
                    .ok_or_else(|| api_error("comment", 404, "couldnt_find_comment"))?;
                parent.path.clone()
            }
            None => "0".to_string(),
        };

        let id = CommentId(state.next_id());
        let comment = Comment {
            id,
            creator_id,
            post_id: form.post_id,
            content: form.content,
            path: format!("{}.{}", parent_path, id),
            ap_id: format!("http://{}/comment/{}", self.host, id),
            local: true,
            removed: false,
            deleted: false,
        };
        state.comments.push(comment.clone());
        Ok(CommentResponse { comment_view: state.comment_view(&comment), recipient_ids: Vec::new() })
    }

    async fn like_post(&self, form: CreatePostLike) -> BenchResult<PostResponse> {
        let mut state = self.state.lock().unwrap();
        let voter = Self::authenticate(&state, "post/like", &form.auth)?;
        let post = state
            .post(form.post_id)
            .cloned()
            .ok_or_else(|| api_error("post/like", 404, "couldnt_find_post"))?;

        state.post_votes.retain(|v| !(v.voter == voter && v.target == post.id));
        state.post_votes.push(Vote { voter, target: post.id, score: form.score });
        Ok(PostResponse { post_view: state.post_view(&post) })
    }

    async fn like_comment(&self, form: CreateCommentLike) -> BenchResult<CommentResponse> {
        let mut state = self.state.lock().unwrap();
        let voter = Self::authenticate(&state, "comment/like", &form.auth)?;
        let comment = state
            .comments
            .iter()
            .find(|c| c.id == form.comment_id)
            .cloned()
            .ok_or_else(|| api_error("comment/like", 404, "couldnt_find_comment"))?;

        state.comment_votes.retain(|v| !(v.voter == voter && v.target == comment.id));
        state.comment_votes.push(Vote { voter, target: comment.id, score: form.score });
        Ok(CommentResponse { comment_view: state.comment_view(&comment), recipient_ids: Vec::new() })
    }

    async fn resolve_object(&self, form: ResolveObject) -> BenchResult<ResolveObjectResponse> {
        let Some((name, host)) = form.q.strip_prefix('!').and_then(|rest| rest.split_once('@')) else {
            return Err(api_error("resolve_object", 400, "couldnt_find_object"));
        };

        if host == self.host {
            let community = self.find_community_by_name(name);
            let state = self.state.lock().unwrap();
            return Ok(ResolveObjectResponse {
                community: community.map(|c| state.community_response(c, SubscribedType::NotSubscribed).community_view),
                ..Default::default()
            });
        }

        let remote = match &self.peer {
            Some(peer) if peer.host == host => peer.find_community_by_name(name),
            _ => None,
        };
        let Some(remote) = remote else {
            return Ok(ResolveObjectResponse::default());
        };

        // Cache a local copy under a local id, keyed by the remote actor id
        let mut state = self.state.lock().unwrap();
        let existing = state.communities.iter().find(|c| c.actor_id == remote.actor_id).cloned();
        let cached = match existing {
            Some(existing) => existing,
            None => {
                let copy = Community { id: CommunityId(state.next_id()), local: false, ..remote };
                state.communities.push(copy.clone());
                copy
            }
        };
        Ok(ResolveObjectResponse {
            community: Some(state.community_response(cached, SubscribedType::NotSubscribed).community_view),
            ..Default::default()
        })
    }

    async fn follow_community(&self, form: FollowCommunity) -> BenchResult<CommunityResponse> {
        let mut state = self.state.lock().unwrap();
        let follower = Self::authenticate(&state, "community/follow", &form.auth)?;
        let community = state
            .community(form.community_id)
            .cloned()
            .ok_or_else(|| api_error("community/follow", 404, "couldnt_find_community"))?;

        state.follows.retain(|(p, c)| !(*p == follower && *c == community.id));
        let subscribed = if form.follow {
            state.follows.push((follower, community.id));
            SubscribedType::Subscribed
        } else {
            SubscribedType::NotSubscribed
        };
        Ok(state.community_response(community, subscribed))
    }

    async fn get_posts(&self, form: GetPosts) -> BenchResult<GetPostsResponse> {
        let state = self.state.lock().unwrap();
        let limit = form.limit.unwrap_or(10).max(0) as usize;
        let mut posts: Vec<&Post> = state.posts.iter().collect();
        // Ids grow monotonically, so id order is creation order
        posts.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(GetPostsResponse {
            posts: posts.into_iter().take(limit).map(|p| state.post_view(p)).collect(),
        })
    }
}
