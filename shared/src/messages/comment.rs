//! Comment types

use serde::{Deserialize, Serialize};
use crate::{CommentId, Community, Person, PersonId, Post, PostId};

/// A comment row.
///
/// The server does not send a parent id; the position in the tree is encoded
/// in `path` as dot-separated ids rooted at `0`, ending with the comment's own id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub creator_id: PersonId,
    pub post_id: PostId,
    pub content: String,
    pub path: String,
    #[serde(default)]
    pub ap_id: String,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub deleted: bool,
}

impl Comment {
    /// Parent comment id taken from `path`, `None` for top-level comments
    pub fn parent_id(&self) -> Option<CommentId> {
        let mut segments = self.path.rsplit('.');
        segments.next()?;
        segments
            .next()
            .and_then(|segment| segment.parse::<i32>().ok())
            .filter(|id| *id != 0)
            .map(CommentId)
    }

    /// Number of ancestors between this comment and the post
    pub fn depth(&self) -> usize {
        self.path.split('.').count().saturating_sub(2)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CommentAggregates {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    #[serde(default)]
    pub child_count: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CommentView {
    pub comment: Comment,
    pub creator: Person,
    pub post: Post,
    pub community: Community,
    #[serde(default)]
    pub counts: CommentAggregates,
    #[serde(default)]
    pub my_vote: Option<i16>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CommentResponse {
    pub comment_view: CommentView,
    #[serde(default)]
    pub recipient_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateComment {
    pub content: String,
    pub post_id: PostId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i32>,
    pub auth: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateCommentLike {
    pub comment_id: CommentId,
    pub score: i16,
    pub auth: String,
}
