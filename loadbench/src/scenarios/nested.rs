//! Nested-reply workload
//!
//! Grows comment trees under the newest posts. Replies chain under a fixed
//! parent that moves to the latest reply every [`PARENT_RESET_INTERVAL`]
//! replies, so each tree is a ladder of wide sibling groups.

use shared::logging;
use shared::CommentId;

use crate::error::BenchResult;
use crate::runtime::content::{create_comment, get_posts_new_max};
use crate::runtime::session::Api;
use crate::testing::expect_at_least;

pub const MIN_RECENT_POSTS: usize = 10;
pub const NESTED_POSTS: usize = 4;
/// Post `i` receives `i * REPLIES_PER_POST_STEP` replies
pub const REPLIES_PER_POST_STEP: usize = 1000;
pub const PARENT_RESET_INTERVAL: usize = 100;

/// Chooses the parent of each generated reply
#[derive(Debug, Clone)]
pub struct ReplyCursor {
    same_count: usize,
    reply_to: CommentId,
    prev: CommentId,
}

impl ReplyCursor {
    pub fn new(root: CommentId) -> Self {
        Self { same_count: 0, reply_to: root, prev: root }
    }

    /// Parent for reply `index`; moves the parent to the latest reply on
    /// every multiple of the reset interval
    pub fn parent_for(&mut self, index: usize) -> CommentId {
        self.same_count += 1;
        if index % PARENT_RESET_INTERVAL == 0 {
            self.same_count = 0;
            self.reply_to = self.prev;
        }
        self.reply_to
    }

    /// Record the reply just created
    pub fn record(&mut self, created: CommentId) {
        self.prev = created;
    }

    /// Replies placed under the current parent before this one
    pub fn same_count(&self) -> usize {
        self.same_count
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedStats {
    pub posts_visited: usize,
    pub replies_created: usize,
}

pub async fn nested_comments_on_most_recent_posts(api: &Api) -> BenchResult<NestedStats> {
    nested_comments_with(api, NESTED_POSTS, REPLIES_PER_POST_STEP).await
}

/// Nested workload over `post_count` posts with `i * replies_step` replies on post `i`
pub async fn nested_comments_with(
    api: &Api,
    post_count: usize,
    replies_step: usize,
) -> BenchResult<NestedStats> {
    let posts = get_posts_new_max(api, false).await?;
    expect_at_least("newest posts", posts.posts.len(), MIN_RECENT_POSTS)?;

    let mut stats = NestedStats::default();
    for (i, post_view) in posts.posts.iter().take(post_count).enumerate() {
        let post_id = post_view.post.id;
        let root = create_comment(api, post_id, None, None).await?;
        let mut cursor = ReplyCursor::new(root.comment_view.comment.id);

        for j in 0..i * replies_step {
            let parent = cursor.parent_for(j);
            let body = format!("reply to post {} comment {} same {}", i, j, cursor.same_count());
            tracing::debug!("same_count {} {}", cursor.same_count(), body);

            let reply = create_comment(api, post_id, Some(parent), Some(&body)).await?;
            cursor.record(reply.comment_view.comment.id);
            stats.replies_created += 1;
        }

        stats.posts_visited += 1;
        logging::log_progress(
            "Nested",
            &format!("post {} ({}) received {} replies", i, post_id, i * replies_step),
        );
    }

    Ok(stats)
}
