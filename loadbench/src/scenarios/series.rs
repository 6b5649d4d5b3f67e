//! Round-robin creation workload
//!
//! Each round creates a community, a post and a comment, replies to the
//! previous round's comment and has a second account upvote the new content.
//! Only the wall-clock duration of the whole loop is reported.

use std::time::{Duration, Instant};

use shared::logging;
use shared::{CommentResponse, PostResponse};

use crate::error::{BenchError, BenchResult};
use crate::runtime::BenchContext;
use crate::runtime::content::{
    create_benchmark_post, create_comment, create_community, follow_community, like_comment,
    like_post, random_string, resolve_community,
};
use crate::runtime::session::Api;
use crate::testing::expect_community_name;

/// Kept low because every round is several sequential round trips
pub const SERIES_ROUNDS: usize = 13;

pub fn series_community_name(round: usize, tag: &str, suffix: &str) -> String {
    format!("series_{}_{}_{}", round, tag, suffix)
}

/// Run the fixed-size series workload as `account`
pub async fn loop_action_set_a(
    ctx: &BenchContext,
    account: &Api,
    local_only: bool,
    tag: &str,
) -> BenchResult<Duration> {
    run_series(ctx, account, local_only, tag, SERIES_ROUNDS).await
}

/// Series workload with an explicit round count
pub async fn run_series(
    ctx: &BenchContext,
    account: &Api,
    local_only: bool,
    tag: &str,
    rounds: usize,
) -> BenchResult<Duration> {
    let mut previous: Option<(PostResponse, CommentResponse)> = None;

    tracing::info!("series start local_only={} tag={}", local_only, tag);
    let start = Instant::now();

    for round in 0..rounds {
        let name = series_community_name(round, tag, &random_string(4));
        let community_res = create_community(account, &name).await?;
        expect_community_name(&community_res, &name)?;
        let community_id = community_res.community_view.community.id;

        if !local_only {
            // Cache the community on beta and subscribe to it
            let handle = ctx.federated_handle(&name);
            let beta_community = resolve_community(&ctx.beta, &handle)
                .await?
                .community
                .ok_or(BenchError::ResolveFailure { query: handle })?;
            follow_community(&ctx.beta, true, beta_community.community.id).await?;
        }

        let post_res = create_benchmark_post(account, community_id, round, tag).await?;
        let post_id = post_res.post_view.post.id;
        let comment_res = create_comment(&ctx.alpha, post_id, None, None).await?;

        if let Some((prev_post, prev_comment)) = &previous {
            let content = format!("reply to previous {} {}", round, tag);
            create_comment(
                account,
                prev_post.post_view.post.id,
                Some(prev_comment.comment_view.comment.id),
                Some(&content),
            )
            .await?;
        }

        like_post(&ctx.casual, 1, &post_res.post_view.post).await?;
        like_comment(&ctx.casual, 1, &comment_res.comment_view.comment).await?;

        tracing::debug!("round {} done: community {} post {}", round, community_id, post_id);
        previous = Some((post_res, comment_res));
    }

    let elapsed = start.elapsed();
    tracing::info!("series end local_only={} tag={}", local_only, tag);
    logging::log_timing(&format!("series local_only={} tag={}", local_only, tag), elapsed);

    Ok(elapsed)
}
