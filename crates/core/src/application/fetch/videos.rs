// Video links for fetched entries

use super::run_batched;
use crate::application::cancel::{CancelToken, Cancelled};
use crate::domain::EntryResult;
use crate::port::ContestApi;
use tracing::{debug, warn};

/// Attach each entry's first video URL. Lookups that fail leave it empty.
pub async fn resolve_videos(
    api: &dyn ContestApi,
    entries: &mut [EntryResult],
    batch_size: usize,
    cancel: &CancelToken,
) -> Result<(), Cancelled> {
    let keys: Vec<(usize, _, _)> = entries
        .iter()
        .enumerate()
        .map(|(index, e)| (index, e.year, e.contestant_id))
        .collect();

    let outcomes = run_batched(keys, batch_size, cancel, |(index, year, id)| async move {
        (index, year, id, api.contestant_details(year, id).await)
    })
    .await?;

    for (index, year, id, outcome) in outcomes {
        match outcome {
            Ok(details) => {
                entries[index].video_url = details.primary_video_url().map(str::to_string);
                if entries[index].video_url.is_none() {
                    debug!(year = %year, contestant_id = id, "No video listed");
                }
            }
            Err(e) => {
                warn!(year = %year, contestant_id = id, error = %e, "Failed to load video");
            }
        }
    }

    Ok(())
}
