use tracing::debug;

use crate::error::AppError;
use crate::henrik::HenrikClient;

use super::{PlayerHandle, RegionCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlayer {
    pub handle: PlayerHandle,
    pub region: RegionCode,
}

/// Parse a raw `name#tag` and look up the region its account plays in.
pub async fn resolve(client: &HenrikClient, raw: &str) -> Result<ResolvedPlayer, AppError> {
    let handle: PlayerHandle = raw.parse()?;

    debug!(%handle, "resolving account region");
    let account = client.get_account(&handle).await.map_err(|e| match e {
        AppError::UpstreamFetch { status: 404, .. } => AppError::PlayerNotFound {
            name: handle.name().to_string(),
            tag: handle.tag().to_string(),
        },
        other => other,
    })?;

    let region = account.region().ok_or(AppError::RegionNotFound)?;

    Ok(ResolvedPlayer { handle, region })
}
