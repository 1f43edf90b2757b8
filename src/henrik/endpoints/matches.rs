use crate::error::AppError;
use crate::henrik::HenrikClient;
use crate::henrik::types::{ApiResponse, MatchDto};
use crate::stats::{PlayerHandle, RegionCode};

impl HenrikClient {
    /// Get the most recent matches of a player, as many as the API returns.
    pub async fn get_matches(
        &self,
        region: &RegionCode,
        handle: &PlayerHandle,
    ) -> Result<ApiResponse<Vec<MatchDto>>, AppError> {
        let path = format!(
            "/valorant/v3/matches/{}/{}/{}",
            region,
            urlencoding::encode(handle.name()),
            urlencoding::encode(handle.tag())
        );

        self.get(&path).await
    }
}
