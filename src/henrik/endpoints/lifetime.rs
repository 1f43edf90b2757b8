use crate::error::AppError;
use crate::henrik::HenrikClient;
use crate::henrik::types::LifetimeMmrHistoryDto;
use crate::stats::{PlayerHandle, RegionCode};

impl HenrikClient {
    /// Get the lifetime MMR history of a player.
    pub async fn get_lifetime_mmr_history(
        &self,
        region: &RegionCode,
        handle: &PlayerHandle,
    ) -> Result<LifetimeMmrHistoryDto, AppError> {
        let path = format!(
            "/valorant/v1/lifetime/mmr-history/{}/{}/{}",
            region,
            urlencoding::encode(handle.name()),
            urlencoding::encode(handle.tag())
        );

        self.get(&path).await
    }
}
