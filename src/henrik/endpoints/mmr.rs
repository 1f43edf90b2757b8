use crate::error::AppError;
use crate::henrik::HenrikClient;
use crate::henrik::types::{ApiResponse, MmrDto};
use crate::stats::{PlayerHandle, RegionCode};

impl HenrikClient {
    /// Get current and peak competitive rank.
    pub async fn get_mmr(
        &self,
        region: &RegionCode,
        handle: &PlayerHandle,
    ) -> Result<ApiResponse<MmrDto>, AppError> {
        let path = format!(
            "/valorant/v2/mmr/{}/{}/{}",
            region,
            urlencoding::encode(handle.name()),
            urlencoding::encode(handle.tag())
        );

        self.get(&path).await
    }
}
