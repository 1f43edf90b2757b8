use crate::error::AppError;
use crate::henrik::HenrikClient;
use crate::henrik::types::{AccountDto, ApiResponse};
use crate::stats::PlayerHandle;

impl HenrikClient {
    /// Get account by Riot ID (name + tag).
    /// Not region scoped, carries both the region and the player card.
    pub async fn get_account(
        &self,
        handle: &PlayerHandle,
    ) -> Result<ApiResponse<AccountDto>, AppError> {
        let path = format!(
            "/valorant/v1/account/{}/{}",
            urlencoding::encode(handle.name()),
            urlencoding::encode(handle.tag())
        );

        self.get(&path).await
    }
}
