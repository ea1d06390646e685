use std::collections::HashMap;

use async_trait::async_trait;

use super::status_colors_model::StatusColor;

#[async_trait]
pub trait StatusColorServiceTrait: Send + Sync {
    /// Status key to hex color: the default table overlaid with remote rules.
    /// Returns the defaults unchanged when the remote query fails.
    async fn get_status_colors(&self) -> HashMap<String, String>;

    /// Active remote rules, or one rule per default status when there are none.
    async fn get_all_status_colors(&self) -> Vec<StatusColor>;
}
