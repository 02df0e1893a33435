//! Profile Resolver Port

use crate::value_objects::{ApiResult, ResolvedProfile};
use async_trait::async_trait;

#[async_trait]
pub trait ProfileResolver: Send + Sync + std::fmt::Debug {
    /// Resolve a user id or a ronin/0x address to an identity
    async fn resolve_profile(&self, id_or_address: &str) -> ApiResult<Option<ResolvedProfile>>;

    fn provider_name(&self) -> &str;
}
