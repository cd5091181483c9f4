use crate::domain::model::{DirectoryPayload, NormalizedPostalCode};
use crate::utils::error::ResolverError;
use async_trait::async_trait;

/// Looks up a postal code in an address directory.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(
        &self,
        code: &NormalizedPostalCode,
    ) -> std::result::Result<DirectoryPayload, ResolverError>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn directory_url(&self) -> &str;
    fn json_logs(&self) -> bool;
}
