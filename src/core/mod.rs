pub mod field_map;
pub mod lookup;
pub mod postal_code;

pub use crate::domain::model::{AddressRecord, DirectoryPayload, NormalizedPostalCode};
pub use crate::domain::ports::{AddressResolver, ConfigProvider};
pub use crate::utils::error::{LookupError, ResolverError, Result};
