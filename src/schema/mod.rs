//! Record shapes persisted by the surrounding application.
//!
//! Each table has a row shape, an insert shape where store-defaulted columns
//! are optional, and an update shape where every column is optional and
//! unset columns are left out of the serialized patch.

pub mod clinic;
pub mod profile;
pub mod subscription;

pub use clinic::{Clinic, ClinicInsert, ClinicUpdate};
pub use profile::{Profile, ProfileInsert, ProfileUpdate};
pub use subscription::{
    Subscription, SubscriptionInsert, SubscriptionPlan, SubscriptionStatus, SubscriptionUpdate,
};
