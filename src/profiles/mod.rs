//! A profile service that keeps user profiles in the store.
//!
//! Profiles live in the `profiles` table as encoded blobs, indexed by their
//! `id` column only. Everything else about a profile is opaque to the store.

mod codec;
mod service;

pub use codec::{CodecError, FnCodec, JsonCodec, RecordCodec};
pub use service::{ProfileError, ProfileService, profile_tables};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub profile_id: String,
    pub profile_name: String,
    pub first_name: String,
    pub last_name: String,
}
