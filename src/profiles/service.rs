use log::{debug, warn};
use thiserror::Error;

use super::Profile;
use super::codec::{CodecError, JsonCodec, RecordCodec};
use crate::persistence::{Context, Store, StoreError, TableDefinition};

const PROFILES_TABLE: &str = "profiles";
const PROFILES_ID_COLUMN: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// The tables a database must declare for [`ProfileService`] to work.
pub fn profile_tables() -> Vec<TableDefinition> {
    vec![TableDefinition::with_columns(
        PROFILES_TABLE,
        &[PROFILES_ID_COLUMN],
    )]
}

/// Stores, updates and fetches [`Profile`]s through any [`Store`].
///
/// The profile id is the only indexed column. Updates go through the store's
/// fan-out update keyed on that id, which touches exactly one row as long as
/// ids stay unique.
pub struct ProfileService<S, C = JsonCodec> {
    store: S,
    codec: C,
}

impl<S: Store> ProfileService<S, JsonCodec> {
    pub fn new(store: S) -> ProfileService<S, JsonCodec> {
        ProfileService::with_codec(store, JsonCodec)
    }
}

impl<S, C> ProfileService<S, C>
where
    S: Store,
    C: RecordCodec<Profile>,
{
    pub fn with_codec(store: S, codec: C) -> ProfileService<S, C> {
        ProfileService { store, codec }
    }

    pub fn store_new_profile(&self, ctx: &Context, profile: &Profile) -> Result<(), ProfileError> {
        let data = self.codec.encode(profile)?;

        self.store.insert(
            ctx,
            PROFILES_TABLE,
            &[PROFILES_ID_COLUMN],
            &[profile.profile_id.as_str()],
            data,
        )?;
        debug!("stored profile {}", profile.profile_id);

        Ok(())
    }

    pub fn update_profile(&self, ctx: &Context, profile: &Profile) -> Result<(), ProfileError> {
        //! Update the first and last names of a stored profile. Every other
        //! field keeps its stored value.

        let rows = self
            .store
            .get(ctx, PROFILES_TABLE, PROFILES_ID_COLUMN, &profile.profile_id)?;

        let Some(first) = rows.first() else {
            return Err(ProfileError::InvalidInput("profile not found".to_string()));
        };

        let mut stored = self.codec.decode(first)?;
        stored.first_name = profile.first_name.clone();
        stored.last_name = profile.last_name.clone();

        let data = self.codec.encode(&stored)?;
        self.store
            .update(ctx, PROFILES_TABLE, PROFILES_ID_COLUMN, &profile.profile_id, &data)?;

        Ok(())
    }

    pub fn get_profile(&self, ctx: &Context, profile_id: &str) -> Result<Option<Profile>, ProfileError> {
        //! Fetch a profile by id. A missing profile is `Ok(None)`.

        let rows = self
            .store
            .get(ctx, PROFILES_TABLE, PROFILES_ID_COLUMN, profile_id)?;

        if rows.len() > 1 {
            warn!("{} profiles share id {}, using the first", rows.len(), profile_id);
        }

        match rows.first() {
            Some(row) => Ok(Some(self.codec.decode(row)?)),
            None => Ok(None),
        }
    }
}
