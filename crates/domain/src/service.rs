use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    ReadError, StorageError, UpdateError,
    profile::{CompletedSession, Profile, WorkoutSummary},
};

/// The external key-value store holding the serialized profile blob. The
/// core has no opinion on the format, only that what comes back satisfies
/// the documented invariants.
#[allow(async_fn_in_trait)]
pub trait ProfileRepository {
    async fn read_profile(&self) -> Result<Profile, ReadError>;
    async fn write_profile(&self, profile: &Profile) -> Result<(), UpdateError>;
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

pub struct Service<R> {
    repository: R,
}

impl<R: ProfileRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn profile(&self) -> Result<Profile, ReadError> {
        let mut profile =
            log_on_error!(self.repository.read_profile(), ReadError, "read", "profile")?;
        profile.sanitize();
        Ok(profile)
    }

    /// Load, apply the completed session and store the result. Saving after
    /// every update keeps the stored blob consistent with the state the
    /// summary was computed from.
    pub async fn complete_workout(
        &self,
        session: &CompletedSession,
        today: NaiveDate,
    ) -> Result<WorkoutSummary, UpdateError> {
        let mut profile = self.profile().await?;
        let summary = profile.complete_workout(session, today);
        log_on_error!(
            self.repository.write_profile(&profile),
            UpdateError,
            "write",
            "profile"
        )?;
        Ok(summary)
    }
}
