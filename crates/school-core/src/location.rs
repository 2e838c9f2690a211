// crates/school-core/src/location.rs
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Where the user's location permission stands.
///
/// Moves once from `Unrequested` to either `Granted` or `Denied` and stays
/// there for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PermissionState {
    #[default]
    Unrequested,
    /// Permission granted; carries the single position snapshot.
    Granted(Coordinates),
    Denied,
}

impl PermissionState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, PermissionState::Unrequested)
    }

    /// The granted position, if any.
    pub fn position(&self) -> Option<Coordinates> {
        match self {
            PermissionState::Granted(c) => Some(*c),
            _ => None,
        }
    }
}

/// Something that can be asked, once, for the user's position.
///
/// Implementations never fail: denial and unavailability both resolve to
/// [`PermissionState::Denied`].
pub trait LocationProvider: Send + Sync {
    fn locate(&self) -> impl Future<Output = PermissionState> + Send;
}

/// A provider that always grants the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

impl LocationProvider for FixedLocation {
    async fn locate(&self) -> PermissionState {
        PermissionState::Granted(self.0)
    }
}

/// A provider for environments with no location source.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    async fn locate(&self) -> PermissionState {
        PermissionState::Denied
    }
}

impl<L: LocationProvider> LocationProvider for Option<L> {
    async fn locate(&self) -> PermissionState {
        match self {
            Some(inner) => inner.locate().await,
            None => PermissionState::Denied,
        }
    }
}
