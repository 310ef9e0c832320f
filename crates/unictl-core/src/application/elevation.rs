//! Scoped privilege elevation.
//!
//! Privileged steps run as `setup_user` instead of the plain acting user.
//! The swap is a guarded scope: [`ElevationScope`] sets the identity on
//! entry and restores the original in `Drop`, so an early `?` or a panic
//! inside the elevated block cannot leave the elevated identity behind.
//! This is the only place the runner's acting-user slot is written.

use tracing::{debug, warn};

use crate::application::ports::CommandRunner;
use crate::error::DeployResult;

/// Guard that restores the previous acting user when dropped.
struct ElevationScope<'a> {
    runner: &'a dyn CommandRunner,
    original: String,
}

impl<'a> ElevationScope<'a> {
    fn enter(runner: &'a dyn CommandRunner, setup_user: &str) -> DeployResult<Self> {
        let original = runner.acting_user()?;
        debug!(from = %original, to = %setup_user, "switching to setup user");
        runner.set_acting_user(setup_user)?;
        Ok(Self { runner, original })
    }
}

impl Drop for ElevationScope<'_> {
    fn drop(&mut self) {
        // Restore is best-effort here; a poisoned slot is surfaced by the
        // next acting_user() call.
        if let Err(e) = self.runner.set_acting_user(&self.original) {
            warn!(user = %self.original, error = %e, "failed to restore acting user");
        }
    }
}

/// Run `block` with the runner acting as `setup_user`.
///
/// When `setup_user` equals the current acting user (or the slot already
/// holds it), the block runs directly with no mutation. Otherwise the
/// identity is swapped for exactly the duration of the block and restored
/// unconditionally — on success, on error, and on unwind.
pub fn with_elevation<T>(
    runner: &dyn CommandRunner,
    setup_user: &str,
    block: impl FnOnce() -> DeployResult<T>,
) -> DeployResult<T> {
    let current = runner.acting_user()?;
    if current == setup_user {
        return block();
    }

    let guard = ElevationScope::enter(runner, setup_user)?;
    let result = block();
    drop(guard);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{RunReport, Script};
    use std::sync::RwLock;

    /// Minimal runner exposing just the identity slot.
    struct SlotRunner {
        user: RwLock<String>,
    }

    impl SlotRunner {
        fn new(user: &str) -> Self {
            Self { user: RwLock::new(user.to_string()) }
        }
    }

    impl CommandRunner for SlotRunner {
        fn acting_user(&self) -> DeployResult<String> {
            Ok(self.user.read().map_err(|_| ApplicationError::StateLockError)?.clone())
        }

        fn set_acting_user(&self, user: &str) -> DeployResult<()> {
            *self.user.write().map_err(|_| ApplicationError::StateLockError)? =
                user.to_string();
            Ok(())
        }

        fn run_remote(&self, _script: &Script) -> DeployResult<RunReport> {
            Ok(RunReport::default())
        }
    }

    #[test]
    fn block_sees_the_setup_user() {
        let runner = SlotRunner::new("deploy");
        with_elevation(&runner, "root", || {
            assert_eq!(runner.acting_user().unwrap(), "root");
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn identity_restored_after_success() {
        let runner = SlotRunner::new("deploy");
        with_elevation(&runner, "root", || Ok(())).unwrap();
        assert_eq!(runner.acting_user().unwrap(), "deploy");
    }

    #[test]
    fn identity_restored_after_error() {
        let runner = SlotRunner::new("deploy");
        let result: DeployResult<()> = with_elevation(&runner, "root", || {
            Err(ApplicationError::TransportFailed { reason: "boom".into() }.into())
        });
        assert!(result.is_err());
        assert_eq!(runner.acting_user().unwrap(), "deploy");
    }

    #[test]
    fn identity_restored_after_panic() {
        let runner = SlotRunner::new("deploy");
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _: DeployResult<()> = with_elevation(&runner, "root", || panic!("boom"));
        }));
        assert!(caught.is_err());
        assert_eq!(runner.acting_user().unwrap(), "deploy");
    }

    #[test]
    fn same_user_means_no_mutation() {
        let runner = SlotRunner::new("deploy");
        with_elevation(&runner, "deploy", || {
            assert_eq!(runner.acting_user().unwrap(), "deploy");
            Ok(())
        })
        .unwrap();
        assert_eq!(runner.acting_user().unwrap(), "deploy");
    }
}
