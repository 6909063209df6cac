//! Lifetime of the global key listener.

use crate::controller::InteractionController;
use std::ops::{Deref, DerefMut};

/// Keeps the controller's key listener attached while alive.
///
/// Obtained from [`InteractionController::mount`]. Dropping the guard detaches
/// the listener, after which [`InteractionController::handle_key`] ignores
/// every event.
pub struct MountGuard<'a> {
    controller: &'a mut InteractionController,
}

impl InteractionController {
    /// Attach the key listener for the lifetime of the returned guard.
    pub fn mount(&mut self) -> MountGuard<'_> {
        log::debug!("Key listener attached");
        self.set_key_listener_attached(true);
        MountGuard { controller: self }
    }
}

impl Deref for MountGuard<'_> {
    type Target = InteractionController;

    fn deref(&self) -> &Self::Target {
        self.controller
    }
}

impl DerefMut for MountGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.controller
    }
}

impl Drop for MountGuard<'_> {
    fn drop(&mut self) {
        self.controller.set_key_listener_attached(false);
        log::debug!("Key listener detached");
    }
}
