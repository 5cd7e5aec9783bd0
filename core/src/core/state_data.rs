// storefront_cart/src/core/state_data.rs
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared, interior-mutable state used by the cart store and by plan handlers.
///
/// Lock guards are blocking and MUST NOT be held across `.await` points: read
/// what you need, drop the guard, then issue the request.
#[derive(Debug)]
pub struct StateData<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> StateData<T> {
  pub fn new(data: T) -> Self {
    StateData(Arc::new(RwLock::new(data)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Read guard narrowed to one field, e.g. `state.map_read(|s| &s.items)`.
  pub fn map_read<F, U: ?Sized>(&self, f: F) -> MappedRwLockReadGuard<'_, U>
  where
    F: FnOnce(&T) -> &U,
  {
    RwLockReadGuard::map(self.read(), f)
  }

  /// Runs `f` under the write lock and returns its result. The guard never
  /// escapes, so this is safe to call between awaits.
  pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.0.write();
    f(&mut guard)
  }
}

impl<T: Send + Sync + 'static + Clone> StateData<T> {
  /// Clones the current value out from under the lock.
  pub fn snapshot(&self) -> T {
    self.0.read().clone()
  }
}

impl<T: Send + Sync + 'static> Clone for StateData<T> {
  fn clone(&self) -> Self {
    StateData(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for StateData<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
