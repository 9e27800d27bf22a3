use parking_lot::RwLock;
use tabwin_geom::{BoundsProp, CloneMode, NormalizedWindowSpec, WindowKey};
use tokio::sync::broadcast;
use tracing::{debug, trace};

use crate::{OptionKey, OptionValue, Options, Result};

/// Buffered change notifications per subscriber.
const CHANGE_CAPACITY: usize = 16;

/// Key/value access to the option set.
///
/// Implementations own clamping and validation; readers can assume every
/// ratio they get back is already in `[0, 1]`.
pub trait OptionsStore: Send + Sync {
    /// Current value for `key`.
    fn get(&self, key: OptionKey) -> OptionValue;

    /// Apply a batch of updates atomically: either every entry is stored or
    /// none is.
    fn update(&self, changes: &[(OptionKey, OptionValue)]) -> Result<()>;

    /// Full typed snapshot of every option.
    fn snapshot(&self) -> Options {
        let mut opts = Options::default();
        for key in OptionKey::ALL {
            // Values coming out of a store already passed validation.
            if let Err(e) = opts.set(key, self.get(key)) {
                debug!("options: ignoring stored {}: {}", key, e);
            }
        }
        opts
    }
}

/// Typed accessors layered over any [`OptionsStore`].
pub trait OptionsExt: OptionsStore {
    fn ratio(&self, window: WindowKey, prop: BoundsProp) -> f64 {
        self.get(OptionKey::Ratio(window, prop))
            .as_f64()
            .unwrap_or_default()
    }

    fn spec(&self) -> NormalizedWindowSpec {
        self.snapshot().spec
    }

    fn clone_mode(&self) -> CloneMode {
        self.snapshot().clone_mode
    }

    fn is_clone_enabled(&self) -> bool {
        self.clone_mode().is_enabled()
    }

    fn focus(&self) -> WindowKey {
        self.snapshot().focus
    }

    fn resize_original(&self) -> bool {
        self.snapshot().resize_original
    }

    fn copy_fullscreen(&self) -> bool {
        self.snapshot().copy_fullscreen
    }

    /// Update a single option.
    fn set(&self, key: OptionKey, value: impl Into<OptionValue>) -> Result<()> {
        self.update(&[(key, value.into())])
    }
}

impl<T: OptionsStore + ?Sized> OptionsExt for T {}

/// In-process store with change notification.
///
/// Subscribers receive a fresh [`Options`] snapshot after every update that
/// actually changed something. Slow subscribers may observe
/// [`broadcast::error::RecvError::Lagged`] and should re-read the store.
pub struct MemoryStore {
    /// Current option set.
    inner: RwLock<Options>,
    /// Change broadcast; receivers are handed out by `subscribe`.
    tx: broadcast::Sender<Options>,
}

impl MemoryStore {
    pub fn new(options: Options) -> Self {
        let (tx, _rx) = broadcast::channel(CHANGE_CAPACITY);
        Self {
            inner: RwLock::new(options),
            tx,
        }
    }

    /// Receive a snapshot after each effective change.
    pub fn subscribe(&self) -> broadcast::Receiver<Options> {
        self.tx.subscribe()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl OptionsStore for MemoryStore {
    fn get(&self, key: OptionKey) -> OptionValue {
        self.inner.read().get(key)
    }

    fn snapshot(&self) -> Options {
        self.inner.read().clone()
    }

    fn update(&self, changes: &[(OptionKey, OptionValue)]) -> Result<()> {
        let mut guard = self.inner.write();
        let mut next = guard.clone();
        let mut changed = false;
        for (key, value) in changes {
            changed |= next.set(*key, value.clone())?;
        }
        if !changed {
            trace!("options: update changed nothing");
            return Ok(());
        }
        *guard = next.clone();
        drop(guard);
        debug!("options: updated {} key(s)", changes.len());
        // No subscribers is fine.
        let _ = self.tx.send(next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::broadcast::error::TryRecvError;

    use super::*;
    use crate::Error;

    #[test]
    fn typed_accessors_read_through() {
        let store = MemoryStore::default();
        assert_eq!(store.ratio(WindowKey::New, BoundsProp::Left), 0.5);
        assert_eq!(store.clone_mode(), CloneMode::No);
        assert!(!store.is_clone_enabled());
        store
            .set(OptionKey::CloneMode, "clone-mode-same")
            .unwrap();
        assert!(store.is_clone_enabled());
        assert_eq!(store.focus(), WindowKey::New);
    }

    #[test]
    fn failed_batch_leaves_store_untouched() {
        let store = MemoryStore::default();
        let before = store.snapshot();
        let err = store.update(&[
            (OptionKey::Ratio(WindowKey::New, BoundsProp::Width), 0.3.into()),
            (OptionKey::Focus, "sideways".into()),
        ]);
        assert!(matches!(err, Err(Error::InvalidFocus(_))));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn subscribers_see_changes_only() {
        let store = MemoryStore::default();
        let mut rx = store.subscribe();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        store.set(OptionKey::ResizeOriginal, true).unwrap();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        store
            .set(OptionKey::Ratio(WindowKey::Original, BoundsProp::Width), 5.0)
            .unwrap();
        assert_eq!(rx.try_recv().unwrap().spec.original.width, 1.0);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn default_snapshot_through_trait_object() {
        let store: Box<dyn OptionsStore> = Box::new(MemoryStore::default());
        assert_eq!(store.snapshot(), Options::default());
        assert_eq!(store.spec(), Options::default().spec);
    }
}
