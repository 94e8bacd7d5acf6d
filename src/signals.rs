//! Reactive signal primitive
//!
//! A `Signal<T>` is a single mutable value with a version counter that is
//! bumped on every committed write. A `Computed<T>` derives a value from one
//! or more signals through a pure closure and a version-stamped cache: reads
//! recompute only when a source has changed since the cached stamp, so a
//! derived value can never be observed stale. Consumers that must not write
//! get a `ReadonlySignal<T>` view.
//!
//! Handles are cheap clones sharing the same underlying value, so a store and
//! its computed views observe a single source of truth and the whole graph
//! stays `Send + Sync` for use inside shared application state.

use std::sync::{Arc, RwLock};

/// Probe returning the current version of a signal. `Computed` holds one per
/// source to decide whether its cache is still valid.
pub type VersionProbe = Box<dyn Fn() -> u64 + Send + Sync>;

struct SignalInner<T> {
    value: T,
    version: u64,
}

/// A writable reactive value.
pub struct Signal<T> {
    inner: Arc<RwLock<SignalInner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Signal<T> {
    /// Creates a signal holding `value` at version 0.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SignalInner { value, version: 0 })),
        }
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read().unwrap();
        f(&guard.value)
    }

    /// Replaces the value and bumps the version.
    pub fn set(&self, value: T) {
        let mut guard = self.inner.write().unwrap();
        guard.value = value;
        guard.version += 1;
    }

    /// Mutates the value in place and bumps the version.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut guard = self.inner.write().unwrap();
        f(&mut guard.value);
        guard.version += 1;
    }

    /// Current version counter. Incremented by every `set`/`update`.
    pub fn version(&self) -> u64 {
        self.inner.read().unwrap().version
    }

    /// Read-only view onto the same underlying value.
    pub fn as_readonly(&self) -> ReadonlySignal<T> {
        ReadonlySignal {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Signal<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.read().unwrap().value.clone()
    }
}

impl<T: Send + Sync + 'static> Signal<T> {
    /// Version probe for wiring this signal into a `Computed`.
    pub fn watch(&self) -> VersionProbe {
        let inner = Arc::clone(&self.inner);
        Box::new(move || inner.read().unwrap().version)
    }
}

/// Read-only handle to a `Signal`. Exposes reads and the version counter but
/// no mutation.
pub struct ReadonlySignal<T> {
    inner: Arc<RwLock<SignalInner<T>>>,
}

impl<T> Clone for ReadonlySignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> ReadonlySignal<T> {
    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read().unwrap();
        f(&guard.value)
    }

    /// Current version counter.
    pub fn version(&self) -> u64 {
        self.inner.read().unwrap().version
    }
}

impl<T: Clone> ReadonlySignal<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.read().unwrap().value.clone()
    }
}

struct ComputedInner<T> {
    deps: Vec<VersionProbe>,
    compute: Box<dyn Fn() -> T + Send + Sync>,
    cache: RwLock<Option<(Vec<u64>, T)>>,
}

/// A value derived from one or more signals.
///
/// `deps` must cover every signal the closure reads (directly or through
/// other computeds); the cache is keyed on their versions. The closure must
/// be pure; `get` fires no side effects.
pub struct Computed<T> {
    inner: Arc<ComputedInner<T>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Computed<T> {
    /// Creates a computed over the given source probes.
    pub fn new(deps: Vec<VersionProbe>, compute: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(ComputedInner {
                deps,
                compute: Box::new(compute),
                cache: RwLock::new(None),
            }),
        }
    }

    /// Returns the derived value, recomputing it when any source changed
    /// since the last read.
    pub fn get(&self) -> T {
        let versions: Vec<u64> = self.inner.deps.iter().map(|probe| probe()).collect();

        {
            let cache = self.inner.cache.read().unwrap();
            if let Some((seen, value)) = cache.as_ref() {
                if *seen == versions {
                    return value.clone();
                }
            }
        }

        let value = (self.inner.compute)();
        *self.inner.cache.write().unwrap() = Some((versions, value.clone()));
        value
    }
}
