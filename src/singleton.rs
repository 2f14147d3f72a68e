//! Lazy, concurrency-safe singleton initialization
//!
//! [`Singleton`] pairs a zero-argument factory with a one-time
//! initialization gate. The factory runs at most once no matter how many
//! threads race on the first access; every access observes the same
//! stored instance. After initialization, reads are lock-free.

use std::fmt;
use std::ops::Deref;
use std::sync::OnceLock;

/// A lazily initialized, concurrency-safe singleton
///
/// The factory is not invoked at construction. The first call to
/// [`get`](Singleton::get) (racing with any number of concurrent callers)
/// runs it exactly once and publishes the result; later calls take the
/// lock-free fast path of the underlying [`OnceLock`].
///
/// The factory has no error path. A fallible factory should produce a
/// `Result` as its `T` and let callers deal with the stored outcome.
///
/// # Examples
///
/// ```ignore
/// use sugar::Singleton;
///
/// static CONFIG: Singleton<String> = Singleton::new(|| "loaded".to_string());
///
/// assert_eq!(CONFIG.get(), "loaded");
/// ```
pub struct Singleton<T, F = fn() -> T> {
    cell: OnceLock<T>,
    create: F,
}

impl<T, F> Singleton<T, F>
where
    F: Fn() -> T,
{
    /// Create a new singleton from the given factory
    ///
    /// The factory will be called at most once, even under concurrent
    /// access.
    pub const fn new(create: F) -> Self {
        Self {
            cell: OnceLock::new(),
            create,
        }
    }

    /// Return the singleton instance, initializing it on first use
    ///
    /// Safe for concurrent use; all callers receive a reference to the
    /// identical stored value.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(&self.create)
    }
}

impl<T, F> Deref for Singleton<T, F>
where
    F: Fn() -> T,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Singleton<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Singleton").field(value).finish(),
            None => f.write_str("Singleton(<uninit>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_create_once() {
        let count = AtomicUsize::new(0);

        let singleton = Singleton::new(|| {
            count.fetch_add(1, Ordering::SeqCst);
            7
        });

        assert_eq!(*singleton.get(), 7);
        assert_eq!(*singleton.get(), 7);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_factory_not_invoked_eagerly() {
        let count = AtomicUsize::new(0);

        let singleton = Singleton::new(|| {
            count.fetch_add(1, Ordering::SeqCst);
            7
        });

        assert_eq!(count.load(Ordering::SeqCst), 0);
        singleton.get();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_same_instance_identity() {
        let singleton = Singleton::new(|| "value".to_string());
        let first = singleton.get();
        let second = singleton.get();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_concurrent_create_once() {
        const THREADS: usize = 100;

        let count = Arc::new(AtomicUsize::new(0));
        let singleton = {
            let count = Arc::clone(&count);
            Arc::new(Singleton::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
                7u64
            }))
        };

        let barrier = Arc::new(Barrier::new(THREADS));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let singleton = Arc::clone(&singleton);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    *singleton.get()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 7);
        }

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_observers_see_same_address() {
        const THREADS: usize = 32;

        let singleton = Arc::new(Singleton::new(|| vec![1, 2, 3]));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let singleton = Arc::clone(&singleton);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    singleton.get() as *const Vec<i32> as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_usable_in_static() {
        static VALUE: Singleton<u64> = Singleton::new(|| 42);
        assert_eq!(*VALUE.get(), 42);
    }

    #[test]
    fn test_deref() {
        let singleton = Singleton::new(|| "hello".to_string());
        assert_eq!(singleton.len(), 5);
    }

    #[test]
    fn test_debug_states() {
        let singleton = Singleton::new(|| 7);
        assert_eq!(format!("{singleton:?}"), "Singleton(<uninit>)");
        singleton.get();
        assert_eq!(format!("{singleton:?}"), "Singleton(7)");
    }
}
