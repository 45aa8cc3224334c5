// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use std::cell::Cell;
use std::fmt;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tracing::trace;

use crate::util::Spinlock;

/// Number of segments in the pool. Using 16 segments to reduce contention.
const NUM_SEGMENTS: usize = 16;

/// Global counter to assign unique IDs to threads for segment selection.
static THREAD_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

thread_local! {
    /// Cached segment index for the current thread.
    static SEGMENT_INDEX: Cell<usize> = Cell::new(
        (THREAD_ID_COUNTER.fetch_add(1, Ordering::Relaxed) as usize) % NUM_SEGMENTS
    );
}

/// A segment containing a spinlock-protected vector of pooled items.
struct Segment<T> {
    items: Spinlock<Vec<T>>,
}

impl<T> Segment<T> {
    fn new() -> Self {
        Segment {
            items: Spinlock::new(Vec::new()),
        }
    }

    #[inline(always)]
    fn take(&self) -> Option<T> {
        self.items.lock().pop()
    }

    #[inline(always)]
    fn put(&self, item: T) {
        self.items.lock().push(item);
    }
}

/// Counters describing how a pool has been used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Instances built by the factory.
    pub created: usize,
    /// Requests served from an idle instance.
    pub reused: usize,
    /// Instances currently parked in the pool.
    pub idle: usize,
}

/// A segmented object pool that reduces lock contention by distributing
/// access across multiple segments based on thread ID.
///
/// The pool is unbounded and never shrinks. An item returned by one thread
/// may be handed out to any other thread.
pub struct Pool<T> {
    segments: [Segment<T>; NUM_SEGMENTS],
    factory: Box<dyn Fn() -> T + Send + Sync>,
    created: AtomicUsize,
    reused: AtomicUsize,
}

impl<T> Pool<T> {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Pool {
            segments: std::array::from_fn(|_| Segment::new()),
            factory: Box::new(factory),
            created: AtomicUsize::new(0),
            reused: AtomicUsize::new(0),
        }
    }

    #[inline(always)]
    fn segment(&self) -> &Segment<T> {
        let segment_idx = SEGMENT_INDEX.with(|idx| idx.get());
        &self.segments[segment_idx]
    }

    /// Takes an idle item, or builds a new one when the current segment is empty.
    pub fn get(&self) -> T {
        match self.segment().take() {
            Some(item) => {
                self.reused.fetch_add(1, Ordering::Relaxed);
                item
            }
            None => {
                let created = self.created.fetch_add(1, Ordering::Relaxed) + 1;
                trace!(created, "pool miss, building a new instance");
                (self.factory)()
            }
        }
    }

    /// Parks an item for later reuse. Callers are expected to reset it first.
    #[inline(always)]
    pub fn put(&self, item: T) {
        self.segment().put(item);
    }

    /// Borrows an item from the pool, executes the handler, and returns the item to the pool.
    #[inline(always)]
    pub fn borrow_mut<Result>(&self, handler: impl FnOnce(&mut T) -> Result) -> Result {
        let mut obj = self.get();
        let result = handler(&mut obj);
        self.put(obj);
        result
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            created: self.created.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            idle: self.segments.iter().map(|s| s.items.lock().len()).sum(),
        }
    }
}

/// A type whose instances are recycled through a process-wide pool.
///
/// `reset` must leave the value equal to `Self::default()`, releasing any
/// pooled children it owns. Implementations usually come from
/// `impl_poolable!`, which declares the static pool.
pub trait Poolable: Default + Send + Sized + 'static {
    fn pool() -> &'static Pool<Box<Self>>;

    fn reset(&mut self);
}

/// Unique owner of a pooled instance.
///
/// Dropping the handle resets the instance and returns it to its pool, so
/// an instance can be released only once and cannot be reached afterwards.
pub struct Pooled<T: Poolable> {
    inner: ManuallyDrop<Box<T>>,
}

impl<T: Poolable> Pooled<T> {
    /// Takes an instance from `T`'s pool. It is always in its default state.
    pub fn acquire() -> Self {
        Pooled {
            inner: ManuallyDrop::new(T::pool().get()),
        }
    }

    /// Takes an instance from the pool and moves `value` into it.
    pub fn new(value: T) -> Self {
        let mut pooled = Self::acquire();
        *pooled.inner.as_mut() = value;
        pooled
    }
}

impl<T: Poolable> Default for Pooled<T> {
    fn default() -> Self {
        Self::acquire()
    }
}

impl<T: Poolable> Deref for Pooled<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Poolable> DerefMut for Pooled<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Poolable> Drop for Pooled<T> {
    fn drop(&mut self) {
        // SAFETY: `inner` is never touched again after being taken here.
        let mut instance = unsafe { ManuallyDrop::take(&mut self.inner) };
        instance.reset();
        T::pool().put(instance);
    }
}

impl<T: Poolable + PartialEq> PartialEq for Pooled<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Poolable + fmt::Debug> fmt::Debug for Pooled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

/// Returns an instance and all of its pooled children to their pools.
#[inline]
pub fn release<T: Poolable>(instance: Pooled<T>) {
    drop(instance)
}

/// Declares the static pool for a type and implements [`Poolable`] by
/// delegating `reset` to the type's inherent `clear` method.
macro_rules! impl_poolable {
    ($($ty:ident),+ $(,)?) => {
        $(
            paste::paste! {
                static [<$ty:snake:upper _POOL>]: once_cell::sync::Lazy<$crate::pool::Pool<Box<$ty>>> =
                    once_cell::sync::Lazy::new(|| $crate::pool::Pool::new(|| Box::<$ty>::default()));

                impl $crate::pool::Poolable for $ty {
                    #[inline(always)]
                    fn pool() -> &'static $crate::pool::Pool<Box<$ty>> {
                        &[<$ty:snake:upper _POOL>]
                    }

                    #[inline(always)]
                    fn reset(&mut self) {
                        self.clear();
                    }
                }
            }
        )+
    };
}

pub(crate) use impl_poolable;
