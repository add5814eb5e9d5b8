use std::{
    any::{Any, type_name},
    fmt,
    marker::PhantomData,
    sync::Arc,
};

///
/// ContextHandle
///
/// Shared, type-erased handle to a collaborator-owned execution context.
/// Two handles are equal only when they point at the same object.
///

#[derive(Clone)]
pub struct ContextHandle {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ContextHandle {
    pub fn new<T: Any + Send + Sync>(context: T) -> Self {
        Self::from_arc(Arc::new(context))
    }

    pub fn from_arc<T: Any + Send + Sync>(context: Arc<T>) -> Self {
        Self {
            inner: context,
            type_name: type_name::<T>(),
        }
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Rust type name of the wrapped context, for diagnostics only.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContextHandle").field(&self.type_name).finish()
    }
}

impl PartialEq for ContextHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

///
/// ContextCapability
///
/// Decides whether a runtime context value may stand in for the
/// execution-context parameter. Supplied by whoever owns the context type.
///

pub trait ContextCapability {
    fn accepts(&self, handle: &ContextHandle) -> bool;
}

///
/// NoContext
///
/// Default capability: no context value is ever accepted.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoContext;

impl ContextCapability for NoContext {
    fn accepts(&self, _: &ContextHandle) -> bool {
        false
    }
}

///
/// ContextOf
///
/// Accepts handles wrapping exactly `T`.
///

pub struct ContextOf<T>(PhantomData<fn() -> T>);

impl<T> ContextOf<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for ContextOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ContextOf<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ContextOf<T> {}

impl<T> fmt::Debug for ContextOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextOf<{}>", type_name::<T>())
    }
}

impl<T: Any> ContextCapability for ContextOf<T> {
    fn accepts(&self, handle: &ContextHandle) -> bool {
        handle.is::<T>()
    }
}

///
/// TESTS
///
