//! Asynchronous mapping and binding for optionals
//!
//! Three input shapes are covered: a plain `Optional<T>` mapped through an
//! async function, an `Optional` holding a future, and a future producing an
//! `Optional`. The only suspension points are the wrapped futures; branching
//! on the optional state never suspends, and an empty optional never calls or
//! polls the mapped computation.

use super::option::Optional;
use crate::unit::Unit;
use std::future::Future;

impl<T> Optional<T> {
    /// Map the held value through an async function
    #[doc(alias = "select_async")]
    pub async fn map_async<R, F, Fut>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Optional::Some(value) => Optional::Some(f(value).await),
            Optional::None => Optional::None,
        }
    }

    /// Bind the held value through an async function producing an optional
    #[doc(alias = "select_many_async")]
    pub async fn bind_async<R, F, Fut>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<R>>,
    {
        match self {
            Optional::Some(value) => f(value).await,
            Optional::None => Optional::None,
        }
    }
}

impl<F> Optional<F>
where
    F: Future,
{
    /// Await the held future, if any
    pub async fn awaited(self) -> Optional<F::Output> {
        match self {
            Optional::Some(future) => Optional::Some(future.await),
            Optional::None => Optional::None,
        }
    }

    /// Await the held future and map its output
    pub async fn await_map<R, M>(self, map: M) -> Optional<R>
    where
        M: FnOnce(F::Output) -> R,
    {
        self.awaited().await.map(map)
    }

    /// Await the held future and map its output through an async function
    pub async fn await_map_async<R, M, Fut>(self, map: M) -> Optional<R>
    where
        M: FnOnce(F::Output) -> Fut,
        Fut: Future<Output = R>,
    {
        self.awaited().await.map_async(map).await
    }

    /// Await the held future and bind its output
    pub async fn await_bind<R, B>(self, bind: B) -> Optional<R>
    where
        B: FnOnce(F::Output) -> Optional<R>,
    {
        self.awaited().await.bind(bind)
    }

    /// Await the held future and bind its output through an async function
    pub async fn await_bind_async<R, B, Fut>(self, bind: B) -> Optional<R>
    where
        B: FnOnce(F::Output) -> Fut,
        Fut: Future<Output = Optional<R>>,
    {
        self.awaited().await.bind_async(bind).await
    }

    /// Await the held future and run `action` on its output
    pub async fn await_for_each<A>(self, action: A) -> Unit
    where
        A: FnOnce(F::Output),
    {
        self.awaited().await.if_some(action)
    }
}

/// Combinators for futures that resolve to an [`Optional`]
pub trait OptionalFutureExt<T>: Future<Output = Optional<T>> + Sized {
    /// Await, then map the held value
    fn then_map<R, F>(self, f: F) -> impl Future<Output = Optional<R>>
    where
        F: FnOnce(T) -> R,
    {
        async move { self.await.map(f) }
    }

    /// Await, then map the held value through an async function
    fn then_map_async<R, F, Fut>(self, f: F) -> impl Future<Output = Optional<R>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Await, then bind the held value
    fn then_bind<R, F>(self, f: F) -> impl Future<Output = Optional<R>>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        async move { self.await.bind(f) }
    }

    /// Await, then bind the held value through an async function
    fn then_bind_async<R, F, Fut>(self, f: F) -> impl Future<Output = Optional<R>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<R>>,
    {
        async move { self.await.bind_async(f).await }
    }

    /// Await, then run `action` on the held value
    fn then_for_each<F>(self, action: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(T),
    {
        async move { self.await.if_some(action) }
    }
}

impl<T, Fut> OptionalFutureExt<T> for Fut where Fut: Future<Output = Optional<T>> {}
