//! # Target
//!
//! The callable a debounced wrapper delays.
//!
//! A target receives the receiver context and the positional arguments of
//! the call that survived the burst. Both are passed by reference: the
//! wrapper keeps the latest call recorded until the burst closes, and the
//! leading execution shares that record instead of cloning it.
//!
//! # Usage Patterns
//!
//! 1. **Closure with context**: `|ctx: &Ctx, args: &Args| -> Result<Out, E>`
//! 2. **Context-free closure**: [`target_fn`]`(|args: &Args| ...)`
//! 3. **Struct implementation**: `impl Target<Ctx, Args> for MyTarget`

use crate::{error::BoxError, payload::Payload};

/// A marker trait for what a target returns.
pub trait TargetOutput: Send + 'static {}
impl<T: Send + 'static> TargetOutput for T {}

/// The function a debounced wrapper eventually runs.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be debounced with context `{Ctx}` and arguments `{Args}`",
    label = "missing `Target<{Ctx}, {Args}>` implementation",
    note = "Closures of the form `Fn(&Ctx, &Args) -> Result<Out, E>` implement `Target` automatically."
)]
pub trait Target<Ctx: Payload, Args: Payload>: Send + Sync + 'static {
    /// The value produced by a successful execution.
    type Output: TargetOutput;

    /// Execute the target with the recorded context and arguments.
    fn invoke(&self, ctx: &Ctx, args: &Args) -> Result<Self::Output, BoxError>;
}

// Blanket impl for closures
impl<F, Ctx, Args, Out, E> Target<Ctx, Args> for F
where
    Ctx: Payload,
    Args: Payload,
    Out: TargetOutput,
    E: Into<BoxError>,
    F: Fn(&Ctx, &Args) -> Result<Out, E> + Send + Sync + 'static,
{
    type Output = Out;

    fn invoke(&self, ctx: &Ctx, args: &Args) -> Result<Self::Output, BoxError> {
        (self)(ctx, args).map_err(Into::into)
    }
}

/// Adapter for closures that take no receiver context.
///
/// Created by [`target_fn`]; implements `Target<(), Args>`.
#[derive(Clone, Copy)]
pub struct FnTarget<F>(F);

/// Wrap a context-free closure `Fn(&Args) -> Result<Out, E>` as a [`Target`].
pub fn target_fn<F>(f: F) -> FnTarget<F> {
    FnTarget(f)
}

impl<F, Args, Out, E> Target<(), Args> for FnTarget<F>
where
    Args: Payload,
    Out: TargetOutput,
    E: Into<BoxError>,
    F: Fn(&Args) -> Result<Out, E> + Send + Sync + 'static,
{
    type Output = Out;

    fn invoke(&self, _ctx: &(), args: &Args) -> Result<Self::Output, BoxError> {
        (self.0)(args).map_err(Into::into)
    }
}
