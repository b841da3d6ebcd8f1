//! Payload marker for call arguments and contexts.

/// A marker trait for the arguments and contexts a debounced call carries.
///
/// Payloads are captured on one thread and consumed on whichever thread the
/// scheduler fires the timer on, so they must be `Send + Sync + 'static`.
/// Every such type is a payload; there is nothing to implement.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct Keystroke { text: String }
///
/// // `Keystroke` is a Payload through the blanket impl.
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Payload",
    label = "must be `Send + Sync + 'static`",
    note = "Arguments and contexts captured by a debounced call cross threads when the timer fires."
)]
pub trait Payload: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Payload for T {}
