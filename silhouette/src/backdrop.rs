//! A fallback layer for payload types with partial (or absent) bindings.
//!
//! [`Backdrop`] wraps an arbitrary payload and fills in whatever operations
//! the payload does not bind itself, so that it can live under a deployment
//! requiring more than the payload offers. The wrapped type does not know
//! about the wrapper; it only needs a [`Bound`] manifest, possibly an empty
//! one.
//!
//! The policy is fixed per operation, not per instance:
//!
//! - `format` always emits the backdrop banner first, then the wrapped type's
//!   own output when it has a member or free-function binding, or a
//!   placeholder when it has neither;
//! - `calculate` is fully deferred to the wrapped type when bound, else `0`;
//! - `serialize` and `draw` run the wrapped type's binding when present and
//!   otherwise do nothing.
//!
//! The fallback logic reads the wrapped type's manifest consts directly. It
//! must never go back through an erased value's dispatch for the same
//! operation; a wrapped payload whose fallback re-entered erased dispatch
//! would recurse without bound.
//!
//! ```
//! use silhouette::backdrop::Backdrop;
//! use silhouette::bind::Bound;
//! use silhouette::figure::Figure;
//! use silhouette::ops::{Calculate as _, Format as _};
//!
//! #[derive(Clone)]
//! struct Blank;
//!
//! impl Bound for Blank {}
//!
//! let figure = Figure::new(Backdrop::new(Blank));
//! assert_eq!(figure.format(), "[X:0|Y:0]\n[no binding]\n");
//! assert_eq!(figure.calculate(), 0);
//! ```

use crate::bind::{Bound, MemberOps};

/// Format output of a wrapped type with no binding of its own.
const PLACEHOLDER: &str = "[no binding]\n";

/// Fallback wrapper combining a payload with default operation behavior.
///
/// The extent pair feeds the banner line prepended to every `format` output,
/// in the spirit of a canvas the wrapped payload is drawn onto.
#[derive(Clone, Debug)]
pub struct Backdrop<T> {
  extent: (i32, i32),
  inner: T,
}

impl<T> Backdrop<T> {
  /// Wrap `inner` with a zero extent.
  pub fn new(inner: T) -> Self {
    Backdrop {
      extent: (0, 0),
      inner,
    }
  }

  /// Wrap `inner` with an explicit extent.
  pub fn with_extent(inner: T, width: i32, height: i32) -> Self {
    Backdrop {
      extent: (width, height),
      inner,
    }
  }

  /// The wrapped payload.
  pub fn inner(&self) -> &T {
    &self.inner
  }

  /// The banner line prepended to every `format` output.
  pub fn banner(&self) -> String {
    format!("[X:{}|Y:{}]\n", self.extent.0, self.extent.1)
  }
}

impl<T> Backdrop<T>
where
  T: Bound,
{
  /// Serialize the wrapped payload through its own binding, if any.
  pub fn serialize(&self) {
    if let Some(run) = pick(T::MEMBER.serialize, T::FREE.serialize) {
      run(&self.inner);
    }
  }

  /// Draw the wrapped payload through its own binding, if any.
  pub fn draw(&self) {
    if let Some(run) = pick(T::MEMBER.draw, T::FREE.draw) {
      run(&self.inner);
    }
  }

  /// The banner, followed by the wrapped payload's own output or the
  /// placeholder.
  pub fn format(&self) -> String {
    let mut out = self.banner();

    match pick(T::MEMBER.format, T::FREE.format) {
      Some(run) => out.push_str(&run(&self.inner)),
      None => out.push_str(PLACEHOLDER),
    }

    out
  }

  /// The wrapped payload's own metric, or `0`.
  pub fn calculate(&self) -> i64 {
    match pick(T::MEMBER.calculate, T::FREE.calculate) {
      Some(run) => run(&self.inner),
      None => 0,
    }
  }
}

/// Member binding first, else the free-function one.
fn pick<F>(member: Option<F>, free: Option<F>) -> Option<F> {
  member.or(free)
}

impl<T> Bound for Backdrop<T>
where
  T: Bound,
{
  const MEMBER: MemberOps<Self> = MemberOps {
    serialize: Some(Backdrop::<T>::serialize),
    draw: Some(Backdrop::<T>::draw),
    format: Some(Backdrop::<T>::format),
    calculate: Some(Backdrop::<T>::calculate),
  };
}
