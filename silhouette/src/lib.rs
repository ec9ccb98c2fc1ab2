//! Silhouette, type-erased polymorphic values in vanilla Rust.
//!
//! This crate lets you put values of unrelated concrete types behind one
//! uniform value type, [`Figure`], without asking those types to opt into a
//! common trait object, and dispatches a small fixed operation set to each of
//! them the way the type itself prefers. The operation set is the one of a
//! toy rendering pipeline ([`serialize`], [`draw`], [`format`], [`calculate`])
//! but the payloads are entirely yours; the crate ships none.
//!
//! # Motivation
//!
//! The usual way to store heterogeneous values in Rust is a trait object:
//! define a trait, implement it for every type, store `Box<dyn Trait>`. That
//! works until it doesn't:
//!
//! - the payload type may come from a crate you do not control and cannot
//!   implement your trait on the way you would like;
//! - the natural home of an operation may be a standalone function rather
//!   than a method, say a rendering routine living next to its siblings in a
//!   drawing module;
//! - some types only satisfy part of the operation set, and you still want to
//!   store them, with sensible fallbacks for the rest.
//!
//! Silhouette separates *what a type can do* from *how it is stored*. Every
//! payload type carries a small manifest ([`bind::Bound`]) naming, per
//! operation, a method of its own (the *member channel*) or a standalone
//! function (the *free-function channel*). At the moment a value is erased,
//! the manifest is resolved, with member bindings taking precedence, into a
//! table of function pointers that travels with the erased value. Types that
//! bind nothing at all can still ride along wrapped in a
//! [`backdrop::Backdrop`], which supplies default behavior without ever
//! re-entering erased dispatch.
//!
//! Resolution happens in const evaluation, once per payload type. If a
//! deployment requires an operation the type does not bind anywhere, the
//! build fails with a message naming the operation, at the exact
//! monomorphization that tried to erase the type. Nothing is probed at call
//! time.
//!
//! # A tour
//!
//! ```
//! use silhouette::bind_free;
//! use silhouette::figure::Figure;
//! use silhouette::ops::{Calculate as _, Format as _};
//!
//! // a payload with no methods at all: everything is bound through free
//! // functions
//! #[derive(Clone)]
//! struct Bar {
//!   len: usize,
//! }
//!
//! fn bar_text(bar: &Bar) -> String {
//!   let mut out = "=".repeat(bar.len);
//!   out.push('\n');
//!   out
//! }
//!
//! fn bar_len(bar: &Bar) -> i64 {
//!   bar.len as i64
//! }
//!
//! fn bar_quiet(_: &Bar) {}
//!
//! bind_free! {
//!   Bar {
//!     serialize: bar_quiet,
//!     draw: bar_quiet,
//!     format: bar_text,
//!     calculate: bar_len,
//!   }
//! }
//!
//! // erase it, compose a little tree, query it back
//! let mut figure = Figure::new(Bar { len: 3 });
//! figure.append_value(Bar { len: 5 });
//!
//! assert_eq!(figure.format(), "===\n=====\n");
//! assert_eq!(figure.calculate(), 3);
//! assert_eq!(figure.find_all::<Bar>().len(), 2);
//! assert!(figure.downcast_ref::<String>().is_err());
//! ```
//!
//! # Owning values and views
//!
//! [`figure::Figure`] owns its payload: construction captures the value,
//! cloning deep-copies it along with every branch of the tree hanging off it,
//! and dropping it drops the whole subtree. [`view::FigureView`] is the
//! non-owning counterpart: it borrows a payload owned elsewhere, costs nothing
//! to copy, and carries no branches. Both answer runtime type queries
//! (`is::<T>()`, `downcast_ref::<T>()`) against the payload type that was
//! erased, and downcasts that name the wrong type fail with an error rather
//! than misbehaving.
//!
//! # Trees of figures
//!
//! A figure can own further figures, its *branches*, which is how composite
//! drawings are assembled from heterogeneous parts. Only [`ops::Format`]
//! composes over the tree (own output first, then each branch depth-first in
//! insertion order); the other operations deliberately stay on the root
//! payload. [`figure::Figure::find_all`] searches a subtree for payloads of a
//! given type in the same order.
//!
//! # Declaring bindings
//!
//! Manifests are plain `impl` blocks of associated consts and can be written
//! by hand, but two shortcuts cover the common cases:
//!
//! - the `#[bind]` attribute from the [`silhouette-bind`] crate reads an
//!   inherent `impl` block and derives the member-channel manifest from the
//!   operation methods it finds there, with an optional `free(…)` argument
//!   for mixed types;
//! - [`bind_free!`](crate::bind_free) declares a free-function-channel
//!   manifest in one line.
//!
//! The attribute is re-exported through the default-on `bind-macro` feature
//! of this crate's `Cargo.toml`.
//!
//! [`serialize`]: crate::ops::Serialize
//! [`draw`]: crate::ops::Draw
//! [`format`]: crate::ops::Format
//! [`calculate`]: crate::ops::Calculate
//! [`Figure`]: crate::figure::Figure
//! [`silhouette-bind`]: https://docs.rs/silhouette-bind

pub mod backdrop;
pub mod bind;
pub mod figure;
pub mod ops;
mod record;
pub mod view;

/// The `#[bind]` attribute, re-exported from `silhouette-bind`.
///
/// It shares its name with the [`bind`](mod@bind) module; the two never collide since
/// attributes and modules live in different namespaces, and `silhouette::bind`
/// works in attribute position.
#[cfg(feature = "bind-macro")]
pub use silhouette_bind::bind;
