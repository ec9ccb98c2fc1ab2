//! The operation set every payload is measured against.
//!
//! Four operations make up the uniform surface of an erased value: two
//! side-effecting ones ([`Serialize::serialize`] and [`Draw::draw`]) and two
//! pure ones ([`Format::format`] and [`Calculate::calculate`]). The traits in
//! this module are implemented by [`Figure`] and [`FigureView`] so that erased
//! values can be handled generically, and payload types are free to implement
//! them too; a trait method reachable as `Type::op` binds through the member
//! channel just like an inherent method (see [`bind`](crate::bind)).
//!
//! Each operation also exists as a free function ([`serialize`], [`draw`],
//! [`format`], [`calculate`]). Both forms behave identically; use whichever
//! reads better at the call site.
//!
//! [`Figure`]: crate::figure::Figure
//! [`FigureView`]: crate::view::FigureView

/// Emit a textual record of the value.
///
/// Where the record goes is entirely up to the implementor; the operation
/// itself returns nothing.
pub trait Serialize {
  fn serialize(&self);
}

/// Render the value.
pub trait Draw {
  fn draw(&self);
}

/// Produce a textual representation of the value.
///
/// This is the only operation that composes over branches: formatting an
/// owning erased value yields its own output followed by the output of every
/// branch, depth-first, in insertion order.
pub trait Format {
  fn format(&self) -> String;
}

/// Compute an integer metric of the value.
pub trait Calculate {
  fn calculate(&self) -> i64;
}

/// Free-function form of [`Serialize::serialize`].
pub fn serialize(value: &impl Serialize) {
  value.serialize()
}

/// Free-function form of [`Draw::draw`].
pub fn draw(value: &impl Draw) {
  value.draw()
}

/// Free-function form of [`Format::format`].
pub fn format(value: &impl Format) -> String {
  value.format()
}

/// Free-function form of [`Calculate::calculate`].
pub fn calculate(value: &impl Calculate) -> i64 {
  value.calculate()
}
