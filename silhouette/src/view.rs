//! Non-owning erased views over externally owned payloads.

use std::any::{Any, TypeId};
use std::fmt;

use crate::bind::{Bound, ChannelSet, Deployment, Full, Resolution};
use crate::figure::CastError;
use crate::ops;

/// Type-erased entry points into the operation table of some payload type.
///
/// Each thunk downcasts the payload back to the type it was built for and
/// runs the resolved operation; the pairing is fixed at view construction.
#[derive(Clone, Copy)]
struct RawTable {
  serialize: fn(&dyn Any),
  draw: fn(&dyn Any),
  format: fn(&dyn Any) -> String,
  calculate: fn(&dyn Any) -> i64,
}

fn expect_payload<T>(payload: &dyn Any) -> &T
where
  T: 'static,
{
  match payload.downcast_ref::<T>() {
    Some(value) => value,
    None => unreachable!("view thunks only ever see the payload type they were built for"),
  }
}

fn erased_serialize<T, D>(payload: &dyn Any)
where
  T: Bound + 'static,
  D: Deployment,
{
  (Resolution::<T, D>::TABLE.serialize.run)(expect_payload::<T>(payload))
}

fn erased_draw<T, D>(payload: &dyn Any)
where
  T: Bound + 'static,
  D: Deployment,
{
  (Resolution::<T, D>::TABLE.draw.run)(expect_payload::<T>(payload))
}

fn erased_format<T, D>(payload: &dyn Any) -> String
where
  T: Bound + 'static,
  D: Deployment,
{
  (Resolution::<T, D>::TABLE.format.run)(expect_payload::<T>(payload))
}

fn erased_calculate<T, D>(payload: &dyn Any) -> i64
where
  T: Bound + 'static,
  D: Deployment,
{
  (Resolution::<T, D>::TABLE.calculate.run)(expect_payload::<T>(payload))
}

/// An erased borrow of a payload owned elsewhere.
///
/// Where a [`Figure`](crate::figure::Figure) captures its payload, a
/// `FigureView` only points at one, for no longer than the borrow `'a`. It
/// offers the same operation surface and the same type queries, checked
/// against the referenced payload's type, but no branches: views are leaves.
///
/// Views are `Copy`; duplicating one never touches the referent. Every
/// operation reads the referent at call time, so mutations applied to it
/// through interior mutability are visible to the next call.
///
/// ```
/// use silhouette::bind::{Bound, MemberOps};
/// use silhouette::ops::Calculate as _;
/// use silhouette::view::FigureView;
///
/// struct Gauge {
///   level: i64,
/// }
///
/// impl Gauge {
///   fn serialize(&self) {}
///
///   fn draw(&self) {}
///
///   fn format(&self) -> String {
///     format!("|{}|\n", self.level)
///   }
///
///   fn calculate(&self) -> i64 {
///     self.level
///   }
/// }
///
/// impl Bound for Gauge {
///   const MEMBER: MemberOps<Self> = MemberOps {
///     serialize: Some(Gauge::serialize),
///     draw: Some(Gauge::draw),
///     format: Some(Gauge::format),
///     calculate: Some(Gauge::calculate),
///   };
/// }
///
/// let gauge = Gauge { level: 12 };
/// let view = FigureView::of(&gauge);
/// let copy = view;
///
/// assert_eq!(view.calculate(), 12);
/// assert_eq!(copy.calculate(), 12);
/// assert!(view.is::<Gauge>());
/// ```
#[derive(Clone, Copy)]
pub struct FigureView<'a> {
  payload: &'a dyn Any,
  table: RawTable,
  channels: ChannelSet,
  tag: TypeId,
  name: &'static str,
}

impl<'a> FigureView<'a> {
  /// View `value` under the [`Full`] deployment.
  ///
  /// Unlike owning erasure, the payload type does not have to be `Clone`;
  /// nothing is ever copied out of the referent.
  pub fn of<T>(value: &'a T) -> Self
  where
    T: Bound + 'static,
  {
    Self::of_under::<Full, T>(value)
  }

  /// View `value` under the deployment `D`.
  pub fn of_under<D, T>(value: &'a T) -> Self
  where
    D: Deployment,
    T: Bound + 'static,
  {
    let table = Resolution::<T, D>::TABLE;

    FigureView {
      payload: value,
      table: RawTable {
        serialize: erased_serialize::<T, D>,
        draw: erased_draw::<T, D>,
        format: erased_format::<T, D>,
        calculate: erased_calculate::<T, D>,
      },
      channels: table.channels(),
      tag: TypeId::of::<T>(),
      name: std::any::type_name::<T>(),
    }
  }

  /// Whether the referenced payload is exactly a `U`.
  pub fn is<U>(&self) -> bool
  where
    U: 'static,
  {
    self.tag == TypeId::of::<U>()
  }

  /// The referenced payload as a `U`, or a [`CastError`] naming both types.
  ///
  /// The returned borrow lives as long as the referent, not the view.
  pub fn downcast_ref<U>(&self) -> Result<&'a U, CastError>
  where
    U: 'static,
  {
    match self.payload.downcast_ref::<U>() {
      Some(value) => Ok(value),
      None => {
        let err = CastError {
          expected: std::any::type_name::<U>(),
          actual: self.name,
        };

        log::trace!("{}", err);
        Err(err)
      }
    }
  }

  /// Identity of the referenced payload's type.
  pub fn type_tag(&self) -> TypeId {
    self.tag
  }

  /// Diagnostic name of the referenced payload's type.
  pub fn type_name(&self) -> &'static str {
    self.name
  }

  /// The channel each operation was bound from.
  pub fn channels(&self) -> ChannelSet {
    self.channels
  }
}

impl fmt::Debug for FigureView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("FigureView")
      .field("payload", &self.name)
      .finish()
  }
}

impl fmt::Display for FigureView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&ops::Format::format(self))
  }
}

impl ops::Serialize for FigureView<'_> {
  fn serialize(&self) {
    (self.table.serialize)(self.payload)
  }
}

impl ops::Draw for FigureView<'_> {
  fn draw(&self) {
    (self.table.draw)(self.payload)
  }
}

impl ops::Format for FigureView<'_> {
  fn format(&self) -> String {
    (self.table.format)(self.payload)
  }
}

impl ops::Calculate for FigureView<'_> {
  fn calculate(&self) -> i64 {
    (self.table.calculate)(self.payload)
  }
}
