//! Owning erased values.

use std::any::TypeId;
use std::fmt;

use thiserror::Error;

use crate::bind::{Bound, ChannelSet, Deployment, Full, Resolution};
use crate::ops;
use crate::record::{Cell, Record};

/// A downcast named a type the payload does not have.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("downcast to `{expected}` failed: payload is a `{actual}`")]
pub struct CastError {
  /// The type the caller asked for.
  pub expected: &'static str,

  /// The type actually held.
  pub actual: &'static str,
}

/// A value of any payload type, erased behind the operation set.
///
/// A `Figure` owns exactly one payload, captured by value at construction
/// time together with the operation table resolved for its type (see
/// [`bind`](crate::bind)). All four operations of the
/// [`ops`](crate::ops) traits are available on it, along with runtime type
/// queries ([`is`](Figure::is), [`downcast_ref`](Figure::downcast_ref)) that
/// the erasure would otherwise make impossible.
///
/// # Trees
///
/// A figure may own further figures, its *branches*, appended with
/// [`append`](Figure::append) or [`append_value`](Figure::append_value) and
/// nested arbitrarily deep. Branch types are free to differ from the parent's.
/// Formatting walks the whole tree: the root's own output comes first, then
/// every branch in insertion order, depth-first. The other operations act on
/// the root payload alone.
///
/// # Copies and moves
///
/// Cloning a figure deep-copies its payload and every branch; the clone shares
/// nothing with the original. Moving a figure is an ordinary Rust move.
///
/// ```
/// use silhouette::bind::{Bound, MemberOps};
/// use silhouette::figure::Figure;
/// use silhouette::ops::{Calculate as _, Format as _};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Dot {
///   x: i64,
///   y: i64,
/// }
///
/// impl Dot {
///   fn serialize(&self) {}
///
///   fn draw(&self) {}
///
///   fn format(&self) -> String {
///     format!("({}, {})\n", self.x, self.y)
///   }
///
///   fn calculate(&self) -> i64 {
///     self.x * self.y
///   }
/// }
///
/// impl Bound for Dot {
///   const MEMBER: MemberOps<Self> = MemberOps {
///     serialize: Some(Dot::serialize),
///     draw: Some(Dot::draw),
///     format: Some(Dot::format),
///     calculate: Some(Dot::calculate),
///   };
/// }
///
/// let mut figure = Figure::new(Dot { x: 2, y: 3 });
/// figure.append_value(Dot { x: 4, y: 5 });
///
/// assert_eq!(figure.calculate(), 6);
/// assert_eq!(figure.format(), "(2, 3)\n(4, 5)\n");
/// assert!(figure.is::<Dot>());
/// assert_eq!(figure.downcast_ref::<Dot>().unwrap(), &Dot { x: 2, y: 3 });
/// ```
pub struct Figure {
  record: Box<dyn Record>,
}

impl Figure {
  /// Erase `value` under the [`Full`] deployment.
  ///
  /// The payload type must bind all four operations through its member or
  /// free-function channel; a type that does not fails to build.
  pub fn new<T>(value: T) -> Self
  where
    T: Bound + Clone + 'static,
  {
    Self::new_under::<Full, T>(value)
  }

  /// Erase `value` under the deployment `D`.
  ///
  /// Operations `D` does not require fall back to their builtins when the
  /// payload type leaves them unbound.
  pub fn new_under<D, T>(value: T) -> Self
  where
    D: Deployment,
    T: Bound + Clone + 'static,
  {
    let table = Resolution::<T, D>::TABLE;

    log::debug!(
      "erasing `{}` with channels {:?}",
      std::any::type_name::<T>(),
      table.channels()
    );

    Figure {
      record: Box::new(Cell::new(value, table)),
    }
  }

  /// Append `branch` as the last branch of this figure.
  pub fn append(&mut self, branch: Figure) {
    self.record.branches_mut().push(branch);
  }

  /// Erase `value` under the [`Full`] deployment and append it as the last
  /// branch.
  pub fn append_value<T>(&mut self, value: T)
  where
    T: Bound + Clone + 'static,
  {
    self.append(Figure::new(value));
  }

  /// The branches of this figure, in insertion order.
  pub fn branches(&self) -> &[Figure] {
    self.record.branches()
  }

  /// Mutable access to the branch sequence.
  pub fn branches_mut(&mut self) -> &mut Vec<Figure> {
    self.record.branches_mut()
  }

  /// Whether the payload is exactly a `U`.
  ///
  /// The check compares type identities; there is no subtype notion here.
  pub fn is<U>(&self) -> bool
  where
    U: 'static,
  {
    self.record.tag() == TypeId::of::<U>()
  }

  /// The payload as a `U`, or a [`CastError`] naming both types when the
  /// payload is something else.
  pub fn downcast_ref<U>(&self) -> Result<&U, CastError>
  where
    U: 'static,
  {
    match self.record.payload().downcast_ref::<U>() {
      Some(value) => Ok(value),
      None => Err(self.cast_error::<U>()),
    }
  }

  /// Mutable variant of [`downcast_ref`](Figure::downcast_ref).
  pub fn downcast_mut<U>(&mut self) -> Result<&mut U, CastError>
  where
    U: 'static,
  {
    if self.is::<U>() {
      if self.record.payload_mut().downcast_mut::<U>().is_some() {
        return Ok(self.record.payload_mut().downcast_mut::<U>().unwrap());
      }
      Err(self.cast_error::<U>())
    } else {
      Err(self.cast_error::<U>())
    }
  }

  fn cast_error<U>(&self) -> CastError
  where
    U: 'static,
  {
    let err = CastError {
      expected: std::any::type_name::<U>(),
      actual: self.record.tag_name(),
    };

    log::trace!("{}", err);
    err
  }

  /// References to this figure and every figure in its subtree whose payload
  /// is exactly a `U`, in depth-first order, self before branches.
  pub fn find_all<U>(&self) -> Vec<&Figure>
  where
    U: 'static,
  {
    let mut found = Vec::new();
    self.collect_matches(TypeId::of::<U>(), &mut found);
    found
  }

  fn collect_matches<'a>(&'a self, tag: TypeId, found: &mut Vec<&'a Figure>) {
    if self.record.tag() == tag {
      found.push(self);
    }

    for branch in self.record.branches() {
      branch.collect_matches(tag, found);
    }
  }

  /// Identity of the payload type, stable for the life of the program.
  ///
  /// Two figures have equal tags exactly when their payload types are
  /// identical.
  pub fn type_tag(&self) -> TypeId {
    self.record.tag()
  }

  /// Diagnostic name of the payload type.
  pub fn type_name(&self) -> &'static str {
    self.record.tag_name()
  }

  /// The channel each operation was bound from.
  pub fn channels(&self) -> ChannelSet {
    self.record.channels()
  }
}

impl Clone for Figure {
  fn clone(&self) -> Self {
    Figure {
      record: self.record.clone_record(),
    }
  }
}

impl fmt::Debug for Figure {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Figure")
      .field("payload", &self.record.tag_name())
      .field("branches", &self.record.branches().len())
      .finish()
  }
}

impl fmt::Display for Figure {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&ops::Format::format(self))
  }
}

impl ops::Serialize for Figure {
  fn serialize(&self) {
    self.record.serialize()
  }
}

impl ops::Draw for Figure {
  fn draw(&self) {
    self.record.draw()
  }
}

impl ops::Format for Figure {
  fn format(&self) -> String {
    self.record.format()
  }
}

impl ops::Calculate for Figure {
  fn calculate(&self) -> i64 {
    self.record.calculate()
  }
}
