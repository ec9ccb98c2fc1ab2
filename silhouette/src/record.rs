//! The polymorphic record behind every erased value.
//!
//! [`Record`] is the crate-internal interface the public value types dispatch
//! through, and [`Cell`] its only owning implementor, one monomorphization
//! per payload type. The cell is the single place the concrete type is still
//! visible: it holds the payload, the operation table resolved for it at
//! construction, and the branch sequence of the tree it roots.

use std::any::{Any, TypeId};

use crate::bind::{Bound, ChannelSet, OpTable};
use crate::figure::Figure;
use crate::ops::Format as _;

pub(crate) trait Record {
  fn serialize(&self);
  fn draw(&self);
  fn format(&self) -> String;
  fn calculate(&self) -> i64;

  /// A deep copy of this record, branches included.
  fn clone_record(&self) -> Box<dyn Record>;

  /// Identity of the payload type, stable for the life of the program.
  fn tag(&self) -> TypeId;

  /// Diagnostic name of the payload type.
  fn tag_name(&self) -> &'static str;

  fn payload(&self) -> &dyn Any;
  fn payload_mut(&mut self) -> &mut dyn Any;

  fn branches(&self) -> &[Figure];
  fn branches_mut(&mut self) -> &mut Vec<Figure>;

  fn channels(&self) -> ChannelSet;
}

pub(crate) struct Cell<T> {
  value: T,
  table: OpTable<T>,
  branches: Vec<Figure>,
}

impl<T> Cell<T> {
  pub(crate) fn new(value: T, table: OpTable<T>) -> Self {
    Cell {
      value,
      table,
      branches: Vec::new(),
    }
  }
}

impl<T> Record for Cell<T>
where
  T: Bound + Clone + 'static,
{
  fn serialize(&self) {
    (self.table.serialize.run)(&self.value)
  }

  fn draw(&self) {
    (self.table.draw.run)(&self.value)
  }

  fn format(&self) -> String {
    let mut out = (self.table.format.run)(&self.value);

    for branch in &self.branches {
      out.push_str(&branch.format());
    }

    out
  }

  fn calculate(&self) -> i64 {
    (self.table.calculate.run)(&self.value)
  }

  fn clone_record(&self) -> Box<dyn Record> {
    Box::new(Cell {
      value: self.value.clone(),
      table: self.table,
      branches: self.branches.clone(),
    })
  }

  fn tag(&self) -> TypeId {
    TypeId::of::<T>()
  }

  fn tag_name(&self) -> &'static str {
    std::any::type_name::<T>()
  }

  fn payload(&self) -> &dyn Any {
    &self.value
  }

  fn payload_mut(&mut self) -> &mut dyn Any {
    &mut self.value
  }

  fn branches(&self) -> &[Figure] {
    &self.branches
  }

  fn branches_mut(&mut self) -> &mut Vec<Figure> {
    &mut self.branches
  }

  fn channels(&self) -> ChannelSet {
    self.table.channels()
  }
}
