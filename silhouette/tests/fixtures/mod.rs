//! ASCII payload types shared by the integration tests, one per binding
//! style.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use silhouette::bind;
use silhouette::bind::{Bound, Deployment, Profile};
use silhouette::bind_free;

thread_local! {
  static EVENTS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

/// Record a side effect of a `serialize` or `draw` call.
pub fn record_event(event: impl Into<String>) {
  EVENTS.with(|events| events.borrow_mut().push(event.into()));
}

/// Drain the side effects recorded so far on this thread.
pub fn take_events() -> Vec<String> {
  EVENTS.with(|events| events.borrow_mut().split_off(0))
}

/// A deployment that only insists on `format`.
pub struct TextOnly;

impl Deployment for TextOnly {
  const PROFILE: Profile = Profile::FORMAT_ONLY;
}

/// Binds everything through the member channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Disc {
  pub radius: i32,
}

#[bind]
impl Disc {
  pub fn serialize(&self) {
    record_event(format!("serialize disc r={}", self.radius));
  }

  pub fn draw(&self) {
    record_event(format!("draw disc r={}", self.radius));
  }

  pub fn format(&self) -> String {
    // a point is on the disc when |x*x/4 + y*y - r*r| <= r
    let r = self.radius;
    let mut out = String::new();

    for y in -r..=r {
      for x in -2 * r..=2 * r {
        if (x * x / 4 + y * y - r * r).abs() <= r {
          out.push('*');
        } else {
          out.push(' ');
        }
      }

      out.push('\n');
    }

    out
  }

  pub fn calculate(&self) -> i64 {
    (self.radius * self.radius) as i64
  }
}

/// Binds everything through the free-function channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
  pub width: i32,
}

pub fn serialize_frame(frame: &Frame) {
  record_event(format!("serialize frame w={}", frame.width));
}

pub fn draw_frame(frame: &Frame) {
  record_event(format!("draw frame w={}", frame.width));
}

pub fn format_frame(frame: &Frame) -> String {
  let inner = frame.width.max(2) as usize - 2;
  let mut out = String::new();

  out.push('+');
  out.push_str(&"-".repeat(inner));
  out.push_str("+\n");

  for _ in 0..inner {
    out.push('|');
    out.push_str(&" ".repeat(inner));
    out.push_str("|\n");
  }

  out.push('+');
  out.push_str(&"-".repeat(inner));
  out.push_str("+\n");

  out
}

pub fn frame_area(frame: &Frame) -> i64 {
  (frame.width * frame.width) as i64
}

bind_free! {
  Frame {
    serialize: serialize_frame,
    draw: draw_frame,
    format: format_frame,
    calculate: frame_area,
  }
}

/// Mixes both channels: members for the side effects and the text, a free
/// function for the metric.
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
  pub size: i32,
}

pub fn wedge_rows(wedge: &Wedge) -> i64 {
  wedge.size as i64
}

#[bind(free(calculate = wedge_rows))]
impl Wedge {
  pub fn serialize(&self) {
    record_event(format!("serialize wedge s={}", self.size));
  }

  pub fn draw(&self) {
    record_event(format!("draw wedge s={}", self.size));
  }

  pub fn format(&self) -> String {
    let s = self.size;
    let mut out = String::new();

    for i in 0..s {
      out.push_str(&" ".repeat((s - i - 1) as usize));
      out.push_str(&"*".repeat((2 * i + 1) as usize));
      out.push('\n');
    }

    out
  }
}

/// Carries a member binding *and* a free-function binding for `format`; the
/// member one must win.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp;

pub fn stamp_text_free(_: &Stamp) -> String {
  "stamp (free)\n".to_owned()
}

pub fn stamp_quiet(_: &Stamp) {}

pub fn stamp_rank(_: &Stamp) -> i64 {
  7
}

#[bind(free(format = stamp_text_free, serialize = stamp_quiet, draw = stamp_quiet, calculate = stamp_rank))]
impl Stamp {
  pub fn format(&self) -> String {
    "stamp (member)\n".to_owned()
  }
}

/// Binds nothing at all; only usable behind a `Backdrop` or a deployment
/// requiring nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Blank;

impl Bound for Blank {}

/// Binds `format` only, through a free function.
#[derive(Clone, Debug, PartialEq)]
pub struct Gap {
  pub label: &'static str,
}

pub fn gap_text(gap: &Gap) -> String {
  format!("gap:{}\n", gap.label)
}

bind_free! {
  Gap {
    format: gap_text,
  }
}

/// Interior-mutable payload for aliasing tests; deliberately not `Clone`.
pub struct Counter {
  pub hits: Cell<i64>,
}

impl Counter {
  pub fn new(hits: i64) -> Self {
    Counter {
      hits: Cell::new(hits),
    }
  }
}

#[bind]
impl Counter {
  pub fn serialize(&self) {
    record_event(format!("serialize counter {}", self.hits.get()));
  }

  pub fn draw(&self) {
    record_event(format!("draw counter {}", self.hits.get()));
  }

  pub fn format(&self) -> String {
    format!("counter {}\n", self.hits.get())
  }

  pub fn calculate(&self) -> i64 {
    self.hits.get()
  }
}
