//! Property-based tests over generated figure trees.

mod fixtures;

use fixtures::{format_frame, Disc, Frame, Wedge};
use proptest::prelude::*;
use silhouette::figure::Figure;
use silhouette::ops::Format as _;

proptest! {
  /// The composed output is always the root's own output followed by each
  /// branch's, in insertion order.
  #[test]
  fn prop_format_composes_in_order(widths in proptest::collection::vec(2..6i32, 0..6)) {
    let mut root = Figure::new(Disc { radius: 1 });
    let mut expected = Disc { radius: 1 }.format();

    for width in &widths {
      root.append_value(Frame { width: *width });
      expected.push_str(&format_frame(&Frame { width: *width }));
    }

    prop_assert_eq!(root.format(), expected);
  }

  /// A clone shares nothing with its original, branches included.
  #[test]
  fn prop_clone_is_independent(radius in 1..5i32, bump in 1..5i32, count in 0..5usize) {
    let mut original = Figure::new(Disc { radius });

    for _ in 0..count {
      original.append_value(Disc { radius });
    }

    let mut copy = original.clone();
    copy.downcast_mut::<Disc>().unwrap().radius = radius + bump;
    copy.append_value(Disc { radius: bump });

    prop_assert_eq!(original.downcast_ref::<Disc>().unwrap().radius, radius);
    prop_assert_eq!(original.branches().len(), count);
    prop_assert_eq!(copy.downcast_ref::<Disc>().unwrap().radius, radius + bump);
    prop_assert_eq!(copy.branches().len(), count + 1);
  }

  /// Searching a tree finds every planted payload of the searched type and
  /// nothing else.
  #[test]
  fn prop_find_all_counts_planted_payloads(discs in 0..4usize, frames in 0..4usize) {
    let mut root = Figure::new(Wedge { size: 1 });

    for i in 0..discs {
      root.append_value(Disc { radius: i as i32 + 1 });
    }

    for i in 0..frames {
      root.append_value(Frame { width: i as i32 + 2 });
    }

    prop_assert_eq!(root.find_all::<Disc>().len(), discs);
    prop_assert_eq!(root.find_all::<Frame>().len(), frames);
    prop_assert_eq!(root.find_all::<Wedge>().len(), 1);
  }
}
