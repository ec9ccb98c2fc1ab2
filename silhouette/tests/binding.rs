//! Resolution of capability manifests: channel precedence, builtins and the
//! failure mode for required operations left unbound.

mod fixtures;

use fixtures::{Blank, Disc, Frame, Gap, Stamp, Wedge};
use silhouette::bind::{Bound, Channel, OpTable, Profile};

#[test]
fn member_only_manifests_resolve_to_the_member_channel() {
  let table = OpTable::<Disc>::resolve(Profile::FULL);
  let channels = table.channels();

  assert_eq!(channels.serialize, Channel::Member);
  assert_eq!(channels.draw, Channel::Member);
  assert_eq!(channels.format, Channel::Member);
  assert_eq!(channels.calculate, Channel::Member);
}

#[test]
fn free_only_manifests_resolve_to_the_free_channel() {
  let table = OpTable::<Frame>::resolve(Profile::FULL);
  let channels = table.channels();

  assert_eq!(channels.serialize, Channel::Free);
  assert_eq!(channels.format, Channel::Free);
}

#[test]
fn mixed_manifests_resolve_each_operation_on_its_own() {
  let channels = OpTable::<Wedge>::resolve(Profile::FULL).channels();

  assert_eq!(channels.format, Channel::Member);
  assert_eq!(channels.calculate, Channel::Free);
}

#[test]
fn the_member_channel_shadows_the_free_channel() {
  let table = OpTable::<Stamp>::resolve(Profile::FULL);

  assert_eq!(table.format.channel, Channel::Member);
  assert_eq!((table.format.run)(&Stamp), "stamp (member)\n");

  // the free binding is still declared, just not selected
  assert!(Stamp::FREE.format.is_some());
}

#[test]
fn unrequired_operations_fall_back_to_builtins() {
  let table = OpTable::<Blank>::resolve(Profile::NONE);
  let channels = table.channels();

  assert_eq!(channels.serialize, Channel::Default);
  assert_eq!(channels.draw, Channel::Default);
  assert_eq!(channels.format, Channel::Default);
  assert_eq!(channels.calculate, Channel::Default);

  (table.serialize.run)(&Blank);
  (table.draw.run)(&Blank);
  assert_eq!((table.format.run)(&Blank), "");
  assert_eq!((table.calculate.run)(&Blank), 0);
}

#[test]
fn bound_operations_resolve_the_same_under_any_profile() {
  let strict = OpTable::<Gap>::resolve(Profile::FORMAT_ONLY);
  let lax = OpTable::<Gap>::resolve(Profile::NONE);

  assert_eq!(strict.format.channel, Channel::Free);
  assert_eq!(lax.format.channel, Channel::Free);
  assert_eq!((strict.format.run)(&Gap { label: "a" }), "gap:a\n");
}

#[test]
#[should_panic(expected = "no member or free-function binding for required operation `calculate`")]
fn requiring_an_unbound_operation_fails_loudly() {
  let profile = Profile {
    serialize: false,
    draw: false,
    format: true,
    calculate: true,
  };

  let _ = OpTable::<Gap>::resolve(profile);
}
