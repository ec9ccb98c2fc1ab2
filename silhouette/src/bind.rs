//! Binding payload types to the operation set.
//!
//! A payload type tells the crate how each operation is satisfied by
//! implementing [`Bound`], a manifest of two associated const tables:
//!
//! - [`Bound::MEMBER`] lists *member* bindings: methods of the type itself,
//!   referenced as plain paths (`Disc::format`). An inherent method and a
//!   trait method are equally acceptable; path resolution prefers the inherent
//!   one, so a type carrying both binds to its own method.
//! - [`Bound::FREE`] lists *free-function* bindings: standalone functions
//!   taking the payload by reference, for types whose rendering lives outside
//!   of them.
//!
//! Both tables default to empty, so `impl Bound for Blank {}` is a valid (if
//! mute) manifest. The usual way to write a manifest is not by hand though:
//! the [`bind`] attribute of the `silhouette-bind` crate derives the member
//! table from an inherent `impl` block, and [`bind_free!`](crate::bind_free)
//! declares the free table in one line.
//!
//! # Resolution
//!
//! [`OpTable::resolve`] collapses a manifest into one callable per operation,
//! with a fixed precedence: member binding first, else free-function binding,
//! else (for operations the [`Profile`] does not require) a builtin doing
//! nothing useful, like formatting to the empty string. A *required*
//! operation with neither binding panics; since resolution runs during const
//! evaluation when an erased value is first built for the type, that panic is
//! a build error pointing at the offending payload type, not a runtime
//! surprise.
//!
//! Resolution is a pure function of the manifest and happens once per payload
//! type. The resulting [`OpTable`] travels with the erased value; nothing is
//! re-resolved at call time.
//!
//! ```
//! use silhouette::bind::{Bound, Channel, FreeOps, OpTable, Profile};
//!
//! #[derive(Clone)]
//! struct Tick;
//!
//! fn tick_format(_: &Tick) -> String {
//!   "tick".to_owned()
//! }
//!
//! impl Bound for Tick {
//!   const FREE: FreeOps<Self> = FreeOps {
//!     serialize: None,
//!     draw: None,
//!     format: Some(tick_format),
//!     calculate: None,
//!   };
//! }
//!
//! let table = OpTable::<Tick>::resolve(Profile::FORMAT_ONLY);
//! assert_eq!(table.format.channel, Channel::Free);
//! assert_eq!((table.format.run)(&Tick), "tick");
//! ```
//!
//! [`bind`]: https://docs.rs/silhouette-bind

/// The source a resolved operation was bound from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channel {
  /// A method of the payload type.
  Member,

  /// A standalone function taking the payload by reference.
  Free,

  /// The builtin for operations the deployment does not require.
  Default,
}

/// Per-operation channels of a resolved payload type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChannelSet {
  pub serialize: Channel,
  pub draw: Channel,
  pub format: Channel,
  pub calculate: Channel,
}

/// Member-channel manifest: one optional method per operation.
pub struct MemberOps<T> {
  pub serialize: Option<fn(&T)>,
  pub draw: Option<fn(&T)>,
  pub format: Option<fn(&T) -> String>,
  pub calculate: Option<fn(&T) -> i64>,
}

impl<T> MemberOps<T> {
  /// The empty manifest.
  pub const NONE: Self = MemberOps {
    serialize: None,
    draw: None,
    format: None,
    calculate: None,
  };
}

impl<T> Clone for MemberOps<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for MemberOps<T> {}

/// Free-function-channel manifest: one optional standalone function per
/// operation.
pub struct FreeOps<T> {
  pub serialize: Option<fn(&T)>,
  pub draw: Option<fn(&T)>,
  pub format: Option<fn(&T) -> String>,
  pub calculate: Option<fn(&T) -> i64>,
}

impl<T> FreeOps<T> {
  /// The empty manifest.
  pub const NONE: Self = FreeOps {
    serialize: None,
    draw: None,
    format: None,
    calculate: None,
  };
}

impl<T> Clone for FreeOps<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for FreeOps<T> {}

/// Capability manifest of a payload type.
///
/// Implement this for every type meant to be erased behind a
/// [`Figure`](crate::figure::Figure) or a [`FigureView`](crate::view::FigureView),
/// either by hand, with the `#[bind]` attribute (member channel) or with
/// [`bind_free!`](crate::bind_free) (free-function channel).
pub trait Bound: Sized {
  /// Member bindings. Defaults to none.
  const MEMBER: MemberOps<Self> = MemberOps::<Self>::NONE;

  /// Free-function bindings. Defaults to none.
  const FREE: FreeOps<Self> = FreeOps::<Self>::NONE;
}

/// The set of operations a deployment requires from its payload types.
///
/// Required operations must be bound through the member or free-function
/// channel; unrequired ones silently fall back to builtins. [`Profile::FULL`]
/// is what [`Figure::new`](crate::figure::Figure::new) uses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Profile {
  pub serialize: bool,
  pub draw: bool,
  pub format: bool,
  pub calculate: bool,
}

impl Profile {
  /// All four operations are required.
  pub const FULL: Self = Profile {
    serialize: true,
    draw: true,
    format: true,
    calculate: true,
  };

  /// Only `format` is required.
  pub const FORMAT_ONLY: Self = Profile {
    serialize: false,
    draw: false,
    format: true,
    calculate: false,
  };

  /// Nothing is required; every operation may fall back to its builtin.
  pub const NONE: Self = Profile {
    serialize: false,
    draw: false,
    format: false,
    calculate: false,
  };
}

/// A deployment names its required operation subset as a type, so that the
/// requirement check runs during const evaluation.
pub trait Deployment {
  const PROFILE: Profile;
}

/// The default deployment: every operation is required.
#[derive(Clone, Copy, Debug)]
pub struct Full;

impl Deployment for Full {
  const PROFILE: Profile = Profile::FULL;
}

/// One resolved operation: the callable plus the channel it was bound from.
#[derive(Clone, Copy, Debug)]
pub struct Resolved<F> {
  pub run: F,
  pub channel: Channel,
}

/// Fully resolved operation table of a payload type.
///
/// Built once per (payload type, deployment) pair; erased values carry a copy
/// and dispatch through it for the rest of their lives.
pub struct OpTable<T> {
  pub serialize: Resolved<fn(&T)>,
  pub draw: Resolved<fn(&T)>,
  pub format: Resolved<fn(&T) -> String>,
  pub calculate: Resolved<fn(&T) -> i64>,
}

impl<T> Clone for OpTable<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for OpTable<T> {}

fn builtin_serialize<T>(_: &T) {}

fn builtin_draw<T>(_: &T) {}

fn builtin_format<T>(_: &T) -> String {
  String::new()
}

fn builtin_calculate<T>(_: &T) -> i64 {
  0
}

impl<T> OpTable<T>
where
  T: Bound,
{
  /// Resolve the manifest of `T` against `profile`.
  ///
  /// Member bindings win over free-function bindings; operations with neither
  /// fall back to the builtin unless `profile` requires them, in which case
  /// this function panics. Call sites inside the crate evaluate it in const
  /// position, turning that panic into a build error for the offending type.
  pub const fn resolve(profile: Profile) -> Self {
    let serialize = match (T::MEMBER.serialize, T::FREE.serialize, profile.serialize) {
      (Some(run), _, _) => Resolved {
        run,
        channel: Channel::Member,
      },
      (None, Some(run), _) => Resolved {
        run,
        channel: Channel::Free,
      },
      (None, None, false) => Resolved {
        run: builtin_serialize::<T> as fn(&T),
        channel: Channel::Default,
      },
      (None, None, true) => {
        panic!("no member or free-function binding for required operation `serialize`")
      }
    };

    let draw = match (T::MEMBER.draw, T::FREE.draw, profile.draw) {
      (Some(run), _, _) => Resolved {
        run,
        channel: Channel::Member,
      },
      (None, Some(run), _) => Resolved {
        run,
        channel: Channel::Free,
      },
      (None, None, false) => Resolved {
        run: builtin_draw::<T> as fn(&T),
        channel: Channel::Default,
      },
      (None, None, true) => {
        panic!("no member or free-function binding for required operation `draw`")
      }
    };

    let format = match (T::MEMBER.format, T::FREE.format, profile.format) {
      (Some(run), _, _) => Resolved {
        run,
        channel: Channel::Member,
      },
      (None, Some(run), _) => Resolved {
        run,
        channel: Channel::Free,
      },
      (None, None, false) => Resolved {
        run: builtin_format::<T> as fn(&T) -> String,
        channel: Channel::Default,
      },
      (None, None, true) => {
        panic!("no member or free-function binding for required operation `format`")
      }
    };

    let calculate = match (T::MEMBER.calculate, T::FREE.calculate, profile.calculate) {
      (Some(run), _, _) => Resolved {
        run,
        channel: Channel::Member,
      },
      (None, Some(run), _) => Resolved {
        run,
        channel: Channel::Free,
      },
      (None, None, false) => Resolved {
        run: builtin_calculate::<T> as fn(&T) -> i64,
        channel: Channel::Default,
      },
      (None, None, true) => {
        panic!("no member or free-function binding for required operation `calculate`")
      }
    };

    OpTable {
      serialize,
      draw,
      format,
      calculate,
    }
  }

  /// Channel provenance of every operation in this table.
  pub fn channels(&self) -> ChannelSet {
    ChannelSet {
      serialize: self.serialize.channel,
      draw: self.draw.channel,
      format: self.format.channel,
      calculate: self.calculate.channel,
    }
  }
}

/// Const-position resolution of a (payload type, deployment) pair.
///
/// Reading [`Resolution::TABLE`] forces the requirement check at
/// monomorphization time.
pub(crate) struct Resolution<T, D> {
  _phantom: std::marker::PhantomData<(T, D)>,
}

impl<T, D> Resolution<T, D>
where
  T: Bound,
  D: Deployment,
{
  pub(crate) const TABLE: OpTable<T> = OpTable::<T>::resolve(D::PROFILE);
}

/// Declare free-function bindings for a payload type.
///
/// Expands to an impl of [`Bound`] whose [`FREE`](Bound::FREE) table names the
/// given functions; operations left out stay unbound. Since a type has exactly
/// one `Bound` impl, use the `#[bind]` attribute with a `free(…)` argument
/// instead when the same type also has member bindings.
///
/// ```
/// use silhouette::bind_free;
/// use silhouette::figure::Figure;
/// use silhouette::ops::Calculate as _;
///
/// #[derive(Clone)]
/// struct Plot {
///   width: i64,
/// }
///
/// fn plot_area(plot: &Plot) -> i64 {
///   plot.width * plot.width
/// }
///
/// fn plot_text(plot: &Plot) -> String {
///   format!("plot {}\n", plot.width)
/// }
///
/// fn plot_emit(_: &Plot) {}
///
/// bind_free! {
///   Plot {
///     serialize: plot_emit,
///     draw: plot_emit,
///     format: plot_text,
///     calculate: plot_area,
///   }
/// }
///
/// let figure = Figure::new(Plot { width: 3 });
/// assert_eq!(figure.calculate(), 9);
/// ```
#[macro_export]
macro_rules! bind_free {
  ($ty:ty { $($op:ident : $f:path),+ $(,)? }) => {
    impl $crate::bind::Bound for $ty {
      const FREE: $crate::bind::FreeOps<Self> = {
        let mut ops = $crate::bind::FreeOps::NONE;
        $(ops.$op = ::core::option::Option::Some($f);)+
        ops
      };
    }
  };
}
