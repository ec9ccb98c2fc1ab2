//! Binding attribute for the [silhouette] crate.
//!
//! Writing a capability manifest by hand means spelling out a const table of
//! method paths. The [`bind`](macro@bind) attribute derives it instead: put it
//! on an inherent `impl` block and every operation method found in the block
//! (`serialize`, `draw`, `format`, `calculate`) becomes a member-channel
//! binding. Operations the block does not define stay unbound, unless the
//! attribute's `free(…)` argument routes them to standalone functions.
//!
//! ```ignore
//! fn disc_area(disc: &Disc) -> i64 {
//!   disc.radius * disc.radius
//! }
//!
//! #[bind(free(calculate = disc_area))]
//! impl Disc {
//!   pub fn serialize(&self) { /* … */ }
//!   pub fn draw(&self) { /* … */ }
//!   pub fn format(&self) -> String { /* … */ }
//! }
//! ```
//!
//! The attribute only declares *where* operations come from; signature
//! checking is left to the generated const table, so a method with the wrong
//! shape fails right where the binding is declared.
//!
//! [silhouette]: https://docs.rs/silhouette

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Error, Ident, ImplItem, ItemImpl, Path, Token};

/// The operation set, in manifest field order.
const OPS: [&str; 4] = ["serialize", "draw", "format", "calculate"];

/// One `op = path` entry of a `free(…)` argument.
struct FreeEntry {
  op: Ident,
  path: Path,
}

impl Parse for FreeEntry {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    let op = input.parse()?;
    let _: Token![=] = input.parse()?;
    let path = input.parse()?;

    Ok(FreeEntry { op, path })
  }
}

/// Everything the attribute accepts between its parentheses.
struct BindArgs {
  free: Vec<FreeEntry>,
}

impl Parse for BindArgs {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    if input.is_empty() {
      return Ok(BindArgs { free: Vec::new() });
    }

    let kw: Ident = input.parse()?;

    if kw != "free" {
      return Err(Error::new(kw.span(), "expected `free(op = path, …)`"));
    }

    let content;
    syn::parenthesized!(content in input);

    let entries: Punctuated<FreeEntry, Token![,]> = content.parse_terminated(FreeEntry::parse)?;

    Ok(BindArgs {
      free: entries.into_iter().collect(),
    })
  }
}

/// Derive a [`Bound`] manifest from an inherent `impl` block.
///
/// Methods of the block named after an operation populate the member channel;
/// `free(op = path)` arguments populate the free-function channel. The block
/// itself is emitted untouched.
///
/// [`Bound`]: https://docs.rs/silhouette/latest/silhouette/bind/trait.Bound.html
#[proc_macro_attribute]
pub fn bind(attr: TokenStream, item: TokenStream) -> TokenStream {
  let args = parse_macro_input!(attr as BindArgs);
  let block = parse_macro_input!(item as ItemImpl);

  if let Some((_, path, _)) = &block.trait_ {
    return Error::new_spanned(path, "#[bind] expects an inherent impl block, not a trait impl")
      .to_compile_error()
      .into();
  }

  let mut member = [false; 4];

  for item in &block.items {
    if let ImplItem::Method(method) = item {
      if let Some(slot) = OPS.iter().position(|op| method.sig.ident == *op) {
        member[slot] = true;
      }
    }
  }

  let mut free: [Option<Path>; 4] = [None, None, None, None];

  for entry in args.free {
    let slot = match OPS.iter().position(|op| entry.op == *op) {
      Some(slot) => slot,
      None => {
        return Error::new(
          entry.op.span(),
          "unknown operation; expected one of `serialize`, `draw`, `format`, `calculate`",
        )
        .to_compile_error()
        .into();
      }
    };

    if free[slot].is_some() {
      return Error::new(entry.op.span(), "operation bound twice in `free(…)`")
        .to_compile_error()
        .into();
    }

    free[slot] = Some(entry.path);
  }

  let self_ty = &block.self_ty;

  let member_fields = OPS.iter().zip(&member).map(|(op, bound)| {
    let field = Ident::new(op, Span::call_site());

    if *bound {
      quote! { #field: ::core::option::Option::Some(<#self_ty>::#field) }
    } else {
      quote! { #field: ::core::option::Option::None }
    }
  });

  let free_fields = OPS.iter().zip(&free).map(|(op, path)| {
    let field = Ident::new(op, Span::call_site());

    match path {
      Some(path) => quote! { #field: ::core::option::Option::Some(#path) },
      None => quote! { #field: ::core::option::Option::None },
    }
  });

  let expanded = quote! {
    #block

    impl ::silhouette::bind::Bound for #self_ty {
      const MEMBER: ::silhouette::bind::MemberOps<Self> = ::silhouette::bind::MemberOps {
        #(#member_fields,)*
      };

      const FREE: ::silhouette::bind::FreeOps<Self> = ::silhouette::bind::FreeOps {
        #(#free_fields,)*
      };
    }
  };

  expanded.into()
}
