//! Combinators that build compound guards
//!
//! Every combinator takes guards (or literals) and returns a new [`Guard`]
//! whose metadata records the factory and its arguments, and whose name is
//! derived from those arguments.
//!
//! | combinator | accepts |
//! |---|---|
//! | [`array_of`] | arrays whose every element passes |
//! | [`tuple_of`] / [`tuple_of_rest`] | positional arrays |
//! | [`uniform_tuple_of`] | fixed-length arrays of one element shape |
//! | [`record_of`] | objects whose every value passes |
//! | [`object_of`] / [`object_of_with`] | objects with named fields |
//! | [`one_of`] / [`all_of`] / [`not`] | unions, intersections, negation |
//! | [`literal_of`] / [`literal_one_of`] | exact primitive values |
//!
//! Sub-guards run in declaration order and stop at the first decisive
//! result. Order affects cost, never the outcome.
//!
//! [`Guard`]: crate::Guard

mod collection;
mod literal;
mod logical;
mod object;

pub use collection::{array_of, record_of, tuple_of, tuple_of_rest, uniform_tuple_of};
pub use literal::{literal_of, literal_one_of, Literal};
pub use logical::{all_of, not, one_of, GuardExt};
pub use object::{object_of, object_of_with, ObjectOptions};

use crate::guard::Guard;

fn join_names(guards: &[Guard]) -> String {
    guards
        .iter()
        .map(Guard::name)
        .collect::<Vec<_>>()
        .join(", ")
}
