//! [Emitter] is a "visitor" on the attributes the scanner finds.
//!
//! When getattr scans markup, the [crate::Scanner] calls into an emitter for every tag and every
//! complete attribute. Emitters can yield control to the _caller_ of the scanner by returning
//! tokens from [Emitter::pop_token], which is what the [crate::Scanner] iterator yields.
//!
//! The following emitters are available:
//!
//! * [filter::FilterEmitter], which yields the values of the attributes selected by a
//!   [crate::Filter]. This is what the `getattr` command line tool uses.
//! * [default::DefaultEmitter], which yields every tag with all of its attributes.
//! * [callback::CallbackEmitter], which hands every event to a closure without allocating.
//! * Implementing your own [Emitter].
pub mod callback;
pub mod default;
pub mod filter;

mod emitter;

pub use emitter::Emitter;
