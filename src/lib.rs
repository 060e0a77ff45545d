#![deny(missing_docs)]
// This scans markup that can be untrusted input from the internet.
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod buffer;
pub mod emitters;
mod error;
mod filter;
mod machine;
mod machine_helper;
mod reader;
mod scanner;
mod state;
mod utils;

#[doc(hidden)]
pub mod testutils;

pub use buffer::{BufferKind, Limits, DEFAULT_BUFFER_CAPACITY};
pub use emitters::callback::{Callback, CallbackEmitter, CallbackEvent};
pub use emitters::default::{DefaultEmitter, Tag};
pub use emitters::filter::FilterEmitter;
pub use emitters::Emitter;
pub use error::{Error, ErrorKind, ScanError};
pub use filter::Filter;
pub use reader::{IoReader, Readable, Reader, StringReader};
pub use scanner::Scanner;
pub use state::State;
