//! The `getattr` command line tool.
//!
//! ```text
//! printf '<h1 id=top class="big title">Hello</h1>' | cargo run -- h1 id class
//! ```
//!
//! Output:
//!
//! ```text
//! top
//! big title
//! ```
use std::io::{self, stdin, stdout, Write};
use std::process::ExitCode;

use argh::FromArgs;
use getattr::{Filter, FilterEmitter, IoReader, Limits, Scanner, DEFAULT_BUFFER_CAPACITY};

/// Get tag attribute value.
///
/// Reads HTML from stdin and prints the value of every requested attribute of every tag with the
/// given name, one value per line.
#[derive(FromArgs)]
#[argh(example = "cat index.html | getattr h1 id class")]
struct Cli {
    /// maximum length in bytes of a tag name, attribute key or attribute value
    #[argh(option, default = "DEFAULT_BUFFER_CAPACITY")]
    buffer_size: usize,

    /// name of the tag to look for, like "h1"
    #[argh(positional)]
    tag_name: String,

    /// keys of the attributes to print, like "id"
    #[argh(positional)]
    attr_keys: Vec<String>,
}

fn main() -> ExitCode {
    let cli: Cli = argh::from_env();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("Error: {}.", msg);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let filter = Filter::new(cli.tag_name).with_keys(cli.attr_keys);
    let scanner = Scanner::new_with_emitter(IoReader::new(stdin().lock()), FilterEmitter::new(filter))
        .with_limits(Limits::uniform(cli.buffer_size));

    let write_failed = |e: io::Error| format!("failed to write output: {}", e);

    let mut out = stdout().lock();
    for value in scanner {
        match value {
            Ok(value) => out
                .write_all(&value)
                .and_then(|()| out.write_all(b"\n"))
                .map_err(write_failed)?,
            Err(e) => {
                // values found before the error go out before the message
                out.flush().map_err(write_failed)?;
                return Err(e.to_string());
            }
        }
    }

    out.flush().map_err(write_failed)
}
