//! Replay a single fuzzing input, read from the file given as argument or from stdin.
use std::fs;
use std::io::Read;

use testcase::run;

fn main() {
    let input = match std::env::args_os().nth(1) {
        Some(path) => fs::read(path).unwrap(),
        None => {
            let mut input = Vec::new();
            std::io::stdin().lock().read_to_end(&mut input).unwrap();
            input
        }
    };

    run(&input);
}
