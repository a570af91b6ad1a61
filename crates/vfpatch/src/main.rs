//! Binary entrypoint for the contract patcher.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stderr = io::stderr().lock();
    vfpatch::run(std::env::args_os(), &mut stderr)
}
