//! smxm-cli: command-line driver for the serial matrix-multiplication benchmark.
pub mod bench;
pub mod cli;
pub mod util;
