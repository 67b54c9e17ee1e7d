// Writes the please(1) man page to stdout or to the given file

use clap::CommandFactory;
use please::cli::Cli;
use std::fs::File;
use std::io::{self, Write};

fn main() -> io::Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;

    match std::env::args().nth(1) {
        Some(path) => File::create(path)?.write_all(&buffer),
        None => io::stdout().write_all(&buffer),
    }
}
