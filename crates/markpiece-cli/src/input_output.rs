//! Input/output flags for markpiece subcommands.
//!
//! Encode and decode consume their whole input at once (text in one case,
//! an id list in the other), so the input side reads to a string rather
//! than exposing a reader.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
};

/// Input source argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; stdin when omitted or "-".
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Read the entire input into a string.
    pub fn read_to_string(&self) -> Result<String, Box<dyn std::error::Error>> {
        let mut text = String::new();
        match self.input.as_deref() {
            None | Some("-") => {
                std::io::stdin().lock().read_to_string(&mut text)?;
            }
            Some(path) => {
                File::open(path)?.read_to_string(&mut text)?;
            }
        }
        Ok(text)
    }
}

/// Output sink argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; stdout when omitted or "-".
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a buffered writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match self.output.as_deref() {
            None | Some("-") => Box::new(BufWriter::new(std::io::stdout().lock())),
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}
