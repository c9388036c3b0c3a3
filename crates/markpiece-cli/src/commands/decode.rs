use std::io::Write;

use markpiece::{MarkTokenizer, vocab::io::load_tokenizer_json_path};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Tokenizer snapshot file.
    #[arg(long)]
    tokenizer: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let tokenizer: MarkTokenizer<u32> = load_tokenizer_json_path(&self.tokenizer)?;

        let raw = self.input.read_to_string()?;
        let tokens = raw
            .split_whitespace()
            .map(str::parse::<u32>)
            .collect::<Result<Vec<_>, _>>()?;

        let text = tokenizer.decode(&tokens)?;
        log::info!("{} tokens -> {} chars", tokens.len(), text.chars().count());

        let mut writer = self.output.open_writer()?;
        writer.write_all(text.as_bytes())?;
        writeln!(writer)?;

        Ok(())
    }
}
