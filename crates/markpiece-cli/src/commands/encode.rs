use std::io::Write;

use markpiece::{MarkTokenizer, vocab::io::load_tokenizer_json_path};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Tokenizer snapshot file.
    #[arg(long)]
    tokenizer: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Special token to allow in the input; repeatable.
    #[arg(long = "allow-special")]
    allowed_specials: Vec<String>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let tokenizer: MarkTokenizer<u32> = load_tokenizer_json_path(&self.tokenizer)?;

        let text = self.input.read_to_string()?;
        let tokens = tokenizer.encode(&text, &self.allowed_specials)?;
        log::info!("{} chars -> {} tokens", text.chars().count(), tokens.len());

        let mut writer = self.output.open_writer()?;
        for (idx, token) in tokens.iter().enumerate() {
            if idx > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{token}")?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
