use markpiece::{MarkTokenizer, TrainOptions, vocab::io::write_tokenizer_json};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input corpus files.
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocab size.
    #[arg(long, default_value = "1000")]
    vocab_size: usize,

    /// Special token to register; repeatable.
    #[arg(long = "special")]
    specials: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let mut corpus = String::new();
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            corpus.push_str(&std::fs::read_to_string(path)?);
        }

        let options =
            TrainOptions::new(self.vocab_size).with_special_tokens(self.specials.iter());

        let mut tokenizer: MarkTokenizer<u32> = MarkTokenizer::new();
        tokenizer.train(&corpus, &options)?;

        log::info!("vocab size: {}", tokenizer.vocab_size());

        if let Some(path) = &self.output.output {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_tokenizer_json(&tokenizer, &mut writer)?;

        Ok(())
    }
}
