mod decode;
mod encode;
mod train;

/// Subcommands for markpiece-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a new tokenizer.
    Train(train::TrainArgs),

    /// Encode text into token ids.
    Encode(encode::EncodeArgs),

    /// Decode token ids into text.
    Decode(decode::DecodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}
