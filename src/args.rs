use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "sm3_hash",
    version = "0.1",
    author = "Shengqi Chen <i@harrychen.xyz>",
    about = "Compute SM3 digests of texts, files or stdin"
)]
pub struct HashOptions {
    /// Texts to hash (UTF-8); stdin is read when no text or file is given
    pub plain_text: Vec<String>,
    /// Treat texts (and stdin) as hex-encoded bytes
    #[clap(short = 'x', long)]
    pub hex: bool,
    /// Files to hash
    #[clap(short = 'f', long = "file")]
    pub files: Vec<String>,
    /// Print digests in uppercase hex
    #[clap(short = 'u', long)]
    pub uppercase: bool,
    /// Hash each digest again this many times
    #[clap(short = 'r', long, default_value = "0")]
    pub rehash: usize,
    /// Expected digest of the single input; exit with 1 on mismatch
    #[clap(short = 'c', long)]
    pub check: Option<String>,
    /// Show a progress bar while hashing files
    #[clap(short = 'p', long)]
    pub progress: bool,
}
