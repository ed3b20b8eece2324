use std::fs::File;
use std::io::Read;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::*;
use memmap::MmapOptions;
use rayon::prelude::*;
use sm3::{rehash, Digest};

mod args;
use args::HashOptions;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    Hash(#[from] sm3::Error),

    #[error("--check expects exactly one input, got {0}")]
    CheckArity(usize),
}

type CliResult<T> = Result<T, CliError>;

fn render(digest: &Digest, uppercase: bool) -> String {
    if uppercase {
        digest.to_hex_upper()
    } else {
        digest.to_hex()
    }
}

fn decode_input(opts: &HashOptions, raw: &[u8]) -> CliResult<Vec<u8>> {
    if opts.hex {
        let text = String::from_utf8_lossy(raw);
        Ok(hex::decode(text.trim())?)
    } else {
        Ok(raw.to_vec())
    }
}

fn hash_file(path: &str, rounds: usize) -> CliResult<Digest> {
    let io_err = |source| CliError::Io {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    // zero-length files cannot be mapped
    if file.metadata().map_err(io_err)?.len() == 0 {
        return Ok(rehash(&[], rounds)?);
    }
    let mapped = unsafe { MmapOptions::new().map(&file) }.map_err(io_err)?;
    Ok(rehash(&mapped, rounds)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Text,
    File,
    Stdin,
}

struct Hashed {
    label: String,
    digest: Digest,
    source: Source,
}

// drop one trailing "\n" or "\r\n"
fn strip_newline(buf: &mut Vec<u8>) {
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
}

fn hash_stdin(opts: &HashOptions, mut buffer: Vec<u8>) -> CliResult<Digest> {
    strip_newline(&mut buffer);
    let message = decode_input(opts, &buffer)?;
    Ok(rehash(&message, opts.rehash)?)
}

fn read_stdin(opts: &HashOptions) -> CliResult<Digest> {
    eprintln!("Input your text to hash:");
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .map_err(|source| CliError::Io {
            path: "<stdin>".to_owned(),
            source,
        })?;
    hash_stdin(opts, buffer)
}

/// Hash texts, then files; each group keeps its argument order.
fn hash_arguments(opts: &HashOptions) -> CliResult<Vec<Hashed>> {
    // independent messages, hashed in parallel; collect keeps input order
    let mut results = opts
        .plain_text
        .par_iter()
        .map(|text| -> CliResult<Hashed> {
            let message = decode_input(opts, text.as_bytes())?;
            Ok(Hashed {
                label: text.clone(),
                digest: rehash(&message, opts.rehash)?,
                source: Source::Text,
            })
        })
        .collect::<CliResult<Vec<_>>>()?;

    if opts.files.is_empty() {
        return Ok(results);
    }

    let progress = if opts.progress {
        ProgressBar::new(opts.files.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed}/{eta}] [{bar:50.cyan/blue}] {pos}/{len} ({percent}%)")
            .progress_chars("#>-"),
    );
    let files = opts
        .files
        .par_iter()
        .map(|path| -> CliResult<Hashed> {
            info!("Hashing file {}", path);
            let digest = hash_file(path, opts.rehash);
            progress.inc(1);
            Ok(Hashed {
                label: path.clone(),
                digest: digest?,
                source: Source::File,
            })
        })
        .collect::<CliResult<Vec<_>>>()?;
    progress.finish_and_clear();

    results.extend(files);
    Ok(results)
}

fn format_results(results: &[Hashed], uppercase: bool) -> Vec<String> {
    results
        .iter()
        .map(|hashed| {
            let hash_hex = render(&hashed.digest, uppercase);
            match hashed.source {
                Source::Text => format!("{}: {}", &hashed.label, &hash_hex),
                Source::File => format!("{}  {}", &hash_hex, &hashed.label),
                Source::Stdin => hash_hex,
            }
        })
        .collect()
}

fn run(opts: &HashOptions) -> CliResult<bool> {
    let results = if opts.plain_text.is_empty() && opts.files.is_empty() {
        vec![Hashed {
            label: "-".to_owned(),
            digest: read_stdin(opts)?,
            source: Source::Stdin,
        }]
    } else {
        hash_arguments(opts)?
    };

    if let Some(expected) = &opts.check {
        if results.len() != 1 {
            return Err(CliError::CheckArity(results.len()));
        }
        let expected = Digest::from_hex(expected)?;
        let actual = &results[0].digest;
        let matched = expected == *actual;
        println!(
            "{}: {}",
            &results[0].label,
            if matched { "OK" } else { "FAILED" }
        );
        if !matched {
            warn!("Expected {}, got {}", expected, actual);
        }
        return Ok(matched);
    }

    for line in format_results(&results, opts.uppercase) {
        println!("{}", line);
    }
    Ok(true)
}

fn main() {
    env_logger::builder().init();
    let opts: HashOptions = HashOptions::parse();
    debug!("Program options: {:?}", opts);

    match run(&opts) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
