use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use surebaeeyan::{inflection, Analysis, Analyzer, Config, Dirs, Polarity};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Path to the configuration file to use. Defaults to `config.toml` in
    /// the configuration directory of the current user.
    #[arg(long)]
    config: Option<PathBuf>,
    /// The MeCab program to run, overriding the configuration.
    #[arg(long)]
    mecab: Option<PathBuf>,
    /// Directory of the MeCab dictionary to use, overriding the
    /// configuration.
    #[arg(long)]
    dictionary: Option<PathBuf>,
    /// Print how each message was analyzed.
    #[arg(long)]
    explain: bool,
    /// Print the conjugation class and inflections of a dictionary form verb
    /// and exit. Can be specified multiple times.
    #[arg(long, value_name = "VERB")]
    conjugate: Vec<String>,
    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,
    /// Messages to reply to. If none are specified, messages are read from
    /// stdin one line at a time.
    messages: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    if !args.conjugate.is_empty() {
        return conjugate(&args.conjugate);
    }

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Dirs::open()?.config_path(),
    };

    let mut config = Config::load(&config_path)?;

    if let Some(program) = &args.mecab {
        config.mecab.program.clone_from(program);
    }

    if let Some(dictionary) = &args.dictionary {
        config.mecab.dictionary = Some(dictionary.clone());
    }

    if args.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let analyzer =
        Arc::new(Analyzer::new(config.mecab.builder()).with_noun_phrase(config.noun_phrase));

    if analyzer.initialize().await.is_err() {
        tracing::debug!("Tokenizer is unavailable, no replies will be produced");
    }

    if args.messages.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await.context("reading stdin")? {
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let analysis = analyzer.analyze(line).await;
            output(line, analysis.as_ref(), args.explain)?;
        }

        return Ok(());
    }

    let mut tasks = Vec::with_capacity(args.messages.len());

    for message in &args.messages {
        let analyzer = analyzer.clone();
        let message = message.clone();
        tasks.push(tokio::spawn(async move { analyzer.analyze(&message).await }));
    }

    for (message, task) in args.messages.iter().zip(tasks) {
        let analysis = task.await?;
        output(message, analysis.as_ref(), args.explain)?;
    }

    Ok(())
}

/// Conjugate verbs without involving a tokenizer.
fn conjugate(verbs: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    for verb in verbs {
        let inflections = inflection::inflections(verb);
        writeln!(o, "{verb}: {}", inflections.class)?;

        for (polarity, form) in inflections.iter() {
            let name = match polarity {
                Polarity::Affirmative => "Hypothetical",
                Polarity::Negated => "Negative conditional",
            };

            writeln!(o, "  {name}: {form}")?;
        }
    }

    o.flush()?;
    Ok(())
}

fn output(message: &str, analysis: Option<&Analysis>, explain: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    if explain {
        writeln!(o, "# {message}")?;

        let Some(analysis) = analysis else {
            writeln!(o, "  No analysis, tokenizer unavailable")?;
            return Ok(());
        };

        writeln!(o, "  Tokens:")?;

        for (index, token) in analysis.tokens.iter().enumerate() {
            writeln!(
                o,
                "  #{index} {} ({}, {}, {}, {})",
                token.surface,
                token.basic_form,
                token.part_of_speech.variant(),
                token.detail,
                token.inflection_type
            )?;
        }

        writeln!(o, "  Desire: {:?}", analysis.signal)?;
        writeln!(o, "  Extracted: {:?}", analysis.extracted)?;

        if let Some(class) = analysis.class {
            writeln!(o, "  Class: {class}")?;
        }

        match &analysis.reply {
            Some(reply) => writeln!(o, "  Reply: {reply}")?,
            None => writeln!(o, "  No reply")?,
        }
    } else if let Some(reply) = analysis.and_then(|a| a.reply.as_deref()) {
        writeln!(o, "{reply}")?;
    }

    o.flush()?;
    Ok(())
}
