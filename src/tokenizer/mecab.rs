use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{Error, ErrorKind};
use crate::token::{self, Token};
use crate::tokenizer::{Builder, Tokenizer};

/// The encoding we require the dictionary to be in.
const CHARSET: &str = "utf-8";

/// Builder for a MeCab tokenizer using an IPADIC-compatible dictionary.
#[derive(Debug, Clone)]
pub struct MecabBuilder {
    program: PathBuf,
    dictionary: Option<PathBuf>,
    args: Vec<String>,
}

impl MecabBuilder {
    /// Construct a builder for the given program.
    pub fn new<P>(program: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            program: program.as_ref().to_owned(),
            dictionary: None,
            args: Vec::new(),
        }
    }

    /// Use the dictionary in the given directory.
    pub fn dictionary<P>(mut self, dictionary: Option<P>) -> Self
    where
        P: AsRef<Path>,
    {
        self.dictionary = dictionary.map(|p| p.as_ref().to_owned());
        self
    }

    /// Pass additional arguments to the program.
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Builder for MecabBuilder {
    type Tokenizer = Mecab;

    async fn build(&self) -> Result<Mecab, Error> {
        let mecab = Mecab {
            program: self.program.clone().into(),
            dictionary: self.dictionary.clone().map(PathBuf::into_boxed_path),
            args: self.args.clone(),
        };

        let output = mecab
            .command()
            .arg("-D")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|error| mecab.spawn_error(error))?;

        if !output.status.success() {
            return Err(Error::new(ErrorKind::Status {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().into(),
            }));
        }

        let info = String::from_utf8_lossy(&output.stdout);

        for line in info.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            match (key.trim(), value.trim()) {
                ("charset", charset) if !charset.eq_ignore_ascii_case(CHARSET) => {
                    tracing::warn!(charset, "Dictionary is not {CHARSET}, tokens might be garbled");
                }
                ("filename", filename) => {
                    tracing::debug!(filename, "Using dictionary");
                }
                _ => {}
            }
        }

        tracing::info!(program = %self.program.display(), "Tokenizer ready");
        Ok(mecab)
    }
}

/// A tokenizer which runs MeCab once for every sentence.
#[derive(Debug)]
pub struct Mecab {
    program: Box<Path>,
    dictionary: Option<Box<Path>>,
    args: Vec<String>,
}

impl Mecab {
    fn command(&self) -> Command {
        let mut command = Command::new(&*self.program);

        if let Some(dictionary) = &self.dictionary {
            command.arg("-d").arg(&**dictionary);
        }

        command.args(&self.args);
        command.kill_on_drop(true);
        command
    }

    fn spawn_error(&self, error: std::io::Error) -> Error {
        Error::new(ErrorKind::Spawn {
            program: self.program.clone(),
            error,
        })
    }
}

impl Tokenizer for Mecab {
    async fn tokenize(&self, text: &str) -> Result<Vec<Token>, Error> {
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| self.spawn_error(error))?;

        let Some(mut stdin) = child.stdin.take() else {
            return Err(Error::new(ErrorKind::MissingStdin));
        };

        // MeCab treats every line as a separate sentence.
        let mut input = text.replace(['\r', '\n'], " ");
        input.push('\n');

        let write = async move {
            stdin.write_all(input.as_bytes()).await?;
            stdin.shutdown().await
        };

        let (write, output) = tokio::join!(write, child.wait_with_output());
        let output = output?;
        write?;

        if !output.status.success() {
            return Err(Error::new(ErrorKind::Status {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().into(),
            }));
        }

        let output = String::from_utf8(output.stdout)?;
        let tokens = token::parse_ipadic_output(&output)?;
        tracing::trace!(?tokens);
        Ok(tokens)
    }
}
