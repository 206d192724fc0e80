use std::io;
use std::path::Path;
use std::process::ExitStatus;
use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }
}

impl<K> From<K> for Error
where
    ErrorKind: From<K>,
{
    #[inline]
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ErrorKind {
    #[error("Failed to spawn tokenizer `{}`", .program.display())]
    Spawn {
        program: Box<Path>,
        #[source]
        error: io::Error,
    },
    #[error("Failed to communicate with tokenizer")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
    #[error("Tokenizer has no stdin")]
    MissingStdin,
    #[error("Tokenizer exited with {status}: {stderr}")]
    Status { status: ExitStatus, stderr: Box<str> },
    #[error("Tokenizer produced output which is not UTF-8")]
    Utf8(
        #[from]
        #[source]
        FromUtf8Error,
    ),
    #[error("Malformed tokenizer output `{0}`")]
    MalformedLine(Box<str>),
    #[error("{0}")]
    Custom(Box<str>),
}

impl Error {
    /// Construct a custom error, used by tokenizers that are not backed by a
    /// process.
    pub fn msg<M>(message: M) -> Self
    where
        M: Into<Box<str>>,
    {
        Self::new(ErrorKind::Custom(message.into()))
    }
}
