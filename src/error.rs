use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("command `{command}` needs an argument")]
    MissingArgument { command: &'static str },
    #[error("command `{command}` takes no argument, got `{argument}`")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
    #[error("line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
