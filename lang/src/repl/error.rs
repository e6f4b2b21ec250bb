use thiserror::Error;

/// Ways a [super::Repl] can fail. Running out of input is not one of them.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("failed to write to the output stream")]
    Output(#[from] std::io::Error),
}
