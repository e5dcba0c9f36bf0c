//! Error types for the CLI

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Failure to load a puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file does not exist
    #[error("input file {} not found", .0.display())]
    NotFound(PathBuf),

    /// The input file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum PartError {
    /// The day's input could not be loaded
    #[error(transparent)]
    Input(Arc<InputError>),

    /// No solver could be built for the day (unknown day or parse failure)
    #[error(transparent)]
    Setup(Arc<aoc_solver::SolverError>),

    /// The solver ran and failed
    #[error(transparent)]
    Solve(#[from] aoc_solver::SolveError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening either side that
    /// already is one; `first`'s errors come before `second`'s
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                v1.iter().chain(v2).cloned().collect()
            }
            (_, ExecutorError::Multiple(v)) => {
                std::iter::once(first.clone()).chain(v.iter().cloned()).collect()
            }
            (ExecutorError::Multiple(v), _) => {
                v.iter().cloned().chain(std::iter::once(second.clone())).collect()
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}
