mod error;
mod invoker;

pub use {error::CommandError, invoker::CommandInvoker};
