#![forbid(unsafe_code)]

mod ai;
mod args;
mod build_info;
mod jsonrpc;
mod session_log;
mod time;

pub(crate) use ai::*;
pub(crate) use args::*;
pub(crate) use build_info::*;
pub(crate) use jsonrpc::*;
pub(crate) use session_log::*;
pub(crate) use time::*;
