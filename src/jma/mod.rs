mod client;
mod helper;
mod parser;
mod query;

pub use client::Client;
