pub(crate) mod common;

mod engine;
