pub(crate) mod config;
pub(crate) mod converter;
pub(crate) mod document;
pub(crate) mod export;
pub(crate) mod samples;
