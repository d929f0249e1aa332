pub(crate) mod error;
pub(crate) mod natsort;
pub(crate) mod round;
