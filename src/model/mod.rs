pub(crate) mod light_code;
pub(crate) mod sample;
pub(crate) mod trajectory;
