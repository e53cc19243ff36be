pub(crate) mod graphics;
pub(crate) mod source;
