pub(crate) mod frame;
pub(crate) mod palette;
pub(crate) mod svg;
