pub(crate) mod discover;
pub(crate) mod frame;
pub(crate) mod io;
pub(crate) mod resize;
