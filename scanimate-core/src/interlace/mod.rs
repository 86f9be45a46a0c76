pub(crate) mod finish;
pub(crate) mod grille;
pub(crate) mod interleave;
