pub(crate) mod launch;
pub(crate) mod orbit;
pub(crate) mod reflect;
pub(crate) mod wrap;
