pub(crate) mod proximity;
