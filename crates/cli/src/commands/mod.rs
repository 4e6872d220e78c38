pub(crate) mod ask;
pub(crate) mod data;
pub(crate) mod serve;
