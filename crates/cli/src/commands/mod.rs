pub(crate) mod chat;
pub(crate) mod export_traits;
pub(crate) mod import_traits;
pub(crate) mod serve;
