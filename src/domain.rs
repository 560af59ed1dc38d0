// Domain module
// Pull request descriptors and the catalogue/selection pipeline over them

pub mod catalogue;
pub mod pull_request;
pub mod selection;
