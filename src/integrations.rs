// External integrations module
// Wrappers around the git and gh command-line clients

pub mod git;

// GitHub integration
pub mod gh;
