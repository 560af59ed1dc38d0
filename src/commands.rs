// Command handlers module

pub mod generate;
