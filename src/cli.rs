pub mod cli_examples;
pub mod cli_main;
pub mod cli_shock;
pub mod shock_help;
