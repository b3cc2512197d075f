pub mod shock_examples;
