pub mod check;
pub mod convert;
pub mod expr_loader;
pub mod run;
pub mod run_common;

#[cfg(test)]
mod expr_loader_tests;
