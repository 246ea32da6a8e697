pub mod config;
pub mod constants;
pub mod maze;
pub mod random;

#[cfg(test)]
pub mod test_helpers;
