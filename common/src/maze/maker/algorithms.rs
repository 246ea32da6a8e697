pub mod backtrack;
pub mod loops;
