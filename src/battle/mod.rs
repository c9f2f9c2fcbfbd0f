pub mod calculators;
pub mod engine;
pub mod runner;
pub mod state;

#[cfg(test)]
mod tests;
