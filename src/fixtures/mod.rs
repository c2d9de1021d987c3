pub mod data_generator;

pub use data_generator::{generate_gifts, generate_solution, write_gifts_csv, write_solution_csv};
