pub mod solvers;
