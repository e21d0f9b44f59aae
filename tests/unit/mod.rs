mod bachelier_tests;
mod batch_tests;
mod solver_tests;
