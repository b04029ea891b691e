mod support;

mod cli_context_tests;
mod error_tests;
mod sections_tests;
mod session_tests;
