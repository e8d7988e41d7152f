mod auth_tests;
mod import_tests;
