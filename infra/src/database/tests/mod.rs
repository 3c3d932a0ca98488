mod connection_tests;
mod mysql_tests;
mod timeout_tests;
