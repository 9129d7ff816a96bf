mod date_tests;
mod extract_tests;
mod snapshots;
