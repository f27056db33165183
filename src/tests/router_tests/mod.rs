mod export_tests;
mod home_tests;
mod report_tests;
