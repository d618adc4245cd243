mod helpers;
mod tick_tests;
