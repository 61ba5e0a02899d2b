//! End-to-end tests driving `MinersPlugin` through a headless app.

mod click_tests;
