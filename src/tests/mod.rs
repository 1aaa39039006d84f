// Test modules for Roster
// Each module mirrors the source module it exercises

mod tui_tests;
