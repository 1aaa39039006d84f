// TUI Tests Module - Testing the public tui module
// Tests organized by TUI module structure:
// - app_tests: App struct and business logic
// - screen_tests: StudentListScreen and StudentDetailScreen
// - types_tests: Screen enum
// - ui_tests: UI helper functions and rendering

mod types_tests;
mod ui_tests;
