//! Global constants for smartnav

pub mod errors {
    // Error Codes
    pub const INVALID_CURSOR: &str = "INVALID_CURSOR";
    pub const LOAD_FAILED: &str = "LOAD_FAILED";
    pub const LANGUAGE_ERROR: &str = "LANGUAGE_ERROR";
    pub const PARSE_FAILED: &str = "PARSE_FAILED";
    pub const UNKNOWN_KEY: &str = "UNKNOWN_KEY";
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const MALFORMED_BINDING: &str = "MALFORMED_BINDING";
}

pub mod commands {
    pub const SMART_HOME: &str = "nav:smart_home";
    pub const SMART_HOME_HEADINGS: &str = "nav:smart_home_headings";
    pub const SMART_END: &str = "nav:smart_end";
    pub const SMART_UP: &str = "nav:smart_up";
}

pub mod syntax {
    /// Node kinds containing this (case-insensitive) belong to a table
    pub const TABLE_NODE_MARKER: &str = "table";
}
