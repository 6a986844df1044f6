pub const DEFAULT_LEVEL: i32 = 1;
pub const DEFAULT_TARGET_LEVEL: i32 = 3;
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api";
pub const SKILLS_PATH: &str = "skills";
