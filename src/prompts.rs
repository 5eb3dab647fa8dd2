pub const ANALYSIS_SYSTEM: &str = include_str!("../data/prompts/analysis_system.txt");
pub const ANALYSIS_USER: &str = include_str!("../data/prompts/analysis_user.txt");
