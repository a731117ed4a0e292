pub struct Icons;

impl Icons {
    pub const SEARCH: &str = "🔍";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const INFO: &str = "ℹ️";
    pub const NOTE: &str = "📝";
    pub const DATABASE: &str = "🗄️";
    pub const EMPTY: &str = "∅";
}
