/// List item block type with owned marker constant.
pub struct ListItem;

impl ListItem {
    /// The dash marker that opens a list item line.
    pub const PREFIX: &'static str = "- ";

    /// Returns the item content if `line` starts with [`ListItem::PREFIX`] at column 0.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
