use std::fmt;

/// Waste material a classifier label can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cardboard,
    Glass,
    Metal,
    Organic,
    Paper,
    Plastic,
    Trash,
}

impl Category {
    /// Alphabetical, which is also the class order of the trained model.
    pub const ALL: [Category; 7] = [
        Category::Cardboard,
        Category::Glass,
        Category::Metal,
        Category::Organic,
        Category::Paper,
        Category::Plastic,
        Category::Trash,
    ];

    /// Exact, case-sensitive match against the lower-case label.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cardboard => "cardboard",
            Category::Glass => "glass",
            Category::Metal => "metal",
            Category::Organic => "organic",
            Category::Paper => "paper",
            Category::Plastic => "plastic",
            Category::Trash => "trash",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
