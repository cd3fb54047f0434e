//! Configuration types for building and rendering trees

/// Placement of directories relative to files among siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Files first, then directories (plain listing).
    #[default]
    DirsLast,
    /// Directories first, then files (annotated listing).
    DirsFirst,
}

/// Options applied while the flat listing is turned into a tree.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub order: SortOrder,
    /// Nodes deeper than this are never inserted.
    pub max_depth: Option<usize>,
    /// File leaves must end with one of these suffixes. Empty = keep all.
    pub extensions: Vec<String>,
}

impl BuildOptions {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn has_extension_filter(&self) -> bool {
        !self.extensions.is_empty()
    }

    /// Whether a file name passes the extension filter (case-sensitive suffix match).
    pub fn keeps_file(&self, name: &str) -> bool {
        !self.has_extension_filter() || self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

/// Options recognised by the annotated renderer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Annotate files with their size and directories with file count and size.
    pub show_size: bool,
    pub max_depth: Option<usize>,
    /// Append the summary line.
    pub show_stats: bool,
    pub file_ext_filter: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_size: false,
            max_depth: None,
            show_stats: true,
            file_ext_filter: Vec::new(),
        }
    }
}

impl RenderOptions {
    pub fn with_size(mut self, show_size: bool) -> Self {
        self.show_size = show_size;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_ext_filter = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Build options for the annotated listing: directories first, with
    /// this render's depth bound and extension filter.
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            order: SortOrder::DirsFirst,
            max_depth: self.max_depth,
            extensions: self.file_ext_filter.clone(),
        }
    }
}
