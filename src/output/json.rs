//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::stats::TreeStats;
use crate::tree::FileTree;

/// Machine-readable form of one render.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    pub path: String,
    pub stats: TreeStats,
    pub tree: FileTree,
}

/// Print a report as pretty-printed JSON to stdout.
pub fn print_json(report: &JsonReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    #[test]
    fn test_report_shape() {
        let report = JsonReport {
            repository: None,
            path: "src".to_string(),
            stats: TreeStats {
                total_files: 1,
                ..Default::default()
            },
            tree: FileTree {
                children: vec![TreeNode::File {
                    name: "main.rs".to_string(),
                    depth: 1,
                    size: Some(3),
                }],
            },
        };

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("repository").is_none());
        assert_eq!(value["path"], "src");
        assert_eq!(value["stats"]["total_files"], 1);
        assert_eq!(value["tree"]["children"][0]["type"], "file");
        assert_eq!(value["tree"]["children"][0]["size"], 3);
    }
}
