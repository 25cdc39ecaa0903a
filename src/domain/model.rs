use serde::Deserialize;

/// A top-level template resource to strip, identified by its logical name and `Type:` value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceTarget {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

impl ResourceTarget {
    pub fn new(name: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
        }
    }

    /// The frontend bucket and its policy.
    pub fn default_targets() -> Vec<ResourceTarget> {
        vec![
            ResourceTarget::new("FrontendBucket", "AWS::S3::Bucket"),
            ResourceTarget::new("FrontendBucketPolicy", "AWS::S3::BucketPolicy"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedBlock {
    pub name: String,
    pub resource_type: String,
    /// 1-based line of the declaration header in the text the block was removed from.
    pub start_line: usize,
    pub line_count: usize,
}

#[derive(Debug, Clone)]
pub struct StripOutcome {
    pub content: String,
    pub removed: Vec<RemovedBlock>,
    pub missed: Vec<ResourceTarget>,
}

impl StripOutcome {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}
