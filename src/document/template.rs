//! Seed content for a fresh village profile page.

use super::node::ContentNode;

fn field(key: &str, value: impl Into<ContentNode>) -> (String, ContentNode) {
    (key.to_string(), value.into())
}

/// Builds the default page-content document used by `contentquill init`.
///
/// Every section an admin screen binds to is present, so edits against a
/// freshly initialized page never hit a missing parent.
pub fn village_profile() -> ContentNode {
    ContentNode::object([
        (
            "hero".to_string(),
            ContentNode::object([
                field("title", "Desa Wisata"),
                field("subtitle", ""),
                field("backgroundImage", ""),
            ]),
        ),
        (
            "about".to_string(),
            ContentNode::object([
                field("description", ""),
                field("vision", ""),
                field("missions", ContentNode::array(vec![])),
            ]),
        ),
        (
            "geography".to_string(),
            ContentNode::object([
                field("area", ""),
                field("altitude", ""),
                (
                    "boundaries".to_string(),
                    ContentNode::object([
                        field("north", ""),
                        field("east", ""),
                        field("south", ""),
                        field("west", ""),
                    ]),
                ),
            ]),
        ),
        (
            "demographics".to_string(),
            ContentNode::object([
                field("population", 0),
                field("households", 0),
            ]),
        ),
        field("highlights", ContentNode::array(vec![])),
        (
            "contact".to_string(),
            ContentNode::object([
                field("address", ""),
                field("phone", ""),
                field("email", ""),
                field("socials", ContentNode::array(vec![])),
            ]),
        ),
    ])
}
