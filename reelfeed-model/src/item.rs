//! Feed item model.

use url::Url;

use crate::creator::Creator;
use crate::ids::ItemId;

/// The two renditions every clip ships with.
///
/// Which rendition plays is a presentation-layer toggle; the controller
/// carries both without preferring either.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaRenditions {
    /// Trimmed rendition used for the default feed experience.
    pub short: Url,
    /// Full-length rendition.
    pub full: Url,
}

/// A single clip in the feed.
///
/// Identity is the `id` field alone. `like_count` and `is_liked` are the
/// only fields the feed mutates after load, and always together.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub creator: Creator,
    pub media: MediaRenditions,
    pub description: String,
    pub like_count: u32,
    pub comment_count: u32,
    pub is_liked: bool,
}

impl Item {
    /// Flip the like state, keeping `like_count` in lockstep.
    ///
    /// Unliking saturates at zero rather than underflowing; a well-formed
    /// catalog never hits that path because every unlike follows a like.
    pub fn toggle_like(&mut self) {
        self.is_liked = !self.is_liked;
        if self.is_liked {
            self.like_count += 1;
        } else {
            self.like_count = self.like_count.saturating_sub(1);
        }
    }

    /// Whether the engagement fields agree with another copy of this item.
    pub fn engagement_matches(&self, other: &Item) -> bool {
        self.is_liked == other.is_liked && self.like_count == other.like_count
    }

    /// Adopt the engagement fields from an authoritative copy.
    pub fn adopt_engagement(&mut self, authoritative: &Item) {
        self.is_liked = authoritative.is_liked;
        self.like_count = authoritative.like_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CreatorId;

    fn sample_item() -> Item {
        Item {
            id: ItemId::from("clip-0001"),
            creator: Creator {
                id: CreatorId::from("creator-01"),
                name: "Dana".to_string(),
                avatar: "https://cdn.reelfeed.dev/avatars/creator-01.png"
                    .parse()
                    .unwrap(),
            },
            media: MediaRenditions {
                short: "https://cdn.reelfeed.dev/clips/clip-0001-short.mp4"
                    .parse()
                    .unwrap(),
                full: "https://cdn.reelfeed.dev/clips/clip-0001-full.mp4"
                    .parse()
                    .unwrap(),
            },
            description: "first clip".to_string(),
            like_count: 5,
            comment_count: 2,
            is_liked: false,
        }
    }

    #[test]
    fn toggle_like_keeps_count_in_lockstep() {
        let mut item = sample_item();

        item.toggle_like();
        assert!(item.is_liked);
        assert_eq!(item.like_count, 6);

        item.toggle_like();
        assert!(!item.is_liked);
        assert_eq!(item.like_count, 5);
    }

    #[test]
    fn unlike_saturates_at_zero() {
        let mut item = sample_item();
        item.is_liked = true;
        item.like_count = 0;

        item.toggle_like();
        assert!(!item.is_liked);
        assert_eq!(item.like_count, 0);
    }

    #[test]
    fn adopt_engagement_only_touches_engagement_fields() {
        let mut local = sample_item();
        let mut server = sample_item();
        server.is_liked = true;
        server.like_count = 6;
        server.description = "tampered".to_string();

        assert!(!local.engagement_matches(&server));
        local.adopt_engagement(&server);

        assert!(local.is_liked);
        assert_eq!(local.like_count, 6);
        assert_eq!(local.description, "first clip");
    }
}
