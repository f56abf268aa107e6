//! Creator reference attached to every feed item.

use url::Url;

use crate::ids::CreatorId;

/// The account that published a clip.
///
/// Display-only: the feed controller never mutates creator fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creator {
    pub id: CreatorId,
    pub name: String,
    /// Avatar image location, resolved by the presentation layer.
    pub avatar: Url,
}
