//! Reusable UI components

pub mod like_button;
pub mod markdown;
pub mod navbar;
pub mod post_card;
pub mod post_card_skeleton;

pub use like_button::LikeButton;
pub use markdown::MarkdownContent;
pub use navbar::Navbar;
pub use post_card::PostCard;
pub use post_card_skeleton::PostCardSkeleton;
