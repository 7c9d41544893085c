pub use super::comment::Entity as Comment;
pub use super::comment_dislike::Entity as CommentDislike;
pub use super::comment_like::Entity as CommentLike;
pub use super::notification::Entity as Notification;
pub use super::post::Entity as Post;
pub use super::pro_con_discussion::Entity as ProConDiscussion;
pub use super::pro_con_vote::Entity as ProConVote;
pub use super::role::Entity as Role;
pub use super::user::Entity as User;
