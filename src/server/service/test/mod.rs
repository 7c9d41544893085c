mod comment;
mod discussion;
mod notification;
