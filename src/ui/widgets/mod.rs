pub mod comment_form;
pub mod comment_list;
pub mod footer;
pub mod header;
pub mod movie_card;
pub mod spinner;
