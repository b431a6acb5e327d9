//! UI Components
//!
//! Leptos views for the registry client.

mod comment_form;
mod dashboard;
mod delete_confirm_button;
mod landing;
mod nav_bar;
mod registry_details;
mod registry_form;
mod registry_list;
mod sign_in_form;
mod sign_up_form;

pub use comment_form::CommentForm;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use landing::Landing;
pub use nav_bar::NavBar;
pub use registry_details::RegistryDetails;
pub use registry_form::RegistryForm;
pub use registry_list::RegistryList;
pub use sign_in_form::SignInForm;
pub use sign_up_form::SignUpForm;
