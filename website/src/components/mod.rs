pub mod about_tabs;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod projects_tabs;
pub mod skills_tabs;
pub mod tab_group;
pub mod toasts;
